//! Base map substitution (pipeline stage 3).

use std::collections::HashMap;

/// Replace every character of `text` found in `map` with its mapped string.
/// Characters without an entry are copied unchanged.
pub fn apply_base_map(text: &str, map: &HashMap<char, &'static str>) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match map.get(&c) {
            Some(latin) => out.push_str(latin),
            None => out.push(c),
        }
    }
    out
}
