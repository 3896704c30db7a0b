//! Single-pass rule application.
//!
//! Each rule is applied as one global find-and-replace over the whole current
//! string. Two pattern shapes exist:
//!
//! ```text
//! Contextual { trigger, lookahead }   every trigger whose lookahead holds is
//!                                     replaced; the lookahead is read from the
//!                                     string as it was when the pass started
//!                                     and is never consumed
//!
//! Literal(seq)                        leftmost, non-overlapping occurrences of
//!                                     seq are replaced as a whole
//! ```
//!
//! Because lookaheads are not consumed, `ⲅ` before `ⲅ` rewrites both the first
//! and the second gamma of `ⲅⲅⲅ`, while the literal `ⲕⲕ` only rewrites the first
//! pair of `ⲕⲕⲕ`.

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::{Lookahead, Pattern, Rule};

/// Result of one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassOutcome {
    pub text: String,
    /// Number of matches replaced.
    pub replaced: usize,
}

/// Apply `rule` once over `text`.
#[cfg(test)]
pub fn apply_rule(rule: &Rule, text: &str) -> PassOutcome {
    apply_rule_with(rule, text, &mut Vec::new())
}

/// Apply `rule` once over `text`, decoding it into the caller's `scratch`
/// buffer. A run passes the same buffer to every pass.
pub fn apply_rule_with(rule: &Rule, text: &str, scratch: &mut Vec<char>) -> PassOutcome {
    match rule.pattern {
        Pattern::Contextual { trigger, lookahead } => {
            apply_contextual(trigger, lookahead, rule.replacement, text, scratch)
        }
        Pattern::Literal(seq) => apply_literal(seq, rule.replacement, text),
    }
}

fn apply_contextual(
    trigger: char,
    lookahead: Lookahead,
    replacement: &str,
    text: &str,
    chars: &mut Vec<char>,
) -> PassOutcome {
    if !text.contains(trigger) {
        return PassOutcome { text: text.to_string(), replaced: 0 };
    }

    chars.clear();
    chars.extend(text.chars());
    let mut out = String::with_capacity(text.len() + replacement.len());
    let mut replaced = 0;

    for (i, &c) in chars.iter().enumerate() {
        if c == trigger && lookahead.matches(chars, i + 1) {
            out.push_str(replacement);
            replaced += 1;
        } else {
            out.push(c);
        }
    }

    PassOutcome { text: out, replaced }
}

fn apply_literal(seq: &str, replacement: &str, text: &str) -> PassOutcome {
    let replaced = text.matches(seq).count();
    if replaced == 0 {
        return PassOutcome { text: text.to_string(), replaced };
    }
    PassOutcome { text: text.replace(seq, replacement), replaced }
}

impl Lookahead {
    /// Check the condition at char index `at`, the position right after the
    /// trigger.
    pub(crate) fn matches(&self, chars: &[char], at: usize) -> bool {
        match *self {
            Lookahead::Anywhere => true,
            Lookahead::FollowedBy(seq) => followed_by(chars, at, seq).is_some(),
            Lookahead::FollowedByOneOf(set) => chars.get(at).is_some_and(|c| set.contains(c)),
            Lookahead::WordBoundary => is_word_boundary(chars, at),
            Lookahead::FollowedByAtBoundary(seq) => {
                followed_by(chars, at, seq).is_some_and(|end| is_word_boundary(chars, end))
            }
        }
    }
}

/// If `seq` occurs at char index `at`, return the index right after it.
fn followed_by(chars: &[char], at: usize, seq: &str) -> Option<usize> {
    let mut pos = at;
    for expected in seq.chars() {
        if chars.get(pos) != Some(&expected) {
            return None;
        }
        pos += 1;
    }
    Some(pos)
}

/// A word character is a letter, a number or the underscore.
pub(crate) fn is_word_char(c: char) -> bool {
    c == '_' || matches!(c.general_category_group(), GeneralCategoryGroup::Letter | GeneralCategoryGroup::Number)
}

/// True when exactly one side of the gap before char index `pos` is a word
/// character. The text boundaries count as non-word.
pub(crate) fn is_word_boundary(chars: &[char], pos: usize) -> bool {
    let before = pos.checked_sub(1).and_then(|i| chars.get(i)).is_some_and(|&c| is_word_char(c));
    let after = chars.get(pos).is_some_and(|&c| is_word_char(c));
    before != after
}
