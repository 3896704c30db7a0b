//! Trigger scanning (input pre-classification).
//!
//! Before the rewrite passes run, the lower-cased input is scanned once for
//! the letters that can trigger a rule. The pipeline uses the resulting
//! `LetterMask` to skip passes that cannot match anything.
//!
//! ## Design notes
//!
//! - The scan is exact, not heuristic: a pass is skipped only when one of its
//!   required letters does not occur at all.
//! - The scan must run on the lower-cased text, the same text the first pass
//!   sees. Capital letters never trigger a rule.

use super::compiled_rules::LetterMask;

/// Trigger letters detected in the input.
#[derive(Debug, Clone, Copy)]
pub struct TriggerInfo {
    pub letters: LetterMask,
}

impl TriggerInfo {
    /// Scan `lowered` for trigger letters.
    pub fn scan(lowered: &str) -> Self {
        let mut letters = LetterMask::empty();
        for c in lowered.chars() {
            letters |= LetterMask::of(c);
            if letters.is_all() {
                break;
            }
        }
        TriggerInfo { letters }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_collects_trigger_letters() {
        let info = TriggerInfo::scan("ⲡⲛⲟⲩⲧⲉ");
        assert_eq!(info.letters, LetterMask::NU | LetterMask::OMICRON | LetterMask::EPSILON);
    }

    #[test]
    fn scan_ignores_capitals_and_latin() {
        assert!(TriggerInfo::scan("ⲀⲄⲀⲠⲎ abc").letters.is_empty());
        assert!(TriggerInfo::scan("").letters.is_empty());
    }

    #[test]
    fn scan_can_see_every_letter() {
        let info = TriggerInfo::scan("ⲁⲃⲅⲉⲏⲕⲙⲛⲟ");
        assert!(info.letters.is_all());
    }
}
