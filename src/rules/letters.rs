//! Lower-case Coptic letters referenced by the rule table.

pub const ALPHA: char = 'ⲁ';
pub const BETA: char = 'ⲃ';
pub const GAMMA: char = 'ⲅ';
pub const EPSILON: char = 'ⲉ';
pub const ETA: char = 'ⲏ';
pub const IOTA: char = 'ⲓ';
pub const KAPPA: char = 'ⲕ';
pub const MU: char = 'ⲙ';
pub const NU: char = 'ⲛ';
pub const OMICRON: char = 'ⲟ';
pub const OMEGA: char = 'ⲱ';

/// Vowels that turn a following-context beta into "v".
pub const BETA_VOWELS: &[char] = &[ALPHA, OMICRON, OMEGA, IOTA, ETA, EPSILON];

/// The Unicode Coptic block. Anything from this range left in the output was
/// not covered by the rules or the base map.
pub const COPTIC_BLOCK: std::ops::RangeInclusive<char> = '\u{2C80}'..='\u{2CFF}';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_small_coptic_codepoints() {
        let expected = [
            (ALPHA, 0x2C81),
            (BETA, 0x2C83),
            (GAMMA, 0x2C85),
            (EPSILON, 0x2C89),
            (ETA, 0x2C8F),
            (IOTA, 0x2C93),
            (KAPPA, 0x2C95),
            (MU, 0x2C99),
            (NU, 0x2C9B),
            (OMICRON, 0x2C9F),
            (OMEGA, 0x2CB1),
        ];
        for (c, cp) in expected {
            assert_eq!(c as u32, cp, "unexpected codepoint for {c}");
            assert!(COPTIC_BLOCK.contains(&c));
        }
    }
}
