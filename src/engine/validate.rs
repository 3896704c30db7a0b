//! Residual scan (pipeline stage 4).
//!
//! After the base map has run, any codepoint still inside the Coptic block was
//! covered neither by a rule nor by the map. The scan reports those codepoints
//! but never alters or rejects the output.

use crate::rules::letters::COPTIC_BLOCK;

/// Every Coptic-block codepoint in `text`, in order of occurrence.
pub fn residual_coptic(text: &str) -> Vec<char> {
    text.chars().filter(|c| COPTIC_BLOCK.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_block_codepoints_in_order() {
        assert_eq!(residual_coptic("ⳁaⲱ\u{2CF9}ⳁ"), vec!['ⳁ', 'ⲱ', '\u{2CF9}', 'ⳁ']);
    }

    #[test]
    fn ignores_greek_and_coptic_block() {
        // Shei and friends are U+03E2..U+03EF, outside the Coptic block.
        assert!(residual_coptic("ϣϥϧϩϫϭϯ").is_empty());
        assert!(residual_coptic("pnoute").is_empty());
    }

    #[test]
    fn block_edges_are_inclusive() {
        assert_eq!(residual_coptic("\u{2C7F}\u{2C80}\u{2CFF}\u{2D00}"), vec!['\u{2C80}', '\u{2CFF}']);
    }
}
