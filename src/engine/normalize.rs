//! Unicode normalization (pipeline stage 1).

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::canonical_combining_class;

/// Decompose `text` with compatibility mappings (NFKD) and drop every
/// codepoint with a non-zero canonical combining class.
///
/// Base letters and spacing characters are kept; case is untouched. The
/// supralinear stroke (U+0305) and the Coptic combining marks
/// (U+2CEF..U+2CF1) all fall in the dropped set.
pub fn normalize(text: &str) -> String {
    text.nfkd().filter(|&c| canonical_combining_class(c) == 0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_supralinear_stroke() {
        assert_eq!(normalize("ⲛ\u{0305}ⲧⲉ"), "ⲛⲧⲉ");
        assert_eq!(normalize("ⲙ\u{0305}ⲙⲟ"), "ⲙⲙⲟ");
    }

    #[test]
    fn strips_coptic_combining_marks() {
        assert_eq!(normalize("ⲛ\u{2CEF}ⲓ\u{2CF0}ⲧ\u{2CF1}"), "ⲛⲓⲧ");
    }

    #[test]
    fn decomposes_precomposed_and_compatibility_forms() {
        assert_eq!(normalize("é"), "e");
        assert_eq!(normalize("Ἀ"), "Α");
        assert_eq!(normalize("ﬁ"), "fi");
        assert_eq!(normalize("①"), "1");
    }

    #[test]
    fn keeps_case_and_plain_text() {
        assert_eq!(normalize("ⲀⲄⲀⲠⲎ"), "ⲀⲄⲀⲠⲎ");
        assert_eq!(normalize("Hello, world! 42"), "Hello, world! 42");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn is_idempotent() {
        let samples = [
            "ⲡⲛⲟⲩⲧⲉ",
            "ⲛ\u{0305}ⲧⲉ ⲁ\u{0301}ⲅⲁⲡⲏ",
            "ᾅ ǅ ﬃ ㍱",
            "a\u{0323}\u{0302}\u{0301}",
            "\u{0305}\u{0305}",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "normalize not idempotent for {s:?}");
        }
    }
}
