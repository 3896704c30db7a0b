use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Context-free substitution table applied after every rewrite pass.
///
/// Both cases are listed, but the rule engine lower-cases its input, so only
/// the small letters are ever looked up. Alpha, gamma and eta are also
/// consumed by the rewrite rules before this table runs; their entries are
/// kept so the table stays a complete description of the alphabet.
pub static CODEPOINT_MAP: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ('ⲁ', "a"),
        ('Ⲁ', "A"),
        ('ⲃ', "b"),
        ('Ⲃ', "B"),
        ('ⲅ', "g"),
        ('Ⲅ', "G"),
        ('ⲇ', "d"),
        ('Ⲇ', "D"),
        ('ⲉ', "e"),
        ('Ⲉ', "E"),
        ('ⲋ', "f"),
        ('Ⲋ', "F"),
        ('ⲍ', "z"),
        ('Ⲍ', "Z"),
        ('ⲏ', "i"),
        ('Ⲏ', "I"),
        ('ⲑ', "th"),
        ('Ⲑ', "TH"),
        ('ⲓ', "i"),
        ('Ⲓ', "I"),
        ('ⲕ', "k"),
        ('Ⲕ', "K"),
        ('ⲗ', "l"),
        ('Ⲗ', "L"),
        ('ⲙ', "m"),
        ('Ⲙ', "M"),
        ('ⲛ', "n"),
        ('Ⲛ', "N"),
        ('ⲝ', "x"),
        ('Ⲝ', "X"),
        ('ⲟ', "o"),
        ('Ⲟ', "O"),
        ('ⲡ', "p"),
        ('Ⲡ', "P"),
        ('ⲣ', "r"),
        ('Ⲣ', "R"),
        ('ⲥ', "s"),
        ('Ⲥ', "S"),
        ('ⲧ', "t"),
        ('Ⲧ', "T"),
        ('ⲩ', "u"),
        ('Ⲩ', "U"),
        ('ⲫ', "ph"),
        ('Ⲫ', "PH"),
        ('ⲭ', "ch"),
        ('Ⲭ', "CH"),
        ('ⲯ', "ps"),
        ('Ⲯ', "PS"),
        ('ⲱ', "o"),
        ('Ⲱ', "O"),
        // Letters borrowed from Demotic live in the Greek and Coptic block.
        ('ϣ', "sh"),
        ('Ϣ', "SH"),
        ('ϥ', "f"),
        ('Ϥ', "F"),
        ('ϧ', "kh"),
        ('Ϧ', "KH"),
        ('ϩ', "h"),
        ('Ϩ', "H"),
        ('ϫ', "j"),
        ('Ϫ', "J"),
        ('ϭ', "ky"),
        ('Ϭ', "KY"),
        ('ϯ', "ti"),
        ('Ϯ', "TI"),
    ])
});
