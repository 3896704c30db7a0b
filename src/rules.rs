//! Static transliteration data: the letters that drive the rewrite rules, the
//! ordered rule table and the base substitution map.

#[path = "rules/base_map.rs"]
pub(crate) mod base_map;
#[path = "rules/contextual.rs"]
pub(crate) mod contextual;
#[path = "rules/letters.rs"]
pub(crate) mod letters;
