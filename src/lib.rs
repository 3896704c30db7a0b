extern crate self as coptic_translit;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod rules;
mod stream;

pub use api::{
    Options, PassTrace, RuleSummary, Transliteration, TransliterationDetails, TransliterationVerbose,
    decode_unicode_escapes, rule_table, transliterate, transliterate_verbose, transliterate_verbose_with,
    transliterate_with,
};
pub use error::TranslitError;
pub use stream::{OutputFormat, StreamSummary, transliterate_reader, transliterate_reader_parallel};

use std::fmt;

// --- Internal types ---------------------------------------------------------

/// Condition checked immediately after a rule's trigger character.
///
/// Lookaheads never consume input: the characters they inspect stay in the
/// string and remain visible to the next position of the same pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lookahead {
    /// No condition; every occurrence of the trigger matches.
    Anywhere,
    /// The trigger is followed by exactly this sequence.
    FollowedBy(&'static str),
    /// The trigger is followed by any one of these characters.
    FollowedByOneOf(&'static [char]),
    /// A word boundary sits right after the trigger.
    WordBoundary,
    /// The trigger is followed by this sequence, and a word boundary sits
    /// right after the sequence.
    FollowedByAtBoundary(&'static str),
}

// Pattern items used by rules: either a single trigger character checked in
// context, or a literal sequence replaced as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pattern {
    /// Rewrite `trigger` wherever `lookahead` holds. Only the trigger is
    /// replaced.
    Contextual { trigger: char, lookahead: Lookahead },

    /// Replace every leftmost, non-overlapping occurrence of the sequence.
    Literal(&'static str),
}

/// A rewrite rule: a name, the `pattern` it matches and the literal
/// `replacement` that is substituted for each match.
///
/// Rules are applied as whole-string passes in table order; a later rule sees
/// the text already rewritten by every earlier one.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rule {
    pub name: &'static str,
    pub pattern: Pattern,
    pub replacement: &'static str,
}

impl fmt::Display for Lookahead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookahead::Anywhere => Ok(()),
            Lookahead::FollowedBy(seq) => write!(f, " before {seq}"),
            Lookahead::FollowedByOneOf(set) => {
                write!(f, " before [")?;
                for c in set.iter() {
                    write!(f, "{c}")?;
                }
                write!(f, "]")
            }
            Lookahead::WordBoundary => write!(f, " at boundary"),
            Lookahead::FollowedByAtBoundary(seq) => write!(f, " before {seq} at boundary"),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Contextual { trigger, lookahead } => write!(f, "{trigger}{lookahead}"),
            Pattern::Literal(seq) => write!(f, "{seq}"),
        }
    }
}
