//! Rule compilation and indexing.
//!
//! This module holds the *static* side of the engine: the rule table paired
//! with the cheap metadata a run uses to decide which passes can be skipped.
//!
//! A run is split into two phases:
//!
//! 1. **Compile rules** (this module): wrap the ordered table in
//!    `CompiledRules` and derive a `LetterMask` per rule.
//! 2. **Run** (see `pipeline.rs`): scan the lower-cased input for trigger
//!    letters (`trigger.rs`), then execute every pass in table order, skipping
//!    those whose letters are absent.
//!
//! ## Invariants
//!
//! - `CompiledRules::rules` and `CompiledRules::metas` are aligned by index and
//!   keep the table order.
//! - A rule whose mask is empty is always executed.
//! - Replacements never introduce Coptic letters, so a letter missing at scan
//!   time stays missing for the whole run. Skipping on the scan result can
//!   therefore never change the output.

use crate::rules::letters::{ALPHA, BETA, EPSILON, ETA, GAMMA, KAPPA, MU, NU, OMICRON};
use crate::{Pattern, Rule};

bitflags::bitflags! {
    /// Letters that trigger at least one rewrite rule.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LetterMask: u16 {
        const ALPHA   = 1 << 0;
        const BETA    = 1 << 1;
        const GAMMA   = 1 << 2;
        const EPSILON = 1 << 3;
        const ETA     = 1 << 4;
        const KAPPA   = 1 << 5;
        const MU      = 1 << 6;
        const NU      = 1 << 7;
        const OMICRON = 1 << 8;
    }
}

impl LetterMask {
    /// The bit for `c`, or an empty mask when `c` triggers no rule.
    pub fn of(c: char) -> Self {
        match c {
            ALPHA => LetterMask::ALPHA,
            BETA => LetterMask::BETA,
            GAMMA => LetterMask::GAMMA,
            EPSILON => LetterMask::EPSILON,
            ETA => LetterMask::ETA,
            KAPPA => LetterMask::KAPPA,
            MU => LetterMask::MU,
            NU => LetterMask::NU,
            OMICRON => LetterMask::OMICRON,
            _ => LetterMask::empty(),
        }
    }

    /// Union of the bits of every character in `s`.
    pub fn of_str(s: &str) -> Self {
        s.chars().fold(LetterMask::empty(), |acc, c| acc | LetterMask::of(c))
    }
}

/// Metadata attached to a rule.
#[derive(Clone, Copy, Debug)]
pub struct RuleMeta {
    /// Letters that must all be present in the input for the pass to match.
    pub requires: LetterMask,
}

/// Pre-compiled rule set with per-rule metadata.
#[derive(Debug)]
pub struct CompiledRules<'a> {
    pub rules: Vec<&'a Rule>,
    pub metas: Vec<RuleMeta>,
}

impl<'a> CompiledRules<'a> {
    /// Create a compiled rule set from an ordered slice of rules.
    ///
    /// A contextual rule requires its trigger letter; a literal rule requires
    /// every tracked letter of its sequence. Lookahead characters are not
    /// required: a missing context only means the pass replaces nothing.
    pub fn new(rules: &'a [Rule]) -> Self {
        let rule_refs: Vec<&Rule> = rules.iter().collect();

        let metas: Vec<RuleMeta> = rule_refs
            .iter()
            .map(|r| {
                let requires = match r.pattern {
                    Pattern::Contextual { trigger, .. } => LetterMask::of(trigger),
                    Pattern::Literal(seq) => LetterMask::of_str(seq),
                };
                RuleMeta { requires }
            })
            .collect();

        CompiledRules { rules: rule_refs, metas }
    }

    /// True when the rule at `id` may match an input whose trigger letters
    /// are `present`.
    pub fn is_active(&self, id: usize, present: LetterMask) -> bool {
        present.contains(self.metas[id].requires)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metas_follow_rule_patterns() {
        let rules = crate::rules::contextual::get();
        let compiled = CompiledRules::new(&rules);
        assert_eq!(compiled.rules.len(), 21);
        assert_eq!(compiled.rules.len(), compiled.metas.len());

        let requires = |name: &str| {
            let id = compiled.rules.iter().position(|r| r.name == name).unwrap();
            compiled.metas[id].requires
        };

        assert_eq!(requires("alpha_elsewhere"), LetterMask::ALPHA);
        assert_eq!(requires("beta_before_rho"), LetterMask::BETA);
        assert_eq!(requires("epsilon_eta"), LetterMask::EPSILON | LetterMask::ETA);
        assert_eq!(requires("double_kappa"), LetterMask::KAPPA);
        assert_eq!(requires("omicron_iota_alpha"), LetterMask::OMICRON | LetterMask::ALPHA);
        assert_eq!(requires("omicron_upsilon_omega"), LetterMask::OMICRON);
    }

    #[test]
    fn empty_mask_is_always_active() {
        let rules = [rule! { name: "lambda", pattern: ctx!('ⲗ'), replace: "l" }];
        let compiled = CompiledRules::new(&rules);
        assert!(compiled.metas[0].requires.is_empty());
        assert!(compiled.is_active(0, LetterMask::empty()));
    }

    #[test]
    fn literal_needs_every_letter() {
        let rules = crate::rules::contextual::get();
        let compiled = CompiledRules::new(&rules);
        let id = compiled.rules.iter().position(|r| r.name == "epsilon_eta").unwrap();
        assert!(!compiled.is_active(id, LetterMask::EPSILON));
        assert!(compiled.is_active(id, LetterMask::EPSILON | LetterMask::ETA | LetterMask::NU));
    }
}
