use crate::rules::letters::{ALPHA, BETA, BETA_VOWELS, EPSILON, ETA, GAMMA};
use crate::{Lookahead, Rule};

/// The ordered rewrite table.
///
/// Order is part of the output contract. Every pass runs over the whole
/// string produced by the previous one, so:
///
/// - alpha is exhausted by rules 1-3, gamma by 10-13 and eta by 16; none of
///   them can reach the base map.
/// - beta survives rules 4-9 only when followed by a word character outside
///   every listed context (e.g. the IPA text written by rules 1-3), and is then
///   handled by the base map.
/// - rule 6 lists alpha as a trigger vowel, and rule 20 needs an alpha, but
///   both run after rules 1-3 and so never see one.
pub fn get() -> Vec<Rule> {
    vec![
        // Alpha
        rule! {
            name: "alpha_before_final_sigma",
            pattern: ctx!(ALPHA, Lookahead::FollowedByAtBoundary("ⲥ")),
            replace: "æ",
        },
        rule! {
            name: "alpha_at_boundary",
            pattern: ctx!(ALPHA, Lookahead::WordBoundary),
            replace: "ə",
        },
        rule! {
            name: "alpha_elsewhere",
            pattern: ctx!(ALPHA),
            replace: "ɑː",
        },
        // Beta
        rule! {
            name: "beta_before_final_iota_mu",
            pattern: ctx!(BETA, Lookahead::FollowedByAtBoundary("ⲓⲙ")),
            replace: "b",
        },
        rule! {
            name: "beta_before_final_tau",
            pattern: ctx!(BETA, Lookahead::FollowedByAtBoundary("ⲧ")),
            replace: "v",
        },
        rule! {
            name: "beta_before_vowel",
            pattern: ctx!(BETA, Lookahead::FollowedByOneOf(BETA_VOWELS)),
            replace: "v",
        },
        rule! {
            name: "beta_before_rho",
            pattern: ctx!(BETA, Lookahead::FollowedBy("ⲣ")),
            replace: "b",
        },
        rule! {
            name: "beta_before_sigma",
            pattern: ctx!(BETA, Lookahead::FollowedBy("ⲥ")),
            replace: "b",
        },
        rule! {
            name: "beta_at_boundary",
            pattern: ctx!(BETA, Lookahead::WordBoundary),
            replace: "b",
        },
        // Gamma
        rule! {
            name: "gamma_before_gamma",
            pattern: ctx!(GAMMA, Lookahead::FollowedBy("ⲅ")),
            replace: "n",
        },
        rule! {
            name: "gamma_before_iota",
            pattern: ctx!(GAMMA, Lookahead::FollowedBy("ⲓ")),
            replace: "g",
        },
        rule! {
            name: "gamma_before_epsilon",
            pattern: ctx!(GAMMA, Lookahead::FollowedBy("ⲉ")),
            replace: "g",
        },
        rule! {
            name: "gamma_elsewhere",
            pattern: ctx!(GAMMA),
            replace: "gh",
        },
        // Epsilon / eta
        rule! {
            name: "epsilon_eta",
            pattern: lit!("ⲉⲏ"),
            replace: "ey",
        },
        rule! {
            name: "epsilon_before_omicron",
            pattern: ctx!(EPSILON, Lookahead::FollowedBy("ⲟ")),
            replace: "eɪ",
        },
        rule! {
            name: "eta_elsewhere",
            pattern: ctx!(ETA),
            replace: "ee",
        },
        // Multi-character sequences
        rule! {
            name: "double_kappa",
            pattern: lit!("ⲕⲕ"),
            replace: "kk",
        },
        rule! {
            name: "double_mu",
            pattern: lit!("ⲙⲙ"),
            replace: "mm",
        },
        rule! {
            name: "double_nu",
            pattern: lit!("ⲛⲛ"),
            replace: "nn",
        },
        rule! {
            name: "omicron_iota_alpha",
            pattern: lit!("ⲟⲓⲁ"),
            replace: "ia",
        },
        rule! {
            name: "omicron_upsilon_omega",
            pattern: lit!("ⲟⲩⲱ"),
            replace: "o'o",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_twenty_one_rules_in_order() {
        let names: Vec<&str> = get().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "alpha_before_final_sigma",
                "alpha_at_boundary",
                "alpha_elsewhere",
                "beta_before_final_iota_mu",
                "beta_before_final_tau",
                "beta_before_vowel",
                "beta_before_rho",
                "beta_before_sigma",
                "beta_at_boundary",
                "gamma_before_gamma",
                "gamma_before_iota",
                "gamma_before_epsilon",
                "gamma_elsewhere",
                "epsilon_eta",
                "epsilon_before_omicron",
                "eta_elsewhere",
                "double_kappa",
                "double_mu",
                "double_nu",
                "omicron_iota_alpha",
                "omicron_upsilon_omega",
            ]
        );
    }

    #[test]
    fn replacements_never_contain_coptic() {
        for rule in get() {
            assert!(
                !rule.replacement.chars().any(|c| crate::rules::letters::COPTIC_BLOCK.contains(&c)),
                "rule {} writes Coptic text",
                rule.name
            );
        }
    }
}
