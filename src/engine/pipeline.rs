//! Ordered pipeline runner.
//!
//! This module is the operational core of the engine:
//!
//! ```text
//! (1) normalize            -> NFKD, combining marks dropped
//! (2) lower-case + scan    -> trigger letters present in the text
//! (3) rewrite passes       -> every rule in table order, skipping passes
//!                             whose letters are absent
//! (4) base map             -> context-free substitution
//! (5) residual scan        -> Coptic codepoints left over (non-fatal)
//! ```
//!
//! The output is deterministic given the same input and rule table. The
//! pipeline holds no mutable state, so one `Pipeline` can serve any number of
//! threads at once.

use std::collections::HashMap;
use std::time::Instant;

use super::compiled_rules::CompiledRules;
use super::mapper::apply_base_map;
use super::metrics::{PassMetrics, RunMetrics, RunResult};
use super::normalize::normalize;
use super::rewrite::apply_rule_with;
use super::trigger::TriggerInfo;

/// Pipeline orchestrates the stages over one input string.
///
/// Usage: create with `Pipeline::new(&compiled, &map)` then call `run(text)`.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'a> {
    compiled: &'a CompiledRules<'a>,
    map: &'a HashMap<char, &'static str>,
}

impl<'a> Pipeline<'a> {
    pub fn new(compiled: &'a CompiledRules<'a>, map: &'a HashMap<char, &'static str>) -> Self {
        Pipeline { compiled, map }
    }

    /// Run every stage and return the output with stage timings.
    pub fn run(&self, text: &str) -> RunResult {
        self.execute(text, false)
    }

    /// Like [`run`](Self::run), but also keep the intermediate strings and one
    /// `PassMetrics` per rule.
    pub fn run_with_metrics(&self, text: &str) -> RunResult {
        self.execute(text, true)
    }

    fn execute(&self, text: &str, collect: bool) -> RunResult {
        let start = Instant::now();
        let mut metrics = RunMetrics::default();

        let t = Instant::now();
        let normalized = normalize(text);
        metrics.normalize = t.elapsed();

        let t = Instant::now();
        let lowered = normalized.to_lowercase();
        let rewritten = self.rewrite_traced(&lowered, collect, &mut metrics.passes);
        metrics.rules = t.elapsed();

        let t = Instant::now();
        let mapped = apply_base_map(&rewritten, self.map);
        metrics.base_map = t.elapsed();

        let t = Instant::now();
        let unmapped = super::validate::residual_coptic(&mapped);
        metrics.validate = t.elapsed();

        metrics.total = start.elapsed();

        RunResult {
            text: mapped,
            unmapped,
            normalized: collect.then_some(normalized),
            lowered: collect.then_some(lowered),
            metrics,
        }
    }

    fn rewrite_traced(&self, lowered: &str, collect: bool, passes: &mut Vec<PassMetrics>) -> String {
        let trigger_info = TriggerInfo::scan(lowered);
        tracing::debug!(letters = ?trigger_info.letters, "trigger scan");

        let mut current = lowered.to_string();
        let mut scratch = Vec::with_capacity(lowered.len());

        for (id, rule) in self.compiled.rules.iter().enumerate() {
            let index = id + 1;

            if !self.compiled.is_active(id, trigger_info.letters) {
                tracing::trace!(index, rule = rule.name, "pass skipped");
                if collect {
                    passes.push(PassMetrics { index, rule: rule.name, skipped: true, ..Default::default() });
                }
                continue;
            }

            let t = Instant::now();
            let outcome = apply_rule_with(rule, &current, &mut scratch);
            let duration = t.elapsed();

            if outcome.replaced > 0 {
                tracing::debug!(index, rule = rule.name, replaced = outcome.replaced, text = %outcome.text, "pass");
            }
            if collect {
                passes.push(PassMetrics { index, rule: rule.name, replaced: outcome.replaced, skipped: false, duration });
            }

            current = outcome.text;
        }

        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::base_map::CODEPOINT_MAP;
    use crate::engine::apply_rule;
    use crate::rules::contextual;

    fn run(text: &str) -> RunResult {
        let rules = contextual::get();
        let compiled = CompiledRules::new(&rules);
        Pipeline::new(&compiled, &CODEPOINT_MAP).run_with_metrics(text)
    }

    #[test]
    fn skipping_never_changes_output() {
        // Run every pass unconditionally and compare with the pipeline.
        let rules = contextual::get();
        let compiled = CompiledRules::new(&rules);
        let pipeline = Pipeline::new(&compiled, &CODEPOINT_MAP);

        let samples = [
            "ⲁⲛⲟⲕ ⲟⲩⲛ ⲟⲩⲙⲁⲓⲛⲟⲩⲧⲉ",
            "ⲁⲅⲅⲉⲗⲟⲥ ⲃⲓⲙ ⲃⲧ ⲃⲣⲉ",
            "ⲉⲏ ⲉⲟ ⲕⲕⲕ ⲙⲙ ⲛⲛ ⲟⲩⲱ",
            "ⲟⲓⲁ ⲁⲥ ⲁ",
            "plain",
            "",
        ];
        for s in samples {
            let mut full = normalize(s).to_lowercase();
            for rule in &rules {
                full = apply_rule(rule, &full).text;
            }
            let expected = apply_base_map(&full, &CODEPOINT_MAP);
            assert_eq!(pipeline.run(s).text, expected, "mismatch for {s:?}");
        }
    }

    #[test]
    fn metrics_have_one_entry_per_rule() {
        let res = run("ⲡⲛⲟⲩⲧⲉ");
        assert_eq!(res.text, "pnoute");
        assert_eq!(res.metrics.passes.len(), 21);
        assert_eq!(res.metrics.passes.first().map(|p| p.index), Some(1));
        assert_eq!(res.metrics.passes.last().map(|p| p.index), Some(21));

        let executed: Vec<&str> = res.metrics.passes.iter().filter(|p| !p.skipped).map(|p| p.rule).collect();
        assert_eq!(executed, vec!["epsilon_before_omicron", "double_nu", "omicron_upsilon_omega"]);
        assert!(res.metrics.passes.iter().all(|p| p.replaced == 0));
        assert!(res.metrics.total >= res.metrics.rules);
    }

    #[test]
    fn intermediate_strings_are_kept_on_request() {
        let res = run("Ⲛ\u{0305}ⲦⲈ");
        assert_eq!(res.normalized.as_deref(), Some("ⲚⲦⲈ"));
        assert_eq!(res.lowered.as_deref(), Some("ⲛⲧⲉ"));
        assert_eq!(res.text, "nte");

        let rules = contextual::get();
        let compiled = CompiledRules::new(&rules);
        let plain = Pipeline::new(&compiled, &CODEPOINT_MAP).run("ⲛⲧⲉ");
        assert!(plain.normalized.is_none());
        assert!(plain.metrics.passes.is_empty());
    }

    #[test]
    fn replaced_counts_follow_chaining() {
        let res = run("ⲁⲅⲁⲡⲏ");
        let replaced = |name: &str| res.metrics.passes.iter().find(|p| p.rule == name).unwrap().replaced;
        assert_eq!(replaced("alpha_at_boundary"), 0);
        assert_eq!(replaced("alpha_elsewhere"), 2);
        // The gamma now sits before IPA text, so only the fallback fires.
        assert_eq!(replaced("gamma_before_epsilon"), 0);
        assert_eq!(replaced("gamma_elsewhere"), 1);
        assert_eq!(replaced("eta_elsewhere"), 1);
        assert_eq!(res.text, "ɑːghɑːpee");
    }
}
