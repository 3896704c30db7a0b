//! Transliteration engine.
//!
//! This module is the *internal entry point* for the rule engine. It is split
//! into focused submodules under `src/engine/`, one per pipeline stage.
//!
//! ## How the parts work together
//!
//! Transliterating an input string is a strictly ordered pipeline:
//!
//! ```text
//! rules (all)  ──┐
//!               │  CompiledRules::new           (compiled_rules.rs)
//!               └───────────────┬──────────────
//!                               │
//! input ── normalize ───────────┤               (normalize.rs)
//!          NFKD, drop marks     │
//!                               v
//!          lower-case ── TriggerInfo::scan ──── skip passes with no trigger
//!                               │               (trigger.rs)
//!                               v
//!                     Pipeline::run (pipeline.rs)
//!                       - 21 whole-string passes, in table order
//!                         (rewrite.rs)
//!                               │
//!                               v
//!                     base map substitution     (mapper.rs)
//!                               │
//!                               v
//!                     residual Coptic scan      (validate.rs)
//!                               │
//!                               v
//!                     RunResult { text, unmapped, metrics }
//! ```
//!
//! Every pass observes the text written by the passes before it, so the rule
//! order is part of the output contract. Nothing here reorders or merges
//! passes; the trigger scan only skips passes that could not match anything.
//!
//! ## Responsibilities by module
//!
//! - `normalize.rs`: compatibility decomposition and combining-mark removal.
//! - `compiled_rules.rs`: pairs each `Rule` with the letters it needs.
//! - `trigger.rs`: scans the lower-cased input for rule trigger letters.
//! - `rewrite.rs`: applies one rule as a single global pass.
//! - `mapper.rs`: the context-free base substitution.
//! - `validate.rs`: reports Coptic codepoints left in the output.
//! - `metrics.rs`: stage timings and the optional per-pass trace.
//!
//! ## Debugging
//!
//! The engine emits `tracing` events at DEBUG level for the trigger scan and
//! every pass. The CLI turns them on with `--verbose` or `COPTIC_DEBUG_RULES=1`.

#[path = "engine/compiled_rules.rs"]
mod compiled_rules;
#[path = "engine/mapper.rs"]
mod mapper;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/normalize.rs"]
mod normalize;
#[path = "engine/pipeline.rs"]
mod pipeline;
#[path = "engine/rewrite.rs"]
mod rewrite;
#[path = "engine/trigger.rs"]
mod trigger;
#[path = "engine/validate.rs"]
mod validate;

#[allow(unused_imports)]
pub use compiled_rules::{CompiledRules, LetterMask, RuleMeta};
#[allow(unused_imports)]
pub use metrics::{PassMetrics, RunMetrics, RunResult};
#[allow(unused_imports)]
pub use normalize::normalize;
pub use pipeline::Pipeline;
#[allow(unused_imports)]
pub use rewrite::{PassOutcome, apply_rule_with};
#[cfg(test)]
pub use rewrite::apply_rule;
#[allow(unused_imports)]
pub use trigger::TriggerInfo;
