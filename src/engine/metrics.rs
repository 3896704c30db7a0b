//! Engine run metrics.
//!
//! This module defines the structs used to observe a run. Stage timings are
//! always collected; the per-pass list is *opt-in*:
//!
//! - `Pipeline::run` for normal operation.
//! - `Pipeline::run_with_metrics` for rule debugging and profiling. It keeps
//!   one `PassMetrics` per rule plus the intermediate strings.

use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    /// Time spent decomposing and stripping marks.
    pub normalize: Duration,
    /// Time spent lower-casing, scanning and running every rewrite pass.
    pub rules: Duration,
    /// Time spent in base map substitution.
    pub base_map: Duration,
    /// Time spent scanning the output for residual Coptic.
    pub validate: Duration,
    /// One entry per rule, in table order. Empty unless requested.
    pub passes: Vec<PassMetrics>,
}

/// Timing and match count for a single rewrite pass.
#[derive(Debug, Default, Clone)]
pub struct PassMetrics {
    /// 1-based position of the rule in the table.
    pub index: usize,
    pub rule: &'static str,
    /// Matches replaced by the pass.
    pub replaced: usize,
    /// The trigger scan showed the pass could not match.
    pub skipped: bool,
    pub duration: Duration,
}

/// Pipeline output bundled with timing information.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Transliterated text.
    pub text: String,
    /// Coptic-block codepoints left in `text`.
    pub unmapped: Vec<char>,
    /// Input after normalization. Only kept when metrics were requested.
    pub normalized: Option<String>,
    /// Normalized input after lower-casing. Only kept when metrics were
    /// requested.
    pub lowered: Option<String>,
    pub metrics: RunMetrics,
}
