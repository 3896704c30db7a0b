use crate::engine::{CompiledRules, Pipeline, RunResult};
use crate::rules::base_map::CODEPOINT_MAP;
use crate::Rule;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::time::Duration;

static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(crate::rules::contextual::get);
static COMPILED_RULES: Lazy<CompiledRules<'static>> = Lazy::new(|| CompiledRules::new(&DEFAULT_RULES));

/// Options that affect a transliteration run.
#[derive(Debug, Clone)]
pub struct Options {
    /// Emit a `tracing` warning when Coptic codepoints survive the run. The
    /// residual list is returned either way.
    pub report_unmapped: bool,
    /// Decode `\uXXXX` / `\UXXXXXXXX` escapes before transliterating.
    pub decode_escapes: bool,
    /// Stop stream processing after this many lines.
    pub max_lines: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self { report_unmapped: true, decode_escapes: false, max_lines: None }
    }
}

/// Result from [`transliterate_with`].
#[derive(Debug, Clone, Serialize)]
pub struct Transliteration {
    /// The Latin-script rendering.
    pub text: String,
    /// Coptic-block codepoints that neither a rule nor the base map covered,
    /// in order of occurrence. They are passed through unchanged in `text`.
    pub unmapped: Vec<char>,
    /// Total elapsed time for the run.
    #[serde(skip)]
    pub elapsed: Duration,
}

impl Transliteration {
    /// True when the run left untransliterated Coptic codepoints behind.
    pub fn has_unmapped(&self) -> bool {
        !self.unmapped.is_empty()
    }
}

/// A compact per-pass trace.
#[derive(Debug, Clone)]
pub struct PassTrace {
    /// 1-based position of the rule in the table.
    pub index: usize,
    pub rule: String,
    pub replaced: usize,
    pub skipped: bool,
    pub duration: Duration,
}

/// Additional details returned by [`transliterate_verbose`] and
/// [`transliterate_verbose_with`].
#[derive(Debug, Clone)]
pub struct TransliterationDetails {
    /// Input after decomposition and mark removal.
    pub normalized: String,
    /// Normalized input after lower-casing; the text the first pass sees.
    pub lowered: String,
    /// One entry per rule, in table order.
    pub passes: Vec<PassTrace>,
    pub total: Duration,
    pub normalize: Duration,
    pub rules: Duration,
    pub base_map: Duration,
    pub validate: Duration,
}

/// Result from [`transliterate_verbose`] and [`transliterate_verbose_with`].
#[derive(Debug, Clone)]
pub struct TransliterationVerbose {
    /// The text handed to the engine (after escape decoding, if enabled).
    pub input: String,
    pub output: Transliteration,
    pub details: TransliterationDetails,
}

/// One row of the rule table, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSummary {
    pub index: usize,
    pub name: &'static str,
    pub pattern: String,
    pub replacement: &'static str,
}

/// Transliterate `text` with default [`Options`] and return the Latin text.
///
/// This is a pure function of its input; an empty string maps to an empty
/// string.
///
/// # Example
/// ```
/// use coptic_translit::transliterate;
///
/// assert_eq!(transliterate("ⲡⲛⲟⲩⲧⲉ"), "pnoute");
/// assert_eq!(transliterate(""), "");
/// ```
pub fn transliterate(text: &str) -> String {
    transliterate_with(text, &Options::default()).text
}

/// Transliterate `text` and return the text together with the residual
/// diagnostic.
///
/// # Example
/// ```
/// use coptic_translit::{Options, transliterate_with};
///
/// let out = transliterate_with("ⲁⳁ", &Options { report_unmapped: false, ..Options::default() });
/// assert_eq!(out.text, "ɑːⳁ");
/// assert_eq!(out.unmapped, vec!['ⳁ']);
/// ```
pub fn transliterate_with(text: &str, options: &Options) -> Transliteration {
    let input = prepare_input(text, options);
    let run = pipeline().run(&input);
    finish(run, options)
}

pub fn transliterate_verbose(text: &str) -> TransliterationVerbose {
    transliterate_verbose_with(text, &Options::default())
}

/// Transliterate `text` and return a per-pass trace alongside the result.
///
/// The default [`transliterate_with`] path does not keep the trace or the
/// intermediate strings.
pub fn transliterate_verbose_with(text: &str, options: &Options) -> TransliterationVerbose {
    let input = prepare_input(text, options);
    let mut run = pipeline().run_with_metrics(&input);

    let passes = std::mem::take(&mut run.metrics.passes)
        .into_iter()
        .map(|p| PassTrace {
            index: p.index,
            rule: p.rule.to_string(),
            replaced: p.replaced,
            skipped: p.skipped,
            duration: p.duration,
        })
        .collect();

    let details = TransliterationDetails {
        normalized: run.normalized.take().unwrap_or_default(),
        lowered: run.lowered.take().unwrap_or_default(),
        passes,
        total: run.metrics.total,
        normalize: run.metrics.normalize,
        rules: run.metrics.rules,
        base_map: run.metrics.base_map,
        validate: run.metrics.validate,
    };

    TransliterationVerbose { input, output: finish(run, options), details }
}

/// The ordered rewrite table, one row per rule.
pub fn rule_table() -> Vec<RuleSummary> {
    DEFAULT_RULES
        .iter()
        .enumerate()
        .map(|(id, rule)| RuleSummary {
            index: id + 1,
            name: rule.name,
            pattern: rule.pattern.to_string(),
            replacement: rule.replacement,
        })
        .collect()
}

/// Decode `\uXXXX` and `\UXXXXXXXX` escape sequences.
///
/// Sequences that do not name a valid scalar value (e.g. surrogates) are left
/// as written.
///
/// # Example
/// ```
/// use coptic_translit::decode_unicode_escapes;
///
/// assert_eq!(decode_unicode_escapes(r"\u2C81\u2c83 ok"), "ⲁⲃ ok");
/// ```
pub fn decode_unicode_escapes(text: &str) -> String {
    let re = regex!(r"\\u([0-9a-fA-F]{4})|\\U([0-9a-fA-F]{8})");
    re.replace_all(text, |caps: &regex::Captures| {
        let hex = caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str()).unwrap_or_default();
        u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    })
    .into_owned()
}

fn pipeline() -> Pipeline<'static> {
    Pipeline::new(&COMPILED_RULES, &CODEPOINT_MAP)
}

fn prepare_input(text: &str, options: &Options) -> String {
    if options.decode_escapes { decode_unicode_escapes(text) } else { text.to_string() }
}

fn finish(run: RunResult, options: &Options) -> Transliteration {
    if options.report_unmapped && !run.unmapped.is_empty() {
        let listed: String = run.unmapped.iter().collect();
        tracing::warn!(count = run.unmapped.len(), unmapped = %listed, "unmapped Coptic characters found");
    }

    Transliteration { text: run.text, unmapped: run.unmapped, elapsed: run.metrics.total }
}
