//! Line-oriented stream processing.
//!
//! Each input line is transliterated on its own and written as one output
//! line. Lines are decoded as UTF-8 here; a line that fails to decode is
//! rejected before it reaches the engine.

use crate::api::{Options, Transliteration, transliterate_with};
use crate::error::TranslitError;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;
use std::io::{BufRead, Write};

/// How each output line is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The transliterated text only.
    #[default]
    Text,
    /// One JSON object per line: `{"text": ..., "unmapped": [...]}`.
    JsonLines,
}

/// Totals gathered over a stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreamSummary {
    /// Lines read and transliterated.
    pub lines: usize,
    /// Lines whose output still holds Coptic codepoints.
    pub lines_with_unmapped: usize,
    /// Residual Coptic codepoints across all lines.
    pub unmapped_total: usize,
}

impl StreamSummary {
    fn record(&mut self, result: &Transliteration) {
        self.lines += 1;
        if result.has_unmapped() {
            self.lines_with_unmapped += 1;
            self.unmapped_total += result.unmapped.len();
        }
    }
}

/// Transliterate a stream line by line and write the output to `writer`.
///
/// Lines are read with `read_until`, so memory use stays bounded by the
/// longest line. A trailing `\n` or `\r\n` is stripped before the line reaches
/// the engine.
///
/// # Errors
///
/// Returns [`TranslitError::InvalidUtf8`] for the first line that is not valid
/// UTF-8, and [`TranslitError::Io`] if reading or writing fails.
pub fn transliterate_reader<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    options: &Options,
    format: OutputFormat,
) -> Result<StreamSummary, TranslitError> {
    let mut summary = StreamSummary::default();
    let mut buffer = Vec::new();
    let mut line_number = 0;

    loop {
        if options.max_lines.is_some_and(|max| line_number >= max) {
            break;
        }
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        line_number += 1;

        let line = decode_line(&buffer, line_number)?;
        let result = transliterate_with(line, options);
        write_result(&mut writer, &result, format)?;
        summary.record(&result);
    }

    writer.flush()?;
    tracing::debug!(lines = summary.lines, unmapped = summary.unmapped_total, "stream finished");
    Ok(summary)
}

/// Transliterate a stream line by line in parallel.
///
/// The whole input is loaded into memory and the lines are processed
/// concurrently with rayon. Output order matches input order.
///
/// # Errors
///
/// Same as [`transliterate_reader`]. Every line is decoded before any output
/// is written, so a decoding error leaves `writer` untouched.
pub fn transliterate_reader_parallel<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    options: &Options,
    format: OutputFormat,
) -> Result<StreamSummary, TranslitError> {
    let mut raw: Vec<Vec<u8>> = reader.split(b'\n').collect::<Result<_, _>>()?;
    if let Some(max) = options.max_lines {
        raw.truncate(max);
    }

    let lines: Vec<&str> = raw
        .iter()
        .enumerate()
        .map(|(idx, bytes)| decode_line(bytes, idx + 1))
        .collect::<Result<_, _>>()?;

    let results: Vec<Transliteration> = lines.par_iter().map(|line| transliterate_with(line, options)).collect();

    let mut summary = StreamSummary::default();
    for result in &results {
        write_result(&mut writer, result, format)?;
        summary.record(result);
    }

    writer.flush()?;
    tracing::debug!(lines = summary.lines, unmapped = summary.unmapped_total, "parallel stream finished");
    Ok(summary)
}

fn decode_line(bytes: &[u8], line: usize) -> Result<&str, TranslitError> {
    let text = std::str::from_utf8(bytes).map_err(|_| TranslitError::InvalidUtf8 { line })?;
    let text = text.strip_suffix('\n').unwrap_or(text);
    Ok(text.strip_suffix('\r').unwrap_or(text))
}

fn write_result<W: Write>(writer: &mut W, result: &Transliteration, format: OutputFormat) -> Result<(), TranslitError> {
    match format {
        OutputFormat::Text => writeln!(writer, "{}", result.text)?,
        OutputFormat::JsonLines => writeln!(writer, "{}", serde_json::to_string(result)?)?,
    }
    Ok(())
}
