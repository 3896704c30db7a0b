use std::io;
use thiserror::Error;

/// Errors from the stream layer. The engine itself is total and never fails.
#[derive(Error, Debug)]
pub enum TranslitError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("line {line} is not valid UTF-8")]
    InvalidUtf8 { line: usize },

    #[error("failed to serialize the result to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
