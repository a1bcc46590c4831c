use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the visualizer
#[derive(Error, Debug)]
pub enum VizError {
    #[error("Failed to read log file '{0}': {1}")]
    LogReadError(PathBuf, #[source] std::io::Error),

    #[error("Log parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("Failed to render chart '{path}': {message}")]
    ChartError { path: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors raised while classifying individual log lines
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid value '{text}' for {field} at line {line_no}: expected a decimal number")]
    InvalidNumber {
        line_no: usize,
        field: &'static str,
        text: String,
    },

    #[error("No replacement policy in cache configuration at line {line_no}: '{text}'")]
    MalformedPolicy { line_no: usize, text: String },
}

/// Type alias for Result with VizError
pub type VizResult<T> = Result<T, VizError>;
