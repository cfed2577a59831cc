//! Error types for the rustplot library.

use std::io;

/// The main error type for rustplot operations.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// Error during IO operations (file writing, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// An axis limit span is zero, so data cannot be normalized.
    #[error("degenerate {axis} axis range: min == max == {value}")]
    DegenerateAxis { axis: &'static str, value: f64 },
    /// Invalid data provided for plotting
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for rustplot operations.
pub type PlotResult<T> = Result<T, PlotError>;
