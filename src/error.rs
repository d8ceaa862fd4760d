//! Error types for trueno-fnplot operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while evaluating, quantizing or rendering a plot.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while writing rendered output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Empty sample buffer provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// Invalid grid dimensions for a plot.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width in columns.
        width: usize,
        /// Height in rows.
        height: usize,
    },

    /// Quantization into zero levels was requested.
    #[error("Number of levels must be at least 1")]
    ZeroLevels,

    /// Polynomial degree above the supported maximum.
    #[error("Polynomial degree {degree} exceeds maximum of {max}")]
    DegreeTooHigh {
        /// Requested degree.
        degree: usize,
        /// Highest supported degree.
        max: usize,
    },

    /// Coefficient count does not match `degree + 1`.
    #[error("Degree {degree} polynomial needs {expected} coefficients, got {actual}")]
    CoefficientMismatch {
        /// Requested degree.
        degree: usize,
        /// Expected number of coefficients.
        expected: usize,
        /// Number of coefficients supplied.
        actual: usize,
    },

    /// Quantization over a range where min equals max.
    #[error("Degenerate range: min and max are both {value}")]
    DegenerateRange {
        /// The single value spanned by the range.
        value: f32,
    },

    /// Quantization over a range where min exceeds max.
    #[error("Inverted range: min {min} is greater than max {max}")]
    InvertedRange {
        /// Lower bound.
        min: f32,
        /// Upper bound.
        max: f32,
    },

    /// Value outside the quantization range.
    #[error("Value {value} is outside range [{min}, {max}]")]
    ValueOutOfRange {
        /// Offending value.
        value: f32,
        /// Lower bound.
        min: f32,
        /// Upper bound.
        max: f32,
    },

    /// Sample that cannot be placed on a grid (NaN or infinite).
    #[error("Non-finite sample {value} at index {index}")]
    NonFiniteSample {
        /// Column index of the sample.
        index: usize,
        /// The sample value.
        value: f32,
    },

    /// Configuration parsing error with line number.
    #[cfg(feature = "config")]
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found or unreadable.
    #[cfg(feature = "config")]
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),
}

impl Error {
    /// Whether this error was caused by a bad argument to a pipeline operation
    /// (as opposed to I/O or configuration failures).
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::EmptyData
            | Self::InvalidDimensions { .. }
            | Self::ZeroLevels
            | Self::DegreeTooHigh { .. }
            | Self::CoefficientMismatch { .. }
            | Self::DegenerateRange { .. }
            | Self::InvertedRange { .. }
            | Self::ValueOutOfRange { .. }
            | Self::NonFiniteSample { .. } => true,
            Self::Io(_) => false,
            #[cfg(feature = "config")]
            Self::ConfigParse { .. } | Self::ConfigNotFound(_) => false,
        }
    }
}
