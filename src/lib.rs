//! # Trueno-Fnplot
//!
//! ASCII scatter plots of sampled one-dimensional functions for the terminal.
//!
//! A plot is produced by a short pipeline: column indices are mapped into a
//! continuous domain by an affine [`Transform`](transform::Transform), the
//! function (cosine or a polynomial up to degree 3) is evaluated there, the
//! sample extent is found with trueno's SIMD reductions, every sample is
//! quantized to a row, and the rows are printed top to bottom.
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_fnplot::prelude::*;
//!
//! let plot = FunctionPlot::new(Function::Cosine)
//!     .transform(Transform::new(0.15, 0.0))
//!     .dimensions(80, 24)
//!     .build()?;
//!
//! let text = plot.render()?;
//! assert_eq!(text.lines().count(), 24);
//! # Ok::<(), trueno_fnplot::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `config`: YAML plot configuration
//! - `cli`: the `fnplot` binary (enabled by default)

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Pipeline Modules
// ============================================================================

/// Index-to-domain affine transform.
pub mod transform;

/// Cosine and polynomial evaluators.
pub mod function;

/// Sample range finding.
pub mod extent;

/// Quantization of samples into grid levels.
pub mod scale;

/// Output encoders (terminal).
pub mod output;

/// High-level plot types.
pub mod plots;

/// YAML plot configuration.
#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-fnplot operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use trueno_fnplot::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::extent::{find_range, Extent};
    pub use crate::function::{evaluate_cosine, evaluate_polynomial, Function, MAX_DEGREE};
    pub use crate::output::{render, TerminalEncoder};
    pub use crate::plots::FunctionPlot;
    pub use crate::scale::{quantize, scale_all, LevelScale};
    pub use crate::transform::{map_index, Transform};
    pub use batuta_common::display::WithDimensions;
}

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
