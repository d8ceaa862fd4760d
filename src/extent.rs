//! Range finding over sample buffers.
//!
//! Uses trueno for SIMD-accelerated min/max reductions.

use crate::error::{Error, Result};
use trueno::Vector;

/// Closed value range `[min, max]` spanned by a sample buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Smallest sample.
    pub min: f32,
    /// Largest sample.
    pub max: f32,
}

impl Extent {
    /// Width of the range (`max - min`).
    #[must_use]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Whether every sample had the same value.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Whether `value` lies within `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Find the minimum and maximum of a sample buffer.
///
/// # Errors
///
/// Returns [`Error::EmptyData`] for an empty buffer and
/// [`Error::NonFiniteSample`] if any sample is NaN or infinite.
///
/// # Example
///
/// ```
/// use trueno_fnplot::extent::find_range;
///
/// let extent = find_range(&[1.0, -1.0, 0.0, 1.0, -1.0]).unwrap();
/// assert_eq!((extent.max, extent.min), (1.0, -1.0));
/// ```
pub fn find_range(samples: &[f32]) -> Result<Extent> {
    let first = *samples.first().ok_or(Error::EmptyData)?;

    if let Some((index, &value)) = samples.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(Error::NonFiniteSample { index, value });
    }

    // All samples are finite, so the SIMD reduction agrees with a scalar scan.
    let vec = Vector::from_vec(samples.to_vec());
    let min = vec.min().unwrap_or(first);
    let max = vec.max().unwrap_or(first);

    let extent = Extent { min, max };
    tracing::debug!(len = samples.len(), min, max, "sample extent");
    Ok(extent)
}
