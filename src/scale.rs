//! Quantization of sample values to discrete grid levels.
//!
//! A range `[min, max]` is divided into `levels` equal-width buckets. Every
//! bucket is half-open `[lo, hi)` except the top one, which also includes
//! `max`, so the largest sample always lands on the top row.

use crate::error::{Error, Result};

/// Quantizing scale from a continuous `[min, max]` domain to levels `0..levels`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelScale {
    min: f32,
    max: f32,
    levels: usize,
}

impl LevelScale {
    /// Create a new level scale.
    ///
    /// # Errors
    ///
    /// Returns an error if `levels` is zero, `min == max`, or `min > max`.
    pub fn new(min: f32, max: f32, levels: usize) -> Result<Self> {
        if levels == 0 {
            return Err(Error::ZeroLevels);
        }
        if min == max {
            return Err(Error::DegenerateRange { value: min });
        }
        if min > max || min.is_nan() || max.is_nan() {
            return Err(Error::InvertedRange { min, max });
        }

        Ok(Self { min, max, levels })
    }

    /// Number of levels.
    #[must_use]
    pub const fn levels(&self) -> usize {
        self.levels
    }

    /// The `(min, max)` domain.
    #[must_use]
    pub const fn domain(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    /// Quantize a value, rejecting anything outside the domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if `value` is NaN or outside `[min, max]`.
    pub fn quantize(&self, value: f32) -> Result<usize> {
        if !(value >= self.min && value <= self.max) {
            return Err(Error::ValueOutOfRange { value, min: self.min, max: self.max });
        }
        Ok(self.level_of(value))
    }

    /// Level of an in-domain value.
    ///
    /// Computed in f64: the span of two finite f32 values can exceed
    /// `f32::MAX`, and a span of a few subnormal ulps loses the bucket width
    /// when divided in f32.
    #[inline]
    fn level_of(&self, value: f32) -> usize {
        let min = f64::from(self.min);
        let span = f64::from(self.max) - min;
        let level = ((f64::from(value) - min) * self.levels as f64 / span).floor().max(0.0);
        // value == max floors to `levels`; fold it into the top bucket
        (level as usize).min(self.levels - 1)
    }
}

/// Map `value` within `[min, max]` to one of `levels` discrete levels.
///
/// # Errors
///
/// Returns an error if `levels` is zero, the range is degenerate (`min == max`)
/// or inverted, or `value` lies outside `[min, max]`.
///
/// # Example
///
/// ```
/// use trueno_fnplot::scale::quantize;
///
/// assert_eq!(quantize(-4.0, 10, -10.0, -1.0).unwrap(), 6);
/// assert_eq!(quantize(110.0, 5, 10.0, 110.0).unwrap(), 4);
/// ```
pub fn quantize(value: f32, levels: usize, min: f32, max: f32) -> Result<usize> {
    LevelScale::new(min, max, levels)?.quantize(value)
}

/// Quantize every sample into `height` levels over `[min, max]`.
///
/// The returned level buffer has the same length as `samples`.
///
/// # Errors
///
/// Propagates the first error [`quantize`] would report.
pub fn scale_all(samples: &[f32], height: usize, min: f32, max: f32) -> Result<Vec<usize>> {
    let scale = LevelScale::new(min, max, height)?;
    samples.iter().map(|&v| scale.quantize(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_negative_range() {
        assert_eq!(quantize(-4.0, 10, -10.0, -1.0).expect("in range"), 6);
        assert_eq!(quantize(-1.0, 10, -10.0, -1.0).expect("in range"), 9);
        assert_eq!(quantize(-10.0, 10, -10.0, -1.0).expect("in range"), 0);
    }

    #[test]
    fn test_quantize_positive_range() {
        assert_eq!(quantize(46.0, 5, 10.0, 110.0).expect("in range"), 1);
        assert_eq!(quantize(110.0, 5, 10.0, 110.0).expect("in range"), 4);
        assert_eq!(quantize(10.0, 5, 10.0, 110.0).expect("in range"), 0);
    }

    #[test]
    fn test_quantize_mixed_sign_range() {
        assert_eq!(quantize(10.0, 4, -20.0, 20.0).expect("in range"), 3);
        assert_eq!(quantize(-4.0, 4, -20.0, 20.0).expect("in range"), 1);
        assert_eq!(quantize(20.0, 4, -20.0, 20.0).expect("in range"), 3);
        assert_eq!(quantize(-20.0, 4, -20.0, 20.0).expect("in range"), 0);
    }

    #[test]
    fn test_quantize_single_level() {
        assert_eq!(quantize(0.5, 1, 0.0, 1.0).expect("in range"), 0);
        assert_eq!(quantize(1.0, 1, 0.0, 1.0).expect("in range"), 0);
    }

    #[test]
    fn test_quantize_bucket_boundary_is_half_open() {
        // Buckets of width 5: [0, 5) and [5, 10]
        assert_eq!(quantize(4.999, 2, 0.0, 10.0).expect("in range"), 0);
        assert_eq!(quantize(5.0, 2, 0.0, 10.0).expect("in range"), 1);
    }

    #[test]
    fn test_quantize_degenerate_range() {
        let result = quantize(3.0, 10, 3.0, 3.0);
        assert!(matches!(result, Err(Error::DegenerateRange { .. })));
    }

    #[test]
    fn test_quantize_zero_levels() {
        assert!(matches!(quantize(0.5, 0, 0.0, 1.0), Err(Error::ZeroLevels)));
    }

    #[test]
    fn test_quantize_inverted_range() {
        assert!(matches!(quantize(0.5, 4, 1.0, 0.0), Err(Error::InvertedRange { .. })));
    }

    #[test]
    fn test_quantize_out_of_range() {
        assert!(matches!(quantize(11.0, 4, 0.0, 10.0), Err(Error::ValueOutOfRange { .. })));
        assert!(matches!(quantize(-0.1, 4, 0.0, 10.0), Err(Error::ValueOutOfRange { .. })));
        assert!(quantize(f32::NAN, 4, 0.0, 10.0).is_err());
    }

    #[test]
    fn test_scale_all_positive() {
        let levels = scale_all(&[0.0, 2.0, 4.0, 6.0, 10.0], 2, 0.0, 10.0).expect("valid range");
        assert_eq!(levels, vec![0, 0, 0, 1, 1]);
    }

    #[test]
    fn test_scale_all_negative() {
        let levels =
            scale_all(&[0.0, -2.0, -4.0, -6.0, -10.0], 5, -10.0, 0.0).expect("valid range");
        assert_eq!(levels, vec![4, 4, 3, 2, 0]);
    }

    #[test]
    fn test_scale_all_mixed_sign() {
        let samples = [0.0, 2.0, 4.0, -6.0, -10.0, 0.0, -8.0];
        let levels = scale_all(&samples, 10, -10.0, 10.0).expect("valid range");
        assert_eq!(levels.len(), samples.len());
        assert_eq!(&levels[..5], &[5, 6, 7, 2, 0]);
    }

    #[test]
    fn test_scale_all_propagates_degenerate() {
        assert!(scale_all(&[1.0, 1.0], 4, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_level_scale_accessors() {
        let scale = LevelScale::new(0.0, 10.0, 5).expect("valid scale");
        assert_eq!(scale.domain(), (0.0, 10.0));
        assert_eq!(scale.levels(), 5);
        assert_eq!(scale.quantize(3.0).expect("in range"), 1);
        assert_eq!(scale.quantize(10.0).expect("in range"), 4);
    }

    #[test]
    fn test_quantize_span_wider_than_f32_max() {
        assert_eq!(quantize(3e38, 60, -3e38, 3e38).expect("in range"), 59);
        assert_eq!(quantize(-3e38, 60, -3e38, 3e38).expect("in range"), 0);
        assert_eq!(quantize(f32::MAX, 4, f32::MIN, f32::MAX).expect("in range"), 3);
        assert_eq!(quantize(f32::MIN, 4, f32::MIN, f32::MAX).expect("in range"), 0);
    }

    #[test]
    fn test_quantize_subnormal_span() {
        let max = f32::from_bits(90);
        assert_eq!(quantize(max, 60, 0.0, max).expect("in range"), 59);
        assert_eq!(quantize(0.0, 60, 0.0, max).expect("in range"), 0);
        assert_eq!(quantize(f32::from_bits(45), 60, 0.0, max).expect("in range"), 30);
    }

    #[test]
    fn test_scale_all_extreme_range_uses_every_end() {
        let levels = scale_all(&[-3e38, 3e38], 4, -3e38, 3e38).expect("valid range");
        assert_eq!(levels, vec![0, 3]);
    }
}
