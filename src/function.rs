//! Function evaluators that fill sample buffers.
//!
//! Each evaluator maps column indices through a [`Transform`] and evaluates
//! the function there, returning a freshly allocated buffer of exactly the
//! requested length.

use crate::error::{Error, Result};
use crate::transform::Transform;

/// Highest supported polynomial degree (cubic).
pub const MAX_DEGREE: usize = 3;

/// Evaluate `cos(i * scale - shift)` for every column `i` in `0..length`.
///
/// # Example
///
/// ```
/// use trueno_fnplot::function::evaluate_cosine;
///
/// let samples = evaluate_cosine(4, 0.0, 0.0);
/// assert_eq!(samples, vec![1.0; 4]);
/// ```
#[must_use]
pub fn evaluate_cosine(length: usize, scale: f32, shift: f32) -> Vec<f32> {
    let transform = Transform::new(scale, shift);
    (0..length).map(|i| transform.map_column(i).cos()).collect()
}

/// Evaluate the polynomial `sum(coeffs[j] * x^j)` for every column in `0..length`.
///
/// Coefficients are lowest degree first and must number exactly `degree + 1`.
///
/// # Errors
///
/// Returns an error if `degree` exceeds [`MAX_DEGREE`] or the coefficient
/// count does not match the degree.
pub fn evaluate_polynomial(
    coeffs: &[f32],
    degree: usize,
    length: usize,
    scale: f32,
    shift: f32,
) -> Result<Vec<f32>> {
    check_degree(coeffs, degree)?;

    let transform = Transform::new(scale, shift);
    Ok((0..length).map(|i| polynomial_at(coeffs, transform.map_column(i))).collect())
}

fn check_degree(coeffs: &[f32], degree: usize) -> Result<()> {
    if degree > MAX_DEGREE {
        return Err(Error::DegreeTooHigh { degree, max: MAX_DEGREE });
    }
    if coeffs.len() != degree + 1 {
        return Err(Error::CoefficientMismatch {
            degree,
            expected: degree + 1,
            actual: coeffs.len(),
        });
    }
    Ok(())
}

/// `x` raised to `exponent` by repeated multiplication; `x^0` is 1 even for `x == 0`.
#[inline]
fn power(x: f32, exponent: usize) -> f32 {
    (0..exponent).fold(1.0, |acc, _| acc * x)
}

#[inline]
fn polynomial_at(coeffs: &[f32], x: f32) -> f32 {
    coeffs.iter().enumerate().map(|(j, &c)| c * power(x, j)).sum()
}

/// A plottable one-dimensional function.
#[derive(Debug, Clone, PartialEq)]
pub enum Function {
    /// `cos(x)`.
    Cosine,
    /// Polynomial with coefficients lowest degree first (at most 4).
    Polynomial {
        /// Coefficients `c0..c_degree`.
        coeffs: Vec<f32>,
    },
}

impl Function {
    /// Create a validated polynomial; the degree is `coeffs.len() - 1`.
    ///
    /// # Errors
    ///
    /// Returns an error if no coefficients are given or there are more than
    /// `MAX_DEGREE + 1` of them.
    pub fn polynomial(coeffs: &[f32]) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(Error::EmptyData);
        }
        check_degree(coeffs, coeffs.len() - 1)?;
        Ok(Self::Polynomial { coeffs: coeffs.to_vec() })
    }

    /// Polynomial degree, or `None` for cosine.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        match self {
            Self::Cosine => None,
            Self::Polynomial { coeffs } => Some(coeffs.len().saturating_sub(1)),
        }
    }

    /// Short human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cosine => "cosine",
            Self::Polynomial { coeffs } => match coeffs.len() {
                0 | 1 => "constant",
                2 => "linear",
                3 => "quadratic",
                _ => "cubic",
            },
        }
    }

    /// Evaluate the function at `length` columns mapped through `transform`.
    ///
    /// # Errors
    ///
    /// Returns an error if a polynomial's coefficients are invalid.
    pub fn evaluate(&self, length: usize, transform: Transform) -> Result<Vec<f32>> {
        let samples = match self {
            Self::Cosine => evaluate_cosine(length, transform.scale, transform.shift),
            Self::Polynomial { coeffs } => {
                if coeffs.is_empty() {
                    return Err(Error::EmptyData);
                }
                evaluate_polynomial(
                    coeffs,
                    coeffs.len() - 1,
                    length,
                    transform.scale,
                    transform.shift,
                )?
            }
        };

        tracing::trace!(function = self.name(), length, ?transform, "evaluated samples");
        Ok(samples)
    }
}
