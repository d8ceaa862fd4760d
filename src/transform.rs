//! Affine mapping from discrete sample indices to the continuous domain.

/// Map a sample index to a continuous x value: `index * scale - shift`.
///
/// # Example
///
/// ```
/// use trueno_fnplot::transform::map_index;
///
/// assert_eq!(map_index(5, 10.0, 10.0), 40.0);
/// assert_eq!(map_index(-1, 1.0, -2.0), 1.0);
/// ```
#[inline]
#[must_use]
pub fn map_index(index: i32, scale: f32, shift: f32) -> f32 {
    affine(index as f32, scale, shift)
}

#[inline]
fn affine(position: f32, scale: f32, shift: f32) -> f32 {
    position * scale - shift
}

/// Transform parameters (scale, shift) applied to every column index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Domain distance between adjacent columns.
    pub scale: f32,
    /// Offset subtracted after scaling.
    pub shift: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Create a transform with the given scale and shift.
    #[must_use]
    pub const fn new(scale: f32, shift: f32) -> Self {
        Self { scale, shift }
    }

    /// The identity transform: column `i` maps to `x = i`.
    #[must_use]
    pub const fn identity() -> Self {
        Self { scale: 1.0, shift: 0.0 }
    }

    /// Map a column index into the continuous domain.
    #[inline]
    #[must_use]
    pub fn map(&self, index: i32) -> f32 {
        map_index(index, self.scale, self.shift)
    }

    /// Map a buffer position into the continuous domain.
    #[inline]
    pub(crate) fn map_column(&self, column: usize) -> f32 {
        affine(column as f32, self.scale, self.shift)
    }
}
