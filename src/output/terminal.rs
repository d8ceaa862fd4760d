//! Terminal output encoder (ASCII scatter grid).
//!
//! Renders sample buffers as a `height`-row character grid with one column
//! per sample. Each column holds exactly one symbol, placed on the row its
//! sample quantizes to; higher values appear nearer the top.

use crate::error::{Error, Result};
use crate::extent::find_range;
use crate::scale::scale_all;
use std::io::{self, Write};

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    symbol: char,
    blank: char,
    height: usize,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// Default plot symbol.
    pub const DEFAULT_SYMBOL: char = '*';

    /// Default grid height in rows.
    pub const DEFAULT_HEIGHT: usize = 60;

    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self { symbol: Self::DEFAULT_SYMBOL, blank: ' ', height: Self::DEFAULT_HEIGHT }
    }

    /// Set the character drawn for each sample.
    #[must_use]
    pub fn symbol(mut self, symbol: char) -> Self {
        self.symbol = symbol;
        self
    }

    /// Set the character used for empty cells.
    #[must_use]
    pub fn blank(mut self, blank: char) -> Self {
        self.blank = blank;
        self
    }

    /// Set the number of rows (quantization levels).
    #[must_use]
    pub fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Compute the level of every sample.
    ///
    /// A flat signal (all samples equal) places every sample on level 0.
    ///
    /// # Errors
    ///
    /// Returns an error if `samples` is empty or contains non-finite values,
    /// or if the height is zero.
    pub fn levels(&self, samples: &[f32]) -> Result<Vec<usize>> {
        if self.height == 0 {
            return Err(Error::InvalidDimensions { width: samples.len(), height: 0 });
        }

        let extent = find_range(samples)?;
        if extent.is_degenerate() {
            tracing::debug!(value = extent.min, "flat signal, plotting on bottom row");
            return Ok(vec![0; samples.len()]);
        }

        scale_all(samples, self.height, extent.min, extent.max)
    }

    /// Render a pre-computed level buffer, top row first.
    ///
    /// Levels at or above the configured height never match a row and leave
    /// their column blank.
    #[must_use]
    pub fn encode_levels(&self, levels: &[usize]) -> String {
        let mut output = String::with_capacity((levels.len() + 1) * self.height);

        for row in (0..self.height).rev() {
            for &level in levels {
                output.push(if level == row { self.symbol } else { self.blank });
            }
            output.push('\n');
        }

        output
    }

    /// Render a sample buffer to a string of `height` lines, each one
    /// character per sample.
    ///
    /// # Errors
    ///
    /// Returns an error if the level computation fails; nothing is rendered
    /// in that case.
    pub fn render(&self, samples: &[f32]) -> Result<String> {
        let levels = self.levels(samples)?;
        tracing::debug!(width = samples.len(), height = self.height, "rendering grid");
        Ok(self.encode_levels(&levels))
    }

    /// Render and write to `writer`. The whole grid is produced before the
    /// first byte is written.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W, samples: &[f32]) -> Result<()> {
        let output = self.render(samples)?;
        writer.write_all(output.as_bytes())?;
        Ok(())
    }

    /// Write output directly to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn print(&self, samples: &[f32]) -> Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_to(&mut lock, samples)?;
        lock.flush()?;
        Ok(())
    }
}

/// Render `samples` as a `height`-row scatter grid drawn with `symbol`.
///
/// # Errors
///
/// Returns an error for empty or non-finite samples, or a zero height.
///
/// # Example
///
/// ```
/// use trueno_fnplot::output::render;
///
/// let grid = render(&[0.0, 1.0, 2.0], 'o', 3).unwrap();
/// assert_eq!(grid, "  o\n o \no  \n");
/// ```
pub fn render(samples: &[f32], symbol: char, height: usize) -> Result<String> {
    TerminalEncoder::new().symbol(symbol).height(height).render(samples)
}
