//! Function plot implementation.
//!
//! Evaluates a [`Function`] across the columns of a character grid and
//! renders the result as an ASCII scatter plot.

use crate::error::{Error, Result};
use crate::function::Function;
use crate::output::TerminalEncoder;
use crate::transform::Transform;
use std::io::{self, Write};

/// Builder for creating function plots.
#[derive(Debug, Clone)]
pub struct FunctionPlot {
    function: Function,
    transform: Transform,
    symbol: char,
    title: Option<String>,
    width: u32,
    height: u32,
}

impl FunctionPlot {
    /// Default grid width in columns.
    pub const DEFAULT_WIDTH: u32 = 80;

    /// Default grid height in rows.
    pub const DEFAULT_HEIGHT: u32 = 60;

    /// Create a new function plot builder.
    #[must_use]
    pub fn new(function: Function) -> Self {
        Self {
            function,
            transform: Transform::identity(),
            symbol: TerminalEncoder::DEFAULT_SYMBOL,
            title: None,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }

    /// Set the index-to-domain transform.
    #[must_use]
    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Set the plot symbol.
    #[must_use]
    pub fn symbol(mut self, symbol: char) -> Self {
        self.symbol = symbol;
        self
    }

    /// Set a title printed above the grid.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the grid dimensions (columns, rows).
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// The function being plotted.
    #[must_use]
    pub fn function(&self) -> &Function {
        &self.function
    }

    /// Grid width in columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Build and validate the function plot.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the polynomial
    /// coefficients are invalid.
    pub fn build(self) -> Result<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width as usize,
                height: self.height as usize,
            });
        }

        if let Function::Polynomial { coeffs } = &self.function {
            Function::polynomial(coeffs)?;
        }

        Ok(self)
    }

    /// Evaluate the function at every column.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    pub fn samples(&self) -> Result<Vec<f32>> {
        self.function.evaluate(self.width as usize, self.transform)
    }

    fn encoder(&self) -> TerminalEncoder {
        TerminalEncoder::new().symbol(self.symbol).height(self.height as usize)
    }

    /// Render the plot, preceded by its title line when one is set.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation or rendering fails.
    pub fn render(&self) -> Result<String> {
        let samples = self.samples()?;
        let grid = self.encoder().render(&samples)?;

        tracing::debug!(
            function = self.function.name(),
            width = self.width,
            height = self.height,
            "rendered function plot"
        );

        Ok(match &self.title {
            Some(title) => format!("{title}\n{grid}"),
            None => grid,
        })
    }

    /// Render and write to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let output = self.render()?;
        writer.write_all(output.as_bytes())?;
        Ok(())
    }

    /// Write the plot directly to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn print(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_to(&mut lock)?;
        lock.flush()?;
        Ok(())
    }
}

impl batuta_common::display::WithDimensions for FunctionPlot {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use batuta_common::display::WithDimensions;
    use std::f32::consts::PI;

    #[test]
    fn test_function_plot_builder() {
        let plot = FunctionPlot::new(Function::Cosine)
            .transform(Transform::new(PI, 0.0))
            .dimensions(6, 3)
            .symbol('*')
            .build()
            .expect("valid plot");

        assert_eq!(plot.width(), 6);
        assert_eq!(plot.height(), 3);
        assert_eq!(plot.function(), &Function::Cosine);
    }

    #[test]
    fn test_function_plot_zero_dimensions() {
        let result = FunctionPlot::new(Function::Cosine).dimensions(0, 10).build();
        assert!(matches!(result, Err(Error::InvalidDimensions { width: 0, height: 10 })));

        let result = FunctionPlot::new(Function::Cosine).dimensions(10, 0).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_function_plot_invalid_polynomial() {
        let plot = FunctionPlot::new(Function::Polynomial { coeffs: vec![1.0; 5] });
        assert!(matches!(plot.build(), Err(Error::DegreeTooHigh { .. })));
    }

    #[test]
    fn test_function_plot_render() {
        let plot = FunctionPlot::new(Function::Cosine)
            .transform(Transform::new(PI, 0.0))
            .dimensions(6, 3)
            .build()
            .expect("valid plot");

        let output = plot.render().expect("render should succeed");
        assert_eq!(output, "* * * \n      \n * * *\n");
    }

    #[test]
    fn test_function_plot_title() {
        let plot = FunctionPlot::new(Function::polynomial(&[5.0]).expect("valid constant"))
            .dimensions(3, 2)
            .title("Flat")
            .symbol('o')
            .build()
            .expect("valid plot");

        let output = plot.render().expect("render should succeed");
        assert_eq!(output, "Flat\n   \nooo\n");
    }

    #[test]
    fn test_function_plot_write_to() {
        let plot = FunctionPlot::new(Function::polynomial(&[0.0, 1.0]).expect("valid line"))
            .dimensions(2, 2)
            .build()
            .expect("valid plot");

        let mut buf = Vec::new();
        plot.write_to(&mut buf).expect("write should succeed");
        assert_eq!(buf, b" *\n* \n");
    }

    #[test]
    fn test_with_dimensions() {
        let mut plot = FunctionPlot::new(Function::Cosine);
        plot.set_dimensions(40, 12);
        assert_eq!(plot.width(), 40);
        assert_eq!(plot.height(), 12);

        let samples = plot.samples().expect("cosine always evaluates");
        assert_eq!(samples.len(), 40);
    }
}
