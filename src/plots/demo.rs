//! Built-in demonstration plots: a cosine wave and a cubic on an 80x60 grid.

use crate::error::Result;
use crate::function::Function;
use crate::plots::FunctionPlot;
use crate::transform::Transform;

/// Demo grid width in columns.
pub const DEMO_WIDTH: u32 = 80;

/// Demo grid height in rows.
pub const DEMO_HEIGHT: u32 = 60;

/// Coefficients of the demo cubic `x^3 + 18x^2 + x`.
pub const DEMO_CUBIC: [f32; 4] = [0.0, 1.0, 18.0, 1.0];

/// The "Cosine" demo: `cos(0.15 i)`.
///
/// # Errors
///
/// Never fails for the built-in parameters; the signature matches [`FunctionPlot::build`].
pub fn cosine_demo() -> Result<FunctionPlot> {
    FunctionPlot::new(Function::Cosine)
        .transform(Transform::new(0.15, 0.0))
        .dimensions(DEMO_WIDTH, DEMO_HEIGHT)
        .title("Cosine")
        .build()
}

/// The "Cubic" demo: `x^3 + 18x^2 + x` with `x = 0.375 i - 20`.
///
/// # Errors
///
/// Never fails for the built-in parameters; the signature matches [`FunctionPlot::build`].
pub fn cubic_demo() -> Result<FunctionPlot> {
    FunctionPlot::new(Function::polynomial(&DEMO_CUBIC)?)
        .transform(Transform::new(0.375, 20.0))
        .dimensions(DEMO_WIDTH, DEMO_HEIGHT)
        .title("Cubic")
        .build()
}

/// Both demo plots, in display order.
///
/// # Errors
///
/// Propagates any build error.
pub fn demo_plots() -> Result<Vec<FunctionPlot>> {
    Ok(vec![cosine_demo()?, cubic_demo()?])
}
