//! High-level plot types.
//!
//! Provides ready-to-use function plots with builder APIs.

pub mod demo;
mod function_plot;

pub use demo::demo_plots;
pub use function_plot::FunctionPlot;
