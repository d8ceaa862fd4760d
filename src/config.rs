//! Plot configuration.
//!
//! Supports YAML configuration with precedence: CLI > file > defaults.

use crate::error::{Error, Result};
use crate::plots::FunctionPlot;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grid and symbol settings shared by every plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Grid width in columns.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Grid height in rows.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Plot symbol.
    #[serde(default = "default_symbol")]
    pub symbol: char,

    /// Optional title printed above the grid.
    #[serde(default)]
    pub title: Option<String>,
}

fn default_version() -> u32 {
    1
}
fn default_width() -> u32 {
    FunctionPlot::DEFAULT_WIDTH
}
fn default_height() -> u32 {
    FunctionPlot::DEFAULT_HEIGHT
}
fn default_symbol() -> char {
    '*'
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            width: default_width(),
            height: default_height(),
            symbol: default_symbol(),
            title: None,
        }
    }
}

impl PlotConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse { line, message: e.to_string() }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Apply the grid settings to a plot builder.
    #[must_use]
    pub fn apply(&self, plot: FunctionPlot) -> FunctionPlot {
        let plot = plot.dimensions(self.width, self.height).symbol(self.symbol);
        match &self.title {
            Some(title) => plot.title(title.clone()),
            None => plot,
        }
    }
}
