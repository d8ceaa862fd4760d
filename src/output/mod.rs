//! Output encoders (terminal).

mod terminal;

pub use terminal::{render, TerminalEncoder};
