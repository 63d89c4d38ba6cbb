//! Command-line interface module.

mod args;
pub mod check;
pub mod css;
pub mod render;

pub use args::{CheckArgs, Cli, Commands};
