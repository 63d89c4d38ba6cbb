//! Shared helpers: HTML building, class merging, pluralization, paths.

pub mod html;
pub mod lang;
pub mod path;
mod plural;

pub use plural::{plural_count, plural_s};
