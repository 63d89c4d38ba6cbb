//! Stylesheet processing for bundled component CSS.

mod minify;

pub use minify::minify_css;
