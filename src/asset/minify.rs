//! CSS minification via lightningcss.

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

/// Minify CSS source code.
///
/// Returns `None` if the stylesheet fails to parse or print.
pub fn minify_css(source: &str) -> Option<String> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default()).ok()?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .ok()?;
    Some(result.code)
}
