//! `grove css`: print the bundled component stylesheet.

use std::io::Write;

use anyhow::{Result, anyhow};

use crate::asset::minify_css;
use crate::component::{bundle_css, registry};
use crate::debug;

/// Write all component stylesheets, optionally minified.
pub fn print_css(minify: bool, out: &mut impl Write) -> Result<()> {
    let components = registry();
    let bundle = bundle_css(&components);
    debug!("css"; "bundled {} component stylesheet(s)", components.iter().filter(|c| c.css().is_some()).count());

    if minify {
        let minified =
            minify_css(&bundle).ok_or_else(|| anyhow!("failed to minify component CSS"))?;
        writeln!(out, "{minified}")?;
    } else {
        write!(out, "{bundle}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_css_plain() {
        let mut out = Vec::new();
        print_css(false, &mut out).unwrap();
        let css = String::from_utf8(out).unwrap();
        assert!(css.starts_with("/* PageTitle */\n"));
        assert!(css.contains("max-width: 200px;"));
        assert!(css.contains("@media (max-width: 600px)"));
    }

    #[test]
    fn test_print_css_minified() {
        let mut out = Vec::new();
        print_css(true, &mut out).unwrap();
        let css = String::from_utf8(out).unwrap();
        assert!(css.contains("max-width:200px"));
        assert!(css.contains("max-width:150px"));
        assert_eq!(css.lines().count(), 1);
    }
}
