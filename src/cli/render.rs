//! `grove render`: print page title markup for slugs.

use std::io::Write;

use anyhow::{Context, Result};

use crate::component::{Component, ComponentProps, FileData, page_title};
use crate::config::SiteConfig;
use crate::debug;
use crate::utils::path::FullSlug;

/// Render the page title once per slug, one fragment per line.
pub fn render_slugs(
    slugs: &[String],
    display_class: Option<&str>,
    config: &SiteConfig,
    out: &mut impl Write,
) -> Result<()> {
    let component = page_title();
    for raw in slugs {
        let data = FileData::with_slug(FullSlug::new(raw));
        let props = ComponentProps::new(&data, config).with_display_class(display_class);
        let html = component
            .render(&props)
            .with_context(|| format!("failed to render page title for `{raw}`"))?;
        debug!("render"; "{} -> {}", raw, html);
        writeln!(out, "{html}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_slugs() {
        let mut out = Vec::new();
        render_slugs(
            &["index".into(), "posts/my-post".into()],
            Some("sidebar"),
            &SiteConfig::default(),
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            [
                r#"<div class="page-title sidebar"><a href=""><img src="static/logo.png" alt="TRACE Grove"></a></div>"#,
                r#"<div class="page-title sidebar"><a href="../"><img src="../static/logo.png" alt="TRACE Grove"></a></div>"#,
            ]
        );
    }
}
