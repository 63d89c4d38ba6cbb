//! Theme components.
//!
//! A component turns a page's render context into a markup fragment and may
//! carry a stylesheet. Stylesheets are not part of the rendered fragment; the
//! host pipeline collects them once through [`bundle_css`].
//!
//! ```ignore
//! let title = component::page_title();
//! let html = title.render(&ComponentProps::new(&file_data, &config))?;
//! let css = component::bundle_css(&component::registry());
//! ```

mod page_title;

pub use page_title::{LOGO_ALT, LOGO_ASSET, PageTitle, page_title};

use thiserror::Error;

use crate::config::SiteConfig;
use crate::utils::path::FullSlug;

/// Errors raised while rendering a component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The page has no slug, so nothing can be resolved relative to it.
    #[error("page has no slug")]
    MissingSlug,
}

/// Per-page data handed to components by the render pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileData {
    pub slug: Option<FullSlug>,
}

impl FileData {
    pub fn with_slug(slug: impl Into<FullSlug>) -> Self {
        Self {
            slug: Some(slug.into()),
        }
    }

    /// The page slug, or `MissingSlug` if the pipeline never set one.
    pub fn require_slug(&self) -> Result<&FullSlug, RenderError> {
        self.slug.as_ref().ok_or(RenderError::MissingSlug)
    }
}

/// Render context for one component call.
#[derive(Debug, Clone, Copy)]
pub struct ComponentProps<'a> {
    pub file_data: &'a FileData,
    pub cfg: &'a SiteConfig,
    /// Extra class tokens merged after the component's own classes.
    pub display_class: Option<&'a str>,
}

impl<'a> ComponentProps<'a> {
    pub fn new(file_data: &'a FileData, cfg: &'a SiteConfig) -> Self {
        Self {
            file_data,
            cfg,
            display_class: None,
        }
    }

    pub fn with_display_class(mut self, class: Option<&'a str>) -> Self {
        self.display_class = class;
        self
    }
}

/// A stateless theme component.
pub trait Component: Send + Sync {
    /// Component name, used in stylesheet banners.
    fn name(&self) -> &'static str;

    /// Render the component for one page.
    fn render(&self, props: &ComponentProps<'_>) -> Result<String, RenderError>;

    /// Stylesheet applied globally to this component's selectors.
    fn css(&self) -> Option<&'static str> {
        None
    }
}

/// Every component shipped with the theme, in stylesheet order.
pub fn registry() -> Vec<Box<dyn Component>> {
    vec![Box::new(page_title())]
}

/// Concatenate component stylesheets in the given order.
///
/// Each stylesheet is preceded by a `/* name */` banner. Components without
/// a stylesheet are skipped.
pub fn bundle_css(components: &[Box<dyn Component>]) -> String {
    let mut bundle = String::new();
    for component in components {
        let Some(css) = component.css() else {
            continue;
        };
        if !bundle.is_empty() {
            bundle.push('\n');
        }
        bundle.push_str("/* ");
        bundle.push_str(component.name());
        bundle.push_str(" */\n");
        bundle.push_str(css.trim_start_matches('\n'));
        if !bundle.ends_with('\n') {
            bundle.push('\n');
        }
    }
    bundle
}
