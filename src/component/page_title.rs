//! Site logo linking back to the root page.

use super::{Component, ComponentProps, RenderError};
use crate::utils::html::Element;
use crate::utils::lang::class_names;
use crate::utils::path::{join_segments, path_to_root};

/// Logo asset, relative to the site root.
pub const LOGO_ASSET: &str = "static/logo.png";

/// Alternative text of the logo image.
pub const LOGO_ALT: &str = "TRACE Grove";

const BASE_CLASS: &str = "page-title";

/// Page title: `div.page-title > a[href=root] > img[src=root/static/logo.png]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageTitle;

/// Construct the page title component.
pub const fn page_title() -> PageTitle {
    PageTitle
}

impl PageTitle {
    pub const CSS: &'static str = r#"
.page-title {
  margin: 0;
}

.page-title a {
  display: block;
  text-decoration: none;
}

.page-title img {
  max-width: 200px;
  height: auto;
  display: block;
  transition: opacity 0.2s ease;
}

.page-title img:hover {
  opacity: 0.8;
}

@media (max-width: 600px) {
  .page-title img {
    max-width: 150px;
  }
}
"#;
}

impl Component for PageTitle {
    fn name(&self) -> &'static str {
        "PageTitle"
    }

    fn render(&self, props: &ComponentProps<'_>) -> Result<String, RenderError> {
        let slug = props.file_data.require_slug()?;
        let base_dir = path_to_root(slug);
        let logo_path = join_segments(&[&base_dir, LOGO_ASSET]);
        let class = class_names(&[Some(BASE_CLASS), props.display_class]);

        let image = Element::new("img")
            .attr("src", logo_path)
            .attr("alt", LOGO_ALT);
        let anchor = Element::new("a").attr("href", base_dir).child(image);

        Ok(Element::new("div")
            .attr("class", class)
            .child(anchor)
            .render())
    }

    fn css(&self) -> Option<&'static str> {
        Some(Self::CSS)
    }
}
