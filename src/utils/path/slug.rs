//! Site slugs and root-relative paths.
//!
//! A slug names a page's location inside the site, e.g. `posts/my-post`
//! or `index`. Its last segment is the page itself; everything before it is
//! the directory the rendered page lives in.

use std::fmt;

/// Slug of the site's root page.
pub const ROOT_SLUG: &str = "index";

/// Page slug without leading or trailing slashes.
///
/// Invariants:
/// - Never starts or ends with `/`
/// - Never empty (the root page is `index`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FullSlug(String);

impl FullSlug {
    /// Create a slug, trimming surrounding whitespace and slashes.
    ///
    /// An empty input names the root page.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let trimmed = raw.as_ref().trim().trim_matches('/');
        if trimmed.is_empty() {
            Self(ROOT_SLUG.to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of directories between the site root and this page.
    ///
    /// Empty segments (from `a//b`) are ignored. The last segment is the page
    /// itself, so a trailing `index` never adds depth.
    pub fn depth(&self) -> usize {
        self.0
            .split('/')
            .filter(|s| !s.is_empty())
            .count()
            .saturating_sub(1)
    }
}

impl fmt::Display for FullSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FullSlug {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Relative prefix leading from the page at `slug` back to the site root.
///
/// Empty at the root, otherwise `depth` repetitions of `../`.
///
/// # Examples
/// ```
/// use grove::utils::path::{FullSlug, path_to_root};
/// assert_eq!(path_to_root(&FullSlug::new("index")), "");
/// assert_eq!(path_to_root(&FullSlug::new("posts/my-post")), "../");
/// assert_eq!(path_to_root(&FullSlug::new("a/b/c")), "../../");
/// ```
pub fn path_to_root(slug: &FullSlug) -> String {
    "../".repeat(slug.depth())
}

/// Join path fragments into one `/`-separated path.
///
/// - Empty and `/` fragments are skipped
/// - Each fragment loses one leading and one trailing slash
/// - Runs of `/` collapse to one
/// - A leading `/` on the first fragment and a trailing `/` on the last survive
///
/// # Examples
/// ```
/// use grove::utils::path::join_segments;
/// assert_eq!(join_segments(&["", "static/logo.png"]), "static/logo.png");
/// assert_eq!(join_segments(&["../../", "static/logo.png"]), "../../static/logo.png");
/// assert_eq!(join_segments(&["/a/", "b/"]), "/a/b/");
/// ```
pub fn join_segments(segments: &[&str]) -> String {
    let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
        return String::new();
    };

    let body = segments
        .iter()
        .filter(|s| !s.is_empty() && **s != "/")
        .map(|s| strip_slashes(s))
        .collect::<Vec<_>>()
        .join("/");

    let mut joined = String::with_capacity(body.len() + 2);
    if first.starts_with('/') {
        joined.push('/');
    }
    joined.push_str(&body);
    if last.ends_with('/') {
        joined.push('/');
    }

    collapse_slashes(&joined)
}

#[inline]
fn strip_slashes(s: &str) -> &str {
    let s = s.strip_prefix('/').unwrap_or(s);
    s.strip_suffix('/').unwrap_or(s)
}

fn collapse_slashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_slash = false;
    for c in s.chars() {
        if c == '/' && prev_slash {
            continue;
        }
        prev_slash = c == '/';
        out.push(c);
    }
    out
}
