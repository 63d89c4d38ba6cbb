//! Link resolution and draft detection.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

use super::extract::{Link, LinkType};
use super::scan::FileIndex;
use crate::utils::path::split_path_fragment;

static FRONTMATTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\s*\n(.*?)\n---").expect("valid frontmatter regex"));
static DRAFT_TRUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)draft:\s*true").expect("valid draft regex"));
static PUBLISH_FALSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)publish:\s*false").expect("valid publish regex"));

/// Outcome of resolving one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Target exists.
    Found(PathBuf),
    /// Target does not exist.
    Broken,
}

/// Resolve a link found in `source` (absolute path).
pub fn resolve(link: &Link, source: &Path, index: &FileIndex) -> Resolution {
    match link.kind {
        LinkType::Wiki => resolve_wiki(&link.target, index),
        LinkType::Markdown => resolve_markdown(&link.target, source, index.root()),
    }
}

/// Lookup keys tried for a wiki target, in order.
///
/// The alias (`|…`) and heading (`#…`) parts are not part of the target.
pub fn wiki_candidates(target: &str) -> Vec<String> {
    let name = target.split('|').next().unwrap_or(target);
    let name = name.split('#').next().unwrap_or(name).trim();
    let slug = name.replace(' ', "-").to_lowercase();
    let encoded = name.replace(' ', "%20");
    vec![
        name.to_string(),
        format!("{name}.md"),
        format!("{slug}.md"),
        slug,
        format!("{encoded}.md"),
        encoded,
    ]
}

fn resolve_wiki(target: &str, index: &FileIndex) -> Resolution {
    wiki_candidates(target)
        .iter()
        .find_map(|key| index.get(key))
        .map_or(Resolution::Broken, |p| Resolution::Found(p.to_path_buf()))
}

/// Filesystem path a markdown link points at.
///
/// A leading `/` resolves from `root`, anything else from the source's
/// directory. The fragment is dropped and percent-escapes are decoded.
pub fn markdown_target_path(target: &str, source: &Path, root: &Path) -> PathBuf {
    let (path, _) = split_path_fragment(target);
    let decoded = percent_decode_str(path).decode_utf8_lossy();
    let joined = match decoded.strip_prefix('/') {
        Some(abs) => root.join(abs),
        None => source.parent().unwrap_or(root).join(&*decoded),
    };
    lexical_normalize(&joined)
}

/// Drop `.` and fold `..` components without touching the filesystem.
fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

fn resolve_markdown(target: &str, source: &Path, root: &Path) -> Resolution {
    let path = markdown_target_path(target, source, root);
    if path.exists() {
        Resolution::Found(path)
    } else {
        Resolution::Broken
    }
}

/// Whether frontmatter text marks a page as unpublished.
pub fn frontmatter_is_draft(content: &str) -> bool {
    FRONTMATTER.captures(content).is_some_and(|caps| {
        let front = caps.get(1).map_or("", |m| m.as_str());
        DRAFT_TRUE.is_match(front) || PUBLISH_FALSE.is_match(front)
    })
}

/// Whether a path sits inside a `draft_dir` directory.
pub fn in_draft_dir(path: &Path, draft_dir: &str) -> bool {
    let draft_dir = draft_dir.trim_matches('/');
    path.parent()
        .is_some_and(|parent| parent.components().any(|c| c.as_os_str() == draft_dir))
}

/// Whether the target file is a draft.
///
/// The draft directory is matched on the path below `root`. Only markdown
/// files are read for frontmatter. Read failures count as not-draft and are
/// returned so the caller can report them.
pub fn is_draft(path: &Path, root: &Path, draft_dir: &str) -> (bool, Option<std::io::Error>) {
    let relative = path.strip_prefix(root).unwrap_or(path);
    if in_draft_dir(relative, draft_dir) {
        return (true, None);
    }
    if !path.is_file() || path.extension().is_none_or(|ext| ext != "md") {
        return (false, None);
    }
    match fs::read_to_string(path) {
        Ok(content) => (frontmatter_is_draft(&content), None),
        Err(err) => (false, Some(err)),
    }
}
