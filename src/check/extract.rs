//! Link extraction from markdown sources.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::utils::path::LinkKind;

/// `[[target]]`
static WIKI_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("valid wiki link regex"));

/// `[text](target)`
static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]+)\)").expect("valid markdown link regex"));

/// Link syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Wiki,
    Markdown,
}

/// An internal link found in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    #[serde(rename = "type")]
    pub kind: LinkType,
    /// Link text; for wiki links this is the full bracket content.
    pub text: String,
    /// Raw target as written.
    pub target: String,
    /// 1-based line of the link's opening bracket.
    pub line: usize,
}

impl Link {
    /// The exact source text of this link.
    pub fn source_text(&self) -> String {
        match self.kind {
            LinkType::Wiki => format!("[[{}]]", self.target),
            LinkType::Markdown => format!("[{}]({})", self.text, self.target),
        }
    }

    /// Source text of this link pointing at `target` instead.
    ///
    /// A wiki link keeps its `|alias` or `#heading` suffix.
    pub fn retargeted(&self, target: &str) -> String {
        match self.kind {
            LinkType::Wiki => {
                let suffix = self
                    .target
                    .find(['|', '#'])
                    .map_or("", |idx| &self.target[idx..]);
                format!("[[{target}{suffix}]]")
            }
            LinkType::Markdown => format!("[{}]({})", self.text, target),
        }
    }
}

/// Extract wiki and markdown links from `content`, in source order.
///
/// External links (`scheme:`) and pure fragments (`#…`) are skipped.
pub fn extract_links(content: &str) -> Vec<Link> {
    let lines = LineIndex::new(content);
    let mut found: Vec<(usize, Link)> = Vec::new();

    for caps in WIKI_LINK.captures_iter(content) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        found.push((
            whole.start(),
            Link {
                kind: LinkType::Wiki,
                text: inner.as_str().to_string(),
                target: inner.as_str().to_string(),
                line: lines.line_of(whole.start()),
            },
        ));
    }

    for caps in MARKDOWN_LINK.captures_iter(content) {
        let (Some(whole), Some(text), Some(target)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        if !LinkKind::parse(target.as_str()).is_internal() {
            continue;
        }
        found.push((
            whole.start(),
            Link {
                kind: LinkType::Markdown,
                text: text.as_str().to_string(),
                target: target.as_str().to_string(),
                line: lines.line_of(whole.start()),
            },
        ));
    }

    found.sort_by_key(|(start, _)| *start);
    found.into_iter().map(|(_, link)| link).collect()
}

/// Byte offsets of line starts, for offset -> line lookups.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(content: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { starts }
    }

    /// 1-based line containing byte `offset`.
    fn line_of(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(idx) => idx + 1,
            Err(idx) => idx,
        }
    }
}
