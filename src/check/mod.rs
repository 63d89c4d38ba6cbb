//! Link health checking for the garden's markdown sources.
//!
//! # Pipeline
//!
//! ```text
//! scan ──► extract ──► resolve ──► report ──► (fix ──► extract ──► resolve)
//! ```
//!
//! - [`scan`]: find `*.md` files and index them by path, name, and stem
//! - [`extract`]: pull wiki (`[[x]]`) and markdown (`[t](x)`) links
//! - [`resolve`]: decide whether each link resolves, and whether it hits a draft
//! - [`suggest`]: fuzzy-match broken targets against indexed names
//! - [`report`]: summary as Markdown, JSON, or terminal output
//! - [`fix`]: rewrite broken links to a chosen suggestion

pub mod extract;
pub mod fix;
pub mod report;
pub mod resolve;
pub mod scan;
pub mod suggest;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use thiserror::Error;

use crate::config::CheckSection;
use crate::logger::ProgressLine;
use crate::utils::plural_count;
use crate::{debug, log};

use extract::{Link, LinkType, extract_links};
use fix::{Choice, FixMode, apply_fix, prompt_choice};
use report::{BrokenLink, DraftLink, HealthReport};
use resolve::{Resolution, is_draft, resolve};
use scan::FileIndex;
use suggest::Suggester;

/// Errors that stop a check run.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("garden root `{0}` is not a directory")]
    Root(PathBuf),

    #[error("failed to read answer")]
    Prompt(#[from] io::Error),
}

/// Tunables for one run.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub cutoff: f64,
    pub max_suggestions: usize,
    pub draft_dir: String,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self::from(&CheckSection::default())
    }
}

impl From<&CheckSection> for CheckOptions {
    fn from(section: &CheckSection) -> Self {
        Self {
            cutoff: section.cutoff,
            max_suggestions: section.max_suggestions,
            draft_dir: section.draft_dir.clone(),
        }
    }
}

/// Links extracted from one source file.
#[derive(Debug)]
struct SourceLinks {
    path: PathBuf,
    relative: String,
    links: Vec<Link>,
}

/// Scanned garden plus the links found in it.
pub struct LinkChecker {
    index: FileIndex,
    sources: Vec<SourceLinks>,
    options: CheckOptions,
}

impl LinkChecker {
    /// Scan `root` and extract links from every markdown file.
    pub fn new(root: &Path, options: CheckOptions) -> Result<Self, CheckError> {
        if !root.is_dir() {
            return Err(CheckError::Root(root.to_path_buf()));
        }

        let index = FileIndex::scan(root);
        log!("check"; "found {}", plural_count(index.file_count(), "markdown file"));

        let mut checker = Self {
            index,
            sources: Vec::new(),
            options,
        };
        checker.extract();
        Ok(checker)
    }

    pub fn index(&self) -> &FileIndex {
        &self.index
    }

    /// Total internal links found.
    pub fn link_count(&self) -> usize {
        self.sources.iter().map(|s| s.links.len()).sum()
    }

    /// (Re)read every file and collect its links.
    pub fn extract(&mut self) {
        let files = self.index.files();
        let progress = ProgressLine::new("check", &[("files", files.len())]);

        let sources: Vec<SourceLinks> = files
            .par_iter()
            .filter_map(|path| {
                let result = fs::read_to_string(path);
                progress.inc("files");
                match result {
                    Ok(content) => Some(SourceLinks {
                        path: path.clone(),
                        relative: self.index.relative(path),
                        links: extract_links(&content),
                    }),
                    Err(err) => {
                        log!("check"; "error reading {}: {}", path.display(), err);
                        None
                    }
                }
            })
            .filter(|s| !s.links.is_empty())
            .collect();
        progress.finish();

        self.sources = sources;
        log!("check"; "found {}", plural_count(self.link_count(), "internal link"));
    }

    /// Resolve every link and build the report.
    pub fn check(&self) -> HealthReport {
        let suggester = Suggester::new(
            &self.index,
            self.options.cutoff,
            self.options.max_suggestions,
        );

        let per_file: Vec<(Vec<BrokenLink>, Vec<DraftLink>)> = self
            .sources
            .par_iter()
            .map(|source| self.check_source(source, &suggester))
            .collect();

        let mut report = HealthReport {
            root: self.index.root().display().to_string(),
            total_files: self.index.file_count(),
            total_links: self.link_count(),
            ..HealthReport::default()
        };
        for (broken, drafts) in per_file {
            report.broken.extend(broken);
            report.drafts.extend(drafts);
        }
        report
            .broken
            .sort_by(|a, b| (&a.source, a.link.line).cmp(&(&b.source, b.link.line)));
        report
            .drafts
            .sort_by(|a, b| (&a.source, a.link.line).cmp(&(&b.source, b.link.line)));

        log!("check"; "{} broken, {} to draft content",
            plural_count(report.broken.len(), "link"),
            plural_count(report.drafts.len(), "link"));
        report
    }

    fn check_source(
        &self,
        source: &SourceLinks,
        suggester: &Suggester,
    ) -> (Vec<BrokenLink>, Vec<DraftLink>) {
        let mut broken = Vec::new();
        let mut drafts = Vec::new();

        for link in &source.links {
            match resolve(link, &source.path, &self.index) {
                Resolution::Broken => {
                    debug!("check"; "{}:{} broken `{}`", source.relative, link.line, link.target);
                    broken.push(BrokenLink {
                        source: source.relative.clone(),
                        link: link.clone(),
                        suggestions: self.suggestions_for(link, suggester),
                    });
                }
                Resolution::Found(target) => {
                    let (draft, err) =
                        is_draft(&target, self.index.root(), &self.options.draft_dir);
                    if let Some(err) = err {
                        log!("check"; "error checking draft status for {}: {}", target.display(), err);
                    }
                    if draft {
                        drafts.push(DraftLink {
                            source: source.relative.clone(),
                            link: link.clone(),
                            target_file: self.index.relative(&target),
                        });
                    }
                }
            }
        }
        (broken, drafts)
    }

    /// Replacement targets for a broken link.
    ///
    /// Wiki links are matched on their whole target and suggest index keys.
    /// Markdown links are matched on the file name and suggest root-absolute
    /// paths, which resolve no matter where the source file lives.
    fn suggestions_for(&self, link: &Link, suggester: &Suggester) -> Vec<String> {
        match link.kind {
            LinkType::Wiki => suggester
                .suggest(&link.target)
                .into_iter()
                .map(str::to_string)
                .collect(),
            LinkType::Markdown => {
                let path = resolve::markdown_target_path(
                    &link.target,
                    &self.index.root().join("_"),
                    self.index.root(),
                );
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| link.target.clone());

                let mut out: Vec<String> = Vec::new();
                for key in suggester.suggest(&name) {
                    let Some(file) = self.index.get(key) else {
                        continue;
                    };
                    let target = format!("/{}", self.index.relative(file));
                    if !out.contains(&target) {
                        out.push(target);
                    }
                }
                out
            }
        }
    }

    /// Apply fixes for broken links that have suggestions.
    ///
    /// Returns the number of links rewritten. Files are not re-read here;
    /// call [`extract`](Self::extract) before checking again.
    pub fn fix(
        &self,
        report: &HealthReport,
        mode: FixMode,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<usize, CheckError> {
        if report.broken.is_empty() {
            log!("fix"; "no broken links to fix");
            return Ok(0);
        }

        let mut applied = 0;
        for broken in &report.broken {
            let Some(best) = broken.suggestions.first() else {
                log!("fix"; "no suggestions for `{}` in {}", broken.link.target, broken.source);
                continue;
            };

            let target = match mode {
                FixMode::Automatic => best.clone(),
                FixMode::Interactive => match prompt_choice(broken, input, output)? {
                    Choice::Apply(target) => target,
                    Choice::Skip => continue,
                    Choice::Quit => break,
                },
            };

            let file = self.index.root().join(&broken.source);
            match apply_fix(&file, &broken.link, &target) {
                Ok(true) => {
                    applied += 1;
                    log!("fix"; "fixed `{}` -> `{}` in {}", broken.link.target, target, broken.source);
                }
                Ok(false) => {
                    log!("fix"; "failed to fix `{}` in {}: link not found", broken.link.target, broken.source);
                }
                Err(err) => {
                    log!("error"; "failed to fix `{}` in {}: {}", broken.link.target, broken.source, err);
                }
            }
        }

        log!("fix"; "applied {}", plural_count(applied, "fix"));
        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn garden() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("notes")).unwrap();
        fs::create_dir_all(root.join("drafts")).unwrap();
        fs::write(
            root.join("index.md"),
            "# Home\n[[Garden Ideas]]\n[[Gardn Ideas]]\n[reading](notes/reading-list.md)\n[site](https://example.com)\n",
        )
        .unwrap();
        fs::write(root.join("garden-ideas.md"), "[[wip]]\n[plan](drafts/plan.md)\n").unwrap();
        fs::write(
            root.join("notes/reading-list.md"),
            "[back](../index.md)\n[gone](../garden-idea.md)\n",
        )
        .unwrap();
        fs::write(root.join("wip.md"), "---\ndraft: true\n---\n").unwrap();
        fs::write(root.join("drafts/plan.md"), "plan").unwrap();
        dir
    }

    #[test]
    fn test_missing_root() {
        let err = LinkChecker::new(Path::new("/no/such/garden"), CheckOptions::default());
        assert!(matches!(err, Err(CheckError::Root(_))));
    }

    #[test]
    fn test_check_report() {
        let dir = garden();
        let checker = LinkChecker::new(dir.path(), CheckOptions::default()).unwrap();
        let report = checker.check();

        assert_eq!(report.total_files, 5);
        assert_eq!(report.total_links, 7);

        let broken: Vec<_> = report
            .broken
            .iter()
            .map(|b| (b.source.as_str(), b.link.target.as_str()))
            .collect();
        assert_eq!(
            broken,
            [
                ("index.md", "Gardn Ideas"),
                ("notes/reading-list.md", "../garden-idea.md")
            ]
        );
        assert_eq!(report.broken[0].suggestions[0], "garden-ideas");
        assert_eq!(report.broken[1].suggestions[0], "/garden-ideas.md");

        let drafts: Vec<_> = report
            .drafts
            .iter()
            .map(|d| d.target_file.as_str())
            .collect();
        assert_eq!(drafts, ["wip.md", "drafts/plan.md"]);
    }

    #[test]
    fn test_report_in_line_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.md"), "[x](gone.md)\n[[missing]]\n").unwrap();
        fs::write(dir.path().join("notes-b.md"), "[[lost]]\n").unwrap();
        fs::create_dir_all(dir.path().join("notes")).unwrap();
        fs::write(dir.path().join("notes/c.md"), "[[lost]]\n").unwrap();

        let checker = LinkChecker::new(dir.path(), CheckOptions::default()).unwrap();
        let report = checker.check();
        let order: Vec<_> = report
            .broken
            .iter()
            .map(|b| (b.source.as_str(), b.link.line))
            .collect();
        assert_eq!(
            order,
            [("a.md", 1), ("a.md", 2), ("notes-b.md", 1), ("notes/c.md", 1)]
        );
    }

    #[test]
    fn test_automatic_fix_then_recheck() {
        let dir = garden();
        let mut checker = LinkChecker::new(dir.path(), CheckOptions::default()).unwrap();
        let report = checker.check();

        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let applied = checker
            .fix(&report, FixMode::Automatic, &mut input, &mut output)
            .unwrap();
        assert_eq!(applied, 2);

        let index = fs::read_to_string(dir.path().join("index.md")).unwrap();
        assert!(index.contains("[[garden-ideas]]"));
        let list = fs::read_to_string(dir.path().join("notes/reading-list.md")).unwrap();
        assert!(list.contains("[gone](/garden-ideas.md)"));

        checker.extract();
        assert!(checker.check().is_healthy());
    }

    #[test]
    fn test_interactive_fix_skip_and_quit() {
        let dir = garden();
        let checker = LinkChecker::new(dir.path(), CheckOptions::default()).unwrap();
        let report = checker.check();

        let mut input = Cursor::new("s\nq\n");
        let mut output = Vec::new();
        let applied = checker
            .fix(&report, FixMode::Interactive, &mut input, &mut output)
            .unwrap();
        assert_eq!(applied, 0);
        let index = fs::read_to_string(dir.path().join("index.md")).unwrap();
        assert!(index.contains("[[Gardn Ideas]]"));
    }
}
