//! Link health report types and formatting.

use std::collections::BTreeMap;
use std::fmt::{self, Write};

use owo_colors::OwoColorize;
use serde::Serialize;

use super::extract::Link;
use crate::utils::plural_s;

/// A link whose target does not exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrokenLink {
    /// Source file, relative to the garden root.
    pub source: String,
    pub link: Link,
    /// Replacement targets, best first.
    pub suggestions: Vec<String>,
}

/// A working link whose target is unpublished.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftLink {
    pub source: String,
    pub link: Link,
    /// Target file, relative to the garden root.
    pub target_file: String,
}

/// Summary of one link check run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HealthReport {
    pub root: String,
    pub total_files: usize,
    pub total_links: usize,
    pub broken: Vec<BrokenLink>,
    pub drafts: Vec<DraftLink>,
}

impl HealthReport {
    /// Share of links that resolve, in percent. 100 when there are no links.
    pub fn health_percentage(&self) -> f64 {
        if self.total_links == 0 {
            return 100.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let pct = (self.total_links - self.broken.len()) as f64 / self.total_links as f64 * 100.0;
        pct
    }

    pub fn is_healthy(&self) -> bool {
        self.broken.is_empty()
    }

    /// Broken links grouped by source file (sorted).
    pub fn broken_by_file(&self) -> BTreeMap<&str, Vec<&BrokenLink>> {
        let mut map: BTreeMap<&str, Vec<&BrokenLink>> = BTreeMap::new();
        for b in &self.broken {
            map.entry(b.source.as_str()).or_default().push(b);
        }
        map
    }

    /// Draft links grouped by source file (sorted).
    pub fn drafts_by_file(&self) -> BTreeMap<&str, Vec<&DraftLink>> {
        let mut map: BTreeMap<&str, Vec<&DraftLink>> = BTreeMap::new();
        for d in &self.drafts {
            map.entry(d.source.as_str()).or_default().push(d);
        }
        map
    }

    /// Render the report as a Markdown document.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_markdown(&mut out);
        out
    }

    fn write_markdown(&self, out: &mut String) -> fmt::Result {
        let broken = self.broken.len();
        let drafts = self.drafts.len();

        writeln!(out, "# Digital Garden Link Health Report")?;
        writeln!(out, "Generated: {}", self.root)?;
        writeln!(out)?;
        writeln!(out, "## Summary")?;
        writeln!(out, "- **Total Files**: {}", self.total_files)?;
        writeln!(out, "- **Total Links**: {}", self.total_links)?;
        writeln!(out, "- **Broken Links**: {broken}")?;
        writeln!(out, "- **Draft Links**: {drafts}")?;
        writeln!(out, "- **Link Health**: {:.1}%", self.health_percentage())?;
        writeln!(out)?;

        if broken == 0 && drafts == 0 {
            write!(
                out,
                "🎉 **All links are working perfectly and no draft links found!**"
            )?;
            return Ok(());
        }
        if broken == 0 {
            writeln!(out, "✅ **All links are working!**")?;
            writeln!(
                out,
                "⚠️  **Warning: {drafts} link{} point{} to draft content**",
                plural_s(drafts),
                if drafts == 1 { "s" } else { "" }
            )?;
            writeln!(out)?;
        }

        if broken > 0 {
            writeln!(out, "## Broken Links by File")?;
        }
        for (source, links) in self.broken_by_file() {
            writeln!(out, "### {source}")?;
            for b in links {
                writeln!(out, "- **Line {}**: `{}`", b.link.line, b.link.target)?;
                if b.suggestions.is_empty() {
                    writeln!(out, "  - **No similar files found**")?;
                } else {
                    writeln!(out, "  - **Suggestions**:")?;
                    for s in &b.suggestions {
                        writeln!(out, "    - `{s}`")?;
                    }
                }
                writeln!(out)?;
            }
        }

        if !self.drafts.is_empty() {
            writeln!(out, "## ⚠️ Links to Draft Content")?;
            writeln!(out)?;
            writeln!(
                out,
                "The following links point to draft content that may not be ready for public viewing:"
            )?;
            writeln!(out)?;
            for (source, links) in self.drafts_by_file() {
                writeln!(out, "### {source}")?;
                for d in links {
                    writeln!(
                        out,
                        "- **Line {}**: `{}` → `{}`",
                        d.link.line, d.link.target, d.target_file
                    )?;
                    writeln!(out, "  - **Warning**: This link points to draft content")?;
                }
                writeln!(out)?;
            }
        }

        writeln!(out, "## Quick Fix Commands")?;
        writeln!(out, "```bash")?;
        writeln!(out, "# Run with --fix to automatically fix obvious issues")?;
        writeln!(out, "grove check --fix")?;
        writeln!(out)?;
        writeln!(out, "# Run in interactive mode to review each fix")?;
        writeln!(out, "grove check --interactive")?;
        write!(out, "```")
    }

    /// Render the report as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Print broken and draft links to stderr with colors.
    pub fn print(&self) {
        if !self.broken.is_empty() {
            eprintln!();
            let files = self.broken_by_file();
            eprintln!(
                "{} {}",
                "broken".red().bold(),
                format!(
                    "({} file{}, {} link{})",
                    files.len(),
                    plural_s(files.len()),
                    self.broken.len(),
                    plural_s(self.broken.len())
                )
                .dimmed()
            );
            for (source, links) in files {
                eprintln!("{}{}{}", "[".dimmed(), source.cyan(), "]".dimmed());
                for b in links {
                    eprintln!("{} {} {}", "→".red(), b.link.target, format!("line {}", b.link.line).dimmed());
                    for s in &b.suggestions {
                        eprintln!("  {} {}", "did you mean".yellow(), s);
                    }
                }
            }
        }

        if !self.drafts.is_empty() {
            eprintln!();
            eprintln!(
                "{} {}",
                "drafts".yellow().bold(),
                format!("({} link{})", self.drafts.len(), plural_s(self.drafts.len())).dimmed()
            );
            for (source, links) in self.drafts_by_file() {
                eprintln!("{}{}{}", "[".dimmed(), source.cyan(), "]".dimmed());
                for d in links {
                    eprintln!("{} {} {} {}", "⚠".yellow(), d.link.target, "→".dimmed(), d.target_file);
                }
            }
        }
    }
}

impl fmt::Display for HealthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let broken = self.broken.len();
        if broken == 0 {
            write!(
                f,
                "{} {}",
                "all links valid".green(),
                format!("({:.1}% health)", self.health_percentage()).dimmed()
            )
        } else {
            write!(
                f,
                "{} {} {} {}",
                "found".dimmed(),
                broken.to_string().red().bold(),
                format!("broken link{}", plural_s(broken)).dimmed(),
                format!("({:.1}% health)", self.health_percentage()).dimmed()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::extract::LinkType;

    fn link(target: &str, line: usize) -> Link {
        Link {
            kind: LinkType::Wiki,
            text: target.into(),
            target: target.into(),
            line,
        }
    }

    fn report() -> HealthReport {
        HealthReport {
            root: "/garden".into(),
            total_files: 3,
            total_links: 4,
            broken: vec![
                BrokenLink {
                    source: "notes/b.md".into(),
                    link: link("Gardn", 3),
                    suggestions: vec!["garden".into()],
                },
                BrokenLink {
                    source: "a.md".into(),
                    link: link("Nothing", 1),
                    suggestions: vec![],
                },
            ],
            drafts: vec![DraftLink {
                source: "a.md".into(),
                link: link("wip", 2),
                target_file: "drafts/wip.md".into(),
            }],
        }
    }

    #[test]
    fn test_health_percentage() {
        assert!((report().health_percentage() - 50.0).abs() < 1e-9);
        assert!((HealthReport::default().health_percentage() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_markdown_sections() {
        let md = report().to_markdown();
        assert!(md.starts_with("# Digital Garden Link Health Report\nGenerated: /garden\n"));
        assert!(md.contains("- **Broken Links**: 2\n"));
        assert!(md.contains("- **Link Health**: 50.0%\n"));
        assert!(md.contains("### notes/b.md\n- **Line 3**: `Gardn`\n  - **Suggestions**:\n    - `garden`\n"));
        assert!(md.contains("- **Line 1**: `Nothing`\n  - **No similar files found**\n"));
        assert!(md.contains("- **Line 2**: `wip` → `drafts/wip.md`\n"));
        assert!(md.ends_with("grove check --interactive\n```"));

        // Files are grouped in sorted order.
        let a = md.find("### a.md").unwrap();
        let b = md.find("### notes/b.md").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_markdown_all_clear() {
        let clean = HealthReport {
            root: "/garden".into(),
            total_files: 1,
            total_links: 2,
            ..HealthReport::default()
        };
        let md = clean.to_markdown();
        assert!(md.ends_with("🎉 **All links are working perfectly and no draft links found!**"));
        assert!(!md.contains("## Broken Links by File"));
    }

    #[test]
    fn test_markdown_only_drafts() {
        let mut r = report();
        r.broken.clear();
        let md = r.to_markdown();
        assert!(md.contains("✅ **All links are working!**"));
        assert!(md.contains("**Warning: 1 link points to draft content**"));
        assert!(md.contains("## ⚠️ Links to Draft Content"));
        assert!(!md.contains("## Broken Links by File"));
    }

    #[test]
    fn test_json() {
        let json = report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_links"], 4);
        assert_eq!(value["broken"][0]["link"]["type"], "wiki");
        assert_eq!(value["drafts"][0]["target_file"], "drafts/wip.md");
    }
}
