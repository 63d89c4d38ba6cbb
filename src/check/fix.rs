//! Applying suggested replacements to broken links.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use super::extract::Link;
use super::report::BrokenLink;

/// How fixes are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixMode {
    /// Always take the best suggestion.
    Automatic,
    /// Ask for each broken link.
    Interactive,
}

/// Answer to the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Apply(String),
    Skip,
    Quit,
}

/// Replace the first occurrence of `link` in `file` with one pointing at `new_target`.
///
/// Returns `Ok(false)` when the link text is no longer present.
pub fn apply_fix(file: &Path, link: &Link, new_target: &str) -> io::Result<bool> {
    let content = fs::read_to_string(file)?;
    let old = link.source_text();
    let new = link.retargeted(new_target);

    let updated = content.replacen(&old, &new, 1);
    if updated == content {
        return Ok(false);
    }
    fs::write(file, updated)?;
    Ok(true)
}

/// Ask which suggestion to apply: `1..=n`, `s` to skip, `q` to quit.
///
/// Anything else skips this link.
pub fn prompt_choice(
    broken: &BrokenLink,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Choice> {
    writeln!(output)?;
    writeln!(output, "file: {}", broken.source)?;
    writeln!(
        output,
        "broken link: {} (line {})",
        broken.link.target, broken.link.line
    )?;
    writeln!(output, "suggestions:")?;
    for (i, s) in broken.suggestions.iter().enumerate() {
        writeln!(output, "  {}. {}", i + 1, s)?;
    }
    write!(
        output,
        "Choose fix (1-{}, s=skip, q=quit): ",
        broken.suggestions.len()
    )?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Choice::Quit);
    }
    Ok(parse_choice(line.trim(), &broken.suggestions))
}

fn parse_choice(answer: &str, suggestions: &[String]) -> Choice {
    match answer.to_lowercase().as_str() {
        "q" => Choice::Quit,
        "s" => Choice::Skip,
        n => match n.parse::<usize>() {
            Ok(idx) if (1..=suggestions.len()).contains(&idx) => {
                Choice::Apply(suggestions[idx - 1].clone())
            }
            _ => Choice::Skip,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::extract::{LinkType, extract_links};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn broken() -> BrokenLink {
        BrokenLink {
            source: "a.md".into(),
            link: Link {
                kind: LinkType::Wiki,
                text: "Gardn".into(),
                target: "Gardn".into(),
                line: 4,
            },
            suggestions: vec!["garden".into(), "gardens".into()],
        }
    }

    #[test]
    fn test_apply_fix_wiki_first_occurrence_only() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.md");
        fs::write(&file, "[[Gardn]] and again [[Gardn]]").unwrap();
        let link = &extract_links("[[Gardn]]")[0];

        assert!(apply_fix(&file, link, "garden").unwrap());
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "[[garden]] and again [[Gardn]]"
        );
    }

    #[test]
    fn test_apply_fix_markdown_keeps_text() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.md");
        fs::write(&file, "see [the list](readng.md)\n").unwrap();
        let link = &extract_links("[the list](readng.md)")[0];

        assert!(apply_fix(&file, link, "/reading.md").unwrap());
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "see [the list](/reading.md)\n"
        );
    }

    #[test]
    fn test_apply_fix_wiki_keeps_alias() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.md");
        fs::write(&file, "see [[Gardn|my ideas]]\n").unwrap();
        let link = &extract_links("[[Gardn|my ideas]]")[0];

        assert!(apply_fix(&file, link, "garden-ideas").unwrap());
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "see [[garden-ideas|my ideas]]\n"
        );
    }

    #[test]
    fn test_apply_fix_missing_link() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.md");
        fs::write(&file, "nothing here").unwrap();
        let link = &extract_links("[[Gone]]")[0];
        assert!(!apply_fix(&file, link, "x").unwrap());
    }

    #[test]
    fn test_parse_choice() {
        let s = broken().suggestions;
        assert_eq!(parse_choice("2", &s), Choice::Apply("gardens".into()));
        assert_eq!(parse_choice("S", &s), Choice::Skip);
        assert_eq!(parse_choice("q", &s), Choice::Quit);
        assert_eq!(parse_choice("3", &s), Choice::Skip);
        assert_eq!(parse_choice("0", &s), Choice::Skip);
        assert_eq!(parse_choice("what", &s), Choice::Skip);
    }

    #[test]
    fn test_prompt_choice() {
        let mut input = Cursor::new("1\n");
        let mut output = Vec::new();
        let choice = prompt_choice(&broken(), &mut input, &mut output).unwrap();
        assert_eq!(choice, Choice::Apply("garden".into()));

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("broken link: Gardn (line 4)"));
        assert!(shown.contains("  2. gardens"));
        assert!(shown.ends_with("Choose fix (1-2, s=skip, q=quit): "));
    }

    #[test]
    fn test_prompt_choice_eof_quits() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(
            prompt_choice(&broken(), &mut input, &mut output).unwrap(),
            Choice::Quit
        );
    }
}
