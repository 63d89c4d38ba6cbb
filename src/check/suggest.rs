//! Fuzzy matching of broken link targets against known files.
//!
//! Similarity is the Ratcliff/Obershelp ratio `2 * M / T`, where `M` counts
//! characters in recursively found longest common blocks and `T` is the
//! total length of both strings.

use super::scan::FileIndex;

/// Normalize a name for comparison: drop `.md`, decode `%20`, lowercase.
pub fn clean_name(name: &str) -> String {
    name.replace(".md", "").replace("%20", " ").to_lowercase()
}

/// Similarity of two strings in `0.0..=1.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = 2.0 * matching_chars(&a, &b) as f64 / total as f64;
    ratio
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (i, j, k) = longest_match(a, b);
    if k == 0 {
        return 0;
    }
    k + matching_chars(&a[..i], &b[..j]) + matching_chars(&a[i + k..], &b[j + k..])
}

/// Longest common block `(start_a, start_b, len)`.
///
/// Ties resolve to the block starting earliest in `a`, then earliest in `b`.
fn longest_match(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb { prev[j] + 1 } else { 0 };
            let k = curr[j + 1];
            if k > best.2 {
                best = (i + 1 - k, j + 1 - k, k);
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    best
}

/// Candidate names prepared once per scan.
pub struct Suggester {
    /// `(cleaned, original key)`, one entry per distinct cleaned name.
    candidates: Vec<(String, String)>,
    cutoff: f64,
    limit: usize,
}

impl Suggester {
    pub fn new(index: &FileIndex, cutoff: f64, limit: usize) -> Self {
        let mut candidates: Vec<(String, String)> = Vec::new();
        for key in index.keys() {
            let cleaned = clean_name(key);
            if !candidates.iter().any(|(c, _)| *c == cleaned) {
                candidates.push((cleaned, key.to_string()));
            }
        }
        Self {
            candidates,
            cutoff,
            limit,
        }
    }

    /// Keys most similar to `target`, best first.
    ///
    /// Only scores at or above the cutoff are kept. Equal scores keep key order.
    pub fn suggest(&self, target: &str) -> Vec<&str> {
        let query = clean_name(target);
        let mut scored: Vec<(f64, &str)> = self
            .candidates
            .iter()
            .map(|(cleaned, key)| (similarity(&query, cleaned), key.as_str()))
            .filter(|(score, _)| *score >= self.cutoff)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.into_iter().take(self.limit).map(|(_, k)| k).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_clean_name() {
        assert_eq!(clean_name("My%20Note.md"), "my note");
        assert_eq!(clean_name("Plain"), "plain");
    }

    #[test]
    fn test_similarity_known_values() {
        assert!(approx(similarity("abcd", "abcd"), 1.0));
        assert!(approx(similarity("abc", "xyz"), 0.0));
        assert!(approx(similarity("", ""), 1.0));
        // difflib: SequenceMatcher(None, "abcd", "bcde").ratio() == 0.75
        assert!(approx(similarity("abcd", "bcde"), 0.75));
        // difflib: SequenceMatcher(None, "apple", "ape").ratio() == 0.75
        assert!(approx(similarity("apple", "ape"), 0.75));
    }

    #[test]
    fn test_longest_match_prefers_earliest() {
        let a: Vec<char> = "abab".chars().collect();
        let b: Vec<char> = "ab".chars().collect();
        assert_eq!(longest_match(&a, &b), (0, 0, 2));
    }

    fn index() -> FileIndex {
        FileIndex::from_files(
            Path::new("/g"),
            vec![
                PathBuf::from("/g/garden-ideas.md"),
                PathBuf::from("/g/notes/reading-list.md"),
                PathBuf::from("/g/unrelated.md"),
            ],
        )
    }

    #[test]
    fn test_suggest_close_match() {
        let suggester = Suggester::new(&index(), 0.6, 3);
        let suggestions = suggester.suggest("Garden Idea");
        assert_eq!(suggestions.first(), Some(&"garden-ideas"));
        assert!(!suggestions.contains(&"unrelated"));
    }

    #[test]
    fn test_suggest_limit_and_cutoff() {
        let suggester = Suggester::new(&index(), 0.6, 1);
        assert_eq!(suggester.suggest("reading-lst.md").len(), 1);

        let strict = Suggester::new(&index(), 1.0, 3);
        assert!(strict.suggest("reading-lst").is_empty());
        assert_eq!(strict.suggest("Unrelated"), ["unrelated"]);
    }

    #[test]
    fn test_candidates_are_distinct() {
        let suggester = Suggester::new(&index(), 0.0, 100);
        let all = suggester.suggest("x");
        // garden-ideas, notes/reading-list, reading-list, unrelated
        assert_eq!(all.len(), 4);
    }
}
