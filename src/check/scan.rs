//! Markdown file discovery and the lookup index used to resolve links.

use std::path::{Path, PathBuf};

use jwalk::WalkDir;
use rustc_hash::FxHashMap;

use crate::utils::path::relative_display;

/// Every markdown file under the garden root, addressable by several keys.
///
/// A file `notes/My Note.md` is reachable as:
/// - `notes/My Note.md` (relative path)
/// - `notes/My Note` (relative path without extension)
/// - `My Note.md` (file name)
/// - `My Note` (file stem)
///
/// When two files share a key, the one scanned later wins.
#[derive(Debug, Default)]
pub struct FileIndex {
    root: PathBuf,
    files: Vec<PathBuf>,
    lookup: FxHashMap<String, usize>,
}

impl FileIndex {
    /// Walk `root` for `*.md` files, skipping hidden files and directories.
    pub fn scan(root: &Path) -> Self {
        let files: Vec<PathBuf> = WalkDir::new(root)
            .skip_hidden(true)
            .sort(true)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path())
            .filter(|p| is_markdown(p))
            .collect();

        Self::from_files(root, files)
    }

    /// Build an index from already collected absolute paths.
    pub fn from_files(root: &Path, files: Vec<PathBuf>) -> Self {
        let mut lookup = FxHashMap::default();
        for (idx, file) in files.iter().enumerate() {
            for key in index_keys(file, root) {
                lookup.insert(key, idx);
            }
        }
        Self {
            root: root.to_path_buf(),
            files,
            lookup,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Unique markdown files, in scan order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Number of unique files.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Resolve one lookup key to a file.
    pub fn get(&self, key: &str) -> Option<&Path> {
        self.lookup.get(key).map(|&idx| self.files[idx].as_path())
    }

    /// All lookup keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.lookup.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Path of `file` relative to the root, `/`-separated.
    pub fn relative(&self, file: &Path) -> String {
        relative_display(file, &self.root)
    }
}

#[inline]
pub fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

/// The four lookup keys of a file.
fn index_keys(file: &Path, root: &Path) -> Vec<String> {
    let relative = relative_display(file, root);
    let mut keys = Vec::with_capacity(4);

    if let Some(stripped) = relative.strip_suffix(".md") {
        keys.push(stripped.to_string());
    }
    keys.push(relative);

    if let Some(name) = file.file_name() {
        keys.push(name.to_string_lossy().into_owned());
    }
    if let Some(stem) = file.file_stem() {
        keys.push(stem.to_string_lossy().into_owned());
    }
    keys
}
