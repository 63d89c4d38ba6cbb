//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`route`]: link classification (`LinkKind`, `is_external_link`, `split_path_fragment`)
//! - [`slug`]: site slugs and relative paths (`FullSlug`, `path_to_root`, `join_segments`)

pub mod route;
pub mod slug;

pub use route::{LinkKind, is_external_link, split_path_fragment};
pub use slug::{FullSlug, join_segments, path_to_root};

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first. Falls back to joining with the current
/// directory when the path does not exist yet.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Render a path relative to `root` with `/` separators on every platform.
pub fn relative_display(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
