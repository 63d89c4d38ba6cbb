//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
///
/// # Example
/// ```text
/// /home/user/garden/notes/daily/  ← start
/// /home/user/garden/grove.toml    ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_file_upward() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("notes/daily");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("grove.toml"), "").unwrap();

        let found = find_config_file(Path::new("grove.toml"), &nested).unwrap();
        assert_eq!(found, dir.path().join("grove.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = TempDir::new().unwrap();
        let name = Path::new("grove-config-that-does-not-exist.toml");
        assert!(find_config_file(name, dir.path()).is_none());
    }
}
