//! Site configuration management for `grove.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                        |
//! |-----------|------------------------------------------------|
//! | `[check]` | Link checker settings (dir, cutoff, drafts)    |
//!
//! The file is optional: without one every section takes its defaults and
//! the project root is the current directory.

mod error;
mod section;
mod util;

pub use error::ConfigError;
pub use section::CheckSection;
pub use util::find_config_file;

use crate::log;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "grove.toml";

/// Root configuration structure representing grove.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Link checker settings
    #[serde(default)]
    pub check: CheckSection,
}

impl SiteConfig {
    /// Load configuration.
    ///
    /// Searches upward from `cwd` for `config_name`. When nothing is found
    /// the defaults are used and `cwd` becomes the root. A missing file that
    /// was named explicitly (`explicit = true`) is an error.
    pub fn load(config_name: &Path, cwd: &Path, explicit: bool) -> Result<Self, ConfigError> {
        let Some(path) = find_config_file(config_name, cwd) else {
            if explicit {
                return Err(ConfigError::Io(
                    config_name.to_path_buf(),
                    std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
                ));
            }
            let mut config = Self::default();
            config.root = cwd.to_path_buf();
            return Ok(config);
        };

        let mut config = Self::from_path(&path)?;
        config.root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf());
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string, warning about unknown fields.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config: Self = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;

        for field in &ignored {
            log!("config"; "ignoring unknown field `{}`", field);
        }
        Ok(config)
    }

    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check.validate()
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Directory scanned by the link checker.
    pub fn check_dir(&self) -> PathBuf {
        self.root.join(&self.check.dir)
    }
}
