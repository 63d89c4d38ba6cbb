//! `[check]` section.
//!
//! # Example
//!
//! ```toml
//! [check]
//! dir = "content"             # Garden root scanned by `grove check`
//! cutoff = 0.6                # Minimum similarity for a suggestion
//! max_suggestions = 3         # Suggestions kept per broken link
//! draft_dir = "drafts"        # Directory whose files count as drafts
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::ConfigError;

/// `[check]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckSection {
    /// Directory to scan, relative to the config file.
    pub dir: PathBuf,
    /// Similarity threshold in `0.0..=1.0`.
    pub cutoff: f64,
    /// Suggestions kept per broken link.
    pub max_suggestions: usize,
    /// Name of the draft directory.
    pub draft_dir: String,
}

impl Default for CheckSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            cutoff: 0.6,
            max_suggestions: 3,
            draft_dir: "drafts".into(),
        }
    }
}

impl CheckSection {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.cutoff) {
            return Err(ConfigError::Validation(format!(
                "check.cutoff must be within 0.0..=1.0, got {}",
                self.cutoff
            )));
        }
        if self.max_suggestions == 0 {
            return Err(ConfigError::Validation(
                "check.max_suggestions must be at least 1".into(),
            ));
        }
        if self.draft_dir.trim_matches('/').is_empty() {
            return Err(ConfigError::Validation(
                "check.draft_dir must not be empty".into(),
            ));
        }
        Ok(())
    }
}
