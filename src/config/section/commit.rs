//! `[commit]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [commit]
//! prefix = "🗞 Auto-refresh: "   # Followed by "March 04, 2025 13:07 UTC"
//! ```

use crate::utils::date::DateTimeUtc;
use serde::Deserialize;

/// Commit message template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CommitConfig {
    /// Literal text placed before the UTC timestamp.
    pub prefix: String,
}

impl CommitConfig {
    /// Build the commit message for the given instant.
    pub fn message(&self, at: DateTimeUtc) -> String {
        format!("{}{}", self.prefix, at.to_commit_stamp())
    }
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self {
            prefix: "🗞 Auto-refresh: ".to_string(),
        }
    }
}
