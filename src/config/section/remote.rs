//! `[remote]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [remote]
//! name = "origin"     # Git remote to fetch from and push to
//! branch = "main"     # Integration branch, treated as the source of truth
//! ```

use super::is_valid_ref_name;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::Deserialize;

/// Remote repository reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Remote name as known to `git remote`.
    pub name: String,

    /// Integration branch on the remote.
    pub branch: String,
}

impl RemoteConfig {
    pub const NAME: FieldPath = FieldPath::new("remote.name");
    pub const BRANCH: FieldPath = FieldPath::new("remote.branch");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !is_valid_ref_name(&self.name) {
            diag.error(Self::NAME, format!("invalid remote name: `{}`", self.name));
        }
        if !is_valid_ref_name(&self.branch) {
            diag.error_with_hint(
                Self::BRANCH,
                format!("invalid branch name: `{}`", self.branch),
                "use a plain branch name such as `main`",
            );
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            name: "origin".to_string(),
            branch: "main".to_string(),
        }
    }
}
