//! `[artifacts]` section configuration.
//!
//! The fixed list of generated files this tool is allowed to commit. Files are
//! never discovered dynamically.
//!
//! # Example
//!
//! ```toml
//! [artifacts]
//! files = ["index.html", "stories_latest.json", "digest_data.json"]
//! ```

use crate::{
    config::{ConfigDiagnostics, FieldPath},
    utils::path::is_contained_relative,
};
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

/// Generated artifact set, relative to the working tree root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ArtifactsConfig {
    pub files: Vec<PathBuf>,
}

impl ArtifactsConfig {
    pub const FILES: FieldPath = FieldPath::new("artifacts.files");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.files.is_empty() {
            diag.error(Self::FILES, "at least one artifact is required");
            return;
        }

        let mut seen = FxHashSet::default();
        for file in &self.files {
            if !is_contained_relative(file) {
                diag.error_with_hint(
                    Self::FILES,
                    format!("`{}` must be relative to the repository root", file.display()),
                    "absolute paths and `..` are not allowed",
                );
            } else if !seen.insert(without_cur_dir(file)) {
                diag.error(Self::FILES, format!("`{}` is listed twice", file.display()));
            }
        }
    }
}

/// `./index.html` and `index.html` name the same artifact.
fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            files: vec![
                PathBuf::from("index.html"),
                PathBuf::from("stories_latest.json"),
                PathBuf::from("digest_data.json"),
            ],
        }
    }
}
