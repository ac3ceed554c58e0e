//! `status` command: report which artifacts differ from the remote tip.
//!
//! Runs the same fetch / soft reset / stage steps as a publish, so the
//! report is exactly what the next publish would commit. Nothing is
//! committed or pushed.

use super::publish::{Prepared, prepare};
use crate::{config::PublishConfig, log};
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

/// Per-artifact state relative to the remote tip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactStatus {
    pub path: String,
    pub changed: bool,
}

/// Sync with the remote and print per-artifact status.
pub fn show_status(config: &PublishConfig) -> Result<Vec<ArtifactStatus>> {
    let Prepared { tip, changed } = prepare(config)?;
    let statuses = classify(&config.artifacts.files, &changed);

    log!("status"; "{}/{} at {}", config.remote.name, config.remote.branch, tip);
    for status in &statuses {
        let label = if status.changed {
            "changed".yellow().to_string()
        } else {
            "unchanged".dimmed().to_string()
        };
        println!("  {label:>9}  {}", status.path);
    }

    let count = statuses.iter().filter(|s| s.changed).count();
    log!("status"; "{} of {} artifact(s) would be committed", count, statuses.len());
    Ok(statuses)
}

/// Pair every configured artifact with whether git reported it as changed.
fn classify<P: AsRef<Path>>(files: &[P], changed: &[String]) -> Vec<ArtifactStatus> {
    files
        .iter()
        .map(|file| {
            let path = file.as_ref().to_string_lossy().replace('\\', "/");
            let path = path.trim_start_matches("./").to_string();
            let changed = changed.iter().any(|c| c == &path);
            ArtifactStatus { path, changed }
        })
        .collect()
}
