//! Publisher configuration management for `publish.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── artifacts  # [artifacts]
//! │   ├── commit     # [commit]
//! │   ├── identity   # [identity]
//! │   └── remote     # [remote]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # PublishConfig (this file)
//! ```
//!
//! The config file is optional: every field has a default, so a bare
//! checkout with the three generated files publishes to `origin/main`.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{ArtifactsConfig, CommitConfig, IdentityConfig, RemoteConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, RemoteArgs},
    log,
    utils::path::{expand_path, normalize_path},
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing publish.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PublishConfig {
    /// Absolute path to the config file, empty when none was found (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Working tree root (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Remote name and integration branch
    #[serde(default)]
    pub remote: RemoteConfig,

    /// Bot identity for commits
    #[serde(default)]
    pub identity: IdentityConfig,

    /// Generated files to publish
    #[serde(default)]
    pub artifacts: ArtifactsConfig,

    /// Commit message template
    #[serde(default)]
    pub commit: CommitConfig,
}

impl PublishConfig {
    /// Load configuration from CLI arguments.
    ///
    /// With `--root`, the config is looked up relative to that directory.
    /// Otherwise it is searched upward from cwd and its parent directory
    /// becomes the root. A missing config file means all defaults.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let start = cli.root.as_deref().map_or_else(|| cwd.clone(), expand_path);

        let mut config = match find_config_file(&cli.config, &start) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = normalize_path(&path);
                config
            }
            None => {
                crate::debug!("config"; "no {} found, using defaults", cli.config.display());
                Self::default()
            }
        };

        let root = match (&cli.root, config.config_path.parent()) {
            (Some(_), _) => start,
            (None, Some(dir)) if !config.config_path.as_os_str().is_empty() => dir.to_path_buf(),
            _ => cwd,
        };
        config.set_root(&normalize_path(&root));

        if let Some(args) = cli.remote_args() {
            config.apply_remote_args(args);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    ///
    /// Unknown fields only warn: the publisher runs unattended, so there is
    /// nobody to answer a prompt.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {} (ignored): {}", display_path, fields.join(", "));
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply `--remote` / `--branch` overrides.
    fn apply_remote_args(&mut self, args: &RemoteArgs) {
        Self::update_option(&mut self.remote.name, args.name.as_ref());
        Self::update_option(&mut self.remote.branch, args.branch.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.remote.validate(&mut diag);
        self.identity.validate(&mut diag);
        self.artifacts.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking if there are unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> PublishConfig {
    let (parsed, ignored) = PublishConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_str_invalid_toml() {
        let result: Result<PublishConfig, _> = toml::from_str("[remote\nname = \"origin\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_publish_config_default() {
        let config = PublishConfig::default();
        assert_eq!(config.get_root(), Path::new(""));
        assert_eq!(config.remote.name, "origin");
        assert_eq!(config.remote.branch, "main");
        assert_eq!(config.artifacts.files.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[remote]\nname = \"origin\"\nforce = true\n[unknown_section]\nfield = 1";
        let (config, ignored) = PublishConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.remote.name, "origin");
        assert!(ignored.iter().any(|f| f.contains("force")));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = test_parse_config(
            "[remote]\nbranch = \"\"\n[identity]\nemail = \"nope\"\n[artifacts]\nfiles = []",
        );
        let err = config.validate().unwrap_err();
        match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::Diagnostics(diag)) => assert_eq!(diag.len(), 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_with_root_and_overrides() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("publish.toml"),
            "[remote]\nname = \"upstream\"\n[commit]\nprefix = \"bot: \"",
        )
        .unwrap();

        let root = dir.path().to_string_lossy().into_owned();
        let cli = Cli::try_parse_from(["digest-publish", "publish", "--root", root.as_str(), "-b", "gh-pages"])
            .unwrap();
        let config = PublishConfig::load(&cli).unwrap();

        assert_eq!(config.get_root(), normalize_path(dir.path()));
        assert_eq!(config.remote.name, "upstream");
        assert_eq!(config.remote.branch, "gh-pages");
        assert_eq!(config.commit.prefix, "bot: ");
    }

    #[test]
    fn test_load_without_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_string_lossy().into_owned();
        let cli = Cli::try_parse_from([
            "digest-publish",
            "status",
            "--root",
            root.as_str(),
            "-C",
            "no-such-publish-config.toml",
        ])
        .unwrap();
        let config = PublishConfig::load(&cli).unwrap();

        assert!(config.config_path.as_os_str().is_empty());
        assert_eq!(config.remote, RemoteConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_override() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_string_lossy().into_owned();
        let cli = Cli::try_parse_from([
            "digest-publish",
            "publish",
            "--root",
            root.as_str(),
            "-C",
            "no-such-publish-config.toml",
            "--branch",
            "bad branch",
        ])
        .unwrap();
        assert!(PublishConfig::load(&cli).is_err());
    }
}
