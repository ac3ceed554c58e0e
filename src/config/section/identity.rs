//! `[identity]` section configuration.
//!
//! The bot identity is applied to the publish commit only; nothing is written
//! to git config.
//!
//! # Example
//!
//! ```toml
//! [identity]
//! name = "digest-bot"
//! email = "digest-bot@users.noreply.github.com"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::Deserialize;

/// Author and committer identity for automated commits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub name: String,
    pub email: String,
}

impl IdentityConfig {
    pub const NAME: FieldPath = FieldPath::new("identity.name");
    pub const EMAIL: FieldPath = FieldPath::new("identity.email");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(Self::NAME, "identity name cannot be empty");
        }
        if has_angle_brackets(&self.name) {
            diag.error(Self::NAME, "identity name cannot contain `<` or `>`");
        }

        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') || has_angle_brackets(email) {
            diag.error_with_hint(
                Self::EMAIL,
                format!("invalid identity email: `{}`", self.email),
                "e.g. `digest-bot@users.noreply.github.com`",
            );
        }
    }
}

fn has_angle_brackets(s: &str) -> bool {
    s.contains(['<', '>'])
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            name: "digest-bot".to_string(),
            email: "digest-bot@users.noreply.github.com".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_identity_config() {
        let config = test_parse_config(
            "[identity]\nname = \"news-bot\"\nemail = \"news-bot@example.com\"",
        );
        assert_eq!(config.identity.name, "news-bot");
        assert_eq!(config.identity.email, "news-bot@example.com");
    }

    #[test]
    fn test_identity_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.identity, IdentityConfig::default());
    }

    #[test]
    fn test_identity_validate() {
        let mut diag = ConfigDiagnostics::new();
        IdentityConfig::default().validate(&mut diag);
        assert!(diag.is_empty());

        let identity = IdentityConfig {
            name: "  ".into(),
            email: "not-an-email".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        identity.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }
}
