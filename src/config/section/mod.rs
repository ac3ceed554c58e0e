//! Configuration section definitions.
//!
//! Each module corresponds to a section in `publish.toml`:
//!
//! | Module      | TOML Section    | Purpose                              |
//! |-------------|-----------------|--------------------------------------|
//! | `artifacts` | `[artifacts]`   | Generated files to publish           |
//! | `commit`    | `[commit]`      | Commit message template              |
//! | `identity`  | `[identity]`    | Bot author/committer identity        |
//! | `remote`    | `[remote]`      | Remote name and integration branch   |

mod artifacts;
mod commit;
mod identity;
mod remote;

pub use artifacts::ArtifactsConfig;
pub use commit::CommitConfig;
pub use identity::IdentityConfig;
pub use remote::RemoteConfig;

/// Check a ref or remote name for characters git would reject or misparse.
pub(crate) fn is_valid_ref_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && !name.starts_with('/')
        && !name.ends_with('/')
        && !name.ends_with(".lock")
        && !name.contains("..")
        && !name.contains("//")
        && !name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || "~^:?*[\\".contains(c))
}

#[cfg(test)]
mod tests {
    use super::is_valid_ref_name;

    #[test]
    fn test_valid_ref_names() {
        assert!(is_valid_ref_name("main"));
        assert!(is_valid_ref_name("gh-pages"));
        assert!(is_valid_ref_name("release/2025"));
        assert!(is_valid_ref_name("origin"));
    }

    #[test]
    fn test_invalid_ref_names() {
        assert!(!is_valid_ref_name(""));
        assert!(!is_valid_ref_name("-f"));
        assert!(!is_valid_ref_name("has space"));
        assert!(!is_valid_ref_name("a..b"));
        assert!(!is_valid_ref_name("main.lock"));
        assert!(!is_valid_ref_name("topic:main"));
        assert!(!is_valid_ref_name("trailing/"));
    }
}
