//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `expand_path` - tilde expansion for user-supplied paths
//! - `is_contained_relative` - check a path stays inside the working tree

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Expand a leading `~` and normalize to absolute form.
pub fn expand_path(path: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
    normalize_path(Path::new(&expanded))
}

/// Check that a path is relative and never climbs out of its base directory.
///
/// `index.html` and `data/digest.json` pass; `/etc/passwd`, `../x` and the
/// empty path do not.
pub fn is_contained_relative(path: &Path) -> bool {
    let mut has_normal = false;
    for component in path.components() {
        match component {
            Component::Normal(_) => has_normal = true,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    has_normal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_absolute() {
        let path = Path::new("/absolute/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_normalize_path_relative() {
        let path = Path::new("relative/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_expand_path_tilde() {
        let expanded = expand_path(Path::new("~/digest"));
        assert!(expanded.is_absolute());
        assert!(!expanded.to_string_lossy().starts_with('~'));
    }

    #[test]
    fn test_is_contained_relative() {
        assert!(is_contained_relative(Path::new("index.html")));
        assert!(is_contained_relative(Path::new("./data/digest_data.json")));
        assert!(!is_contained_relative(Path::new("")));
        assert!(!is_contained_relative(Path::new(".")));
        assert!(!is_contained_relative(Path::new("../index.html")));
        assert!(!is_contained_relative(Path::new("data/../../x")));
        assert!(!is_contained_relative(Path::new("/etc/passwd")));
    }
}
