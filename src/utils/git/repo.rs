use super::GitError;
use anyhow::Result;
use gix::{ObjectId, Repository};
use std::path::{Path, PathBuf};

/// Locate the `git` executable.
pub fn ensure_git() -> Result<PathBuf> {
    which::which("git").map_err(|_| GitError::GitNotFound.into())
}

/// Open the git repository containing `root`, searching parent directories
/// the way the `git` binary does.
///
/// Opened fresh per call so ref reads always reflect what the `git` binary
/// just wrote.
pub fn open_repo(root: &Path) -> Result<Repository> {
    gix::discover(root).map_err(|e| GitError::NotARepository(root.to_path_buf(), e.to_string()).into())
}

/// Full name of the remote-tracking ref, e.g. `refs/remotes/origin/main`.
pub fn remote_ref(remote: &str, branch: &str) -> String {
    format!("refs/remotes/{remote}/{branch}")
}

/// Commit id `HEAD` currently points at.
pub fn head_tip(repo: &Repository) -> Result<ObjectId> {
    Ok(repo.head_id()?.detach())
}

/// Commit id of the remote-tracking branch recorded by the last fetch.
pub fn remote_tip(repo: &Repository, remote: &str, branch: &str) -> Result<ObjectId> {
    let name = remote_ref(remote, branch);
    let reference = repo
        .find_reference(name.as_str())
        .map_err(|_| GitError::MissingRemoteBranch {
            remote: remote.to_owned(),
            branch: branch.to_owned(),
        })?;
    Ok(reference.target().id().to_owned())
}

/// Check that the local branch pointer equals the fetched remote tip.
pub fn verify_tip(root: &Path, remote: &str, branch: &str) -> Result<ObjectId> {
    let repo = open_repo(root)?;
    let head = head_tip(&repo)?;
    let remote_tip = remote_tip(&repo, remote, branch)?;

    if head != remote_tip {
        return Err(GitError::TipMismatch {
            head: head.to_string(),
            remote_tip: remote_tip.to_string(),
        }
        .into());
    }
    Ok(head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_ref() {
        assert_eq!(remote_ref("origin", "main"), "refs/remotes/origin/main");
        assert_eq!(remote_ref("upstream", "gh-pages"), "refs/remotes/upstream/gh-pages");
    }

    #[test]
    fn test_open_repo_from_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        gix::init(dir.path()).unwrap();
        let nested = dir.path().join("site").join("data");
        std::fs::create_dir_all(&nested).unwrap();

        let repo = open_repo(&nested).unwrap();
        assert!(repo.git_dir().ends_with(".git"));
    }

    #[test]
    fn test_open_repo_rejects_plain_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_repo(dir.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GitError>(),
            Some(GitError::NotARepository(..))
        ));
    }
}
