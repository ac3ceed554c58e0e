use super::{GIT_FILTER, GitError, remote_ref};
use crate::{
    debug,
    utils::exec::{Cmd, format_error},
};
use anyhow::Result;
use std::path::Path;

/// Fetch the integration branch without touching the working tree.
pub fn fetch(root: &Path, remote: &str, branch: &str) -> Result<()> {
    // Explicit refspec so the tracking ref updates even without a configured one
    let refspec = format!("+refs/heads/{branch}:{}", remote_ref(remote, branch));
    let output = Cmd::new("git")
        .args(["fetch", "--no-tags", remote, refspec.as_str()])
        .cwd(root)
        .output()?;

    if !output.status.success() {
        return Err(GitError::Fetch {
            remote: remote.to_owned(),
            branch: branch.to_owned(),
            detail: format_error("git", &output, &GIT_FILTER),
        }
        .into());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        debug!("git"; "{}", stderr.trim());
    }
    Ok(())
}

/// Push `HEAD` to the integration branch. Never forces.
pub fn push(root: &Path, remote: &str, branch: &str) -> Result<()> {
    let target = format!("HEAD:refs/heads/{branch}");
    let output = Cmd::new("git")
        .args(["push", remote, target.as_str()])
        .cwd(root)
        .output()?;

    if output.status.success() {
        GIT_FILTER.log("git", String::from_utf8_lossy(&output.stderr).trim());
        return Ok(());
    }

    let detail = format_error("git", &output, &GIT_FILTER);
    let (remote, branch) = (remote.to_owned(), branch.to_owned());
    let err = if is_rejection(&String::from_utf8_lossy(&output.stderr)) {
        GitError::PushRejected {
            remote,
            branch,
            detail,
        }
    } else {
        GitError::Push {
            remote,
            branch,
            detail,
        }
    };
    Err(err.into())
}

/// Whether push stderr describes a non-fast-forward rejection.
fn is_rejection(stderr: &str) -> bool {
    stderr.contains("[rejected]")
        || stderr.contains("non-fast-forward")
        || stderr.contains("fetch first")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_rejection() {
        let stderr = "To /tmp/remote.git\n ! [rejected]        HEAD -> main (fetch first)\nerror: failed to push some refs";
        assert!(is_rejection(stderr));
        assert!(is_rejection("Updates were rejected because the tip of your current branch is behind (non-fast-forward)"));
        assert!(!is_rejection("fatal: Authentication failed for 'https://example.com/repo.git/'"));
        assert!(!is_rejection("fatal: unable to access: Could not resolve host"));
    }
}
