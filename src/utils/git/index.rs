use super::{GIT_FILTER, GitError, remote_ref};
use crate::{exec, utils::exec::Cmd};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Move the branch pointer to the fetched tip, keeping the working tree.
pub fn soft_reset(root: &Path, remote: &str, branch: &str) -> Result<()> {
    exec!(filter=&GIT_FILTER; root; "git"; "reset", "--soft", remote_ref(remote, branch))?;
    Ok(())
}

/// Stage exactly `paths`, failing if any of them is missing on disk.
pub fn stage(root: &Path, paths: &[PathBuf]) -> Result<()> {
    if let Some(missing) = paths.iter().find(|p| !root.join(p).is_file()) {
        return Err(GitError::MissingPath(missing.clone()).into());
    }

    Cmd::new("git")
        .args(["add", "--"])
        .args(paths)
        .cwd(root)
        .filter(&GIT_FILTER)
        .run()?;
    Ok(())
}

/// Paths among `paths` whose staged content differs from `HEAD`.
///
/// Reported relative to `root`, which may be a subdirectory of the work tree.
pub fn staged_changes(root: &Path, paths: &[PathBuf]) -> Result<Vec<String>> {
    let output = Cmd::new("git")
        .args(["diff", "--cached", "--relative", "--name-only", "--"])
        .args(paths)
        .cwd(root)
        .filter(&GIT_FILTER)
        .run()?;

    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

/// Commit only `paths` with the given message and identity.
///
/// The identity travels through the environment of this one process, so no
/// git config is written.
pub fn commit(root: &Path, message: &str, name: &str, email: &str, paths: &[PathBuf]) -> Result<()> {
    if message.trim().is_empty() {
        anyhow::bail!("Commit message cannot be empty");
    }

    Cmd::new("git")
        .args(["commit", "--quiet", "-m", message, "--"])
        .args(paths)
        .cwd(root)
        .envs([
            ("GIT_AUTHOR_NAME", name),
            ("GIT_AUTHOR_EMAIL", email),
            ("GIT_COMMITTER_NAME", name),
            ("GIT_COMMITTER_EMAIL", email),
        ])
        .filter(&GIT_FILTER)
        .run()?;
    Ok(())
}
