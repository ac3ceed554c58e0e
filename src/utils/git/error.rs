//! Git failure taxonomy.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while synchronizing, staging, committing or pushing.
///
/// Every variant aborts the run; the caller never retries.
#[derive(Debug, Error)]
pub enum GitError {
    #[error("`git` executable not found in PATH")]
    GitNotFound,

    #[error("`{0}` is not a git working tree: {1}")]
    NotARepository(PathBuf, String),

    #[error("failed to fetch `{remote}/{branch}`\n{detail}")]
    Fetch {
        remote: String,
        branch: String,
        detail: String,
    },

    #[error("remote branch `{remote}/{branch}` not found after fetch")]
    MissingRemoteBranch { remote: String, branch: String },

    #[error("artifact `{0}` does not exist")]
    MissingPath(PathBuf),

    #[error("HEAD {head} does not match fetched tip {remote_tip} after reset")]
    TipMismatch { head: String, remote_tip: String },

    #[error("push to `{remote}/{branch}` rejected (remote moved since fetch)\n{detail}")]
    PushRejected {
        remote: String,
        branch: String,
        detail: String,
    },

    #[error("failed to push to `{remote}/{branch}`\n{detail}")]
    Push {
        remote: String,
        branch: String,
        detail: String,
    },
}
