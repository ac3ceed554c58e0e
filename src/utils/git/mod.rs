//! Git operations for publishing generated artifacts.
//!
//! Mutating steps shell out to the `git` binary so credentials, hooks and
//! config behave exactly as they do for a human; ref inspection goes
//! through `gix`.

mod error;
mod index;
mod remote;
mod repo;

pub use error::GitError;
pub use index::{commit, soft_reset, stage, staged_changes};
pub use remote::{fetch, push};
pub use repo::{ensure_git, head_tip, open_repo, remote_ref, verify_tip};

use crate::utils::exec::FilterRule;

/// Skip git's advice lines when relaying its stderr.
pub const GIT_FILTER: FilterRule = FilterRule::new(&["hint:"]);
