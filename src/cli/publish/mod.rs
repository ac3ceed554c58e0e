//! Publish generated artifacts to the remote integration branch.
//!
//! One run is a straight fail-fast pipeline:
//!
//! ```text
//! fetch ─► soft reset ─► verify tip ─► stage ─► diff ─┬─► (no changes) done
//!                                                     └─► commit ─► push
//! ```
//!
//! The soft reset puts the branch pointer on the fetched remote tip while
//! the working tree keeps the freshly generated files, so the commit is
//! always a direct child of the remote tip. Unpushed local commits are
//! discarded. Any failing step aborts the run; the next scheduled run
//! starts over from a fresh fetch.

use crate::{
    config::PublishConfig,
    log,
    logger,
    utils::{date::DateTimeUtc, git},
};
use anyhow::Result;
use gix::ObjectId;


/// Result of a publish run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Artifacts already match the remote tip; nothing was committed or pushed.
    Unchanged { tip: ObjectId },
    /// Dry run: these artifacts would have been committed.
    WouldPublish { changed: Vec<String> },
    /// A commit containing `changed` was pushed.
    Published { commit: ObjectId, changed: Vec<String> },
}

/// Working tree synchronized with the remote and artifacts staged.
#[derive(Debug)]
pub struct Prepared {
    /// Remote tip the branch pointer was reset to.
    pub tip: ObjectId,
    /// Artifact paths whose staged content differs from `tip`.
    pub changed: Vec<String>,
}

/// Run the full publish pipeline once.
pub fn publish(config: &PublishConfig, dry_run: bool) -> Result<PublishOutcome> {
    logger::banner("digest-publish");

    let Prepared { tip, changed } = prepare(config)?;

    if changed.is_empty() {
        log!("publish"; "no changes to commit, {} is up to date", short(tip));
        return Ok(PublishOutcome::Unchanged { tip });
    }

    log!("publish"; "changed: {}", changed.join(", "));

    if dry_run {
        log!("publish"; "dry run, skipping commit and push");
        return Ok(PublishOutcome::WouldPublish { changed });
    }

    let commit = commit_artifacts(config, DateTimeUtc::now())?;
    push_artifacts(config)?;

    log!("publish"; "done");
    Ok(PublishOutcome::Published { commit, changed })
}

/// Fetch, soft-reset onto the remote tip and stage the artifacts.
pub fn prepare(config: &PublishConfig) -> Result<Prepared> {
    let root = config.get_root();
    let remote = &config.remote;

    git::ensure_git()?;
    git::open_repo(root)?;

    log!("publish"; "fetching {}/{}...", remote.name, remote.branch);
    git::fetch(root, &remote.name, &remote.branch)?;

    log!("publish"; "resetting onto {}/{}...", remote.name, remote.branch);
    git::soft_reset(root, &remote.name, &remote.branch)?;
    let tip = git::verify_tip(root, &remote.name, &remote.branch)?;
    crate::debug!("git"; "HEAD at {}", tip);

    log!("publish"; "staging {} artifact(s)...", config.artifacts.files.len());
    git::stage(root, &config.artifacts.files)?;
    let changed = git::staged_changes(root, &config.artifacts.files)?;

    Ok(Prepared { tip, changed })
}

/// Commit the staged artifacts as the bot identity; returns the new commit.
pub fn commit_artifacts(config: &PublishConfig, at: DateTimeUtc) -> Result<ObjectId> {
    let root = config.get_root();
    let message = config.commit.message(at);

    log!("publish"; "committing...");
    git::commit(
        root,
        &message,
        &config.identity.name,
        &config.identity.email,
        &config.artifacts.files,
    )?;

    let commit = git::head_tip(&git::open_repo(root)?)?;
    log!("git"; "commit {} {}", short(commit), message);
    Ok(commit)
}

/// Push the new commit. A rejected push is final for this run.
pub fn push_artifacts(config: &PublishConfig) -> Result<()> {
    let remote = &config.remote;
    log!("publish"; "pushing to {}/{}...", remote.name, remote.branch);
    git::push(config.get_root(), &remote.name, &remote.branch)
}

/// Abbreviated commit id for display.
fn short(id: ObjectId) -> String {
    id.to_hex_with_len(7).to_string()
}
