//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Publish generated digest artifacts to a git remote
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Working tree root (default: directory of the config file, else cwd)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Config file path (default: publish.toml, searched upward)
    #[arg(short = 'C', long, global = true, default_value = "publish.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Sync with the remote, then commit and push changed artifacts
    #[command(visible_alias = "p")]
    Publish {
        #[command(flatten)]
        remote: RemoteArgs,

        /// Stop after staging and report what would be committed
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Show which artifacts differ from the remote tip
    #[command(visible_alias = "s")]
    Status {
        #[command(flatten)]
        remote: RemoteArgs,
    },

    /// Print the commit message a publish would use right now
    #[command(visible_alias = "m")]
    Message,
}

/// Remote overrides shared by Publish and Status
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RemoteArgs {
    /// Remote to fetch from and push to (overrides `remote.name`)
    #[arg(long = "remote")]
    pub name: Option<String>,

    /// Integration branch (overrides `remote.branch`)
    #[arg(short, long)]
    pub branch: Option<String>,
}

impl Cli {
    /// Remote overrides of the current command, if it takes any.
    pub fn remote_args(&self) -> Option<&RemoteArgs> {
        match &self.command {
            Commands::Publish { remote, .. } | Commands::Status { remote } => Some(remote),
            Commands::Message => None,
        }
    }
}
