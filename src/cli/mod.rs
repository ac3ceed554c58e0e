//! Command-line interface module.

mod args;
pub mod publish;
pub mod status;

pub use args::{Cli, Commands, RemoteArgs};
