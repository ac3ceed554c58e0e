//! Utility modules for the publisher.

pub mod date;
pub mod exec;
pub mod git;
pub mod path;
