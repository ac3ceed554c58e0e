//! Path utilities.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `expand_path`, `is_contained_relative`)

pub mod fs;

pub use fs::{expand_path, is_contained_relative, normalize_path};
