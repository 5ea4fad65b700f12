//! Filesystem helpers shared by the cache, archive extraction and CLI output.

pub mod fs;

pub use fs::{atomic_write, ensure_dir, ensure_parent_dir};
