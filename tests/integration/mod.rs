//! Integration test suite for javadoc-links
//!
//! Drives the compiled binary against build models written into temporary
//! project directories. Nothing here needs network access: offline-mode runs
//! use a pre-seeded cache.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! - **plan**: link set preview, text and JSON
//! - **run**: direct and offline link modes, option output
//! - **errors**: fatal configuration errors and exit codes

#[path = "../common/mod.rs"]
mod common;

mod errors;
mod plan;
mod run;
