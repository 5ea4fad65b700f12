//! Core types and error handling
//!
//! - [`DependencyIdentity`] / [`ModuleKey`] - module coordinates
//! - [`LinksError`] / [`ErrorContext`] - typed errors and their CLI presentation

pub mod error;
pub mod identity;

pub use error::{ErrorContext, LinksError, user_friendly_error};
pub use identity::{DependencyIdentity, ModuleKey};
