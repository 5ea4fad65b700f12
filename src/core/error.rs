//! Error handling for javadoc-links
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** where callers have to branch on the failure kind
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`LinksError`] - Enumerated error types for every failure the crate reports
//! - [`ErrorContext`] - Wrapper that adds details and a suggestion for display
//!
//! # Fatal vs. recoverable
//!
//! Not every [`LinksError`] ends a run. [`LinksError::FetchFailed`] is produced per
//! index-file convention and is recovered by the link task (logged as a warning once
//! both conventions failed). [`LinksError::UnresolvedDependency`] is never recovered:
//! dropping it would silently remove a documentation link.
//!
//! # Examples
//!
//! ```rust,no_run
//! use javadoc_links::core::{LinksError, user_friendly_error};
//!
//! let error = LinksError::ConfigurationNotFound {
//!     name: "apiElements".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Colored error with suggestion on stderr
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for javadoc-links operations
///
/// # Error Categories
///
/// ## Dependency resolution
/// - [`UnresolvedDependency`] - A direct child of the compile graph did not resolve
/// - [`ConfigurationNotFound`] - The build model has no such configuration
/// - [`ArtifactNotFound`] - No documentation archive for a staged project dependency
///
/// ## Offline index files
/// - [`FetchFailed`] - One index-file download failed (recoverable)
/// - [`ArchiveError`] - A documentation archive could not be read
///
/// ## Input validation
/// - [`InvalidIdentity`] - Coordinates unusable as a cache path
/// - [`BuildModelError`] - The build model could not be read or parsed
/// - [`ConfigError`] - Invalid configuration values
/// - [`JavaVersionError`] - The running Java version is unknown
///
/// [`UnresolvedDependency`]: LinksError::UnresolvedDependency
/// [`ConfigurationNotFound`]: LinksError::ConfigurationNotFound
/// [`ArtifactNotFound`]: LinksError::ArtifactNotFound
/// [`FetchFailed`]: LinksError::FetchFailed
/// [`ArchiveError`]: LinksError::ArchiveError
/// [`InvalidIdentity`]: LinksError::InvalidIdentity
/// [`BuildModelError`]: LinksError::BuildModelError
/// [`ConfigError`]: LinksError::ConfigError
/// [`JavaVersionError`]: LinksError::JavaVersionError
#[derive(Error, Debug)]
pub enum LinksError {
    /// A direct dependency of the compile classpath failed to resolve
    ///
    /// Raised while tracking a configuration. The link set is left untouched.
    #[error("can not create javadoc link for unresolved dependency: {dependency}")]
    UnresolvedDependency {
        /// The requested notation, e.g. `com.acme:lib:1.+`
        dependency: String,
        /// Failure reported by the resolution engine
        reason: String,
    },

    /// Configuration missing from the build model
    #[error("Configuration '{name}' not found")]
    ConfigurationNotFound {
        /// The configuration name that was requested
        name: String,
    },

    /// No documentation archive for a side-configuration dependency
    #[error("Could not resolve javadoc artifact for {dependency}")]
    ArtifactNotFound {
        /// Project path or `group:name` of the staged dependency
        dependency: String,
    },

    /// Downloading a single index file failed
    #[error("Failed to fetch {url}: {reason}")]
    FetchFailed {
        /// The full index-file URL
        url: String,
        /// Transport or HTTP status failure
        reason: String,
    },

    /// A documentation archive could not be opened or extracted
    #[error("Failed to extract index files from {path}: {reason}")]
    ArchiveError {
        /// Archive path
        path: String,
        /// Underlying zip or I/O failure
        reason: String,
    },

    /// Coordinates that cannot be turned into a cache location
    #[error("Invalid dependency identity '{value}': {reason}")]
    InvalidIdentity {
        /// The offending coordinates
        value: String,
        /// Which component is wrong and why
        reason: String,
    },

    /// The build model could not be loaded
    #[error("Invalid build model {path}: {reason}")]
    BuildModelError {
        /// Path to the model file
        path: String,
        /// Read or parse failure
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// The running Java version could not be determined
    #[error("Could not determine Java version: {reason}")]
    JavaVersionError {
        /// Why detection or parsing failed
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Error wrapper carrying a suggestion and extra details for display
///
/// # Examples
///
/// ```rust,no_run
/// use javadoc_links::core::{ErrorContext, LinksError};
///
/// let context = ErrorContext::new(LinksError::ConfigError {
///     message: "url_template must end with '/'".to_string(),
/// })
/// .with_suggestion("Append '/' to url_template in javadoc-links.toml");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: LinksError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context without suggestion or details
    #[must_use]
    pub const fn new(error: LinksError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Attach a suggestion
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach additional details
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`]
///
/// Recognizes [`LinksError`] anywhere in the chain, [`std::io::Error`], and
/// [`toml::de::Error`]. Anything else is wrapped with its full cause chain as details.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(links_error) = cause.downcast_ref::<LinksError>() {
            return create_error_context(links_error, &error);
        }
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        let context = ErrorContext::new(LinksError::IoError(std::io::Error::new(
            io_error.kind(),
            io_error.to_string(),
        )));
        return match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => context
                .with_suggestion("Check ownership and permissions of the work directory"),
            std::io::ErrorKind::NotFound => context
                .with_suggestion("Check that the file or directory exists and the path is correct"),
            _ => context,
        };
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(LinksError::ConfigError {
            message: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax in javadoc-links.toml");
    }

    ErrorContext::new(LinksError::ConfigError {
        message: error.to_string(),
    })
    .with_details(format!("{error:#}"))
}

fn create_error_context(error: &LinksError, chain: &anyhow::Error) -> ErrorContext {
    let (suggestion, details) = match error {
        LinksError::UnresolvedDependency { reason, .. } => (
            "Fix the dependency declaration or repository setup so the compile classpath resolves",
            Some(reason.clone()),
        ),
        LinksError::ConfigurationNotFound { .. } => (
            "Pass an existing configuration with --configuration or set `configuration` in javadoc-links.toml",
            None,
        ),
        LinksError::ArtifactNotFound { .. } => (
            "Make sure the project publishes a javadoc jar and that it is listed in javadoc_artifacts",
            None,
        ),
        LinksError::ArchiveError { .. } => (
            "Rebuild the javadoc jar; the archive appears to be missing or corrupt",
            None,
        ),
        LinksError::InvalidIdentity { .. } => (
            "Group, name and version must be non-empty and must not contain path separators",
            None,
        ),
        LinksError::BuildModelError { .. } => (
            "Re-export the build model from the host build and check it is valid JSON",
            None,
        ),
        LinksError::JavaVersionError { .. } => (
            "Install a JDK on PATH, or pass --java-version / set java_version in javadoc-links.toml",
            None,
        ),
        LinksError::FetchFailed { .. } | LinksError::ConfigError { .. } | LinksError::IoError(_) => {
            ("Run with --verbose for more information", None)
        }
    };

    let mut context = ErrorContext::new(clone_error(error)).with_suggestion(suggestion);
    if let Some(details) = details.or_else(|| {
        // Outer context strings added with anyhow, if any
        let outer = chain.to_string();
        (outer != error.to_string()).then_some(outer)
    }) {
        context = context.with_details(details);
    }
    context
}

// `std::io::Error` is not `Clone`, so rebuild the variant by hand.
fn clone_error(error: &LinksError) -> LinksError {
    match error {
        LinksError::UnresolvedDependency { dependency, reason } => {
            LinksError::UnresolvedDependency {
                dependency: dependency.clone(),
                reason: reason.clone(),
            }
        }
        LinksError::ConfigurationNotFound { name } => {
            LinksError::ConfigurationNotFound { name: name.clone() }
        }
        LinksError::ArtifactNotFound { dependency } => LinksError::ArtifactNotFound {
            dependency: dependency.clone(),
        },
        LinksError::FetchFailed { url, reason } => LinksError::FetchFailed {
            url: url.clone(),
            reason: reason.clone(),
        },
        LinksError::ArchiveError { path, reason } => LinksError::ArchiveError {
            path: path.clone(),
            reason: reason.clone(),
        },
        LinksError::InvalidIdentity { value, reason } => LinksError::InvalidIdentity {
            value: value.clone(),
            reason: reason.clone(),
        },
        LinksError::BuildModelError { path, reason } => LinksError::BuildModelError {
            path: path.clone(),
            reason: reason.clone(),
        },
        LinksError::ConfigError { message } => LinksError::ConfigError {
            message: message.clone(),
        },
        LinksError::JavaVersionError { reason } => LinksError::JavaVersionError {
            reason: reason.clone(),
        },
        LinksError::IoError(e) => LinksError::IoError(std::io::Error::new(e.kind(), e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_unresolved_dependency_message_names_dependency() {
        let error = LinksError::UnresolvedDependency {
            dependency: "com.acme:missing:1.0".to_string(),
            reason: "Could not find com.acme:missing:1.0".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "can not create javadoc link for unresolved dependency: com.acme:missing:1.0"
        );
    }

    #[test]
    fn test_user_friendly_error_finds_links_error_in_chain() {
        let result: Result<(), LinksError> = Err(LinksError::ConfigurationNotFound {
            name: "api".to_string(),
        });
        let error = result.context("Failed to track configuration").unwrap_err();

        let ctx = user_friendly_error(error);
        assert!(matches!(ctx.error, LinksError::ConfigurationNotFound { .. }));
        assert!(ctx.suggestion.is_some());
        assert_eq!(ctx.details.as_deref(), Some("Failed to track configuration"));
    }

    #[test]
    fn test_user_friendly_error_io_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let ctx = user_friendly_error(anyhow::Error::from(io));
        assert!(matches!(ctx.error, LinksError::IoError(_)));
        assert!(ctx.suggestion.unwrap().contains("exists"));
    }

    #[test]
    fn test_error_context_display() {
        let ctx = ErrorContext::new(LinksError::ConfigError {
            message: "bad".to_string(),
        })
        .with_details("more")
        .with_suggestion("fix it");
        assert_eq!(ctx.to_string(), "Configuration error: bad\nDetails: more\nSuggestion: fix it");
    }
}
