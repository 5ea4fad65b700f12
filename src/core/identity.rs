//! Module coordinates.
//!
//! A [`DependencyIdentity`] names one published module version. The same triple
//! drives URL templating and the offline cache layout, so every component must be
//! usable as a single path segment; [`DependencyIdentity::validate`] enforces that.
//! [`ModuleKey`] is the version-less `(group, name)` pair used for filtering, since
//! declared dependencies carry no authoritative version.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::LinksError;

/// Version-less module coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleKey {
    /// Group (Maven `groupId`)
    pub group: String,
    /// Name (Maven `artifactId`)
    pub name: String,
}

impl ModuleKey {
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)
    }
}

/// Immutable `(group, name, version)` triple identifying a published module version.
///
/// # Examples
///
/// ```rust
/// use javadoc_links::core::DependencyIdentity;
///
/// let id: DependencyIdentity = "com.acme:lib-a:1.0".parse().unwrap();
/// assert_eq!(id.group, "com.acme");
/// assert_eq!(id.to_string(), "com.acme:lib-a:1.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DependencyIdentity {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl DependencyIdentity {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// The `(group, name)` key this identity is filtered by.
    #[must_use]
    pub fn module_key(&self) -> ModuleKey {
        ModuleKey::new(&self.group, &self.name)
    }

    /// Checks that every component can be used as one path segment of the cache layout.
    ///
    /// # Errors
    ///
    /// Returns [`LinksError::InvalidIdentity`] for empty components, `.`/`..`, or
    /// components containing a path separator.
    pub fn validate(&self) -> Result<(), LinksError> {
        for (label, value) in
            [("group", &self.group), ("name", &self.name), ("version", &self.version)]
        {
            let reason = if value.is_empty() {
                Some(format!("{label} is empty"))
            } else if value == "." || value == ".." {
                Some(format!("{label} must not be '{value}'"))
            } else if value.contains(['/', '\\']) {
                Some(format!("{label} must not contain a path separator"))
            } else {
                None
            };

            if let Some(reason) = reason {
                return Err(LinksError::InvalidIdentity {
                    value: self.to_string(),
                    reason,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for DependencyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

impl FromStr for DependencyIdentity {
    type Err = LinksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [group, name, version] = parts.as_slice() else {
            return Err(LinksError::InvalidIdentity {
                value: s.to_string(),
                reason: "expected 'group:name:version'".to_string(),
            });
        };

        let identity = Self::new(*group, *name, *version);
        identity.validate()?;
        Ok(identity)
    }
}
