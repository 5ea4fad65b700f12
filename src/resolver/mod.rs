//! Dependency resolution collaborator
//!
//! javadoc-links does not resolve dependencies itself. The host build resolves the
//! graph, selects versions and locates documentation archives; this module defines
//! the narrow view of that work the link task consumes:
//!
//! - [`DependencyResolver::declared_dependencies`] - the `(group, name)` pairs declared
//!   directly on a configuration
//! - [`DependencyResolver::resolved_root`] - the direct children of a configuration's
//!   resolved graph root, each [`DependencyResult::Resolved`] or
//!   [`DependencyResult::Unresolved`]
//! - [`DependencyResolver::resolve_artifacts`] - non-transitive resolution of
//!   documentation archives for staged [`DocumentationDependency`] entries
//!
//! [`BuildModel`] implements the trait over a JSON export of the host build.

mod build_model;

pub use build_model::{BuildModel, JavadocArtifact};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::core::{DependencyIdentity, LinksError, ModuleKey};

/// Kind of component a dependency resolved to.
///
/// Matched exhaustively by the link task; a new kind has to be handled there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComponentKind {
    /// Published module from a repository
    #[serde(rename = "module")]
    ExternalModule,
    /// Project of the current build, identified by its path
    #[serde(rename = "project")]
    SameBuildProject { path: String },
    /// Project of an included (composite) build
    #[serde(rename = "included")]
    CrossBuildProject { build: String, path: String },
}

/// A successfully resolved dependency with its selected version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDependency {
    #[serde(flatten)]
    pub identity: DependencyIdentity,
    pub component: ComponentKind,
}

/// A dependency the resolution engine could not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedDependency {
    /// Requested notation as declared, e.g. `com.acme:lib:1.+`
    pub requested: String,
    #[serde(default)]
    pub reason: String,
}

/// One direct child of a resolved graph root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyResult {
    Resolved(ResolvedDependency),
    Unresolved(UnresolvedDependency),
}

impl DependencyResult {
    pub fn module(identity: DependencyIdentity) -> Self {
        Self::Resolved(ResolvedDependency {
            identity,
            component: ComponentKind::ExternalModule,
        })
    }

    pub fn project(identity: DependencyIdentity, path: impl Into<String>) -> Self {
        Self::Resolved(ResolvedDependency {
            identity,
            component: ComponentKind::SameBuildProject { path: path.into() },
        })
    }

    pub fn included(
        identity: DependencyIdentity,
        build: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self::Resolved(ResolvedDependency {
            identity,
            component: ComponentKind::CrossBuildProject {
                build: build.into(),
                path: path.into(),
            },
        })
    }

    pub fn unresolved(requested: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unresolved(UnresolvedDependency {
            requested: requested.into(),
            reason: reason.into(),
        })
    }
}

/// Dependency staged for documentation-archive resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentationDependency {
    /// Reference to a project of the current build
    Project { path: String },
    /// Coordinate-only dependency, version chosen by the resolution engine
    Module(ModuleKey),
}

impl fmt::Display for DocumentationDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project { path } => write!(f, "project '{path}'"),
            Self::Module(key) => write!(f, "{key}"),
        }
    }
}

/// A resolved documentation archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub identity: DependencyIdentity,
    /// Local path of the javadoc archive
    pub file: PathBuf,
}

/// Read-only view of the host build's dependency resolution.
pub trait DependencyResolver {
    /// Dependencies declared directly on `configuration`.
    ///
    /// # Errors
    /// [`LinksError::ConfigurationNotFound`] if the configuration does not exist.
    fn declared_dependencies(&self, configuration: &str) -> Result<Vec<ModuleKey>, LinksError>;

    /// Direct children of the resolved graph root of `configuration`.
    ///
    /// # Errors
    /// [`LinksError::ConfigurationNotFound`] if the configuration does not exist.
    fn resolved_root(&self, configuration: &str) -> Result<Vec<DependencyResult>, LinksError>;

    /// Resolves the documentation archives of `dependencies`, without their
    /// transitive dependencies.
    ///
    /// # Errors
    /// [`LinksError::ArtifactNotFound`] if any dependency has no archive.
    fn resolve_artifacts(
        &self,
        dependencies: &[DocumentationDependency],
    ) -> Result<Vec<ResolvedArtifact>, LinksError>;
}
