//! JSON build model exported by the host build.
//!
//! ```json
//! {
//!   "project": ":app",
//!   "configurations": {
//!     "apiElements": [{ "group": "com.acme", "name": "lib-a" }]
//!   },
//!   "resolved": {
//!     "compileClasspath": [
//!       { "resolved": { "group": "com.acme", "name": "lib-a", "version": "1.0",
//!                       "component": { "kind": "module" } } },
//!       { "unresolved": { "requested": "com.acme:gone:1.+", "reason": "not found" } }
//!     ]
//!   },
//!   "javadoc_artifacts": [
//!     { "project": ":lib-b", "group": "com.acme", "name": "lib-b", "version": "1.0",
//!       "file": "lib-b/build/libs/lib-b-1.0-javadoc.jar" }
//!   ]
//! }
//! ```
//!
//! Relative artifact paths are resolved against the directory of the model file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{
    DependencyResolver, DependencyResult, DocumentationDependency, ResolvedArtifact,
};
use crate::core::{DependencyIdentity, LinksError, ModuleKey};

/// A javadoc archive the host build can provide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JavadocArtifact {
    /// Set for projects of the current build
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(flatten)]
    pub identity: DependencyIdentity,
    pub file: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildModel {
    /// Path of the project being documented, e.g. `:app`
    pub project: String,
    #[serde(default)]
    pub configurations: BTreeMap<String, Vec<ModuleKey>>,
    #[serde(default)]
    pub resolved: BTreeMap<String, Vec<DependencyResult>>,
    #[serde(default)]
    pub javadoc_artifacts: Vec<JavadocArtifact>,
    #[serde(skip)]
    base_dir: PathBuf,
}

impl BuildModel {
    /// Loads and validates a model file.
    ///
    /// # Errors
    ///
    /// [`LinksError::BuildModelError`] if the file cannot be read or parsed, or
    /// [`LinksError::InvalidIdentity`] if any coordinates are unusable.
    pub fn load(path: &Path) -> Result<Self, LinksError> {
        let content = std::fs::read_to_string(path).map_err(|e| LinksError::BuildModelError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut model: Self =
            serde_json::from_str(&content).map_err(|e| LinksError::BuildModelError {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        model.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        model.validate()?;

        debug!(
            "Loaded build model for {} ({} configurations, {} javadoc artifacts)",
            model.project,
            model.configurations.len(),
            model.javadoc_artifacts.len()
        );
        Ok(model)
    }

    fn validate(&self) -> Result<(), LinksError> {
        let resolved = self.resolved.values().flatten().filter_map(|result| match result {
            DependencyResult::Resolved(dep) => Some(&dep.identity),
            DependencyResult::Unresolved(_) => None,
        });
        let artifacts = self.javadoc_artifacts.iter().map(|a| &a.identity);

        resolved.chain(artifacts).try_for_each(DependencyIdentity::validate)
    }

    fn find_artifact(&self, dependency: &DocumentationDependency) -> Option<&JavadocArtifact> {
        self.javadoc_artifacts.iter().find(|artifact| match dependency {
            DocumentationDependency::Project { path } => artifact.project.as_ref() == Some(path),
            DocumentationDependency::Module(key) => {
                artifact.project.is_none() && artifact.identity.module_key() == *key
            }
        })
    }
}

impl DependencyResolver for BuildModel {
    fn declared_dependencies(&self, configuration: &str) -> Result<Vec<ModuleKey>, LinksError> {
        self.configurations.get(configuration).cloned().ok_or_else(|| {
            LinksError::ConfigurationNotFound {
                name: configuration.to_string(),
            }
        })
    }

    fn resolved_root(&self, configuration: &str) -> Result<Vec<DependencyResult>, LinksError> {
        self.resolved.get(configuration).cloned().ok_or_else(|| {
            LinksError::ConfigurationNotFound {
                name: configuration.to_string(),
            }
        })
    }

    fn resolve_artifacts(
        &self,
        dependencies: &[DocumentationDependency],
    ) -> Result<Vec<ResolvedArtifact>, LinksError> {
        dependencies
            .iter()
            .map(|dependency| {
                let artifact =
                    self.find_artifact(dependency).ok_or_else(|| LinksError::ArtifactNotFound {
                        dependency: dependency.to_string(),
                    })?;
                Ok(ResolvedArtifact {
                    identity: artifact.identity.clone(),
                    file: self.base_dir.join(&artifact.file),
                })
            })
            .collect()
    }
}
