//! Fluent build model construction.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::core::{DependencyIdentity, ModuleKey};
use crate::resolver::{BuildModel, DependencyResult, JavadocArtifact};

/// Builds a [`BuildModel`] without going through JSON.
///
/// ```rust,no_run
/// use javadoc_links::resolver::DependencyResult;
/// use javadoc_links::test_utils::BuildModelBuilder;
///
/// let model = BuildModelBuilder::new(":app")
///     .declare("apiElements", "com.acme", "lib-a")
///     .resolve("compileClasspath", DependencyResult::module("com.acme:lib-a:1.0".parse().unwrap()))
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct BuildModelBuilder {
    model: BuildModel,
}

impl BuildModelBuilder {
    pub fn new(project: impl Into<String>) -> Self {
        let mut model = BuildModel::default();
        model.project = project.into();
        Self { model }
    }

    /// Declares `group:name` on `configuration`, creating the configuration.
    #[must_use]
    pub fn declare(mut self, configuration: &str, group: &str, name: &str) -> Self {
        self.model
            .configurations
            .entry(configuration.to_string())
            .or_default()
            .push(ModuleKey::new(group, name));
        self
    }

    /// Creates `configuration` without declared dependencies.
    #[must_use]
    pub fn empty_configuration(mut self, configuration: &str) -> Self {
        self.model.configurations.entry(configuration.to_string()).or_default();
        self
    }

    /// Appends a root child to the resolved `configuration`.
    #[must_use]
    pub fn resolve(mut self, configuration: &str, result: DependencyResult) -> Self {
        self.model.resolved.entry(configuration.to_string()).or_default().push(result);
        self
    }

    /// Registers a javadoc archive; `project` is set for projects of this build.
    #[must_use]
    pub fn javadoc_artifact(
        mut self,
        project: Option<&str>,
        identity: DependencyIdentity,
        file: impl AsRef<Path>,
    ) -> Self {
        self.model.javadoc_artifacts.push(JavadocArtifact {
            project: project.map(str::to_string),
            identity,
            file: file.as_ref().to_path_buf(),
        });
        self
    }

    #[must_use]
    pub fn build(self) -> BuildModel {
        self.model
    }

    /// Writes the model as `build-model.json` into `dir` and returns its path.
    pub fn write_to(self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join("build-model.json");
        let json = serde_json::to_string_pretty(&self.model)?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::DependencyResolver;
    use tempfile::tempdir;

    #[test]
    fn test_written_model_loads_back() {
        let temp = tempdir().unwrap();
        let path = BuildModelBuilder::new(":app")
            .declare("apiElements", "com.acme", "lib-a")
            .resolve(
                "compileClasspath",
                DependencyResult::module(DependencyIdentity::new("com.acme", "lib-a", "1.0")),
            )
            .write_to(temp.path())
            .unwrap();

        let model = BuildModel::load(&path).unwrap();
        assert_eq!(model.project, ":app");
        assert_eq!(
            model.declared_dependencies("apiElements").unwrap(),
            vec![ModuleKey::new("com.acme", "lib-a")]
        );
        assert_eq!(model.resolved_root("compileClasspath").unwrap().len(), 1);
    }
}
