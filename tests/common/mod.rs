//! Shared helpers for the integration suite.

#![allow(dead_code)]

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use javadoc_links::core::DependencyIdentity;
use javadoc_links::resolver::DependencyResult;
use javadoc_links::test_utils::{BuildModelBuilder, write_javadoc_jar};

/// Temporary project directory the binary runs in.
pub struct TestProject {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    project_dir: PathBuf,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().join("project");
        fs::create_dir_all(&project_dir)?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn project_path(&self) -> &Path {
        &self.project_dir
    }

    /// Default offline cache root, relative to the project directory.
    pub fn work_dir(&self) -> PathBuf {
        self.project_dir.join("build/tmp/javadocLinks")
    }

    /// Writes `build-model.json` into the project directory.
    pub fn write_model(&self, builder: BuildModelBuilder) -> Result<PathBuf> {
        builder.write_to(&self.project_dir)
    }

    pub fn write_config(&self, content: &str) -> Result<()> {
        let path = self.project_dir.join("javadoc-links.toml");
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// `javadoc-links` with a clean environment, run in the project directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("javadoc-links").unwrap();
        cmd.current_dir(&self.project_dir)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("JAVADOC_LINKS_CONFIG");
        cmd
    }
}

pub fn id(coordinates: &str) -> DependencyIdentity {
    coordinates.parse().unwrap()
}

/// `:app` declaring lib-a (published) and `:lib-b` (project), with lib-c only
/// on the classpath transitively. The `:lib-b` javadoc jar carries an
/// `element-list`.
pub fn standard_model(project: &TestProject) -> Result<BuildModelBuilder> {
    let jar = project.project_path().join("lib-b/build/libs/lib-b-1.0-javadoc.jar");
    write_javadoc_jar(&jar, &[("index.html", "<html/>"), ("element-list", "com.acme.b\n")])?;

    Ok(BuildModelBuilder::new(":app")
        .declare("apiElements", "com.acme", "lib-a")
        .declare("apiElements", "com.acme", "lib-b")
        .declare("implementation", "com.acme", "lib-c")
        .resolve("compileClasspath", DependencyResult::module(id("com.acme:lib-a:1.0")))
        .resolve("compileClasspath", DependencyResult::project(id("com.acme:lib-b:1.0"), ":lib-b"))
        .resolve("compileClasspath", DependencyResult::module(id("com.acme:lib-c:2.0")))
        .javadoc_artifact(Some(":lib-b"), id("com.acme:lib-b:1.0"), "lib-b/build/libs/lib-b-1.0-javadoc.jar"))
}
