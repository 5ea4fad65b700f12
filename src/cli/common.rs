//! Shared setup for CLI commands

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::CliConfig;
use crate::config::LinksConfig;
use crate::links::JavadocLinksTask;
use crate::resolver::BuildModel;

/// Build model selection shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct ModelArgs {
    /// Build model exported by the host build
    #[arg(short, long, value_name = "FILE")]
    pub model: PathBuf,

    /// Configuration whose declared dependencies are linked
    #[arg(long, value_name = "NAME")]
    pub configuration: Option<String>,
}

/// Loaded configuration and build model, with command-line overrides applied.
#[derive(Debug)]
pub struct CommandContext {
    pub config: LinksConfig,
    pub model: BuildModel,
}

impl CommandContext {
    /// # Errors
    ///
    /// Fails if the configuration or the build model cannot be loaded.
    pub fn load(cli: &CliConfig, args: &ModelArgs) -> Result<Self> {
        let mut config = LinksConfig::load_with_optional(cli.config_path.clone())?;
        if let Some(configuration) = &args.configuration {
            config.configuration.clone_from(configuration);
        }

        let model = BuildModel::load(&args.model)
            .with_context(|| format!("Failed to load build model {}", args.model.display()))?;

        Ok(Self { config, model })
    }

    /// A task tracking the configured dependencies, caching under `work_dir`.
    ///
    /// # Errors
    ///
    /// Fails on invalid URL settings, a missing configuration, or an unresolved
    /// dependency.
    pub fn task(&self, work_dir: PathBuf) -> Result<JavadocLinksTask> {
        let mut task =
            JavadocLinksTask::new(work_dir).with_compile_classpath(&self.config.compile_classpath);
        task.set_url_provider(self.config.url_provider()?);
        task.use_dependencies_of(&self.model, &self.config.configuration)?;
        Ok(task)
    }
}
