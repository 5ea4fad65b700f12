//! Register javadoc links and write them as javadoc options.
//!
//! The Java version decides the link mode. It comes from `--java-version`, then
//! `java_version` in the configuration, then `java -version`.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use tracing::{info, warn};

use super::{CliConfig, CommandContext, ModelArgs};
use crate::fetch::HttpIndexFetcher;
use crate::javadoc::{JavaVersion, JavadocOptions};
use crate::utils::atomic_write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OptionsFormat {
    /// javadoc `@argfile`
    #[default]
    Argfile,
    Json,
}

#[derive(Debug, Args)]
pub struct RunCommand {
    #[command(flatten)]
    model: ModelArgs,

    /// Offline cache directory [default: build/tmp/javadocLinks]
    #[arg(long, value_name = "DIR")]
    work_dir: Option<PathBuf>,

    /// Java major version to generate links for instead of detecting it
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    java_version: Option<u32>,

    /// Write options to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OptionsFormat::Argfile)]
    format: OptionsFormat,
}

impl RunCommand {
    pub async fn execute(self, cli: &CliConfig) -> Result<()> {
        let ctx = CommandContext::load(cli, &self.model)?;
        let work_dir = self.work_dir.clone().unwrap_or_else(|| ctx.config.work_dir.clone());
        // javadoc resolves -linkoffline locations against its own working directory
        let work_dir = std::path::absolute(&work_dir).with_context(|| {
            format!("Failed to resolve work directory {}", work_dir.display())
        })?;
        let task = ctx.task(work_dir)?;

        let java = match self.java_version.or(ctx.config.java_version) {
            Some(major) => JavaVersion::new(major),
            None => JavaVersion::detect()?,
        };
        info!("Generating links for Java {java}");

        let fetcher = HttpIndexFetcher::new(ctx.config.fetch_timeout())?;
        let mut options = JavadocOptions::new();
        let summary = task.run(&ctx.model, &fetcher, &mut options, java).await?;
        if !summary.missing.is_empty() {
            warn!(
                "{} module(s) will not be cross-referenced; see warnings above",
                summary.missing.len()
            );
        }

        let rendered = match self.format {
            OptionsFormat::Argfile => options.to_argfile(),
            OptionsFormat::Json => {
                options.to_json().context("Failed to serialize javadoc options")? + "\n"
            }
        };

        match &self.output {
            Some(path) => {
                atomic_write(path, rendered.as_bytes())?;
                info!("Wrote javadoc options to {}", path.display());
            }
            None => print!("{rendered}"),
        }
        Ok(())
    }
}
