//! Command-line interface for `javadoc-links`.
//!
//! # Commands
//!
//! - `plan` - show which dependencies would be linked and how
//! - `run` - register links, fill the offline cache and write javadoc options
//!
//! ```bash
//! # What does :app link?
//! javadoc-links plan --model build/javadoc-links/model.json
//!
//! # Produce an argfile for `javadoc @build/javadoc-links.options`
//! javadoc-links run --model build/javadoc-links/model.json --output build/javadoc-links.options
//!
//! # Force offline linking against Java 8 documentation
//! javadoc-links run --model model.json --java-version 8
//! ```
//!
//! # Global options
//!
//! - `--verbose` / `-v` - debug logging
//! - `--quiet` / `-q` - warnings and errors only
//! - `--config <PATH>` - configuration file, see [`crate::config`]
//!
//! `RUST_LOG` takes precedence over both flags. Logs go to stderr so that
//! options printed to stdout can be piped.

mod common;
mod plan;
mod run;

pub use common::{CommandContext, ModelArgs};

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Runtime settings derived from the global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_level: Option<String>,

    /// Explicit configuration file
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the stderr `tracing` subscriber.
    ///
    /// Does nothing if a global subscriber is already set.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(self.log_level.as_deref().unwrap_or("info"))
        });

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Wires javadoc links for the dependencies of a JVM project.
#[derive(Parser)]
#[command(name = "javadoc-links", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the configuration file [default: ./javadoc-links.toml]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the link set and project links without touching the network
    Plan(plan::PlanCommand),

    /// Register links and write javadoc options
    Run(run::RunCommand),
}

impl Cli {
    /// # Errors
    ///
    /// Returns the first fatal error of the selected command.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        };

        CliConfig {
            log_level: Some(log_level.to_string()),
            config_path: self.config.clone(),
        }
    }

    /// # Errors
    ///
    /// Returns the first fatal error of the selected command.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        match self.command {
            Commands::Plan(cmd) => cmd.execute(&config),
            Commands::Run(cmd) => cmd.execute(&config).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_levels() {
        let cli = Cli::parse_from(["javadoc-links", "-v", "plan", "--model", "m.json"]);
        assert_eq!(cli.build_config().log_level.as_deref(), Some("debug"));

        let cli = Cli::parse_from(["javadoc-links", "plan", "--model", "m.json", "--quiet"]);
        assert_eq!(cli.build_config().log_level.as_deref(), Some("warn"));

        let cli = Cli::parse_from(["javadoc-links", "plan", "--model", "m.json"]);
        assert_eq!(cli.build_config().log_level.as_deref(), Some("info"));
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["javadoc-links", "-v", "-q", "plan", "--model", "m.json"]).is_err());
    }

    #[test]
    fn test_config_flag() {
        let cli =
            Cli::parse_from(["javadoc-links", "--config", "custom.toml", "plan", "--model", "m.json"]);
        assert_eq!(cli.build_config().config_path, Some(PathBuf::from("custom.toml")));
    }
}
