//! Preview the link set without touching the network or the cache.
//!
//! ```text
//! Links for :app (apiElements)
//!
//! Published modules:
//!   com.acme:lib-a:1.0 -> https://javadoc.io/doc/com.acme/lib-a/1.0/
//!
//! Project javadoc archives:
//!   project ':lib-b'
//! ```

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde_json::json;

use super::{CliConfig, CommandContext, ModelArgs};
use crate::links::JavadocLinksTask;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct PlanCommand {
    #[command(flatten)]
    model: ModelArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = PlanFormat::Text)]
    format: PlanFormat,
}

impl PlanCommand {
    pub fn execute(self, cli: &CliConfig) -> Result<()> {
        let ctx = CommandContext::load(cli, &self.model)?;
        let task = ctx.task(ctx.config.work_dir.clone())?;

        let output = match self.format {
            PlanFormat::Text => render_text(&ctx.model.project, &task),
            PlanFormat::Json => render_json(&ctx.model.project, &task)?,
        };
        println!("{output}");
        Ok(())
    }
}

fn render_text(project: &str, task: &JavadocLinksTask) -> String {
    let state = task.state();
    let mut lines =
        vec![format!("Links for {} ({})", project.bold(), task.configuration().cyan()), String::new()];

    lines.push("Published modules:".bold().to_string());
    if state.link_set().is_empty() {
        lines.push(format!("  {}", "(none)".dimmed()));
    }
    for identity in state.link_set() {
        lines.push(format!("  {} -> {}", identity.to_string().green(), task.url_for(identity)));
    }

    lines.push(String::new());
    lines.push("Project javadoc archives:".bold().to_string());
    if state.project_links().is_empty() {
        lines.push(format!("  {}", "(none)".dimmed()));
    }
    for dependency in state.project_links().dependencies() {
        lines.push(format!("  {}", dependency.to_string().yellow()));
    }

    lines.join("\n")
}

fn render_json(project: &str, task: &JavadocLinksTask) -> Result<String> {
    let state = task.state();
    let link_set: Vec<_> = state
        .link_set()
        .iter()
        .map(|identity| {
            json!({
                "group": identity.group,
                "name": identity.name,
                "version": identity.version,
                "url": task.url_for(identity),
            })
        })
        .collect();

    let document = json!({
        "project": project,
        "configuration": task.configuration(),
        "link_set": link_set,
        "project_links": state.project_links(),
    });
    Ok(serde_json::to_string_pretty(&document)?)
}
