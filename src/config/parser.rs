//! TOML parsing with file path context.
//!
//! Errors carry two levels of context, the failed operation and the file:
//!
//! ```text
//! Failed to parse config file: /path/to/javadoc-links.toml
//! Caused by:
//!     invalid type: string "ten", expected u32
//! ```

use anyhow::{Context, Result};
use std::path::Path;

/// Parse a TOML configuration file into the specified type.
///
/// ```rust,no_run
/// use javadoc_links::config::{LinksConfig, parse_config};
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let config: LinksConfig = parse_config(Path::new("javadoc-links.toml"))?;
/// println!("linking dependencies of {}", config.configuration);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Fails if the file cannot be read, is not valid TOML, or does not match `T`.
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: T = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}
