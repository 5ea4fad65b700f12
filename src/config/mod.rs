//! Configuration for `javadoc-links`
//!
//! Settings are read from `javadoc-links.toml`. The file is looked up in order:
//!
//! 1. the `--config` flag;
//! 2. the `JAVADOC_LINKS_CONFIG` environment variable;
//! 3. `javadoc-links.toml` in the current directory.
//!
//! A missing file yields [`LinksConfig::default`]. Command-line flags override
//! file values.
//!
//! ```toml
//! configuration = "apiElements"
//! compile_classpath = "compileClasspath"
//! url_template = "https://javadoc.io/doc/{group}/{name}/{version}/"
//! work_dir = "build/tmp/javadocLinks"
//! java_version = 8
//! fetch_timeout_secs = 30
//!
//! [url_overrides]
//! "com.acme:lib-a" = "https://docs.acme.com/lib-a/{version}/"
//! ```

mod parser;

pub use parser::parse_config;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::constants::{
    COMPILE_CLASSPATH_CONFIGURATION, CONFIG_ENV_VAR, CONFIG_FILE_NAME, DEFAULT_CONFIGURATION,
    DEFAULT_URL_TEMPLATE, DEFAULT_WORK_DIR,
};
use crate::core::{LinksError, ModuleKey};
use crate::links::TemplateUrlProvider;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinksConfig {
    /// Configuration whose declared dependencies are linked
    pub configuration: String,
    /// Resolved configuration supplying versions
    pub compile_classpath: String,
    pub url_template: String,
    /// Offline cache root
    pub work_dir: PathBuf,
    /// Skips Java detection when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_timeout_secs: Option<u64>,
    /// Per-module URL templates keyed by `group:name`
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub url_overrides: BTreeMap<String, String>,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            configuration: DEFAULT_CONFIGURATION.to_string(),
            compile_classpath: COMPILE_CLASSPATH_CONFIGURATION.to_string(),
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            work_dir: PathBuf::from(DEFAULT_WORK_DIR),
            java_version: None,
            fetch_timeout_secs: None,
            url_overrides: BTreeMap::new(),
        }
    }
}

impl LinksConfig {
    /// Loads from `path`, the environment variable, or the working directory, in
    /// that order. Falls back to defaults if the chosen file does not exist.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be parsed or holds invalid values.
    pub fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = path
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed, or holds invalid values.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Self = parse_config(path)?;
        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// # Errors
    ///
    /// [`LinksError::ConfigError`] for empty configuration names, templates
    /// without a trailing `/`, malformed override keys, or a zero version or
    /// timeout.
    pub fn validate(&self) -> Result<(), LinksError> {
        if self.configuration.trim().is_empty() || self.compile_classpath.trim().is_empty() {
            return Err(config_error("configuration names must not be empty"));
        }
        if self.java_version == Some(0) {
            return Err(config_error("java_version must be at least 1"));
        }
        if self.fetch_timeout_secs == Some(0) {
            return Err(config_error("fetch_timeout_secs must be at least 1"));
        }
        self.url_provider().map(|_| ())
    }

    /// The URL policy described by `url_template` and `url_overrides`.
    ///
    /// # Errors
    ///
    /// [`LinksError::ConfigError`] for an invalid template or override key.
    pub fn url_provider(&self) -> Result<TemplateUrlProvider, LinksError> {
        let mut provider = TemplateUrlProvider::new(&self.url_template)?;
        for (key, template) in &self.url_overrides {
            provider = provider.with_override(parse_module_key(key)?, template)?;
        }
        Ok(provider)
    }

    #[must_use]
    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_secs.map(Duration::from_secs)
    }
}

fn parse_module_key(key: &str) -> Result<ModuleKey, LinksError> {
    match key.split(':').collect::<Vec<_>>().as_slice() {
        [group, name] if !group.is_empty() && !name.is_empty() => Ok(ModuleKey::new(*group, *name)),
        _ => Err(config_error(&format!("url_overrides key '{key}' must be 'group:name'"))),
    }
}

fn config_error(message: &str) -> LinksError {
    LinksError::ConfigError {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DependencyIdentity;
    use crate::links::UrlProvider;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = tempdir().unwrap();
        let config = LinksConfig::load_with_optional(Some(temp.path().join("absent.toml"))).unwrap();
        assert_eq!(config, LinksConfig::default());
        assert_eq!(config.configuration, "apiElements");
        assert_eq!(config.work_dir, PathBuf::from("build/tmp/javadocLinks"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("javadoc-links.toml");
        std::fs::write(
            &path,
            r#"
configuration = "api"
java_version = 8
fetch_timeout_secs = 30

[url_overrides]
"com.acme:lib-a" = "https://docs.acme.com/lib-a/{version}/"
"#,
        )
        .unwrap();

        let config = LinksConfig::load_from(&path).unwrap();
        assert_eq!(config.configuration, "api");
        assert_eq!(config.compile_classpath, "compileClasspath");
        assert_eq!(config.java_version, Some(8));
        assert_eq!(config.fetch_timeout(), Some(Duration::from_secs(30)));

        let provider = config.url_provider().unwrap();
        assert_eq!(
            provider.url_for(&DependencyIdentity::new("com.acme", "lib-a", "1.0")),
            "https://docs.acme.com/lib-a/1.0/"
        );
        assert_eq!(
            provider.url_for(&DependencyIdentity::new("com.acme", "lib-z", "1.0")),
            "https://javadoc.io/doc/com.acme/lib-z/1.0/"
        );
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("javadoc-links.toml");
        std::fs::write(&path, "configurations = \"api\"\n").unwrap();
        assert!(LinksConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_validate() {
        let mut config = LinksConfig::default();
        assert!(config.validate().is_ok());

        config.url_template = "https://docs.example/{name}".to_string();
        assert!(config.validate().is_err());

        let mut config = LinksConfig::default();
        config.fetch_timeout_secs = Some(0);
        assert!(config.validate().is_err());

        let mut config = LinksConfig::default();
        config.url_overrides.insert("lib-a".to_string(), "https://x/".to_string());
        assert!(matches!(config.validate(), Err(LinksError::ConfigError { .. })));
    }
}
