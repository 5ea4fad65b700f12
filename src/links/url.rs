//! Documentation URL policy.
//!
//! A [`UrlProvider`] maps a [`DependencyIdentity`] to the base URL of its published
//! javadoc. The returned URL is used verbatim as the link target and as the prefix
//! for index-file downloads, so it must end with `/`.
//!
//! Any `Fn(&DependencyIdentity) -> String` is a provider, which keeps test fixtures
//! and library callers free of wrapper types:
//!
//! ```rust
//! use javadoc_links::core::DependencyIdentity;
//! use javadoc_links::links::UrlProvider;
//!
//! let provider = |id: &DependencyIdentity| format!("https://docs.example/{}/", id.name);
//! let id = DependencyIdentity::new("com.acme", "lib-a", "1.0");
//! assert_eq!(provider.url_for(&id), "https://docs.example/lib-a/");
//! ```

use std::collections::HashMap;

use crate::constants::DEFAULT_URL_TEMPLATE;
use crate::core::{DependencyIdentity, LinksError, ModuleKey};

/// Maps module coordinates to a documentation base URL.
pub trait UrlProvider {
    fn url_for(&self, identity: &DependencyIdentity) -> String;
}

impl<F> UrlProvider for F
where
    F: Fn(&DependencyIdentity) -> String,
{
    fn url_for(&self, identity: &DependencyIdentity) -> String {
        self(identity)
    }
}

/// Template-based provider with optional per-module overrides.
///
/// Templates may contain `{group}`, `{name}` and `{version}` placeholders.
#[derive(Debug, Clone)]
pub struct TemplateUrlProvider {
    template: String,
    overrides: HashMap<ModuleKey, String>,
}

impl Default for TemplateUrlProvider {
    /// Links to javadoc.io.
    fn default() -> Self {
        Self {
            template: DEFAULT_URL_TEMPLATE.to_string(),
            overrides: HashMap::new(),
        }
    }
}

impl TemplateUrlProvider {
    /// # Errors
    ///
    /// [`LinksError::ConfigError`] if the template does not end with `/`.
    pub fn new(template: impl Into<String>) -> Result<Self, LinksError> {
        let template = template.into();
        validate_template(&template)?;
        Ok(Self {
            template,
            overrides: HashMap::new(),
        })
    }

    /// Uses `template` instead of the default template for one module.
    ///
    /// # Errors
    ///
    /// [`LinksError::ConfigError`] if the template does not end with `/`.
    pub fn with_override(
        mut self,
        module: ModuleKey,
        template: impl Into<String>,
    ) -> Result<Self, LinksError> {
        let template = template.into();
        validate_template(&template)?;
        self.overrides.insert(module, template);
        Ok(self)
    }
}

impl UrlProvider for TemplateUrlProvider {
    fn url_for(&self, identity: &DependencyIdentity) -> String {
        let template = self.overrides.get(&identity.module_key()).unwrap_or(&self.template);
        expand(template, identity)
    }
}

fn expand(template: &str, identity: &DependencyIdentity) -> String {
    template
        .replace("{group}", &identity.group)
        .replace("{name}", &identity.name)
        .replace("{version}", &identity.version)
}

fn validate_template(template: &str) -> Result<(), LinksError> {
    if template.ends_with('/') {
        Ok(())
    } else {
        Err(LinksError::ConfigError {
            message: format!("URL template '{template}' must end with '/'"),
        })
    }
}
