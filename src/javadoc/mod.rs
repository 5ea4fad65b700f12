//! Javadoc tool options.
//!
//! The link task only ever adds links; [`DocletOptions`] is the narrow surface it
//! writes to. [`JavadocOptions`] records them and renders a javadoc `@argfile` or
//! JSON for the build that invokes the tool.

mod version;

pub use version::JavaVersion;

use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Link options of the javadoc tool.
pub trait DocletOptions {
    /// Adds `-link <url>`.
    fn link(&mut self, url: String);

    /// Adds `-linkoffline <url> <location>`; `location` holds the index file.
    fn link_offline(&mut self, url: String, location: PathBuf);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinkTarget {
    Online { url: String },
    Offline { url: String, location: PathBuf },
}

/// Collected link options, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JavadocOptions {
    links: Vec<LinkTarget>,
}

impl JavadocOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn links(&self) -> &[LinkTarget] {
        &self.links
    }

    /// Online link URLs.
    pub fn online_urls(&self) -> impl Iterator<Item = &str> {
        self.links.iter().filter_map(|link| match link {
            LinkTarget::Online { url } => Some(url.as_str()),
            LinkTarget::Offline { .. } => None,
        })
    }

    /// Offline link URLs with their index-file locations.
    pub fn offline_links(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.links.iter().filter_map(|link| match link {
            LinkTarget::Offline { url, location } => Some((url.as_str(), location.as_path())),
            LinkTarget::Online { .. } => None,
        })
    }

    /// One option per line, arguments single-quoted.
    #[must_use]
    pub fn to_argfile(&self) -> String {
        let mut out = String::new();
        for link in &self.links {
            // Writing to a String cannot fail
            let _ = match link {
                LinkTarget::Online { url } => writeln!(out, "-link {}", quote(url)),
                LinkTarget::Offline { url, location } => writeln!(
                    out,
                    "-linkoffline {} {}",
                    quote(url),
                    quote(&location.display().to_string())
                ),
            };
        }
        out
    }

    /// # Errors
    ///
    /// Fails only if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl DocletOptions for JavadocOptions {
    fn link(&mut self, url: String) {
        self.links.push(LinkTarget::Online { url });
    }

    fn link_offline(&mut self, url: String, location: PathBuf) {
        self.links.push(LinkTarget::Offline { url, location });
    }
}

/// Quotes an argfile argument; backslashes and quotes are escaped.
fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> JavadocOptions {
        let mut options = JavadocOptions::new();
        options.link("https://docs.oracle.com/en/java/javase/17/docs/api/".to_string());
        options.link_offline(
            "https://javadoc.io/doc/com.acme/lib-b/1.0/".to_string(),
            PathBuf::from("/work/com.acme/lib-b/1.0"),
        );
        options
    }

    #[test]
    fn test_argfile_keeps_insertion_order() {
        assert_eq!(
            sample().to_argfile(),
            "-link 'https://docs.oracle.com/en/java/javase/17/docs/api/'\n\
             -linkoffline 'https://javadoc.io/doc/com.acme/lib-b/1.0/' '/work/com.acme/lib-b/1.0'\n"
        );
    }

    #[test]
    fn test_argfile_escapes_quotes_and_backslashes() {
        let mut options = JavadocOptions::new();
        options.link_offline("https://x/it's/".to_string(), PathBuf::from(r"C:\work\a"));
        assert_eq!(options.to_argfile(), "-linkoffline 'https://x/it\\'s/' 'C:\\\\work\\\\a'\n");
    }

    #[test]
    fn test_json_shape() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(json["links"][0]["kind"], "online");
        assert_eq!(json["links"][1]["kind"], "offline");
        assert_eq!(json["links"][1]["location"], "/work/com.acme/lib-b/1.0");
    }

    #[test]
    fn test_filters() {
        let options = sample();
        assert_eq!(options.online_urls().count(), 1);
        let offline: Vec<_> = options.offline_links().collect();
        assert_eq!(offline, vec![(
            "https://javadoc.io/doc/com.acme/lib-b/1.0/",
            Path::new("/work/com.acme/lib-b/1.0")
        )]);
    }
}
