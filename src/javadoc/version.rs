//! Java platform release detection.
//!
//! The release decides the platform documentation URL and whether published
//! modules are linked offline.

use std::fmt;
use std::path::PathBuf;
use std::process::Command;
use std::str::FromStr;
use tracing::debug;

use crate::constants::{
    DIRECT_LINK_SINCE, JAVASE_DOCS_TEMPLATE, JAVASE_DOCS_TEMPLATE_SINCE,
    LEGACY_JAVASE_DOCS_TEMPLATE,
};
use crate::core::LinksError;

/// Major feature release of the Java platform, e.g. `8` or `17`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JavaVersion(u32);

impl JavaVersion {
    #[must_use]
    pub const fn new(major: u32) -> Self {
        Self(major)
    }

    /// Base URL of the Java SE API documentation for this release.
    #[must_use]
    pub fn platform_docs_url(self) -> String {
        let template = if self.0 >= JAVASE_DOCS_TEMPLATE_SINCE {
            JAVASE_DOCS_TEMPLATE
        } else {
            LEGACY_JAVASE_DOCS_TEMPLATE
        };
        template.replace("{major}", &self.0.to_string())
    }

    /// Whether dependency links must be offline links backed by downloaded index
    /// files. Releases from 10 on fetch `element-list` themselves.
    #[must_use]
    pub const fn links_offline(self) -> bool {
        self.0 < DIRECT_LINK_SINCE
    }

    /// Version of the `java` executable from `JAVA_HOME`, falling back to `PATH`.
    ///
    /// # Errors
    ///
    /// [`LinksError::JavaVersionError`] if no executable is found or its output
    /// carries no version.
    pub fn detect() -> Result<Self, LinksError> {
        let java = java_executable()?;
        debug!("Detecting Java version with {}", java.display());

        let output = Command::new(&java).arg("-version").output().map_err(|e| {
            LinksError::JavaVersionError {
                reason: format!("failed to run {}: {e}", java.display()),
            }
        })?;

        // `java -version` reports on stderr
        let stderr = String::from_utf8_lossy(&output.stderr);
        Self::from_version_output(&stderr)
    }

    /// Reads the quoted version from `java -version` output.
    ///
    /// # Errors
    ///
    /// [`LinksError::JavaVersionError`] if no quoted version is present.
    pub fn from_version_output(output: &str) -> Result<Self, LinksError> {
        let quoted = output
            .lines()
            .find_map(|line| {
                let start = line.find('"')? + 1;
                let len = line[start..].find('"')?;
                Some(&line[start..start + len])
            })
            .ok_or_else(|| LinksError::JavaVersionError {
                reason: format!("unrecognized `java -version` output: {}", output.trim()),
            })?;
        quoted.parse()
    }
}

fn java_executable() -> Result<PathBuf, LinksError> {
    if let Some(home) = std::env::var_os("JAVA_HOME") {
        let candidate = PathBuf::from(home).join("bin").join(if cfg!(windows) {
            "java.exe"
        } else {
            "java"
        });
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    which::which("java").map_err(|e| LinksError::JavaVersionError {
        reason: format!("java executable not found: {e}"),
    })
}

impl FromStr for JavaVersion {
    type Err = LinksError;

    /// Accepts `1.8.0_292`, `11.0.2`, `17` and `21-ea`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LinksError::JavaVersionError {
            reason: format!("invalid Java version '{s}'"),
        };

        let mut parts = s.trim().split(['.', '_', '-', '+']);
        let first = parts.next().ok_or_else(invalid)?;
        let major = if first == "1" { parts.next().ok_or_else(invalid)? } else { first };

        match major.parse::<u32>() {
            Ok(major) if major > 0 => Ok(Self(major)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
