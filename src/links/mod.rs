//! Javadoc link wiring.
//!
//! [`JavadocLinksTask`] owns the link state of one documented project. It is
//! configured in two steps:
//!
//! 1. [`JavadocLinksTask::use_dependencies_of`] selects the configuration whose
//!    declared dependencies get linked and computes the [`LinkState`].
//! 2. [`JavadocLinksTask::run`] registers the links with the javadoc options,
//!    downloading or extracting index files into the offline cache as needed.
//!
//! # Link modes
//!
//! Javadoc releases before 10 cannot reliably link against documentation that
//! only publishes `element-list`. For those, every published module is linked
//! offline: its index file is downloaded once into the work directory and the
//! link points javadoc at the local copy. Newer releases link directly and fetch
//! the index themselves.
//!
//! Project dependencies are always linked offline. Their index files come out of
//! the javadoc archives the build already produced and never touch the network.

mod link_set;
mod url;

pub use link_set::{LinkState, ProjectLinksConfiguration};
pub use url::{TemplateUrlProvider, UrlProvider};

use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::cache::{OfflineCache, extract_index_files};
use crate::constants::{COMPILE_CLASSPATH_CONFIGURATION, DEFAULT_CONFIGURATION, INDEX_FILE_NAMES};
use crate::core::{DependencyIdentity, LinksError};
use crate::fetch::IndexFetcher;
use crate::javadoc::{DocletOptions, JavaVersion};
use crate::resolver::DependencyResolver;

/// What a [`JavadocLinksTask::run`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Links registered with `-link`, not counting the platform link
    pub online: usize,
    /// Links registered with `-linkoffline`
    pub offline: usize,
    /// Index files already present in the cache
    pub cached: usize,
    /// Index files downloaded during this run
    pub downloaded: usize,
    /// Index files extracted from project javadoc archives
    pub extracted: usize,
    /// Base URLs for which neither index file could be fetched
    pub missing: Vec<String>,
}

pub struct JavadocLinksTask {
    configuration: String,
    compile_classpath: String,
    url_provider: Box<dyn UrlProvider + Send + Sync>,
    cache: OfflineCache,
    state: LinkState,
}

impl fmt::Debug for JavadocLinksTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JavadocLinksTask")
            .field("configuration", &self.configuration)
            .field("compile_classpath", &self.compile_classpath)
            .field("cache", &self.cache)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl JavadocLinksTask {
    /// A task with an empty link state caching index files under `work_dir`.
    ///
    /// Links nothing until [`use_dependencies_of`](Self::use_dependencies_of) is
    /// called; the conventional configuration is [`DEFAULT_CONFIGURATION`].
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            configuration: DEFAULT_CONFIGURATION.to_string(),
            compile_classpath: COMPILE_CLASSPATH_CONFIGURATION.to_string(),
            url_provider: Box::new(TemplateUrlProvider::default()),
            cache: OfflineCache::new(work_dir),
            state: LinkState::default(),
        }
    }

    /// Resolved configuration walked for versions and component kinds.
    #[must_use]
    pub fn with_compile_classpath(mut self, name: impl Into<String>) -> Self {
        self.compile_classpath = name.into();
        self
    }

    /// Replaces the URL policy. Takes effect for the next [`run`](Self::run).
    pub fn set_url_provider<P>(&mut self, provider: P)
    where
        P: UrlProvider + Send + Sync + 'static,
    {
        self.url_provider = Box::new(provider);
    }

    /// Tracks the declared dependencies of `configuration`.
    ///
    /// Replaces the link set and the project links. On error both stay as they
    /// were and the previously tracked configuration remains current.
    ///
    /// # Errors
    ///
    /// See [`LinkState::rebuild`].
    pub fn use_dependencies_of<R>(&mut self, resolver: &R, configuration: &str) -> Result<(), LinksError>
    where
        R: DependencyResolver + ?Sized,
    {
        self.state.rebuild(resolver, configuration, &self.compile_classpath)?;
        self.configuration = configuration.to_string();
        info!(
            "Tracking {configuration}: {} published module(s), {} project link(s)",
            self.state.link_set().len(),
            self.state.project_links().dependencies().len()
        );
        Ok(())
    }

    #[must_use]
    pub fn configuration(&self) -> &str {
        &self.configuration
    }

    #[must_use]
    pub fn state(&self) -> &LinkState {
        &self.state
    }

    #[must_use]
    pub fn cache(&self) -> &OfflineCache {
        &self.cache
    }

    /// Documentation base URL of `identity` under the current policy.
    #[must_use]
    pub fn url_for(&self, identity: &DependencyIdentity) -> String {
        self.url_provider.url_for(identity)
    }

    /// Registers all links with `options`.
    ///
    /// Index downloads run one at a time in link-set order. A module whose index
    /// cannot be fetched is still linked and only logged.
    ///
    /// # Errors
    ///
    /// Fails if the project javadoc archives cannot be resolved or extracted.
    pub async fn run<R, F, D>(
        &self,
        resolver: &R,
        fetcher: &F,
        options: &mut D,
        java: JavaVersion,
    ) -> Result<RunSummary>
    where
        R: DependencyResolver + ?Sized,
        F: IndexFetcher + ?Sized,
        D: DocletOptions + ?Sized,
    {
        let mut summary = RunSummary::default();

        let platform_url = java.platform_docs_url();
        debug!("Linking Java {java} platform documentation at {platform_url}");
        options.link(platform_url);

        let offline = java.links_offline();
        if offline {
            debug!("Java {java} links published modules offline");
        }

        for identity in self.state.link_set() {
            let url = self.url_for(identity);
            if !offline {
                options.link(url);
                summary.online += 1;
                continue;
            }

            let location = self.cache.location(identity);
            options.link_offline(url.clone(), location.clone());
            summary.offline += 1;

            if let Some(existing) = self.cache.index_file(identity) {
                debug!("Using cached {}", existing.display());
                summary.cached += 1;
                continue;
            }

            if self.fetch_index(fetcher, &location, &url).await {
                summary.downloaded += 1;
            } else {
                summary.missing.push(url);
            }
        }

        let artifacts = resolver
            .resolve_artifacts(self.state.project_links().dependencies())
            .context("Failed to resolve project javadoc archives")?;
        for artifact in artifacts {
            let url = self.url_for(&artifact.identity);
            let location = self.cache.location(&artifact.identity);
            options.link_offline(url, location.clone());
            summary.offline += 1;

            let extracted = extract_index_files(&artifact.file, &location).with_context(|| {
                format!("Failed to extract index files for {}", artifact.identity)
            })?;
            if extracted.is_empty() {
                debug!("{} contains no index file", artifact.file.display());
            }
            summary.extracted += extracted.len();
        }

        info!(
            "Registered {} online and {} offline link(s); {} index file(s) downloaded, {} extracted",
            summary.online, summary.offline, summary.downloaded, summary.extracted
        );
        Ok(summary)
    }

    /// Tries each index file convention in turn; `false` if none could be fetched.
    async fn fetch_index<F>(&self, fetcher: &F, location: &Path, url: &str) -> bool
    where
        F: IndexFetcher + ?Sized,
    {
        for file_name in INDEX_FILE_NAMES {
            match self.cache.download(fetcher, location, url, file_name).await {
                Ok(path) => {
                    debug!("Cached {}", path.display());
                    return true;
                }
                Err(e) => debug!("No {file_name} at {url}: {e:#}"),
            }
        }
        warn!(url = %url, "Neither package-list nor element-list found for {url}");
        false
    }
}
