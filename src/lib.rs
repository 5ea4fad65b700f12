//! javadoc-links - javadoc cross-reference wiring for JVM builds
//!
//! Decides which dependencies of a project get javadoc links and registers
//! those links with the javadoc tool.
//!
//! # How it works
//!
//! 1. The dependencies declared directly on one configuration (`apiElements` by
//!    default) are matched against the resolved compile classpath. Published
//!    modules form the link set. Projects of this build and of included builds
//!    are linked through their javadoc archives instead.
//! 2. A [`links::UrlProvider`] maps each module to its documentation URL.
//! 3. At run time the Java platform documentation is linked first. For Java
//!    releases before 10 every published module is linked offline against an
//!    index file (`package-list` or `element-list`) downloaded once into the
//!    work directory. Newer releases link directly. Project archives always have
//!    their index files extracted and are linked offline.
//!
//! A dependency that did not resolve fails the configuration step. An index file
//! that cannot be downloaded only produces a warning.
//!
//! # Modules
//!
//! - [`core`] - coordinates and error types
//! - [`resolver`] - the dependency resolution view and the JSON build model
//! - [`links`] - link set computation, URL policy and the link task
//! - [`cache`] - offline index-file cache and archive extraction
//! - [`fetch`] - index-file download
//! - [`javadoc`] - javadoc options and Java version detection
//! - [`config`] - `javadoc-links.toml`
//! - [`cli`] - the `javadoc-links` command
//!
//! # Example
//!
//! ```rust,no_run
//! use javadoc_links::fetch::HttpIndexFetcher;
//! use javadoc_links::javadoc::{JavaVersion, JavadocOptions};
//! use javadoc_links::links::JavadocLinksTask;
//! use javadoc_links::resolver::BuildModel;
//! use std::path::Path;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let model = BuildModel::load(Path::new("build/javadoc-links/model.json"))?;
//! let mut task = JavadocLinksTask::new("build/tmp/javadocLinks");
//! task.use_dependencies_of(&model, "apiElements")?;
//!
//! let mut options = JavadocOptions::new();
//! let fetcher = HttpIndexFetcher::new(None)?;
//! task.run(&model, &fetcher, &mut options, JavaVersion::new(8)).await?;
//! print!("{}", options.to_argfile());
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod fetch;
pub mod javadoc;
pub mod links;
pub mod resolver;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
