//! Offline index-file cache
//!
//! Index files are kept in a per-task work directory, one directory per module
//! version:
//!
//! ```text
//! <work_dir>/
//! └── com.acme/
//!     └── lib-a/
//!         └── 1.0/
//!             └── package-list      (or element-list)
//! ```
//!
//! The cache never validates or expires entries. An entry exists as soon as either
//! index file is present, and the first successful download wins for the lifetime
//! of the work directory. Nothing here deletes entries.
//!
//! Downloads stream into a `.part` sibling that is renamed into place once the
//! transfer finished, so a failed transfer never satisfies the existence check.

mod archive;

pub use archive::extract_index_files;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::constants::INDEX_FILE_NAMES;
use crate::core::DependencyIdentity;
use crate::fetch::IndexFetcher;
use crate::utils::fs::ensure_dir;

/// Index-file cache rooted at a task's work directory.
#[derive(Debug, Clone)]
pub struct OfflineCache {
    root: PathBuf,
}

impl OfflineCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the index file of `identity`.
    #[must_use]
    pub fn location(&self, identity: &DependencyIdentity) -> PathBuf {
        self.root.join(&identity.group).join(&identity.name).join(&identity.version)
    }

    /// The cached index file of `identity`, under either naming convention.
    #[must_use]
    pub fn index_file(&self, identity: &DependencyIdentity) -> Option<PathBuf> {
        let location = self.location(identity);
        INDEX_FILE_NAMES.iter().map(|name| location.join(name)).find(|path| path.is_file())
    }

    /// Downloads `{base_url}{file_name}` into `location/file_name`.
    ///
    /// Creates `location` if needed. On failure no file named `file_name` is left
    /// behind.
    ///
    /// # Errors
    ///
    /// Returns the fetch error, or an I/O error while writing the file.
    pub async fn download<F>(
        &self,
        fetcher: &F,
        location: &Path,
        base_url: &str,
        file_name: &str,
    ) -> Result<PathBuf>
    where
        F: IndexFetcher + ?Sized,
    {
        ensure_dir(location)?;

        let url = format!("{base_url}{file_name}");
        let target = location.join(file_name);
        let partial = location.join(format!("{file_name}.part"));

        let result = stream_to(fetcher, &url, &partial).await;
        match result {
            Ok(bytes) => {
                fs::rename(&partial, &target).await.with_context(|| {
                    format!("Failed to move {} into place", partial.display())
                })?;
                debug!("Downloaded {url} ({bytes} bytes) to {}", target.display());
                Ok(target)
            }
            Err(e) => {
                // The partial file may not exist if opening it failed
                let _ = fs::remove_file(&partial).await;
                Err(e)
            }
        }
    }
}

async fn stream_to<F>(fetcher: &F, url: &str, path: &Path) -> Result<u64>
where
    F: IndexFetcher + ?Sized,
{
    let mut file = fs::File::create(path)
        .await
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let bytes = fetcher.fetch_into(url, &mut file).await?;
    file.flush().await.with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(bytes)
}
