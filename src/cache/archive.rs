//! Index-file extraction from javadoc archives.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::INDEX_FILE_NAMES;
use crate::core::LinksError;
use crate::utils::fs::ensure_dir;

/// Copies the root-level `package-list` and `element-list` entries of `archive`
/// into `destination`, overwriting existing files.
///
/// Returns the paths written; an archive without index files yields an empty list.
///
/// # Errors
///
/// [`LinksError::ArchiveError`] if the archive cannot be opened or read, or an I/O
/// error if `destination` cannot be written.
pub fn extract_index_files(archive: &Path, destination: &Path) -> Result<Vec<PathBuf>> {
    let archive_error = |reason: String| LinksError::ArchiveError {
        path: archive.display().to_string(),
        reason,
    };

    let file = File::open(archive).map_err(|e| archive_error(e.to_string()))?;
    let mut zip =
        zip::ZipArchive::new(BufReader::new(file)).map_err(|e| archive_error(e.to_string()))?;

    ensure_dir(destination)?;

    let mut written = Vec::new();
    for index in 0..zip.len() {
        let mut entry = zip.by_index(index).map_err(|e| archive_error(e.to_string()))?;
        if !entry.is_file() {
            continue;
        }
        let name = entry.name().to_string();
        if !INDEX_FILE_NAMES.contains(&name.as_str()) {
            continue;
        }

        let target = destination.join(&name);
        let mut out = File::create(&target)
            .with_context(|| format!("Failed to create {}", target.display()))?;
        std::io::copy(&mut entry, &mut out).map_err(|e| archive_error(e.to_string()))?;

        debug!("Extracted {name} from {} to {}", archive.display(), destination.display());
        written.push(target);
    }

    Ok(written)
}
