//! File fixtures.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::DependencyIdentity;
use crate::utils::fs::ensure_parent_dir;

/// Writes a zip archive at `path` with the given `(entry name, content)` pairs.
pub fn write_javadoc_jar(path: &Path, entries: &[(&str, &str)]) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    for (name, content) in entries {
        zip.start_file(*name, options)?;
        zip.write_all(content.as_bytes())?;
    }
    zip.finish()?;
    Ok(())
}

/// Places an index file for `identity` under `work_dir` as a previous run would.
pub fn seed_index_file(
    work_dir: &Path,
    identity: &DependencyIdentity,
    file_name: &str,
    content: &str,
) -> Result<PathBuf> {
    let path = work_dir
        .join(&identity.group)
        .join(&identity.name)
        .join(&identity.version)
        .join(file_name);
    ensure_parent_dir(&path)?;
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
