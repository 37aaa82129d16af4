//! Saving documents back to disk.
//!
//! Writes go through a temporary file in the target directory followed by
//! a rename, so a crash mid-write never leaves a truncated document. An
//! optional `.bak` copy of the previous contents is made first.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::document::node::JsonValue;
use crate::document::parser::to_pretty_string;

/// Serializes the document and writes it to `path`.
///
/// The output is pretty-printed at the configured indent width and ends
/// with a trailing newline. When `create_backup` is set and the file
/// already exists, the old contents are kept as `<path>.bak`.
///
/// # Errors
///
/// Fails if the backup copy, temporary write, or rename fails.
pub fn save_json_file<P: AsRef<Path>>(
    path: P,
    document: &JsonValue,
    config: &Config,
) -> Result<()> {
    let path = path.as_ref();

    if config.create_backup && path.exists() {
        let backup = backup_path(path);
        fs::copy(path, &backup)
            .with_context(|| format!("Failed to create backup: {}", backup.display()))?;
    }

    let mut content = to_pretty_string(document, config.indent_size);
    content.push('\n');

    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = match parent {
        Some(dir) => tempfile::NamedTempFile::new_in(dir),
        None => tempfile::NamedTempFile::new(),
    }
    .context("Failed to create temporary file for save")?;

    use std::io::Write;
    tmp.write_all(content.as_bytes())
        .context("Failed to write document")?;
    tmp.persist(path)
        .with_context(|| format!("Failed to save file: {}", path.display()))?;
    Ok(())
}

fn backup_path(path: &Path) -> std::path::PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    std::path::PathBuf::from(name)
}
