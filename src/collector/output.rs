use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::{schema::Catalog, util};

/// Writes the catalog as pretty JSON to `path`.
///
/// Format:
/// - UTF-8, 2-space indentation, `": "` key separator
/// - Non-ASCII characters are written literally
/// - No trailing newline
///
/// Missing parent directories are created first. Any existing
/// file is replaced in full.
///
/// RETURNS:
/// - The number of bytes written
///
pub fn write_catalog(path: &Path, catalog: &Catalog) -> anyhow::Result<usize> {
    let json = serde_json::to_string_pretty(catalog).context("failed to serialize catalog")?;

    util::ensure_parent_dir(path)?;
    fs::write(path, &json).with_context(|| format!("failed to write {}", path.display()))?;

    log::debug!("wrote {} bytes to {}", json.len(), path.display());
    Ok(json.len())
}
