/// Utility helpers shared by the source and the collector.
///
/// This module contains:
/// - Request URL construction
/// - Filesystem preparation for the output file
///
/// IMPORTANT:
/// - No network I/O happens here.
///

use std::fs;
use std::path::Path;

use anyhow::Context;

/// Builds the subject listing URL.
///
/// Examples:
/// - ("https://openlibrary.org/subjects", "mystery", 25)
///   -> "https://openlibrary.org/subjects/mystery.json?limit=25"
///
/// The subject is inserted as-is; subjects come from the fixed
/// configuration and are already valid path segments.
///
pub fn subject_url(base_url: &str, subject: &str, limit: usize) -> String {
    format!(
        "{}/{}.json?limit={}",
        base_url.trim_end_matches('/'),
        subject,
        limit
    )
}

/// Creates every missing directory above `path`.
///
/// No-op when the parent already exists or `path` has no parent.
pub fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display())),
        _ => Ok(()),
    }
}
