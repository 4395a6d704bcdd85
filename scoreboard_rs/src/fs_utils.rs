use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};

use crate::error::{RankError, Result};

/// Build the `*.<ext>` matcher applied to bare file names. The extension
/// itself is matched literally.
pub fn extension_matcher(extension: &str) -> Result<GlobMatcher> {
    let pattern = format!("*.{}", globset::escape(extension));
    Glob::new(&pattern)
        .map(|glob| glob.compile_matcher())
        .map_err(|source| RankError::InvalidPattern { pattern, source })
}

/// Collect `<dir>/*.<ext>` without recursing.
///
/// Dotfiles never match, as with shell globbing. Results are sorted by file
/// name so the "first" report is stable across platforms.
pub fn gather_reports(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let matcher = extension_matcher(extension)?;
    let read_dir = fs::read_dir(dir).map_err(|source| RankError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| RankError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with('.') || !matcher.is_match(&*name) {
            continue;
        }
        let path = entry.path();
        if !path.is_file() {
            tracing::debug!("skipping non-file {}", path.display());
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
