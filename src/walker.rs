use std::{
    fs::DirEntry,
    path::{Path, PathBuf},
    time::SystemTime,
};

use globset::{GlobBuilder, GlobMatcher};

use crate::error::Result;

/// A discovered text file.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    /// File name within its folder.
    pub file_name: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// Last modification time.
    pub mtime: SystemTime,
}

/// Pattern for corpus documents.
const TEXT_PATTERN: &str = "*.txt";

/// Build a matcher for `*.txt` file names.
///
/// Genre folders match the extension exactly; the dictionary folder also
/// accepts `.TXT` and other casings.
pub fn text_file_matcher(case_insensitive: bool) -> Result<GlobMatcher> {
    Ok(GlobBuilder::new(TEXT_PATTERN)
        .case_insensitive(case_insensitive)
        .literal_separator(true)
        .build()?
        .compile_matcher())
}

/// List the text files directly inside `dir` (no recursion).
///
/// Dotfiles such as `.draft.txt` are included. Entries whose metadata
/// cannot be read are logged and skipped. Results are sorted by file name.
pub fn discover_files(
    dir: &Path,
    matcher: &GlobMatcher,
) -> Result<Vec<DiscoveredFile>> {
    let mut results = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(
                    dir = %dir.display(),
                    error = %e,
                    "skipping unreadable entry"
                );
                continue;
            }
        };
        match inspect_entry(&entry, matcher) {
            Ok(Some(file)) => results.push(file),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(
                    path = %entry.path().display(),
                    error = %e,
                    "cannot stat file"
                );
            }
        }
    }

    results.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(results)
}

fn inspect_entry(
    entry: &DirEntry,
    matcher: &GlobMatcher,
) -> Result<Option<DiscoveredFile>> {
    let file_name = entry.file_name();
    let name = file_name.to_string_lossy();

    if !matcher.is_match(&*name) {
        return Ok(None);
    }

    let path = entry.path();
    // Follows symlinks, so a link to a regular file counts as a file.
    let metadata = std::fs::metadata(&path)?;
    if !metadata.is_file() {
        return Ok(None);
    }

    let mtime = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);

    Ok(Some(DiscoveredFile {
        file_name: name.into_owned(),
        path,
        mtime,
    }))
}

/// The newest modification time among the text files in `dirs`.
///
/// Missing folders are ignored. Returns `None` when no file was found.
pub fn latest_mtime<'a>(
    dirs: impl IntoIterator<Item = &'a Path>,
    matcher: &GlobMatcher,
) -> Option<SystemTime> {
    let mut latest = None;
    for dir in dirs {
        if !dir.is_dir() {
            continue;
        }
        match discover_files(dir, matcher) {
            Ok(files) => {
                latest = files.iter().map(|f| f.mtime).chain(latest).max();
            }
            Err(e) => {
                tracing::warn!(
                    dir = %dir.display(),
                    error = %e,
                    "cannot scan folder"
                );
            }
        }
    }
    latest
}
