use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Session logs are the `.jsonl` files anywhere under the sessions root
pub const SESSION_FILE_SUFFIX: &str = ".jsonl";

/// Find every session log under `root`, in a stable (file name) order
///
/// Symlinks to regular files are included; symlinked directories are not descended into.
/// A missing root, unreadable directories and dangling links are skipped rather than
/// reported: one bad entry must not hide every other session.
pub fn discover_session_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!(error = %e, "skipping unreadable directory entry");
                None
            }
        })
        .filter(|entry| is_session_file(entry.path()))
        .filter(is_regular_file)
        .map(|entry| entry.into_path())
        .collect()
}

fn is_regular_file(entry: &DirEntry) -> bool {
    if !entry.path_is_symlink() {
        return entry.file_type().is_file();
    }
    match fs::metadata(entry.path()) {
        Ok(metadata) => metadata.is_file(),
        Err(e) => {
            debug!(path = %entry.path().display(), error = %e, "skipping dangling symlink");
            false
        }
    }
}

fn is_session_file(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(SESSION_FILE_SUFFIX))
}
