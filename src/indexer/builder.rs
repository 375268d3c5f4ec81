//! Index builder for Pi session logs.
//!
//! # Error Handling Strategy
//!
//! Nothing a session log contains can fail the index:
//!
//! - **File-level problems**: unreadable files and files without a valid session header are
//!   skipped and logged at `debug`; they contribute no entries.
//! - **Line-level problems**: handled by the parser, which skips malformed lines.
//! - **Timestamps**: a header timestamp no configured format accepts degrades to its raw
//!   prefix for both display and sorting.
//!
//! An empty result is the caller's to report ("No Pi sessions found").

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use crate::config::Config;
use crate::indexer::discovery::discover_session_files;
use crate::indexer::sort::sort_entries;
use crate::models::SearchEntry;
use crate::parsers::SessionReader;
use crate::utils::{
    TimestampFormat, collapse_whitespace, format_path_with_tilde_internal, format_session_timestamp,
    single_line, strip_ansi_codes, truncate_chars,
};

/// Longest message excerpt shown in the picker, in characters
pub const MAX_DISPLAY_TEXT_CHARS: usize = 200;

const DISPLAY_SEPARATOR: &str = "│";

/// Inputs that shape display strings and sort keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOptions {
    /// Replaced by `~` at the start of each session's cwd
    pub home_dir: Option<PathBuf>,
    /// Header timestamp formats, tried in order
    pub timestamp_formats: Vec<TimestampFormat>,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            home_dir: dirs::home_dir(),
            timestamp_formats: TimestampFormat::defaults(),
        }
    }
}

impl IndexOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            timestamp_formats: config.timestamp_formats(),
            ..Self::default()
        }
    }
}

/// Build the picker index from every session log under `root`
///
/// Each non-empty user message becomes one [`SearchEntry`]. The result is sorted newest
/// session first and, within a session, latest message first.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use pi_fzf::build_index;
///
/// let sessions = PathBuf::from("/Users/alice/.pi/agent/sessions");
/// let index = build_index(&sessions);
/// println!("Indexed {} messages", index.len());
/// ```
pub fn build_index(root: &Path) -> Vec<SearchEntry> {
    build_index_with(root, &IndexOptions::default())
}

pub fn build_index_with(root: &Path, options: &IndexOptions) -> Vec<SearchEntry> {
    let files = discover_session_files(root);

    // Files share nothing, so each is parsed on its own worker; sorting afterwards makes
    // the output independent of scheduling
    let mut index: Vec<SearchEntry> = files
        .par_iter()
        .flat_map_iter(|path| index_session_file(path, options))
        .collect();

    sort_entries(&mut index);

    debug!(
        root = %root.display(),
        files = files.len(),
        entries = index.len(),
        "built session index"
    );
    index
}

/// Entries for one session file in message order, or none if it isn't a readable session
pub fn index_session_file(path: &Path, options: &IndexOptions) -> Vec<SearchEntry> {
    let mut reader = match SessionReader::open(path) {
        Ok(reader) => reader,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "skipping unreadable file");
            return Vec::new();
        }
    };
    let header = match reader.read_header() {
        Ok(header) => header,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "skipping non-session file");
            return Vec::new();
        }
    };

    let home = options.home_dir.as_deref();
    let cwd = single_line(&format_path_with_tilde_internal(&header.cwd, home));
    let time = format_session_timestamp(&header.timestamp, &options.timestamp_formats);
    let display_time = single_line(&time.display);

    reader
        .messages()
        .user_messages()
        .filter(|(_, text)| !text.is_empty())
        .map(|(position, text)| {
            let flattened = collapse_whitespace(&strip_ansi_codes(&text));
            let excerpt = truncate_chars(&flattened, MAX_DISPLAY_TEXT_CHARS);
            SearchEntry {
                file_path: path.to_path_buf(),
                message_position: position,
                sort_key: time.sort_key.clone(),
                display_text: format!(
                    "{}  {}  {}  {}",
                    display_time, cwd, DISPLAY_SEPARATOR, excerpt
                ),
            }
        })
        .collect()
}
