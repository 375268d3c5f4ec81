//! Index building for Pi session logs
//!
//! - [`discover_session_files`] walks the sessions root for `.jsonl` logs
//! - [`build_index`] parses every log into [`SearchEntry`](crate::models::SearchEntry) values
//! - [`sort_entries`] puts the newest sessions and their latest messages first

pub mod builder;
pub mod discovery;
pub mod sort;

pub use builder::{
    IndexOptions, MAX_DISPLAY_TEXT_CHARS, build_index, build_index_with, index_session_file,
};
pub use discovery::discover_session_files;
pub use sort::{compare_entries, sort_entries};
