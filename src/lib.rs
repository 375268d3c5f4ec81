//! pi-fzf - Fuzzy find and resume Pi coding agent sessions
//!
//! This library indexes the session logs Pi writes under `~/.pi/agent/sessions/` and
//! hands them to fzf. It supports:
//!
//! - Streaming session JSONL files, tolerating malformed and partial lines
//! - Extracting the text of each user message into a flat, newest-first index
//! - Rendering a transcript preview that highlights one message
//! - Shell integration that resumes the picked session in its original directory
//!
//! # Example
//!
//! ```no_run
//! use pi_fzf::build_index;
//! use std::path::PathBuf;
//!
//! let sessions = PathBuf::from("/Users/alice/.pi/agent/sessions");
//! for entry in build_index(&sessions) {
//!     println!("{}", entry.to_tsv_line());
//! }
//! ```

pub mod cli;
pub mod config;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod preview;
pub mod utils;

// Re-export commonly used types
pub use indexer::{build_index, build_index_with, sort_entries};
pub use models::SearchEntry;
pub use parsers::{extract_text, session_cwd};
pub use preview::render_preview;
pub use utils::format_path_with_tilde;
