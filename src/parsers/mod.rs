//! Parsers for Pi session JSONL files
//!
//! # Error Handling Strategy
//!
//! Session logs are append-only and may end in a partial write, so parsing is lenient:
//!
//! - **Individual line failures**: a line that doesn't decode is skipped (logged at `trace`)
//!   and the scan continues.
//! - **Invalid headers**: a file whose first line isn't a session header is rejected with a
//!   typed [`HeaderError`]; callers skip the file without reporting it to the user.
//! - **Runaway input**: a line over [`MAX_LINE_BYTES`] or an I/O error ends the scan of that
//!   file. Messages already read are kept.
//!
//! Nothing in this module writes to a session file.

pub mod content;
pub mod deserializers;
pub mod error;
pub mod lines;
pub mod session;

pub use content::{extract_text, extract_text_from_json};
pub use error::{HeaderError, LineError};
pub use lines::{LineReader, MAX_LINE_BYTES};
pub use session::{MessageStream, SessionReader, session_cwd};
