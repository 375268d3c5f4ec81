//! Data models for Pi session logs.
//!
//! - [`SessionHeader`] - first line of every session file
//! - [`MessageRecord`] / [`MessageContent`] - raw message lines and their polymorphic content
//! - [`SessionMessage`] - a parsed user or assistant turn
//! - [`SearchEntry`] - one line of the fuzzy-finder index
//!
//! Raw records are deserialized with serde and are deliberately lenient: missing fields
//! default to empty so that partially written lines still decode.

pub mod search;
pub mod session;

pub use search::SearchEntry;
pub use session::{
    ContentSegment, MessageBody, MessageContent, MessageRecord, RECORD_TYPE_MESSAGE,
    RECORD_TYPE_SESSION, Role, SessionHeader, SessionMessage,
};
