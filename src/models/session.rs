use serde::Deserialize;
use serde_json::Value;

/// Record type carried by the first line of every session log
pub const RECORD_TYPE_SESSION: &str = "session";
/// Record type of conversation turns; everything else (tool events, model changes) is ignored
pub const RECORD_TYPE_MESSAGE: &str = "message";

const ROLE_USER: &str = "user";
const ROLE_ASSISTANT: &str = "assistant";
const SEGMENT_TYPE_TEXT: &str = "text";

/// First line of a Pi session JSONL file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionHeader {
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub version: Option<u64>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_nullable_string"
    )]
    pub id: String,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_nullable_string"
    )]
    pub timestamp: String,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_nullable_string"
    )]
    pub cwd: String,
}

impl SessionHeader {
    pub fn is_session(&self) -> bool {
        self.record_type == RECORD_TYPE_SESSION
    }
}

/// Any line after the header. Only `type == "message"` records carry a message body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageRecord {
    #[serde(rename = "type", default)]
    pub record_type: String,
    #[serde(default)]
    pub message: Option<MessageBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: MessageContent,
}

/// Message content as written by the agent.
///
/// Variant order matters: serde tries a plain string first, then a list of typed
/// segments, and anything else lands in `Other` so that an odd content value never
/// fails the enclosing record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Segments(Vec<ContentSegment>),
    Other(Value),
}

impl Default for MessageContent {
    fn default() -> Self {
        MessageContent::Other(Value::Null)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentSegment {
    #[serde(rename = "type", default)]
    pub segment_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl ContentSegment {
    pub fn is_text(&self) -> bool {
        self.segment_type.as_deref() == Some(SEGMENT_TYPE_TEXT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Maps a raw role string; roles other than user/assistant are not part of the transcript
    pub fn from_raw(role: &str) -> Option<Self> {
        match role {
            ROLE_USER => Some(Role::User),
            ROLE_ASSISTANT => Some(Role::Assistant),
            _ => None,
        }
    }
}

/// One user or assistant turn with its extracted text.
///
/// User turns carry their position: the zero-based count of user messages before
/// them in the file, including ones whose text came out empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMessage {
    User { position: usize, text: String },
    Assistant { text: String },
}

impl SessionMessage {
    pub fn role(&self) -> Role {
        match self {
            SessionMessage::User { .. } => Role::User,
            SessionMessage::Assistant { .. } => Role::Assistant,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            SessionMessage::User { text, .. } | SessionMessage::Assistant { text } => text,
        }
    }

    pub fn user_position(&self) -> Option<usize> {
        match self {
            SessionMessage::User { position, .. } => Some(*position),
            SessionMessage::Assistant { .. } => None,
        }
    }
}
