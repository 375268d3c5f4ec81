use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use super::content::extract_text;
use super::error::HeaderError;
use super::lines::LineReader;
use crate::models::{MessageRecord, RECORD_TYPE_MESSAGE, Role, SessionHeader, SessionMessage};

/// Streaming reader over one session log: header first, then messages
pub struct SessionReader<R> {
    lines: LineReader<R>,
}

impl SessionReader<BufReader<File>> {
    /// Open a session file for reading. Only the open itself can fail here.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> SessionReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: LineReader::new(reader),
        }
    }

    /// Consume the first line and decode it as a session header
    pub fn read_header(&mut self) -> Result<SessionHeader, HeaderError> {
        let line = self.lines.next().ok_or(HeaderError::Empty)??;
        let header: SessionHeader = serde_json::from_slice(&line)?;
        if !header.is_session() {
            return Err(HeaderError::NotASession(header.record_type));
        }
        Ok(header)
    }

    /// Stream the remaining lines as user/assistant messages
    pub fn messages(self) -> MessageStream<R> {
        MessageStream {
            lines: self.lines,
            next_user_position: 0,
            line_number: 1,
        }
    }
}

/// Lazy sequence of user and assistant turns.
///
/// Malformed lines and non-message records are skipped. Every user record advances the
/// position counter, even when its text is empty, so positions stay stable between the
/// indexing pass and the preview pass.
pub struct MessageStream<R> {
    lines: LineReader<R>,
    next_user_position: usize,
    line_number: usize,
}

impl<R: BufRead> MessageStream<R> {
    /// Only user messages, as `(position, text)`; empty texts are included
    pub fn user_messages(self) -> impl Iterator<Item = (usize, String)> {
        self.filter_map(|message| match message {
            SessionMessage::User { position, text } => Some((position, text)),
            SessionMessage::Assistant { .. } => None,
        })
    }
}

impl<R: BufRead> Iterator for MessageStream<R> {
    type Item = SessionMessage;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    debug!(line = self.line_number + 1, error = %e, "stopping session scan");
                    return None;
                }
            };
            self.line_number += 1;

            let record = match serde_json::from_slice::<MessageRecord>(&line) {
                Ok(record) => record,
                Err(e) => {
                    trace!(line = self.line_number, error = %e, "skipping malformed line");
                    continue;
                }
            };
            if record.record_type != RECORD_TYPE_MESSAGE {
                continue;
            }
            let Some(body) = record.message else {
                continue;
            };
            let Some(role) = Role::from_raw(&body.role) else {
                continue;
            };

            let text = extract_text(&body.content);
            return Some(match role {
                Role::User => {
                    let position = self.next_user_position;
                    self.next_user_position += 1;
                    SessionMessage::User { position, text }
                }
                Role::Assistant => SessionMessage::Assistant { text },
            });
        }
    }
}

/// Working directory recorded in a session's header, or empty if it can't be read
pub fn session_cwd(path: &Path) -> String {
    let mut reader = match SessionReader::open(path) {
        Ok(reader) => reader,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "cannot open session");
            return String::new();
        }
    };
    match reader.read_header() {
        Ok(header) => header.cwd,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "not a session");
            String::new()
        }
    }
}
