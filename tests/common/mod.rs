//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;

pub const TEST_CWD: &str = "/Users/test/projects/myapp";
pub const TEST_TIMESTAMP: &str = "2025-12-01T10:00:00.000Z";

/// Builder for a temporary Pi sessions directory
pub struct SessionDirBuilder {
    temp_dir: TempDir,
}

impl SessionDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a session file at `relative` (parent directories are created)
    pub fn with_session(self, relative: &str, session: SessionFileBuilder) -> Self {
        self.with_raw_file(relative, &session.to_jsonl())
    }

    /// Write arbitrary content at `relative`
    pub fn with_raw_file(self, relative: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create session subdirectory");
        }
        fs::write(&path, content).expect("Failed to write session file");
        self
    }

    pub fn file(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for SessionDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one session JSONL file
pub struct SessionFileBuilder {
    header: Option<String>,
    lines: Vec<String>,
}

impl SessionFileBuilder {
    pub fn new(cwd: &str, timestamp: &str) -> Self {
        let header = json!({
            "type": "session",
            "version": 1,
            "id": "0b3f6a1e-8d7c-4f3e-9a0b-1c2d3e4f5a6b",
            "timestamp": timestamp,
            "cwd": cwd,
        });
        Self {
            header: Some(header.to_string()),
            lines: Vec::new(),
        }
    }

    /// Replace the header line verbatim
    pub fn header_line(mut self, line: &str) -> Self {
        self.header = Some(line.to_string());
        self
    }

    pub fn without_header(mut self) -> Self {
        self.header = None;
        self
    }

    /// User message with plain string content
    pub fn user(self, text: &str) -> Self {
        self.message("user", json!(text))
    }

    /// User message with segment-list content
    pub fn user_content(self, content: serde_json::Value) -> Self {
        self.message("user", content)
    }

    /// Assistant message with a single text segment
    pub fn assistant(self, text: &str) -> Self {
        self.message("assistant", json!([{ "type": "text", "text": text }]))
    }

    pub fn message(mut self, role: &str, content: serde_json::Value) -> Self {
        let line = json!({
            "type": "message",
            "message": { "role": role, "content": content },
        });
        self.lines.push(line.to_string());
        self
    }

    /// Arbitrary line, e.g. a tool event or a corrupt write
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn to_jsonl(&self) -> String {
        let mut content = String::new();
        for line in self.header.iter().chain(self.lines.iter()) {
            content.push_str(line);
            content.push('\n');
        }
        content
    }
}

/// Sessions directory holding just `session`, as `s.jsonl`
pub fn single_session_dir(session: SessionFileBuilder) -> TempDir {
    SessionDirBuilder::new()
        .with_session("s.jsonl", session)
        .build()
}

/// Three user turns, each answered by the assistant
pub fn valid_session() -> SessionFileBuilder {
    SessionFileBuilder::new(TEST_CWD, TEST_TIMESTAMP)
        .user("Fix the login bug")
        .assistant("The bug is in auth.ts, the token check is inverted.")
        .user("Now add rate limiting")
        .assistant("Added rate limiting middleware.")
        .user("Deploy to staging")
        .assistant("Deployed.")
}

/// A realistic directory with several sessions across projects, plus junk
pub fn realistic_sessions_dir() -> TempDir {
    SessionDirBuilder::new()
        .with_session(
            "--Users-test-projects-myapp--/2025-12-01T10-00-00_a.jsonl",
            valid_session(),
        )
        .with_session(
            "--Users-test-projects-api--/2025-12-05T09-30-00_b.jsonl",
            SessionFileBuilder::new("/Users/test/projects/api", "2025-12-05T09:30:00.000Z")
                .user("Add pagination to /users")
                .raw(r#"{"type":"tool_call","name":"read","args":{"path":"src/users.rs"}}"#)
                .assistant("Done, see src/users.rs.")
                .user("Write tests for it"),
        )
        .with_session(
            "--Users-test-projects-api--/2025-11-20T18-00-00_c.jsonl",
            SessionFileBuilder::new("/Users/test/projects/api", "2025-11-20T18:00:00.000Z")
                .user_content(json!([{ "type": "image", "data": "iVBORw0KGgo=" }]))
                .user("What is in this screenshot?"),
        )
        .with_raw_file("--Users-test-projects-api--/notes.txt", "not a session")
        .with_raw_file("broken.jsonl", "{\"type\":\"sess")
        .build()
}
