/// Security-focused integration tests
///
/// These tests verify the trust boundaries around session logs: symlinks, terminal escape
/// injection, oversized lines and pathological JSON
mod common;

use std::fs;

use pi_fzf::indexer::{IndexOptions, build_index_with};
use pi_fzf::preview::render_preview_with_home;
use pi_fzf::utils::TimestampFormat;
use serde_json::json;

use common::{
    SessionDirBuilder, SessionFileBuilder, TEST_CWD, TEST_TIMESTAMP, single_session_dir,
    valid_session,
};

fn options() -> IndexOptions {
    IndexOptions {
        home_dir: None,
        timestamp_formats: TimestampFormat::defaults(),
    }
}

#[test]
#[cfg(unix)] // Symlinks work differently on Windows
fn test_security_symlinked_session_file_is_indexed_read_only() {
    use std::os::unix::fs::symlink;

    let outside = SessionDirBuilder::new()
        .with_session("shared.jsonl", valid_session())
        .build();
    let target = outside.path().join("shared.jsonl");
    let before = fs::read(&target).unwrap();

    let sessions = SessionDirBuilder::new().build();
    let link = sessions.path().join("link.jsonl");
    symlink(&target, &link).unwrap();

    let index = build_index_with(sessions.path(), &options());
    assert_eq!(index.len(), 3);
    assert!(index.iter().all(|entry| entry.file_path == link));
    assert_eq!(fs::read(&target).unwrap(), before);
}

#[test]
#[cfg(unix)]
fn test_security_dangling_symlink_skipped() {
    use std::os::unix::fs::symlink;

    let sessions = SessionDirBuilder::new()
        .with_session("real.jsonl", valid_session())
        .build();
    symlink(
        sessions.path().join("deleted.jsonl"),
        sessions.path().join("dangling.jsonl"),
    )
    .unwrap();

    assert_eq!(build_index_with(sessions.path(), &options()).len(), 3);
}

#[test]
#[cfg(unix)]
fn test_security_symlinked_directory_not_followed() {
    use std::os::unix::fs::symlink;

    let outside = SessionDirBuilder::new()
        .with_session("project/secret.jsonl", valid_session())
        .build();
    let sessions = SessionDirBuilder::new().build();
    symlink(
        outside.path().join("project"),
        sessions.path().join("--linked--"),
    )
    .unwrap();

    assert!(build_index_with(sessions.path(), &options()).is_empty());
}

#[test]
fn test_security_escape_sequences_never_reach_display_text() {
    let cwd = "/tmp/\u{1b}[31mred\tcwd";
    let timestamp = "2025-12-01T10:00:00\u{1b}[2J.000Z";
    let session = SessionFileBuilder::new(cwd, timestamp)
        .user("\u{1b}]0;pwned\u{7}hello \u{1b}[1mworld\u{1b}[0m\u{0}\u{8}");
    let dir = single_session_dir(session);

    let index = build_index_with(dir.path(), &options());
    assert_eq!(index.len(), 1);

    let entry = &index[0];
    assert!(!entry.display_text.chars().any(|c| c.is_control()));
    assert!(entry.display_text.contains("/tmp/red cwd"));
    assert!(entry.display_text.ends_with("│  hello world"));
    assert_eq!(entry.to_tsv_line().matches('\t').count(), 2);
}

#[test]
fn test_security_oversized_line_ends_scan_keeps_earlier_messages() {
    let huge = json!({
        "type": "message",
        "message": { "role": "user", "content": "a".repeat(11 * 1024 * 1024) },
    })
    .to_string();
    let session = SessionFileBuilder::new(TEST_CWD, TEST_TIMESTAMP)
        .user("before the flood")
        .raw(&huge)
        .user("after the flood");
    let dir = single_session_dir(session);

    let index = build_index_with(dir.path(), &options());
    assert_eq!(index.len(), 1);
    assert!(index[0].display_text.ends_with("before the flood"));
}

#[test]
fn test_security_large_message_within_limit_is_truncated() {
    let text = "word ".repeat(200_000);
    let session = SessionFileBuilder::new(TEST_CWD, TEST_TIMESTAMP).user(&text);
    let dir = single_session_dir(session);

    let index = build_index_with(dir.path(), &options());
    assert_eq!(index.len(), 1);
    assert!(index[0].display_text.len() < 400);

    let preview =
        render_preview_with_home(&dir.path().join("s.jsonl"), Some(0), None).unwrap();
    assert!(preview.len() < 2_000);
}

#[test]
fn test_security_deeply_nested_json_line_is_skipped() {
    let nested = format!("{}{}", "[".repeat(1_000), "]".repeat(1_000));
    let line = format!(
        r#"{{"type":"message","message":{{"role":"user","content":{}}}}}"#,
        nested
    );
    let session = SessionFileBuilder::new(TEST_CWD, TEST_TIMESTAMP)
        .raw(&line)
        .user("survivor");
    let dir = single_session_dir(session);

    let index = build_index_with(dir.path(), &options());
    assert_eq!(index.len(), 1);
    assert_eq!(index[0].message_position, 0);
}

#[test]
fn test_security_wide_json_object() {
    let mut fields = serde_json::Map::new();
    for i in 0..10_000 {
        fields.insert(format!("field_{}", i), json!(i));
    }
    fields.insert("type".to_string(), json!("message"));
    fields.insert(
        "message".to_string(),
        json!({ "role": "user", "content": "wide record" }),
    );
    let line = serde_json::Value::Object(fields).to_string();
    let session = SessionFileBuilder::new(TEST_CWD, TEST_TIMESTAMP).raw(&line);
    let dir = single_session_dir(session);

    let index = build_index_with(dir.path(), &options());
    assert_eq!(index.len(), 1);
    assert!(index[0].display_text.ends_with("wide record"));
}

#[test]
fn test_security_invalid_utf8_line_is_skipped() {
    let header = json!({"type": "session", "timestamp": TEST_TIMESTAMP, "cwd": TEST_CWD});
    let clean = json!({"type": "message", "message": {"role": "user", "content": "clean"}});

    let mut content = format!("{}\n", header).into_bytes();
    content.extend_from_slice(
        b"{\"type\":\"message\",\"message\":{\"role\":\"user\",\"content\":\"\xff\xfe\"}}\n",
    );
    content.extend_from_slice(clean.to_string().as_bytes());
    let dir = SessionDirBuilder::new().build();
    fs::write(dir.path().join("s.jsonl"), content).unwrap();

    let index = build_index_with(dir.path(), &options());
    assert_eq!(index.len(), 1);
    assert!(index[0].display_text.ends_with("clean"));
}

#[test]
fn test_security_many_session_files() {
    let mut builder = SessionDirBuilder::new();
    for i in 0..500 {
        let relative = format!("project-{}/s{}.jsonl", i % 20, i);
        builder = builder.with_session(&relative, valid_session());
    }
    let dir = builder.build();

    assert_eq!(build_index_with(dir.path(), &options()).len(), 1_500);
}
