use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::{Role, SessionHeader, SessionMessage};
use crate::parsers::SessionReader;
use crate::utils::{format_path_with_tilde_internal, strip_ansi_codes, truncate_with_ellipsis};

pub const USER_MARKER: &str = "▶ YOU";
pub const ASSISTANT_MARKER: &str = "◀ PI";
pub const TARGET_MARKER: &str = "  ← ← ←";

/// Characters shown per message; the highlighted message gets more room
pub const MESSAGE_PREVIEW_CHARS: usize = 300;
pub const TARGET_PREVIEW_CHARS: usize = 800;

const RULE_WIDTH: usize = 60;

/// Render the transcript of `path` for fzf's preview pane, highlighting the user message
/// at `target_position` (`None` highlights nothing)
///
/// The file is parsed from scratch with the same position counting the index uses, so a
/// position taken from an index entry highlights that entry's message.
///
/// # Errors
///
/// Fails only if the file can't be opened. A readable file without a valid session header
/// still renders, with blank header fields and every line scanned for messages.
pub fn render_preview(path: &Path, target_position: Option<usize>) -> Result<String> {
    render_preview_with_home(path, target_position, dirs::home_dir().as_deref())
}

pub fn render_preview_with_home(
    path: &Path,
    target_position: Option<usize>,
    home: Option<&Path>,
) -> Result<String> {
    let open = || {
        SessionReader::open(path).with_context(|| format!("Cannot open {}", path.display()))
    };

    let mut reader = open()?;
    let (header, stream) = match reader.read_header() {
        Ok(header) => (header, reader.messages()),
        Err(e) => {
            debug!(
                path = %path.display(),
                error = %e,
                "previewing file without a session header"
            );
            // The first line may itself be a message, so scan again from the start
            (SessionHeader::default(), open()?.messages())
        }
    };
    let messages: Vec<SessionMessage> =
        stream.filter(|message| !message.text().is_empty()).collect();

    Ok(render_transcript(&header, &messages, target_position, home))
}

fn render_transcript(
    header: &SessionHeader,
    messages: &[SessionMessage],
    target_position: Option<usize>,
    home: Option<&Path>,
) -> String {
    let user_count = messages.iter().filter(|m| m.role() == Role::User).count();

    let mut lines = vec![
        format!(
            "📂 {}",
            strip_ansi_codes(&format_path_with_tilde_internal(&header.cwd, home))
        ),
        format!("🕐 {}", strip_ansi_codes(&header.timestamp)),
        format!("💬 {} messages in session", user_count),
        String::new(),
        "─".repeat(RULE_WIDTH),
    ];

    for message in messages {
        let is_target = target_position.is_some() && message.user_position() == target_position;
        let role_marker = match message.role() {
            Role::User => USER_MARKER,
            Role::Assistant => ASSISTANT_MARKER,
        };
        let limit = if is_target {
            TARGET_PREVIEW_CHARS
        } else {
            MESSAGE_PREVIEW_CHARS
        };
        let text = strip_ansi_codes(message.text());

        lines.push(String::new());
        lines.push(format!(
            "{}{}",
            role_marker,
            if is_target { TARGET_MARKER } else { "" }
        ));
        lines.push(truncate_with_ellipsis(&text, limit).into_owned());
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}
