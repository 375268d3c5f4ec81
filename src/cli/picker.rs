use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::models::SearchEntry;

pub const FZF_BINARY: &str = "fzf";

const FZF_HEADER: &str = "Pi Sessions · search all messages · Enter to resume · Esc to cancel";
const FZF_PROMPT: &str = "π › ";

/// Arguments for fzf: show only the display column, preview through `<self> preview`
pub fn fzf_args(self_exe: &Path) -> Vec<String> {
    let preview = format!("{} preview {{1}} {{2}}", shell_quote(&self_exe.to_string_lossy()));
    [
        "--delimiter",
        "\t",
        "--with-nth",
        "3",
        "--preview",
        preview.as_str(),
        "--preview-window",
        "right:50%:wrap",
        "--header",
        FZF_HEADER,
        "--prompt",
        FZF_PROMPT,
        "--height",
        "80%",
        "--layout",
        "reverse",
        "--border",
        "rounded",
        "--ansi",
    ]
    .iter()
    .map(|arg| arg.to_string())
    .collect()
}

/// Run fzf over `entries` and return the session file the user picked
///
/// Returns `Ok(None)` when fzf exits unsuccessfully (cancelled with Esc, or no match).
pub fn pick(entries: &[SearchEntry]) -> Result<Option<PathBuf>> {
    let self_exe = std::env::current_exe().context("Failed to locate the pi-fzf executable")?;

    let mut child = Command::new(FZF_BINARY)
        .args(fzf_args(&self_exe))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                anyhow!("fzf not found, install it: https://github.com/junegunn/fzf")
            } else {
                anyhow!(e).context("Failed to launch fzf")
            }
        })?;

    {
        let mut stdin = child.stdin.take().context("Failed to open fzf stdin")?;
        for entry in entries {
            if let Err(e) = writeln!(stdin, "{}", entry.to_tsv_line()) {
                // fzf can exit before reading everything
                if e.kind() == ErrorKind::BrokenPipe {
                    break;
                }
                return Err(e).context("Failed to write entries to fzf");
            }
        }
    }

    let output = child.wait_with_output().context("Failed to wait for fzf")?;
    if !output.status.success() {
        debug!(status = %output.status, "fzf exited without a selection");
        return Ok(None);
    }

    Ok(parse_selection(&String::from_utf8_lossy(&output.stdout)))
}

/// Session file from the first column of fzf's output line
pub fn parse_selection(output: &str) -> Option<PathBuf> {
    let line = output.trim_end_matches(['\n', '\r']);
    line.split('\t').next().filter(|file| !file.is_empty()).map(PathBuf::from)
}

/// Single-quote `value` for the `sh -c` fzf runs its preview command through
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
