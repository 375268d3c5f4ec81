//! Terminal output sanitization
//!
//! Session text is arbitrary agent/user output and is printed into fzf (run with `--ansi`)
//! and its preview pane. Escape sequences in that text could recolor or rewrite the
//! picker, so they are removed before display.

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Strips ANSI escape sequences and control characters, keeping `\t`, `\n` and `\r`
///
/// Handles CSI sequences (`ESC [ ... letter`) and OSC sequences (`ESC ] ... BEL` or
/// `ESC ] ... ESC \`). Any other escape drops just the ESC byte.
///
/// # Examples
///
/// ```
/// use pi_fzf::utils::terminal::strip_ansi_codes;
///
/// let text = "\x1b[31mRed text\x1b[0m";
/// assert_eq!(strip_ansi_codes(text), "Red text");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            match chars.peek() {
                Some('[') => {
                    chars.next();
                    for next_ch in chars.by_ref() {
                        if next_ch.is_ascii_alphabetic() || next_ch == '~' {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    while let Some(next_ch) = chars.next() {
                        if next_ch == BEL {
                            break;
                        }
                        if next_ch == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
            continue;
        }

        if ch.is_control() && ch != '\t' && ch != '\n' && ch != '\r' {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Sanitizes a fragment for a single TSV line: no escapes, no tabs, no newlines
pub fn single_line(text: &str) -> String {
    strip_ansi_codes(text).replace(['\t', '\n', '\r'], " ")
}
