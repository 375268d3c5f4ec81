use std::borrow::Cow;

const ELLIPSIS: &str = "...";

/// Collapses every whitespace run (including newlines and tabs) into a single space
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `max_chars` characters of `text`, cut on a char boundary
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Like [`truncate_chars`] but appends `...` when something was cut
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> Cow<'_, str> {
    let truncated = truncate_chars(text, max_chars);
    if truncated.len() == text.len() {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(format!("{}{}", truncated, ELLIPSIS))
    }
}
