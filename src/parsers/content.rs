use crate::models::MessageContent;

/// Extract the human-readable text of one message's content.
///
/// - Plain string: the trimmed string (possibly empty)
/// - Segment list: the trimmed text of the first `text` segment that isn't blank
/// - Anything else: empty
pub fn extract_text(content: &MessageContent) -> String {
    match content {
        MessageContent::Text(text) => text.trim().to_string(),
        MessageContent::Segments(segments) => segments
            .iter()
            .filter(|segment| segment.is_text())
            .filter_map(|segment| segment.text.as_deref())
            .map(str::trim)
            .find(|text| !text.is_empty())
            .map(str::to_string)
            .unwrap_or_default(),
        MessageContent::Other(_) => String::new(),
    }
}

/// Same as [`extract_text`] but starting from raw JSON; malformed JSON yields empty text
pub fn extract_text_from_json(raw: &str) -> String {
    serde_json::from_str::<MessageContent>(raw)
        .map(|content| extract_text(&content))
        .unwrap_or_default()
}
