use std::cmp::Ordering;

use crate::models::SearchEntry;

/// Newest session first, then latest message first; file path breaks the remaining ties
/// so the result never depends on discovery order
pub fn compare_entries(a: &SearchEntry, b: &SearchEntry) -> Ordering {
    b.sort_key
        .cmp(&a.sort_key)
        .then_with(|| b.message_position.cmp(&a.message_position))
        .then_with(|| a.file_path.cmp(&b.file_path))
}

pub fn sort_entries(entries: &mut [SearchEntry]) {
    entries.sort_by(compare_entries);
}
