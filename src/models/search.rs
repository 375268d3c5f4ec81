use std::path::PathBuf;

/// One searchable line handed to the fuzzy finder: a single non-empty user message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    pub file_path: PathBuf,
    pub message_position: usize,
    pub sort_key: String,
    pub display_text: String,
}

impl SearchEntry {
    /// `file \t position \t display`, the line format fzf splits with `--delimiter '\t'`
    pub fn to_tsv_line(&self) -> String {
        format!("{}\t{}\t{}", self.file_path.display(), self.message_position, self.display_text)
    }
}
