use thiserror::Error;

/// Why a line could not be produced by [`LineReader`](super::lines::LineReader)
#[derive(Debug, Error)]
pub enum LineError {
    #[error("line exceeds {limit} bytes")]
    TooLong { limit: usize },
    #[error("failed to read line: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a file was not accepted as a Pi session
#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("file is empty")]
    Empty,
    #[error(transparent)]
    Line(#[from] LineError),
    #[error("malformed header: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("record type {0:?} is not a session")]
    NotASession(String),
}
