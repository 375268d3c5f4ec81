use std::io::{BufRead, Read};

use super::error::LineError;

/// Upper bound for a single JSONL record (10MB)
pub const MAX_LINE_BYTES: usize = 10 * 1024 * 1024;

/// Finite producer of raw lines with a per-line byte cap.
///
/// Trailing `\n` / `\r\n` is stripped. An oversized line or an I/O error is yielded
/// once as `Err` and ends the iteration; nothing after it is read.
pub struct LineReader<R> {
    inner: R,
    max_line_bytes: usize,
    finished: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_limit(inner, MAX_LINE_BYTES)
    }

    pub fn with_limit(inner: R, max_line_bytes: usize) -> Self {
        Self {
            inner,
            max_line_bytes,
            finished: false,
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<Vec<u8>, LineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut line = Vec::new();
        // One byte of headroom so a line of exactly `max_line_bytes` plus its newline fits
        let limit = self.max_line_bytes as u64 + 1;
        match (&mut self.inner).take(limit).read_until(b'\n', &mut line) {
            Ok(0) => {
                self.finished = true;
                None
            }
            Ok(_) => {
                if line.last() == Some(&b'\n') {
                    line.pop();
                    if line.last() == Some(&b'\r') {
                        line.pop();
                    }
                } else if line.len() > self.max_line_bytes {
                    self.finished = true;
                    return Some(Err(LineError::TooLong {
                        limit: self.max_line_bytes,
                    }));
                }
                Some(Ok(line))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(LineError::Io(e)))
            }
        }
    }
}
