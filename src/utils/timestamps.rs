use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, Utc};

use super::text::truncate_chars;

/// Config name for the built-in RFC3339 parser
pub const RFC3339_FORMAT_NAME: &str = "rfc3339";

/// Millisecond UTC timestamps written without an offset designator chrono understands
const MILLIS_Z_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

const DISPLAY_PATTERN: &str = "%b %d %H:%M";

/// Width of the raw fallback used when no format matches ("YYYY-MM-DDTHH:MM")
const RAW_FALLBACK_CHARS: usize = 16;

/// One accepted header timestamp format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampFormat {
    /// RFC3339, with or without fractional seconds
    Rfc3339,
    /// A chrono strftime pattern; patterns without an offset are read as UTC
    Pattern(String),
}

impl TimestampFormat {
    /// `"rfc3339"` selects the RFC3339 parser, anything else is a strftime pattern
    pub fn from_config(value: &str) -> Self {
        if value.eq_ignore_ascii_case(RFC3339_FORMAT_NAME) {
            TimestampFormat::Rfc3339
        } else {
            TimestampFormat::Pattern(value.to_string())
        }
    }

    /// RFC3339 first, then the fixed millisecond-Z layout
    pub fn defaults() -> Vec<Self> {
        vec![TimestampFormat::Rfc3339, TimestampFormat::Pattern(MILLIS_Z_PATTERN.to_string())]
    }

    fn parse(&self, raw: &str) -> Option<DateTime<FixedOffset>> {
        match self {
            TimestampFormat::Rfc3339 => DateTime::parse_from_rfc3339(raw).ok(),
            TimestampFormat::Pattern(pattern) => {
                DateTime::parse_from_str(raw, pattern).ok().or_else(|| {
                    NaiveDateTime::parse_from_str(raw, pattern)
                        .ok()
                        .map(|naive| naive.and_utc().fixed_offset())
                })
            }
        }
    }
}

/// Display fragment and sort key derived from a session header timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTime {
    /// `"Jan 02 15:04"` in the timestamp's own offset
    pub display: String,
    /// Fixed-width UTC RFC3339 with nanoseconds, so string order is chronological
    pub sort_key: String,
}

/// Tries `formats` in order; if none matches, the first 16 raw characters serve as both
/// display and sort key
pub fn format_session_timestamp(raw: &str, formats: &[TimestampFormat]) -> SessionTime {
    match formats.iter().find_map(|format| format.parse(raw)) {
        Some(parsed) => SessionTime {
            display: parsed.format(DISPLAY_PATTERN).to_string(),
            sort_key: parsed.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Nanos, true),
        },
        None => {
            let prefix = truncate_chars(raw, RAW_FALLBACK_CHARS).to_string();
            SessionTime {
                display: prefix.clone(),
                sort_key: prefix,
            }
        }
    }
}
