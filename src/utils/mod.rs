pub mod environment;
pub mod logging;
pub mod paths;
pub mod terminal;
pub mod text;
pub mod timestamps;

pub use environment::{AGENT_DIR_ENV, default_sessions_dir, sessions_dir_from_env};
pub use logging::init_logging;
pub use paths::{format_path_with_tilde, format_path_with_tilde_internal};
pub use terminal::{single_line, strip_ansi_codes};
pub use text::{collapse_whitespace, truncate_chars, truncate_with_ellipsis};
pub use timestamps::{SessionTime, TimestampFormat, format_session_timestamp};
