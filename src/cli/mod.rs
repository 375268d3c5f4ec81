//! Command-line glue around the index: fzf picker, list/preview plumbing and shell init

pub mod commands;
pub mod picker;
pub mod shell;

pub use commands::{Cli, Commands, run};
pub use shell::Shell;
