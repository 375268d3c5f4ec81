use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use crate::cli::picker::pick;
use crate::cli::shell::Shell;
use crate::config::Config;
use crate::indexer::{IndexOptions, build_index_with};
use crate::models::SearchEntry;
use crate::parsers::session_cwd;
use crate::preview::render_preview;

#[derive(Parser)]
#[command(name = "pi-fzf")]
#[command(version)]
#[command(about = "Fuzzy find and resume Pi coding agent sessions", long_about = None)]
pub struct Cli {
    /// Directory holding Pi session logs
    /// [default: $PI_CODING_AGENT_DIR/sessions or ~/.pi/agent/sessions]
    #[arg(long, global = true, value_name = "DIR")]
    pub sessions_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the fuzzy finder and print `<session file>\t<cwd>` for the pick (default)
    Pick,
    /// List all entries as TSV: `<session file>\t<message position>\t<display text>`
    List,
    /// Show a session preview (used by fzf)
    Preview {
        /// Session log to render
        file: PathBuf,
        /// User message position to highlight
        #[arg(allow_negative_numbers = true)]
        position: String,
    },
    /// Output shell integration
    Init {
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Print the working directory a session was started in
    Cwd {
        /// Session log to read
        file: PathBuf,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Pick) {
        Commands::Pick => pick_session(cli.sessions_dir.as_deref())?,
        Commands::List => list_entries(cli.sessions_dir.as_deref())?,
        Commands::Preview { file, position } => show_preview(&file, &position)?,
        Commands::Init { shell } => print!("{}", shell.init_script()),
        Commands::Cwd { file } => println!("{}", session_cwd(&file)),
    }

    Ok(())
}

fn load_index(sessions_dir_flag: Option<&Path>) -> Result<Vec<SearchEntry>> {
    let config = Config::load()?;
    let sessions_dir = config.resolve_sessions_dir(sessions_dir_flag)?;
    Ok(build_index_with(&sessions_dir, &IndexOptions::from_config(&config)))
}

fn pick_session(sessions_dir_flag: Option<&Path>) -> Result<()> {
    let entries = load_index(sessions_dir_flag)?;
    if entries.is_empty() {
        bail!("No Pi sessions found");
    }

    if let Some(session_file) = pick(&entries)? {
        println!("{}\t{}", session_file.display(), session_cwd(&session_file));
    }

    Ok(())
}

fn list_entries(sessions_dir_flag: Option<&Path>) -> Result<()> {
    let entries = load_index(sessions_dir_flag)?;

    let mut stdout = io::stdout().lock();
    for entry in &entries {
        if let Err(e) = writeln!(stdout, "{}", entry.to_tsv_line()) {
            // Piped into `head` and friends
            if e.kind() == ErrorKind::BrokenPipe {
                return Ok(());
            }
            return Err(e).context("Failed to write entries");
        }
    }

    Ok(())
}

fn show_preview(file: &Path, position: &str) -> Result<()> {
    print!("{}", render_preview(file, parse_target_position(position))?);
    Ok(())
}

/// Position argument as filled in by fzf: unparseable input highlights the first message,
/// a negative one highlights nothing
fn parse_target_position(raw: &str) -> Option<usize> {
    match raw.trim().parse::<i64>() {
        Ok(position) => usize::try_from(position).ok(),
        Err(_) => Some(0),
    }
}
