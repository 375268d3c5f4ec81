//! Shell integration snippets
//!
//! Each snippet defines a `pi-fzf-widget` bound to Alt+P. The widget runs the picker,
//! changes to the session's working directory when it still exists, and resumes the
//! session with `pi --session <file>`.

use clap::ValueEnum;

const FISH_INIT: &str = include_str!("../../shell/pi-fzf.fish");
const BASH_INIT: &str = include_str!("../../shell/pi-fzf.bash");
const ZSH_INIT: &str = include_str!("../../shell/pi-fzf.zsh");

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Fish,
    Bash,
    Zsh,
}

impl Shell {
    pub fn init_script(self) -> &'static str {
        match self {
            Shell::Fish => FISH_INIT,
            Shell::Bash => BASH_INIT,
            Shell::Zsh => ZSH_INIT,
        }
    }
}
