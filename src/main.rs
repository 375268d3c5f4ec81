use std::process::ExitCode;

fn main() -> ExitCode {
    pi_fzf::utils::init_logging();

    match pi_fzf::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
