use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`EnvFilter` syntax, e.g. `pi_fzf=debug`)
pub const LOG_ENV: &str = "PI_FZF_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber. Stdout carries the index and previews, so logs never go there.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
