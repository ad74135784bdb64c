use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Filter used when neither the command line nor the config file sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Picks the filter directive to use when `RUST_LOG` is not set.
///
/// The command line wins over the config file, which wins over
/// [`DEFAULT_LOG_LEVEL`].
pub fn pick_directive<'a>(
    cli_level: Option<&'a str>,
    config_level: Option<&'a str>,
) -> &'a str {
    cli_level.or(config_level).unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Builds the log filter.
///
/// * Honours `RUST_LOG` when set.
/// * Otherwise uses [`pick_directive`].
pub fn build_filter(
    cli_level: Option<&str>,
    config_level: Option<&str>,
) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directive = pick_directive(cli_level, config_level);
    EnvFilter::try_new(directive)
        .map_err(|e| anyhow::anyhow!("invalid log level '{directive}': {e}"))
}

/// Initialise the tracing subscriber.
///
/// Logs go to stderr so stdout carries only results. Timestamps and target
/// names are stripped to keep CLI output clean.
pub fn init_tracing(
    cli_level: Option<&str>,
    config_level: Option<&str>,
) -> Result<()> {
    let filter = build_filter(cli_level, config_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging already initialized: {e}"))
}
