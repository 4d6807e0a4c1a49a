use crate::config::Config;
use crate::core::constants::timeouts;
use crate::shorten::ProviderOutcome;
use log::{debug, error, info};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config, provider_count: usize) {
    let timeout = config.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS);
    info!("Configuration: providers={provider_count}, timeout={timeout}s");
    info!("HTTP: user_agent={}", config.effective_user_agent());
}

/// Log the start of the shortening loop
pub fn log_shorten_start(provider_count: usize) {
    info!("Trying {provider_count} provider(s)");
}

/// Log the typed outcome of a single provider attempt
pub fn log_provider_outcome(provider: &str, outcome: &ProviderOutcome) {
    match outcome {
        ProviderOutcome::Shortened(short_url) => debug!("✓ {provider} -> {short_url}"),
        ProviderOutcome::Failed(reason) => debug!("✗ {provider} -> {reason}"),
    }
}

/// Log completion of the shortening loop
pub fn log_shorten_complete(succeeded: usize, attempted: usize, duration_ms: u128) {
    info!("Shortening complete: {succeeded}/{attempted} providers succeeded ({duration_ms}ms)");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
