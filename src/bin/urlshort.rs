use clap::Parser;
use urlshort::config::{CliConfig, Config};
use urlshort::core::error::{Result, UrlShortError};
use urlshort::input::{self, InputOutcome};
use urlshort::providers::resolve_providers;
use urlshort::reporting::logging;
use urlshort::shorten::{ShortenUrl, Shortener};
use urlshort::ui::output;
use urlshort::ui::{Cli, ProgressReporter, cli_to_config};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run_urlshort_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main shortening logic extracted from main() for testing
pub async fn run_urlshort_logic(cli: &Cli) -> Result<i32> {
    // Parse CLI arguments and merge them over file configuration
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;
    config.validate()?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);

    // Resolve provider names up front so a typo fails before any prompt
    let providers = resolve_providers(config.providers.as_deref())?;
    logging::log_config_info(&config, providers.len());

    // An interrupt while we block on the prompt must still print the abort
    // notice and exit cleanly; the guard is dropped once a URL is in hand.
    let prompt_guard = tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            output::display_abort();
            std::process::exit(0);
        }
    });

    // Obtain the URL: positional argument, or the interactive loop
    let url = obtain_url(cli);
    prompt_guard.abort();
    let Some(long_url) = url? else {
        output::display_abort();
        return Ok(0);
    };

    if !cli_config.quiet {
        output::display_banner();
    }

    let shortener = Shortener::with_config(&config)?;
    let mut progress = ProgressReporter::new(show_progress(&cli_config, &config));
    progress.start_shortening();

    logging::log_shorten_start(providers.len());
    let started = std::time::Instant::now();

    // Race the fan-out against an interrupt; either way the spinner is
    // cleared before anything else is printed.
    let results = tokio::select! {
        results = shortener.shorten_all(&long_url, &providers, Some(&progress)) => results,
        _ = tokio::signal::ctrl_c() => {
            progress.finish_and_clear();
            output::display_abort();
            return Ok(0);
        }
    };

    progress.finish_and_clear();
    logging::log_shorten_complete(results.len(), providers.len(), started.elapsed().as_millis());

    output::display_results(&results);
    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // CLI arguments take precedence over file configuration
    config.merge_with_cli(cli_config);
    Ok(config)
}

/// Whether the progress spinner should be shown
pub fn show_progress(cli_config: &CliConfig, config: &Config) -> bool {
    !cli_config.quiet && !config.no_progress.unwrap_or(false)
}

/// Obtain the URL to shorten: a positional argument is validated once,
/// otherwise the interactive loop runs until a valid URL or an abort.
pub fn obtain_url(cli: &Cli) -> Result<Option<String>> {
    if let Some(ref url) = cli.url {
        let candidate = url.trim();
        if !input::is_valid_url(candidate) {
            return Err(UrlShortError::Validation(format!(
                "'{candidate}' is not a valid absolute http(s) URL"
            )));
        }
        return Ok(Some(candidate.to_string()));
    }

    match input::read_url() {
        InputOutcome::Url(url) => Ok(Some(url)),
        InputOutcome::Aborted => Ok(None),
    }
}
