// Command-line interface definitions and parsing for urlshort

use clap::Parser;

use crate::config::CliConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// URL to shorten (prompted for interactively when omitted)
    pub url: Option<String>,

    // Core Options
    /// Per-provider request timeout in seconds (default: 10)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Core Options"
    )]
    pub timeout: Option<u64>,

    /// Providers to try, in order (comma-separated)
    #[arg(long, value_name = "NAMES", help_heading = "Core Options")]
    pub providers: Option<String>,

    // Output & Verbosity
    /// Suppress banners and informational output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Disable the progress spinner
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Network & Security
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network & Security")]
    pub user_agent: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Bridge the derive-based CLI into a `CliConfig` for merging
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    let providers = cli.providers.as_ref().map(|names| {
        names
            .split(',')
            .filter_map(|name| {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect()
    });

    CliConfig {
        timeout: cli.timeout,
        providers,
        user_agent: cli.user_agent.clone(),
        verbose: cli.verbose,
        quiet: cli.quiet,
        no_progress: cli.no_progress,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
