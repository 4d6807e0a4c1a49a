//! Output formatting and display logic for urlshort

use crate::core::constants::messages;
use crate::shorten::ShortenedUrl;
use crate::ui::color::{Colors, colorize};

/// Print the banner shown before the shortening loop starts
pub fn display_banner() {
    let line = "=".repeat(50);
    println!("{}", colorize(&line, Colors::CYAN));
    println!("     {}", colorize(messages::BANNER, Colors::CYAN));
    println!("     {}", colorize(messages::BANNER_NOTE, Colors::CYAN));
    println!("{}", colorize(&line, Colors::CYAN));
    println!();
}

/// Confirm that the entered URL validated
pub fn display_url_accepted() {
    println!("{}", colorize(messages::URL_VALID, Colors::BRIGHT_GREEN));
}

/// Print the diagnostic for a rejected input line
pub fn display_invalid_url() {
    println!("{}", colorize(messages::INVALID_URL, Colors::BRIGHT_RED));
}

/// Format one result entry the way it is displayed and paired: uppercased
/// provider name, then the short URL.
pub fn format_result(result: &ShortenedUrl) -> String {
    format!("{}: {}", result.provider, result.short_url)
}

/// Print the collected results, or the failure notice when none succeeded
pub fn display_results(results: &[ShortenedUrl]) {
    if results.is_empty() {
        println!(
            "\n{}",
            colorize(messages::FAILURE_NOTICE, Colors::BRIGHT_RED)
        );
        return;
    }

    println!(
        "\n{}\n",
        colorize(messages::SUCCESS_HEADER, Colors::BRIGHT_CYAN)
    );
    for result in results {
        println!(
            "{}",
            colorize(&format!(" [+] {}", format_result(result)), Colors::GREEN)
        );
    }
}

/// Print the abort notice for an interrupted run
pub fn display_abort() {
    println!("\n{}", colorize(messages::ABORT_NOTICE, Colors::RED));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(provider: &str, short_url: &str) -> ShortenedUrl {
        ShortenedUrl {
            provider: provider.to_string(),
            short_url: short_url.to_string(),
        }
    }

    #[test]
    fn test_format_result() {
        let entry = result("TINYURL", "https://tinyurl.com/x");
        assert_eq!(format_result(&entry), "TINYURL: https://tinyurl.com/x");
    }

    #[test]
    fn test_display_results_does_not_panic() {
        display_results(&[]);
        display_results(&[
            result("TINYURL", "https://tinyurl.com/x"),
            result("ISGD", "https://is.gd/y"),
        ]);
    }

    #[test]
    fn test_display_notices_do_not_panic() {
        display_banner();
        display_url_accepted();
        display_invalid_url();
        display_abort();
    }
}
