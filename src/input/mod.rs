//! Interactive URL input and syntactic validation
//!
//! Loops on the prompt until a structurally valid absolute URL is entered.
//! Invalid input prints a diagnostic and re-prompts; interrupt or end of
//! input aborts. The validated string is returned exactly as entered
//! (surrounding whitespace stripped, no normalization).

use dialoguer::{Input, theme::ColorfulTheme};
use std::io::{self, BufRead, IsTerminal, Write};
use url::Url;

use crate::core::constants::prompts;
use crate::ui::output;

/// Outcome of the input loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// A validated URL, exactly as the user entered it
    Url(String),
    /// The user interrupted the prompt or input ended
    Aborted,
}

/// Check whether `input` is a structurally valid absolute http(s) URL.
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.has_host(),
        Err(_) => false,
    }
}

/// Prompt until a valid URL is entered, or the user aborts.
///
/// Uses an interactive prompt on a terminal and plain line reads otherwise,
/// so piped input behaves the same as a typed session.
pub fn read_url() -> InputOutcome {
    if io::stdin().is_terminal() {
        read_url_interactive()
    } else {
        read_url_plain()
    }
}

fn read_url_interactive() -> InputOutcome {
    loop {
        // Ctrl-C inside the prompt surfaces as an error from dialoguer
        let line = match Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompts::ENTER_URL)
            .interact_text()
        {
            Ok(line) => line,
            Err(_) => return InputOutcome::Aborted,
        };

        let candidate = line.trim();
        if is_valid_url(candidate) {
            output::display_url_accepted();
            return InputOutcome::Url(candidate.to_string());
        }
        output::display_invalid_url();
    }
}

fn read_url_plain() -> InputOutcome {
    let stdin = io::stdin();
    loop {
        print!("{}: ", prompts::ENTER_URL);
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return InputOutcome::Aborted,
            Ok(_) => {}
        }

        let candidate = line.trim();
        if is_valid_url(candidate) {
            output::display_url_accepted();
            return InputOutcome::Url(candidate.to_string());
        }
        output::display_invalid_url();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_url_accepts_absolute_http_urls() {
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://example.com/a/b"));
        assert!(is_valid_url("https://example.com/a/b?q=1#frag"));
        assert!(is_valid_url("http://localhost:8080/path"));
    }

    #[test]
    fn test_is_valid_url_rejects_non_urls() {
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("   "));
    }

    #[test]
    fn test_is_valid_url_rejects_missing_scheme() {
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("www.example.com/path"));
    }

    #[test]
    fn test_is_valid_url_rejects_non_http_schemes() {
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("mailto:someone@example.com"));
        assert!(!is_valid_url("file:///etc/hosts"));
    }

    #[test]
    fn test_is_valid_url_rejects_missing_host() {
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("http://?q=1"));
    }

    // The WHATWG parser folds extra slashes after http(s) and reads the
    // next segment as the host, so this input parses as host "path-only".
    #[test]
    fn test_is_valid_url_accepts_slash_heavy_authority() {
        assert!(is_valid_url("http:///path-only"));
    }
}
