/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the magic strings, numbers, and other literal
/// values used across the application.
/// Prompt text constants
pub mod prompts {
    /// Prompt shown when asking for the URL to shorten
    pub const ENTER_URL: &str = "Enter URL";
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default per-provider request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
    /// Maximum reasonable timeout in seconds (1 hour)
    pub const MAX_TIMEOUT_SECONDS: u64 = 3600;
    /// Minimum timeout in seconds
    pub const MIN_TIMEOUT_SECONDS: u64 = 1;
}

/// Progress spinner constants
pub mod spinner {
    /// The four animation glyphs, plus the blank final frame
    pub const TICK_CHARS: &str = "|/-\\ ";
    /// Spinner cadence in milliseconds
    pub const TICK_MILLIS: u64 = 100;
    /// Message shown beside the spinner
    pub const MESSAGE: &str = "Shortening...";
}

/// Response classification constants
pub mod markers {
    /// Substring a provider response body must contain to count as a short URL
    pub const URL_MARKER: &str = "http";
}

/// User-facing message constants
pub mod messages {
    /// Header printed above the collected short URLs
    pub const SUCCESS_HEADER: &str = "Successfully Shortened URLs:";
    /// Notice printed when no provider succeeded
    pub const FAILURE_NOTICE: &str =
        "[!] Failed to shorten URL. Check internet connection or URL validity.";
    /// Notice printed when the user interrupts the run
    pub const ABORT_NOTICE: &str = "Aborted by user.";
    /// Diagnostic printed when the entered URL does not validate
    pub const INVALID_URL: &str = "[!] Invalid URL. Please include http:// or https://";
    /// Confirmation printed when the entered URL validates
    pub const URL_VALID: &str = "URL is valid.";
    /// Banner line printed before the shortening loop starts
    pub const BANNER: &str = "URL Shortener in progress, please wait...";
    /// Second banner line
    pub const BANNER_NOTE: &str = "Please keep your data connection active.";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_constants() {
        // Four animation frames and one cleared final frame
        assert_eq!(spinner::TICK_CHARS.chars().count(), 5);
        assert_eq!(spinner::TICK_MILLIS, 100);
    }

    #[test]
    fn test_timeout_constants() {
        assert_eq!(timeouts::DEFAULT_TIMEOUT_SECONDS, 10);
        assert_eq!(timeouts::MAX_TIMEOUT_SECONDS, 3600);
        assert_eq!(timeouts::MIN_TIMEOUT_SECONDS, 1);
    }

    #[test]
    fn test_marker_constants() {
        assert_eq!(markers::URL_MARKER, "http");
    }

    #[test]
    fn test_message_constants() {
        assert!(messages::FAILURE_NOTICE.starts_with("[!]"));
        assert!(messages::INVALID_URL.starts_with("[!]"));
        assert_eq!(messages::ABORT_NOTICE, "Aborted by user.");
    }

    #[test]
    fn test_banner_constants() {
        assert_eq!(messages::BANNER, "URL Shortener in progress, please wait...");
        assert_eq!(messages::BANNER_NOTE, "Please keep your data connection active.");
    }
}
