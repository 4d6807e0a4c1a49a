use std::fmt;

/// Comprehensive error types for urlshort operations
#[derive(Debug)]
pub enum UrlShortError {
    /// Configuration error
    Config(String),

    /// URL validation error
    Validation(String),

    /// HTTP client error
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Unknown provider name error
    UnknownProvider(String),
}

impl fmt::Display for UrlShortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlShortError::Config(msg) => write!(f, "Configuration error: {msg}"),
            UrlShortError::Validation(msg) => write!(f, "Validation error: {msg}"),
            UrlShortError::Http(err) => write!(f, "HTTP error: {err}"),
            UrlShortError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            UrlShortError::UnknownProvider(name) => write!(f, "Unknown provider: {name}"),
        }
    }
}

impl std::error::Error for UrlShortError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlShortError::Http(err) => Some(err),
            UrlShortError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for UrlShortError {
    fn from(err: reqwest::Error) -> Self {
        UrlShortError::Http(err)
    }
}

impl From<toml::de::Error> for UrlShortError {
    fn from(err: toml::de::Error) -> Self {
        UrlShortError::TomlParsing(err)
    }
}

/// Type alias for Results using UrlShortError
pub type Result<T> = std::result::Result<T, UrlShortError>;
