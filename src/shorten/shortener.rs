use async_trait::async_trait;
use reqwest::redirect::Policy;
use std::fmt;

use crate::config::Config;
use crate::core::constants::markers;
use crate::core::error::Result;
use crate::providers::{ApiShape, Provider};
use crate::reporting::logging;
use crate::ui::progress::ProgressReporter;

#[async_trait]
pub trait ShortenUrl {
    async fn shorten_all(
        &self,
        long_url: &str,
        providers: &[Provider],
        progress: Option<&ProgressReporter>,
    ) -> Vec<ShortenedUrl>;
}

/// A successfully shortened URL paired with the provider that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    /// Provider name, uppercased for display
    pub provider: String,
    pub short_url: String,
}

impl ShortenedUrl {
    pub fn new(provider: &Provider, short_url: String) -> Self {
        Self {
            provider: provider.display_name(),
            short_url,
        }
    }
}

impl fmt::Display for ShortenedUrl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.provider, self.short_url)
    }
}

/// Typed outcome of a single provider attempt.
///
/// Failures are never surfaced to the user individually; they are kept
/// typed so diagnostics can tell a timeout from a rejection or a
/// malformed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderOutcome {
    Shortened(String),
    Failed(FailureReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The request did not complete within the configured timeout
    Timeout,
    /// The request failed before a response arrived (DNS, connect, TLS)
    Request(String),
    /// The provider answered with a non-success HTTP status
    Status(u16),
    /// The response body could not be read
    Body(String),
    /// The response body was empty
    EmptyBody,
    /// The response body did not look like a URL
    BodyNotAUrl,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Timeout => write!(f, "operation timed out"),
            FailureReason::Request(desc) => write!(f, "request failed: {desc}"),
            FailureReason::Status(code) => write!(f, "unexpected status {code}"),
            FailureReason::Body(desc) => write!(f, "unreadable body: {desc}"),
            FailureReason::EmptyBody => write!(f, "empty response body"),
            FailureReason::BodyNotAUrl => write!(f, "response body is not a URL"),
        }
    }
}

/// Shortens one URL through a list of providers, one attempt per provider.
#[derive(Debug)]
pub struct Shortener {
    client: reqwest::Client,
}

impl Shortener {
    /// Build a shortener whose HTTP client follows the configuration:
    /// per-request timeout, custom user agent, bounded redirects.
    pub fn with_config(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .redirect(Policy::limited(10))
            .user_agent(config.effective_user_agent())
            .build()?;

        Ok(Self { client })
    }

    /// Attempt a single provider and classify the result.
    async fn attempt(&self, provider: &Provider, long_url: &str) -> ProviderOutcome {
        let request = match &provider.api {
            ApiShape::Get {
                endpoint,
                param,
                extra,
            } => {
                let mut request = self.client.get(endpoint).query(&[(*param, long_url)]);
                for (key, value) in *extra {
                    request = request.query(&[(*key, *value)]);
                }
                request
            }
            ApiShape::PostForm { endpoint, field } => {
                self.client.post(endpoint).form(&[(*field, long_url)])
            }
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) if err.is_timeout() => {
                return ProviderOutcome::Failed(FailureReason::Timeout);
            }
            Err(err) => {
                return ProviderOutcome::Failed(FailureReason::Request(err.to_string()));
            }
        };

        let status = response.status();
        if !status.is_success() {
            return ProviderOutcome::Failed(FailureReason::Status(status.as_u16()));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) if err.is_timeout() => {
                return ProviderOutcome::Failed(FailureReason::Timeout);
            }
            Err(err) => {
                return ProviderOutcome::Failed(FailureReason::Body(err.to_string()));
            }
        };

        let short_url = body.trim();
        if short_url.is_empty() {
            ProviderOutcome::Failed(FailureReason::EmptyBody)
        } else if !short_url.contains(markers::URL_MARKER) {
            ProviderOutcome::Failed(FailureReason::BodyNotAUrl)
        } else {
            ProviderOutcome::Shortened(short_url.to_string())
        }
    }
}

#[async_trait]
impl ShortenUrl for Shortener {
    /// Try each provider exactly once, in list order, sequentially.
    ///
    /// Successes accumulate in provider order; any failure is absorbed and
    /// the loop moves on. The returned list may be empty.
    async fn shorten_all(
        &self,
        long_url: &str,
        providers: &[Provider],
        progress: Option<&ProgressReporter>,
    ) -> Vec<ShortenedUrl> {
        let mut results = Vec::new();

        for provider in providers {
            if let Some(progress) = progress {
                progress.set_current_provider(provider.name);
            }

            let outcome = self.attempt(provider, long_url).await;
            logging::log_provider_outcome(provider.name, &outcome);

            if let ProviderOutcome::Shortened(short_url) = outcome {
                results.push(ShortenedUrl::new(provider, short_url));
            }
        }

        results
    }
}
