//! URL shortening logic
//!
//! This module handles the best-effort fan-out over the provider
//! catalog using async HTTP requests.

pub mod shortener;

// Re-export commonly used items
pub use shortener::{FailureReason, ProviderOutcome, ShortenUrl, ShortenedUrl, Shortener};
