//! urlshort - shorten a URL through multiple public providers at once
//!
//! The crate is organized into focused modules:
//! - `input`: interactive URL prompting and syntactic validation
//! - `providers`: the fixed catalog of shortening services and their APIs
//! - `shorten`: the best-effort fan-out loop over the catalog
//! - `ui`: CLI definition, terminal colors, spinner, and result output
//! - `config`: TOML configuration loading and CLI merging
//! - `reporting`: structured logging
//! - `core`: shared error type and constants

pub mod config;
pub mod core;
pub mod input;
pub mod providers;
pub mod reporting;
pub mod shorten;
pub mod ui;

// Re-export commonly used items at the crate root
pub use crate::core::error::{Result, UrlShortError};
pub use crate::providers::{ApiShape, Provider, catalog, resolve_providers};
pub use crate::shorten::{FailureReason, ProviderOutcome, ShortenUrl, ShortenedUrl, Shortener};
