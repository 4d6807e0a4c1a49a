//! Core shared functionality
//!
//! Error type and application-wide constants used across modules.

pub mod constants;
pub mod error;

pub use error::{Result, UrlShortError};
