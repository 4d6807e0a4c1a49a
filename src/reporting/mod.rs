//! Reporting functionality
//!
//! Structured logging for configuration, provider attempts, and timing.

pub mod logging;
