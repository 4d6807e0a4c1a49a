//! User interface components
//!
//! CLI definition, terminal color handling, the progress spinner,
//! and result output.

pub mod cli;
pub mod color;
pub mod output;
pub mod progress;

pub use cli::{Cli, cli_to_config};
pub use progress::ProgressReporter;
