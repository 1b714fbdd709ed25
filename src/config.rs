//! Command line configuration for the desktop shell.

use clap::Parser;
use surecover_core::logging::{LoggingBuilder, DEFAULT_FILTER};

/// SureCover - property insurance quotes, policies and claims
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "surecover")]
#[command(about = "SureCover - property insurance quotes, policies and claims")]
pub struct Args {
    /// Log filter in RUST_LOG syntax (RUST_LOG wins when set)
    #[arg(long, default_value = DEFAULT_FILTER)]
    pub log_filter: String,

    /// Prefix console log lines with the emitting module
    #[arg(long)]
    pub log_targets: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 700.0)]
    pub width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    pub height: f64,

    /// Window title
    #[arg(long, default_value = "SureCover")]
    pub title: String,
}

impl Args {
    /// Logging configuration derived from the arguments.
    pub fn logging(&self) -> LoggingBuilder {
        LoggingBuilder::new()
            .with_filter(self.log_filter.clone())
            .with_target(self.log_targets)
    }
}
