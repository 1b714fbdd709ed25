//! Console logging setup.
//!
//! Binaries call [`LoggingBuilder::init`] once at startup. `RUST_LOG` wins
//! over the configured filter when it is set.
//!
//! ```ignore
//! use surecover_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_filter("surecover=debug,surecover_core=debug")
//!     .init()?;
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor an explicit filter is given.
pub const DEFAULT_FILTER: &str = "surecover=info,surecover_core=info,surecover_ui=info";

/// Builder for the global tracing subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingBuilder {
    env_filter: Option<String>,
    with_target: bool,
    respect_env: bool,
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingBuilder {
    /// Create a new logging builder.
    pub fn new() -> Self {
        Self {
            env_filter: None,
            with_target: false,
            respect_env: true,
        }
    }

    /// Set the filter (e.g., "surecover=info,surecover_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Include the event target in console output.
    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    /// Ignore `RUST_LOG` and always use the configured filter.
    pub fn ignore_env(mut self) -> Self {
        self.respect_env = false;
        self
    }

    /// The filter directives that [`init`](Self::init) will install.
    pub fn filter_directives(&self) -> String {
        if self.respect_env {
            if let Ok(from_env) = std::env::var(EnvFilter::DEFAULT_ENV) {
                if !from_env.trim().is_empty() {
                    return from_env;
                }
            }
        }
        self.env_filter
            .clone()
            .unwrap_or_else(|| DEFAULT_FILTER.to_string())
    }

    /// Build the filter, falling back to [`DEFAULT_FILTER`] on bad directives.
    pub fn build_filter(&self) -> EnvFilter {
        let directives = self.filter_directives();
        EnvFilter::try_new(&directives).unwrap_or_else(|e| {
            eprintln!("invalid log filter {directives:?}: {e}, using default");
            EnvFilter::new(DEFAULT_FILTER)
        })
    }

    /// Install the subscriber globally.
    pub fn init(self) -> Result<(), TryInitError> {
        let filter = self.build_filter();
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_target(self.with_target))
            .with(filter)
            .try_init()
    }
}
