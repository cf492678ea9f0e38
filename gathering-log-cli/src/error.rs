use thiserror::Error;

use gathering_log_core::{SettingsError, StoreError};
use gathering_log_import::{EnrichError, ImportError};
use gathering_log_scraper::ScrapeError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Settings file could not be read or written
    #[error("Config error: {0}")]
    Config(String),

    /// Items or locales store failure
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Upstream client setup failed
    #[error("Upstream error: {0}")]
    Upstream(#[from] ScrapeError),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}

impl From<SettingsError> for CliError {
    fn from(e: SettingsError) -> Self {
        Self::config(e.to_string())
    }
}

impl From<ImportError> for CliError {
    fn from(e: ImportError) -> Self {
        match e {
            ImportError::Store(e) => Self::Store(e),
        }
    }
}

impl From<EnrichError> for CliError {
    fn from(e: EnrichError) -> Self {
        match e {
            EnrichError::Store(e) => Self::Store(e),
        }
    }
}
