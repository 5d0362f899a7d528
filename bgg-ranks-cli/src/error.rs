use bgg_ranks_api::ApiError;
use bgg_ranks_lib::{SettingsError, SourceError};
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Settings could not be loaded
    #[error("{0}")]
    Settings(#[from] SettingsError),

    /// Collection files could not be read
    #[error("{0}")]
    Source(#[from] SourceError),

    /// Catalog API error
    #[error("{0}")]
    Api(#[from] ApiError),

    /// A collection named on the command line does not exist
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Some collections failed to process
    #[error("{failed} of {total} collections failed")]
    Failed { failed: usize, total: usize },
}

impl CliError {
    pub(crate) fn unknown_collection(msg: impl Into<String>) -> Self {
        Self::UnknownCollection(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}
