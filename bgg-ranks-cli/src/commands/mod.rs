pub(crate) mod config;
pub(crate) mod hot;
pub(crate) mod list;
pub(crate) mod run;

use crate::error::CliError;

/// Build the runtime used for catalog requests.
pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {e}")))
}
