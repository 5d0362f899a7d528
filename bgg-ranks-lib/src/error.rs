use std::path::PathBuf;

use bgg_ranks_api::ApiError;
use bgg_ranks_core::BatchError;
use thiserror::Error;

/// Errors reading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid setting `{key}`: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Errors discovering or reading collection files.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Created input directory {}. Add '.yaml' files to it and rerun", .0.display())]
    Created(PathBuf),
    #[error("No valid collection files in {}", .0.display())]
    NoSources(PathBuf),
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("YAML encode error for {path}: {source}")]
    Encode {
        path: String,
        source: serde_yml::Error,
    },
}

/// Errors writing a snapshot.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of one collection's fetch, normalize, and write.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] ApiError),
    #[error(transparent)]
    Batch(#[from] BatchError),
    #[error("write failed: {0}")]
    Sink(#[from] SinkError),
}
