//! Collection sources, settings, snapshot output, and the processing
//! pipeline tying them to the catalog client and the ranking core.

pub mod error;
pub mod pipeline;
pub mod settings;
pub mod sink;
pub mod sources;

pub use error::{PipelineError, SettingsError, SinkError, SourceError};
pub use pipeline::{
    CollectionOutcome, CollectionReport, PipelineOptions, RecordSource, rank_collection,
    run_collections,
};
pub use settings::{SettingSource, SettingSources, Settings, SettingsOverrides, settings_path};
pub use sink::{snapshot_path, today, write_snapshot};
pub use sources::{Collection, load_collection, load_collections, save_collection};
