//! Per-collection processing: fetch → normalize → rank → write.
//!
//! Collections share no state, so several run at once (bounded by
//! `concurrency`). A failure in one collection is reported in its
//! [`CollectionOutcome`] and never stops the others.

use std::future::Future;
use std::path::PathBuf;

use bgg_ranks_api::{ApiError, XmlApiClient};
use bgg_ranks_core::{RawRecord, Ranking, process_batch};
use chrono::NaiveDate;
use futures::stream::{self, StreamExt};

use crate::error::PipelineError;
use crate::sink;
use crate::sources::Collection;

/// Supplier of raw records for a list of identifiers.
pub trait RecordSource {
    fn fetch_records(
        &self,
        ids: &[u64],
    ) -> impl Future<Output = Result<Vec<RawRecord>, ApiError>> + Send;
}

impl RecordSource for XmlApiClient {
    async fn fetch_records(&self, ids: &[u64]) -> Result<Vec<RawRecord>, ApiError> {
        self.fetch_things(ids).await
    }
}

/// How to run a set of collections.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub out_dir: PathBuf,
    pub date: NaiveDate,
    pub concurrency: usize,
    /// Rank but do not write snapshots.
    pub dry_run: bool,
}

/// A successfully processed collection.
#[derive(Debug, Clone)]
pub struct CollectionReport {
    pub ranking: Ranking,
    /// Snapshot location; `None` on a dry run.
    pub written: Option<PathBuf>,
}

/// Result of processing one collection.
#[derive(Debug)]
pub struct CollectionOutcome {
    pub name: String,
    pub result: Result<CollectionReport, PipelineError>,
}

/// Fetch and rank one collection. Either the full ranking is produced or
/// an error; there is no partial result.
pub async fn rank_collection<S: RecordSource>(
    source: &S,
    collection: &Collection,
) -> Result<Ranking, PipelineError> {
    let records = source.fetch_records(&collection.ids).await?;
    log::debug!(
        "{}: received {} records for {} ids",
        collection.name,
        records.len(),
        collection.ids.len()
    );
    Ok(process_batch(&collection.name, &records)?)
}

async fn run_one<S: RecordSource>(
    source: &S,
    collection: &Collection,
    options: &PipelineOptions,
) -> Result<CollectionReport, PipelineError> {
    let ranking = rank_collection(source, collection).await?;
    let written = if options.dry_run {
        None
    } else {
        Some(sink::write_snapshot(
            &options.out_dir,
            &collection.name,
            &ranking,
            options.date,
        )?)
    };
    Ok(CollectionReport { ranking, written })
}

/// Process every collection, returning outcomes sorted by collection name.
pub async fn run_collections<S: RecordSource>(
    source: &S,
    collections: &[Collection],
    options: &PipelineOptions,
) -> Vec<CollectionOutcome> {
    let mut outcomes: Vec<CollectionOutcome> = stream::iter(collections)
        .map(|collection| async move {
            let result = run_one(source, collection, options).await;
            match &result {
                Ok(report) => log::debug!(
                    "{}: {} boardgames, {} expansions",
                    collection.name,
                    report.ranking.boardgames.len(),
                    report.ranking.expansions.len()
                ),
                Err(e) => log::debug!("{}: {e}", collection.name),
            }
            CollectionOutcome {
                name: collection.name.clone(),
                result,
            }
        })
        .buffer_unordered(options.concurrency.max(1))
        .collect()
        .await;

    outcomes.sort_by(|a, b| a.name.cmp(&b.name));
    outcomes
}
