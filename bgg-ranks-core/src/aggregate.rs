//! Grouping and ordering of normalized items.

use serde::Serialize;

use crate::error::BatchError;
use crate::item::{Category, Item};
use crate::normalize::normalize;
use crate::raw::RawRecord;

/// Ordered output for one collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ranking {
    /// Base games, ascending by rank; unranked last.
    pub boardgames: Vec<Item>,
    /// Expansions, descending by rating.
    pub expansions: Vec<Item>,
}

impl Ranking {
    /// Partition items by category and order each group.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut ranking = Self::default();
        for item in items {
            match item.category {
                Category::Primary => ranking.boardgames.push(item),
                Category::Extension => ranking.expansions.push(item),
            }
        }
        ranking.sort();
        ranking
    }

    /// Order both groups. Both sorts are stable.
    pub fn sort(&mut self) {
        self.boardgames.sort_by_key(Item::rank_sort_key);
        self.expansions.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    }

    pub fn len(&self) -> usize {
        self.boardgames.len() + self.expansions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boardgames.is_empty() && self.expansions.is_empty()
    }
}

/// Normalize and rank one collection's records.
///
/// The first malformed record aborts the batch; records of unknown type are
/// dropped.
pub fn process_batch(collection: &str, records: &[RawRecord]) -> Result<Ranking, BatchError> {
    let mut items = Vec::with_capacity(records.len());
    for record in records {
        match normalize(record) {
            Ok(Some(item)) => items.push(item),
            Ok(None) => {
                log::debug!(
                    "{collection}: dropping record {} of unrecognized type",
                    record.id_hint()
                );
            }
            Err(source) => {
                return Err(BatchError {
                    collection: collection.to_string(),
                    record_id: record.id_hint(),
                    source,
                });
            }
        }
    }
    Ok(Ranking::from_items(items))
}

#[cfg(test)]
#[path = "tests/aggregate_tests.rs"]
mod tests;
