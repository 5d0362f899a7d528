//! Normalization and ranking of board game catalog records.
//!
//! Raw records come from the catalog service with ambiguous nesting (one
//! element vs. a list), optional ranks, and blank statistics. This crate
//! turns them into uniform [`Item`]s and orders them into a [`Ranking`].
//! It performs no I/O.

pub mod aggregate;
pub mod error;
pub mod item;
pub mod normalize;
pub mod raw;

pub use aggregate::{Ranking, process_batch};
pub use error::{BatchError, RecordError};
pub use item::{Category, EXTENSION_TYPE_CODE, Item, NOT_RANKED, PRIMARY_TYPE_CODE};
pub use normalize::{classify, coerce_number, extract_name, extract_rank, normalize};
pub use raw::{OneOrMany, RawItem, RawRecord, ValueAttr};
