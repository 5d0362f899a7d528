use thiserror::Error;

/// Why a single catalog record could not be normalized.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// A structurally required field is absent (e.g. no name at all).
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A numeric field holds something other than a number or an empty string.
    #[error("field `{field}` is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// The record identifier is not an integer.
    #[error("record id is not an integer: {0:?}")]
    InvalidId(String),

    /// The record does not have the shape of a catalog item at all.
    #[error("unexpected record shape: {0}")]
    Shape(String),
}

impl RecordError {
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }
}

/// A malformed record aborted processing of a whole collection.
///
/// No partial result is produced for the collection when this is returned.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("malformed record {record_id} in collection '{collection}': {source}")]
pub struct BatchError {
    pub collection: String,
    /// Identifier of the failing record as it appeared upstream, or `?` if
    /// the record carried no identifier.
    pub record_id: String,
    #[source]
    pub source: RecordError,
}
