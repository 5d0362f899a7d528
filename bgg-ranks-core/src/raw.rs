//! Boundary adapter for raw catalog records.
//!
//! The catalog service serializes its XML so that a field holding one element
//! and a field holding several look different: a single child becomes an
//! object, repeated children become a list. [`OneOrMany`] absorbs that
//! ambiguity here so the normalizer only ever sees "the first element".

use serde::Deserialize;
use serde::de::IgnoredAny;
use serde_json::Value;

use crate::error::RecordError;

/// An opaque nested record as received from the catalog source.
///
/// Attributes live under `@name` keys, child elements under their tag name.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord(Value);

impl RawRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Address a nested field by path, e.g. `["statistics", "ratings"]`.
    pub fn get(&self, path: &[&str]) -> Option<&Value> {
        path.iter().try_fold(&self.0, |node, key| node.get(key))
    }

    /// Best-effort identifier for error messages.
    pub fn id_hint(&self) -> String {
        match self.get(&["@id"]) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => "?".to_string(),
        }
    }
}

impl From<Value> for RawRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// A field that is either a single element or a list of elements.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// The single element, or the first of many.
    pub fn first(&self) -> Option<&T> {
        match self {
            Self::Many(items) => items.first(),
            Self::One(item) => Some(item),
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

/// An element whose payload is carried in its `value` attribute.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValueAttr {
    #[serde(rename = "@value")]
    pub value: String,
}

/// Typed view of a raw catalog item. Every field is optional here; the
/// normalizer decides which absences are fatal.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawItem {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    #[serde(rename = "@type", default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub name: Option<OneOrMany<ValueAttr>>,
    #[serde(default)]
    pub yearpublished: Option<ValueAttr>,
    #[serde(default)]
    pub minplayers: Option<ValueAttr>,
    #[serde(default)]
    pub maxplayers: Option<ValueAttr>,
    #[serde(default)]
    pub minplaytime: Option<ValueAttr>,
    #[serde(default)]
    pub maxplaytime: Option<ValueAttr>,
    #[serde(default)]
    pub statistics: Option<RawStatistics>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawStatistics {
    #[serde(default)]
    pub ratings: Option<RawRatings>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRatings {
    #[serde(default)]
    pub average: Option<ValueAttr>,
    #[serde(default)]
    pub averageweight: Option<ValueAttr>,
    #[serde(default)]
    pub ranks: Option<RanksField>,
}

/// The ranks element: a structured container, or anything else (plain text,
/// an unexpected list) which counts as "no rank information".
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RanksField {
    Container(RawRanks),
    Other(IgnoredAny),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRanks {
    #[serde(default)]
    pub rank: Option<OneOrMany<ValueAttr>>,
}

impl RawItem {
    /// Deserialize the typed view from an opaque record.
    pub fn from_record(record: &RawRecord) -> Result<Self, RecordError> {
        RawItem::deserialize(record.as_value()).map_err(|e| RecordError::shape(e.to_string()))
    }

    pub fn ratings(&self) -> Option<&RawRatings> {
        self.statistics.as_ref().and_then(|s| s.ratings.as_ref())
    }
}
