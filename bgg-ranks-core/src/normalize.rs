//! Conversion of raw catalog records into canonical [`Item`] values.

use crate::error::RecordError;
use crate::item::{Category, Item, NOT_RANKED};
use crate::raw::{RanksField, RawItem, RawRecord, ValueAttr};

/// The display name of a record: the first name variant if there are several.
pub fn extract_name(item: &RawItem) -> Result<String, RecordError> {
    item.name
        .as_ref()
        .and_then(|names| names.first())
        .map(|name| name.value.clone())
        .ok_or(RecordError::MissingField("name"))
}

/// The record's rank text, or [`NOT_RANKED`] when there is no structured
/// ranks container. Non-numeric rank text is passed through unchanged.
pub fn extract_rank(item: &RawItem) -> String {
    let Some(RanksField::Container(ranks)) = item.ratings().and_then(|r| r.ranks.as_ref()) else {
        return NOT_RANKED.to_string();
    };
    ranks
        .rank
        .as_ref()
        .and_then(|rank| rank.first())
        .map(|rank| rank.value.clone())
        .unwrap_or_else(|| NOT_RANKED.to_string())
}

/// Read a numeric `value` attribute. The service reports blank statistics
/// for records with too few votes; those read as `0.0`.
pub fn coerce_number(field: Option<&ValueAttr>, name: &'static str) -> Result<f64, RecordError> {
    let raw = field.ok_or(RecordError::MissingField(name))?.value.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    let invalid = || RecordError::InvalidNumber {
        field: name,
        value: raw.to_string(),
    };
    let number = raw.parse::<f64>().map_err(|_| invalid())?;
    if !number.is_finite() {
        return Err(invalid());
    }
    Ok(number)
}

/// Category of a record by its declared type code; `None` means the record
/// is dropped from output.
pub fn classify(record: &RawRecord) -> Option<Category> {
    record
        .get(&["@type"])
        .and_then(|code| code.as_str())
        .and_then(Category::from_type_code)
}

/// Normalize one record. Records of an unrecognized type yield `Ok(None)`
/// without their other fields being inspected.
pub fn normalize(record: &RawRecord) -> Result<Option<Item>, RecordError> {
    let Some(category) = classify(record) else {
        return Ok(None);
    };
    let raw = RawItem::from_record(record)?;

    let id_text = raw.id.as_deref().ok_or(RecordError::MissingField("id"))?;
    let id = id_text
        .trim()
        .parse::<u64>()
        .map_err(|_| RecordError::InvalidId(id_text.to_string()))?;

    let name = extract_name(&raw)?;
    let rank = extract_rank(&raw);
    let year = raw
        .yearpublished
        .as_ref()
        .map(|y| y.value.clone())
        .unwrap_or_default();

    let ratings = raw.ratings();
    let rating = coerce_number(ratings.and_then(|r| r.average.as_ref()), "average")?;
    let weight = coerce_number(ratings.and_then(|r| r.averageweight.as_ref()), "averageweight")?;

    let players = span(
        raw.minplayers.as_ref(),
        raw.maxplayers.as_ref(),
        "minplayers",
        "maxplayers",
    )?;
    let time = span(
        raw.minplaytime.as_ref(),
        raw.maxplaytime.as_ref(),
        "minplaytime",
        "maxplaytime",
    )?;

    Ok(Some(Item {
        id,
        name,
        year,
        rating: round2(rating),
        rank,
        weight: round2(weight),
        players,
        time,
        category,
    }))
}

/// `"min-max"` display text; the values are not interpreted.
fn span(
    min: Option<&ValueAttr>,
    max: Option<&ValueAttr>,
    min_name: &'static str,
    max_name: &'static str,
) -> Result<String, RecordError> {
    let min = min.ok_or(RecordError::MissingField(min_name))?;
    let max = max.ok_or(RecordError::MissingField(max_name))?;
    Ok(format!("{}-{}", min.value, max.value))
}

/// Round to two fractional digits, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
