//! XML response decoding.
//!
//! Responses are turned into a generic nested tree rather than typed
//! structs, because the service's element multiplicity varies per record:
//!
//! - attributes become `@name` keys holding strings
//! - child elements are stored under their tag name; a tag that repeats
//!   becomes a list
//! - an element with only text becomes a string, an empty one `null`
//! - text next to attributes or children is stored under `#text`
//!
//! The typed view over this tree lives in `bgg_ranks_core::raw`.

use bgg_ranks_core::{OneOrMany, RawRecord, ValueAttr};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// An element still being read.
struct OpenElement {
    name: String,
    fields: Map<String, Value>,
    text: String,
}

impl OpenElement {
    fn root() -> Self {
        Self {
            name: String::new(),
            fields: Map::new(),
            text: String::new(),
        }
    }

    fn from_start(e: &BytesStart<'_>) -> Result<Self, ApiError> {
        let mut fields = Map::new();
        for attr in e.attributes() {
            let attr = attr?;
            let key = format!("@{}", String::from_utf8_lossy(attr.key.as_ref()));
            let value = attr.unescape_value()?.into_owned();
            fields.insert(key, Value::String(value));
        }
        Ok(Self {
            name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
            fields,
            text: String::new(),
        })
    }

    fn close(mut self) -> (String, Value) {
        let value = if self.fields.is_empty() {
            if self.text.is_empty() {
                Value::Null
            } else {
                Value::String(self.text)
            }
        } else {
            if !self.text.is_empty() {
                self.fields.insert("#text".to_string(), Value::String(self.text));
            }
            Value::Object(self.fields)
        };
        (self.name, value)
    }
}

/// Store a child under `key`, promoting to a list when the key repeats.
fn insert_child(fields: &mut Map<String, Value>, key: String, value: Value) {
    match fields.get_mut(&key) {
        Some(Value::Array(list)) => list.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            fields.insert(key, value);
        }
    }
}

fn attach(stack: &mut [OpenElement], element: OpenElement) -> Result<(), ApiError> {
    let (name, value) = element.close();
    let parent = stack
        .last_mut()
        .ok_or_else(|| ApiError::response("element outside document root"))?;
    insert_child(&mut parent.fields, name, value);
    Ok(())
}

/// Parse an XML document into a nested tree keyed by the root element name.
pub fn parse_document(xml: &str) -> Result<Value, ApiError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack = vec![OpenElement::root()];

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => stack.push(OpenElement::from_start(e)?),
            Event::Empty(ref e) => {
                let element = OpenElement::from_start(e)?;
                attach(&mut stack, element)?;
            }
            Event::Text(ref e) => {
                let text = e.unescape()?;
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&text);
                }
            }
            Event::CData(e) => {
                let bytes = e.into_inner();
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(&bytes));
                }
            }
            Event::End(_) => {
                if stack.len() < 2 {
                    return Err(ApiError::response("unbalanced closing tag"));
                }
                if let Some(element) = stack.pop() {
                    attach(&mut stack, element)?;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    match stack.pop() {
        Some(root) if stack.is_empty() => Ok(Value::Object(root.fields)),
        _ => Err(ApiError::response("document ended inside an open element")),
    }
}

/// Message of an `<error>` / `<errors>` document, if the service sent one.
pub fn service_error(doc: &Value) -> Option<String> {
    let error = doc
        .get("error")
        .or_else(|| doc.get("errors").and_then(|e| e.get("error")))?;
    let first = match error {
        Value::Array(list) => list.first()?,
        other => other,
    };
    let message = first.get("message").unwrap_or(first);
    Some(match message {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

/// Pull the `items.item` records out of a response tree.
///
/// The item list may hold one record, several, or none at all.
pub fn records_from_document(mut doc: Value) -> Result<Vec<RawRecord>, ApiError> {
    if let Some(message) = service_error(&doc) {
        return Err(ApiError::service(message));
    }

    let items = doc
        .get_mut("items")
        .ok_or_else(|| ApiError::response("response has no <items> element"))?;
    let item = items.get_mut("item").map(Value::take).unwrap_or(Value::Null);

    let records: Option<OneOrMany<Value>> = serde_json::from_value(item)?;
    Ok(records
        .map(OneOrMany::into_vec)
        .unwrap_or_default()
        .into_iter()
        .map(RawRecord::new)
        .collect())
}

/// An entry of the "hot items" list.
#[derive(Debug, Clone, PartialEq)]
pub struct HotItem {
    pub id: u64,
    pub rank: u32,
    pub name: String,
    pub year: String,
}

#[derive(Deserialize)]
struct RawHotItem {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@rank")]
    rank: String,
    name: ValueAttr,
    #[serde(default)]
    yearpublished: Option<ValueAttr>,
}

/// Decode the hot list, ordered by hotness rank.
pub fn hot_items_from_document(doc: Value) -> Result<Vec<HotItem>, ApiError> {
    let mut hot = records_from_document(doc)?
        .iter()
        .map(|record| -> Result<HotItem, ApiError> {
            let raw = RawHotItem::deserialize(record.as_value())?;
            Ok(HotItem {
                id: raw
                    .id
                    .parse()
                    .map_err(|_| ApiError::response(format!("invalid hot item id {:?}", raw.id)))?,
                rank: raw.rank.parse().map_err(|_| {
                    ApiError::response(format!("invalid hot item rank {:?}", raw.rank))
                })?,
                name: raw.name.value,
                year: raw.yearpublished.map(|y| y.value).unwrap_or_default(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    hot.sort_by_key(|item| item.rank);
    Ok(hot)
}

#[cfg(test)]
#[path = "tests/xml_tests.rs"]
mod tests;
