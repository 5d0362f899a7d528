//! Client for the board game catalog XML API.
//!
//! Fetches item records and the hot list, and decodes the XML responses into
//! the nested record trees consumed by `bgg-ranks-core`.

pub mod client;
pub mod error;
pub mod xml;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, XmlApiClient};
pub use error::ApiError;
pub use xml::{HotItem, hot_items_from_document, parse_document, records_from_document};
