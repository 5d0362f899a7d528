use std::time::Duration;

use bgg_ranks_core::{EXTENSION_TYPE_CODE, PRIMARY_TYPE_CODE, RawRecord};
use serde_json::Value;

use crate::error::ApiError;
use crate::xml::{HotItem, hot_items_from_document, parse_document, records_from_document};

pub const DEFAULT_BASE_URL: &str = "https://boardgamegeek.com/xmlapi2";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest slice of an error body kept in [`ApiError::Status`].
const ERROR_BODY_LIMIT: usize = 200;

/// HTTP client for the board game catalog XML API.
pub struct XmlApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl XmlApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch full records (with statistics) for the given identifiers.
    ///
    /// Both base games and expansions are requested; an empty id list makes
    /// no request.
    pub async fn fetch_things(&self, ids: &[u64]) -> Result<Vec<RawRecord>, ApiError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let id_list = ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let types = format!("{PRIMARY_TYPE_CODE},{EXTENSION_TYPE_CODE}");

        let query = [
            ("id", id_list.as_str()),
            ("type", types.as_str()),
            ("stats", "1"),
        ];
        let doc = self.get_document("thing", &query).await?;
        let records = records_from_document(doc)?;
        log::debug!("Fetched {} of {} requested records", records.len(), ids.len());
        Ok(records)
    }

    /// Fetch the current list of trending base games.
    pub async fn fetch_hot(&self) -> Result<Vec<HotItem>, ApiError> {
        let doc = self.get_document("hot", &[("type", PRIMARY_TYPE_CODE)]).await?;
        hot_items_from_document(doc)
    }

    async fn get_document(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("GET {url} {query:?}");

        let resp = self.http.get(&url).query(query).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        parse_document(&text)
    }
}
