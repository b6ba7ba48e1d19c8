use std::time::Duration;

use serde_json::Value;

use super::{Catalog, CatalogFuture};
use crate::CatalogError;
use crate::models::{MovieDetail, SearchResultItem};

pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";
pub const DEFAULT_API_KEY: &str = "c77df754";

/// Connection settings for [`OmdbCatalog`].
#[derive(Debug, Clone)]
pub struct OmdbConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// OMDb (`www.omdbapi.com`) catalog client.
pub struct OmdbCatalog {
    config: OmdbConfig,
    client: reqwest::Client,
}

impl OmdbCatalog {
    pub fn new(config: OmdbConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}?apikey={}&s={}",
            self.config.base_url,
            urlencoding::encode(&self.config.api_key),
            urlencoding::encode(query)
        )
    }

    pub fn detail_url(&self, id: &str) -> String {
        format!(
            "{}?apikey={}&i={}",
            self.config.base_url,
            urlencoding::encode(&self.config.api_key),
            urlencoding::encode(id)
        )
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, CatalogError> {
        let resp = self
            .client
            .get(url)
            .timeout(self.config.timeout)
            .send()
            .await?;
        Ok(resp)
    }
}

impl Catalog for OmdbCatalog {
    fn name(&self) -> &str {
        "OMDb"
    }

    fn search<'a>(&'a self, query: &'a str) -> CatalogFuture<'a, Vec<SearchResultItem>> {
        Box::pin(async move {
            tracing::debug!(catalog = self.name(), query, "search request");
            let resp = self.get(&self.search_url(query)).await?;
            decode_search(resp).await
        })
    }

    fn detail<'a>(&'a self, id: &'a str) -> CatalogFuture<'a, MovieDetail> {
        Box::pin(async move {
            tracing::debug!(catalog = self.name(), id, "detail request");
            let resp = self.get(&self.detail_url(id)).await?;
            decode_detail(resp).await
        })
    }
}

/// Check the HTTP status, parse the body and strip the `Response` sentinel.
async fn read_envelope(resp: reqwest::Response) -> Result<Value, CatalogError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(CatalogError::Status(status.as_u16()));
    }
    let bytes = resp.bytes().await?;
    let data: Value = serde_json::from_slice(&bytes)?;
    if data["Response"].as_str() == Some("False") {
        tracing::debug!(
            error = data["Error"].as_str().unwrap_or(""),
            "catalog returned not-found sentinel"
        );
        return Err(CatalogError::NotFound);
    }
    Ok(data)
}

pub(crate) async fn decode_search(
    resp: reqwest::Response,
) -> Result<Vec<SearchResultItem>, CatalogError> {
    let mut data = read_envelope(resp).await?;
    let items: Vec<SearchResultItem> = match data.get_mut("Search") {
        Some(list) => serde_json::from_value(list.take())?,
        None => Vec::new(),
    };
    if items.is_empty() {
        return Err(CatalogError::NotFound);
    }
    Ok(items)
}

pub(crate) async fn decode_detail(resp: reqwest::Response) -> Result<MovieDetail, CatalogError> {
    let data = read_envelope(resp).await?;
    Ok(serde_json::from_value(data)?)
}
