//! Mock catalog for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::{Catalog, CatalogFuture};
use crate::CatalogError;
use crate::models::{MovieDetail, SearchResultItem};

/// A configurable mock response for [`MockCatalog`].
#[derive(Clone, Debug)]
pub enum MockResponse {
    Found(Vec<SearchResultItem>),
    NotFound,
    Status(u16),
}

/// A hand-rolled mock implementing [`Catalog`] for tests.
///
/// Responses and latency are keyed by query (search) or id (detail).
/// Unknown keys answer with the not-found sentinel immediately.
#[derive(Default)]
pub struct MockCatalog {
    searches: HashMap<String, MockResponse>,
    details: HashMap<String, MovieDetail>,
    delays: HashMap<String, Duration>,
    call_count: AtomicUsize,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: &str, response: MockResponse) -> Self {
        self.searches.insert(query.to_string(), response);
        self
    }

    pub fn with_detail(mut self, detail: MovieDetail) -> Self {
        self.details.insert(detail.id.clone(), detail);
        self
    }

    /// Simulated latency for the given query or id.
    pub fn with_delay(mut self, key: &str, delay: Duration) -> Self {
        self.delays.insert(key.to_string(), delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    async fn pause(&self, key: &str) {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(key) {
            tokio::time::sleep(*delay).await;
        }
    }
}

pub fn item(id: &str, title: &str) -> SearchResultItem {
    SearchResultItem {
        id: id.to_string(),
        title: title.to_string(),
        year: "2000".to_string(),
        poster: "N/A".to_string(),
    }
}

impl Catalog for MockCatalog {
    fn name(&self) -> &str {
        "mock"
    }

    fn search<'a>(&'a self, query: &'a str) -> CatalogFuture<'a, Vec<SearchResultItem>> {
        Box::pin(async move {
            self.pause(query).await;
            match self.searches.get(query) {
                Some(MockResponse::Found(items)) => Ok(items.clone()),
                Some(MockResponse::Status(code)) => Err(CatalogError::Status(*code)),
                Some(MockResponse::NotFound) | None => Err(CatalogError::NotFound),
            }
        })
    }

    fn detail<'a>(&'a self, id: &'a str) -> CatalogFuture<'a, MovieDetail> {
        Box::pin(async move {
            self.pause(id).await;
            self.details.get(id).cloned().ok_or(CatalogError::NotFound)
        })
    }
}
