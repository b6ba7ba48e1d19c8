//! Query-driven search lifecycle.
//!
//! [`SearchController`] owns the query text and the result state. Every query
//! change cancels the previous request's token and bumps a revision counter;
//! results are only applied when they carry the current revision.

use tokio_util::sync::CancellationToken;

use crate::catalog::Catalog;
use crate::models::SearchResultItem;
use crate::CatalogError;

/// Queries shorter than this (in characters) are treated as empty.
pub const MIN_QUERY_LEN: usize = 3;

/// A search the caller must execute, produced by [`SearchController::set_query`].
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub revision: u64,
    pub query: String,
    pub cancel: CancellationToken,
}

#[derive(Debug)]
pub struct SearchController {
    query: String,
    results: Vec<SearchResultItem>,
    loading: bool,
    error: Option<String>,
    revision: u64,
    in_flight: Option<CancellationToken>,
    min_len: usize,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(MIN_QUERY_LEN)
    }
}

impl SearchController {
    pub fn new(min_len: usize) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            loading: false,
            error: None,
            revision: 0,
            in_flight: None,
            min_len,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResultItem] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Replace the query text. Returns the request to issue, if any.
    pub fn set_query(&mut self, query: impl Into<String>) -> Option<SearchRequest> {
        self.query = query.into();
        self.cancel_in_flight();
        self.revision += 1;

        if self.query.chars().count() < self.min_len {
            self.results.clear();
            self.error = None;
            self.loading = false;
            return None;
        }

        let cancel = CancellationToken::new();
        self.in_flight = Some(cancel.clone());
        self.loading = true;
        self.error = None;
        tracing::debug!(revision = self.revision, query = %self.query, "search issued");

        Some(SearchRequest {
            revision: self.revision,
            query: self.query.clone(),
            cancel,
        })
    }

    /// Append one character to the query.
    pub fn push_char(&mut self, c: char) -> Option<SearchRequest> {
        let mut next = self.query.clone();
        next.push(c);
        self.set_query(next)
    }

    /// Remove the last character of the query.
    pub fn pop_char(&mut self) -> Option<SearchRequest> {
        let mut next = self.query.clone();
        next.pop();
        self.set_query(next)
    }

    /// Cancel the pending request, if any. Safe to call repeatedly.
    pub fn cancel_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }

    /// Apply the outcome of the request stamped with `revision`.
    ///
    /// Returns `true` if state changed. Outcomes for superseded revisions and
    /// cancellations never mutate state.
    pub fn apply(
        &mut self,
        revision: u64,
        outcome: Result<Vec<SearchResultItem>, CatalogError>,
    ) -> bool {
        if revision != self.revision {
            tracing::debug!(revision, current = self.revision, "discarding stale search result");
            return false;
        }
        match outcome {
            Err(e) if e.is_cancelled() => return false,
            Ok(items) => {
                self.results = items;
                self.error = None;
            }
            Err(e) => {
                self.results.clear();
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
        self.in_flight = None;
        true
    }
}

/// Run a catalog search that resolves to [`CatalogError::Cancelled`] as soon
/// as `cancel` fires.
pub async fn fetch(
    catalog: &dyn Catalog,
    query: &str,
    cancel: &CancellationToken,
) -> Result<Vec<SearchResultItem>, CatalogError> {
    if cancel.is_cancelled() {
        return Err(CatalogError::Cancelled);
    }
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(CatalogError::Cancelled),
        result = catalog.search(query) => {
            if cancel.is_cancelled() {
                Err(CatalogError::Cancelled)
            } else {
                result
            }
        }
    }
}
