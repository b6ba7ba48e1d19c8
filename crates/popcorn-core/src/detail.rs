//! Selection and detail loading.
//!
//! Detail fetches follow the same discipline as searches: selecting another
//! title cancels the previous fetch, and only the latest selection's response
//! is applied.

use tokio_util::sync::CancellationToken;

use crate::catalog::Catalog;
use crate::models::MovieDetail;
use crate::CatalogError;

/// Window title shown while no detail is loaded.
pub const DEFAULT_WINDOW_TITLE: &str = "popcorn";

/// A detail fetch the caller must execute, produced by [`DetailLoader::select`].
#[derive(Debug, Clone)]
pub struct DetailRequest {
    pub revision: u64,
    pub id: String,
    pub cancel: CancellationToken,
}

#[derive(Debug, Default)]
pub struct DetailLoader {
    selected: Option<String>,
    detail: Option<MovieDetail>,
    loading: bool,
    error: Option<String>,
    revision: u64,
    in_flight: Option<CancellationToken>,
}

impl DetailLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn detail(&self) -> Option<&MovieDetail> {
        self.detail.as_ref()
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

    /// Select `id`. Selecting the current selection closes it instead.
    pub fn select(&mut self, id: &str) -> Option<DetailRequest> {
        if self.selected.as_deref() == Some(id) {
            self.close();
            return None;
        }

        self.cancel_in_flight();
        self.revision += 1;
        self.selected = Some(id.to_string());
        self.detail = None;
        self.error = None;
        self.loading = true;

        let cancel = CancellationToken::new();
        self.in_flight = Some(cancel.clone());
        tracing::debug!(revision = self.revision, id, "detail fetch issued");

        Some(DetailRequest {
            revision: self.revision,
            id: id.to_string(),
            cancel,
        })
    }

    pub fn close(&mut self) {
        self.cancel_in_flight();
        self.revision += 1;
        self.selected = None;
        self.detail = None;
        self.error = None;
        self.loading = false;
    }

    fn cancel_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }

    /// Apply the outcome of the fetch stamped with `revision`.
    pub fn apply(&mut self, revision: u64, outcome: Result<MovieDetail, CatalogError>) -> bool {
        if revision != self.revision {
            tracing::debug!(revision, current = self.revision, "discarding stale detail");
            return false;
        }
        match outcome {
            Err(e) if e.is_cancelled() => return false,
            Ok(detail) => {
                self.detail = Some(detail);
                self.error = None;
            }
            Err(e) => {
                self.detail = None;
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
        self.in_flight = None;
        true
    }

    /// Title the window should carry for the current state.
    pub fn window_title(&self) -> String {
        window_title(self.detail.as_ref())
    }
}

/// `"Movie | <title>"` while a titled detail is loaded, the default otherwise.
pub fn window_title(detail: Option<&MovieDetail>) -> String {
    match detail {
        Some(d) if !d.title.is_empty() => format!("Movie | {}", d.title),
        _ => DEFAULT_WINDOW_TITLE.to_string(),
    }
}

/// Fetch a title's detail, resolving to [`CatalogError::Cancelled`] as soon as
/// `cancel` fires.
pub async fn fetch(
    catalog: &dyn Catalog,
    id: &str,
    cancel: &CancellationToken,
) -> Result<MovieDetail, CatalogError> {
    if cancel.is_cancelled() {
        return Err(CatalogError::Cancelled);
    }
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(CatalogError::Cancelled),
        result = catalog.detail(id) => {
            if cancel.is_cancelled() {
                Err(CatalogError::Cancelled)
            } else {
                result
            }
        }
    }
}
