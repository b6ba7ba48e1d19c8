use thiserror::Error;

pub mod catalog;
pub mod detail;
pub mod models;
pub mod rating;
pub mod search;
pub mod watched;

// Re-export for convenience
pub use catalog::{Catalog, CatalogFuture, OmdbCatalog, OmdbConfig};
pub use detail::{DEFAULT_WINDOW_TITLE, DetailLoader, DetailRequest, window_title};
pub use models::{MovieDetail, NOT_AVAILABLE, SearchResultItem, WatchedEntry};
pub use rating::{MAX_USER_RATING, RatingError, rate};
pub use search::{MIN_QUERY_LEN, SearchController, SearchRequest};
pub use watched::{WatchedList, WatchedSummary};

/// Message shown when the catalog answers with its "no match" sentinel.
pub const NOT_FOUND_MESSAGE: &str = "Movie not Found";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("Something went wrong with fetching movies (HTTP {0})")]
    Status(u16),
    #[error("Movie not Found")]
    NotFound,
    #[error("invalid catalog response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The request was superseded before it completed. Never shown to the user.
    #[error("request cancelled")]
    Cancelled,
}

impl CatalogError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CatalogError::Cancelled)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound)
    }
}
