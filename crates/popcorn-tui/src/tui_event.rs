use popcorn_core::{CatalogError, DetailRequest, MovieDetail, SearchRequest, SearchResultItem};

/// Commands sent from the TUI to the backend.
#[derive(Debug)]
pub enum BackendCommand {
    /// Run a catalog search for a query revision.
    Search(SearchRequest),
    /// Fetch the full record of the selected title.
    FetchDetail(DetailRequest),
}

/// Events flowing from backend fetch tasks to the TUI.
///
/// Each carries the revision of the request that produced it so the UI can
/// discard results that were already queued when a newer request started.
#[derive(Debug)]
pub enum BackendEvent {
    SearchFinished {
        revision: u64,
        result: Result<Vec<SearchResultItem>, CatalogError>,
    },
    DetailFinished {
        revision: u64,
        result: Result<MovieDetail, CatalogError>,
    },
}
