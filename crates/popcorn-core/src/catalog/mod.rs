//! Catalog trait and the OMDb implementation.

#[cfg(test)]
pub(crate) mod mock;
pub mod omdb;

use std::future::Future;
use std::pin::Pin;

use crate::CatalogError;
use crate::models::{MovieDetail, SearchResultItem};

pub use omdb::{DEFAULT_API_KEY, DEFAULT_BASE_URL, OmdbCatalog, OmdbConfig};

/// Boxed future returned by [`Catalog`] methods.
pub type CatalogFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, CatalogError>> + Send + 'a>>;

/// A remote movie catalog that can search titles and fetch one title's details.
pub trait Catalog: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Titles matching `query`. An empty match set is reported as
    /// [`CatalogError::NotFound`], never as `Ok(vec![])`.
    fn search<'a>(&'a self, query: &'a str) -> CatalogFuture<'a, Vec<SearchResultItem>>;

    /// Full record for the title with the given id.
    fn detail<'a>(&'a self, id: &'a str) -> CatalogFuture<'a, MovieDetail>;
}
