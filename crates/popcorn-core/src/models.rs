//! Records exchanged with the catalog and held in the watched list.

use serde::Deserialize;

/// Sentinel the catalog uses for any field it has no value for.
pub const NOT_AVAILABLE: &str = "N/A";

/// Return `Some(value)` unless it is empty or the `"N/A"` sentinel.
pub fn available(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == NOT_AVAILABLE {
        None
    } else {
        Some(trimmed)
    }
}

/// One row of a search response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResultItem {
    #[serde(rename = "imdbID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

impl SearchResultItem {
    pub fn poster_url(&self) -> Option<&str> {
        available(&self.poster)
    }
}

/// Full record for a single title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MovieDetail {
    #[serde(rename = "imdbID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Poster")]
    pub poster: String,
    /// Free text such as `"142 min"`.
    #[serde(rename = "Runtime")]
    pub runtime: String,
    /// Free text such as `"7.8"`.
    #[serde(rename = "imdbRating")]
    pub critic_rating: String,
    #[serde(rename = "Plot")]
    pub plot: String,
    #[serde(rename = "Released")]
    pub released: String,
    #[serde(rename = "Actors")]
    pub actors: String,
    #[serde(rename = "Director")]
    pub director: String,
    #[serde(rename = "Genre")]
    pub genre: String,
}

impl MovieDetail {
    pub fn poster_url(&self) -> Option<&str> {
        available(&self.poster)
    }
}

/// A rated title in the watched list.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchedEntry {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
    /// `None` when the catalog rating was not a number.
    pub critic_rating: Option<f64>,
    pub runtime_minutes: u32,
    pub user_rating: u8,
}

impl WatchedEntry {
    pub fn poster_url(&self) -> Option<&str> {
        available(&self.poster)
    }
}
