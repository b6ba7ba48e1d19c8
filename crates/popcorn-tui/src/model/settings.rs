use std::time::Duration;

use popcorn_core::catalog::{DEFAULT_API_KEY, DEFAULT_BASE_URL};
use popcorn_core::{MIN_QUERY_LEN, OmdbConfig};

/// Resolved runtime settings (defaults, then config file, then env, then CLI).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub min_query_len: usize,
    pub theme_name: String,
    /// Words of the plot shown before "Show more".
    pub plot_words: usize,
    pub plot_expanded: bool,
    pub plot_expand_label: String,
    pub plot_collapse_label: String,
    /// Optional label per star of the 10-star rating input.
    pub rating_labels: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            min_query_len: MIN_QUERY_LEN,
            theme_name: "popcorn".to_string(),
            plot_words: 20,
            plot_expanded: false,
            plot_expand_label: "Show more".to_string(),
            plot_collapse_label: "Collapse".to_string(),
            rating_labels: Vec::new(),
        }
    }
}

impl Settings {
    pub fn omdb_config(&self) -> OmdbConfig {
        OmdbConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Mask a key for display: show first 4 chars then asterisks.
    pub fn mask_key(key: &str) -> String {
        let len = key.chars().count();
        if len == 0 {
            "(not set)".to_string()
        } else if len <= 4 {
            "*".repeat(len)
        } else {
            let prefix: String = key.chars().take(4).collect();
            format!("{prefix}{}", "*".repeat(len - 4))
        }
    }
}
