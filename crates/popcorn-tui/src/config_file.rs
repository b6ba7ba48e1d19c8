use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::settings::Settings;

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub catalog: Option<CatalogConfig>,
    pub search: Option<SearchConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub min_query_len: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub theme: Option<String>,
    pub plot_words: Option<usize>,
    pub plot_expanded: Option<bool>,
    pub plot_expand_label: Option<String>,
    pub plot_collapse_label: Option<String>,
    pub rating_labels: Option<Vec<String>>,
}

/// Platform config directory path: `<config_dir>/popcorn/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("popcorn").join("config.toml"))
}

/// Load config by cascading CWD `.popcorn.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".popcorn.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Read one config file. Missing files are silent; unparsable ones are logged
/// and skipped.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(cfg) => {
            tracing::info!(path = %path.display(), "loaded config file");
            Some(cfg)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config file");
            None
        }
    }
}

/// Merge two configs: `overlay` values take precedence over `base`.
fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    let base_catalog = base.catalog.unwrap_or_default();
    let over_catalog = overlay.catalog.unwrap_or_default();
    let base_search = base.search.unwrap_or_default();
    let over_search = overlay.search.unwrap_or_default();
    let base_display = base.display.unwrap_or_default();
    let over_display = overlay.display.unwrap_or_default();

    ConfigFile {
        catalog: Some(CatalogConfig {
            api_key: over_catalog.api_key.or(base_catalog.api_key),
            base_url: over_catalog.base_url.or(base_catalog.base_url),
            timeout_secs: over_catalog.timeout_secs.or(base_catalog.timeout_secs),
        }),
        search: Some(SearchConfig {
            min_query_len: over_search.min_query_len.or(base_search.min_query_len),
        }),
        display: Some(DisplayConfig {
            theme: over_display.theme.or(base_display.theme),
            plot_words: over_display.plot_words.or(base_display.plot_words),
            plot_expanded: over_display.plot_expanded.or(base_display.plot_expanded),
            plot_expand_label: over_display
                .plot_expand_label
                .or(base_display.plot_expand_label),
            plot_collapse_label: over_display
                .plot_collapse_label
                .or(base_display.plot_collapse_label),
            rating_labels: over_display.rating_labels.or(base_display.rating_labels),
        }),
    }
}

/// Apply the values present in `file_cfg` onto `settings`.
/// Only sets values that are `Some` in the file config (doesn't overwrite with defaults).
pub fn apply_to_settings(file_cfg: &ConfigFile, settings: &mut Settings) {
    if let Some(catalog) = &file_cfg.catalog {
        if let Some(key) = catalog.api_key.as_ref().filter(|k| !k.is_empty()) {
            settings.api_key = key.clone();
        }
        if let Some(url) = catalog.base_url.as_ref().filter(|u| !u.is_empty()) {
            settings.base_url = url.clone();
        }
        if let Some(v) = catalog.timeout_secs {
            settings.timeout_secs = v.max(1);
        }
    }
    if let Some(search) = &file_cfg.search
        && let Some(v) = search.min_query_len
    {
        settings.min_query_len = v.max(1);
    }
    if let Some(disp) = &file_cfg.display {
        if let Some(theme) = disp.theme.as_ref().filter(|t| !t.is_empty()) {
            settings.theme_name = theme.clone();
        }
        if let Some(words) = disp.plot_words {
            settings.plot_words = words.max(1);
        }
        if let Some(expanded) = disp.plot_expanded {
            settings.plot_expanded = expanded;
        }
        if let Some(label) = disp.plot_expand_label.as_ref().filter(|l| !l.is_empty()) {
            settings.plot_expand_label = label.clone();
        }
        if let Some(label) = disp.plot_collapse_label.as_ref().filter(|l| !l.is_empty()) {
            settings.plot_collapse_label = label.clone();
        }
        if let Some(labels) = &disp.rating_labels {
            settings.rating_labels = labels.clone();
        }
    }
}
