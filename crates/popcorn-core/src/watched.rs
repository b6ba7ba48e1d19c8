//! Session-scoped list of rated titles and its summary statistics.

use crate::models::WatchedEntry;

/// Aggregate view of the watched list. Every mean is 0 for an empty input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WatchedSummary {
    pub count: usize,
    pub avg_critic_rating: f64,
    pub avg_user_rating: f64,
    pub avg_runtime: f64,
}

#[derive(Debug, Clone, Default)]
pub struct WatchedList {
    entries: Vec<WatchedEntry>,
}

impl WatchedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[WatchedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append without deduplication; callers gate on [`contains`](Self::contains).
    pub fn add(&mut self, entry: WatchedEntry) {
        tracing::debug!(id = %entry.id, rating = entry.user_rating, "added to watched");
        self.entries.push(entry);
    }

    /// Remove every entry with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        before != self.entries.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&WatchedEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn summary(&self) -> WatchedSummary {
        WatchedSummary {
            count: self.entries.len(),
            avg_critic_rating: average(self.entries.iter().filter_map(|e| e.critic_rating)),
            avg_user_rating: average(self.entries.iter().map(|e| f64::from(e.user_rating))),
            avg_runtime: average(self.entries.iter().map(|e| f64::from(e.runtime_minutes))),
        }
    }
}

/// Arithmetic mean, 0 for an empty iterator.
pub fn average(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { 0.0 } else { sum / n as f64 }
}
