use super::App;
use crate::tui_event::BackendEvent;

impl App {
    /// Process a backend event and update model state.
    ///
    /// Outcomes that belong to an older revision are dropped by the core
    /// controllers; nothing here needs to compare revisions itself.
    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::SearchFinished { revision, result } => {
                if self.search.apply(revision, result) {
                    self.results_cursor = 0;
                } else {
                    tracing::trace!(revision, "stale search outcome dropped");
                }
            }
            BackendEvent::DetailFinished { revision, result } => {
                if !self.detail.apply(revision, result) {
                    tracing::trace!(revision, "stale detail outcome dropped");
                }
            }
        }
    }
}
