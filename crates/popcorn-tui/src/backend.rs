use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use popcorn_core::{Catalog, DetailRequest, SearchRequest, detail, search};

use crate::tui_event::{BackendCommand, BackendEvent};

/// Spawn the command listener. Each command runs in its own task so a slow
/// fetch never blocks the next command (in particular, the next search).
pub fn spawn_listener(
    catalog: Arc<dyn Catalog>,
    mut cmd_rx: mpsc::UnboundedReceiver<BackendCommand>,
    event_tx: mpsc::UnboundedSender<BackendEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(cmd) = cmd_rx.recv().await {
            let catalog = Arc::clone(&catalog);
            let tx = event_tx.clone();
            match cmd {
                BackendCommand::Search(request) => {
                    tokio::spawn(run_search(catalog, request, tx));
                }
                BackendCommand::FetchDetail(request) => {
                    tokio::spawn(run_detail(catalog, request, tx));
                }
            }
        }
        tracing::debug!("backend command channel closed");
    })
}

/// Execute one search. Cancelled searches report nothing.
pub async fn run_search(
    catalog: Arc<dyn Catalog>,
    request: SearchRequest,
    tx: mpsc::UnboundedSender<BackendEvent>,
) {
    let result = search::fetch(catalog.as_ref(), &request.query, &request.cancel).await;
    match &result {
        Err(e) if e.is_cancelled() => {
            tracing::debug!(revision = request.revision, query = %request.query, "search cancelled");
            return;
        }
        Err(e) => tracing::debug!(revision = request.revision, error = %e, "search failed"),
        Ok(items) => tracing::debug!(revision = request.revision, hits = items.len(), "search complete"),
    }
    let _ = tx.send(BackendEvent::SearchFinished {
        revision: request.revision,
        result,
    });
}

/// Execute one detail fetch. Cancelled fetches report nothing.
pub async fn run_detail(
    catalog: Arc<dyn Catalog>,
    request: DetailRequest,
    tx: mpsc::UnboundedSender<BackendEvent>,
) {
    let result = detail::fetch(catalog.as_ref(), &request.id, &request.cancel).await;
    if result.as_ref().is_err_and(|e| e.is_cancelled()) {
        tracing::debug!(revision = request.revision, id = %request.id, "detail fetch cancelled");
        return;
    }
    let _ = tx.send(BackendEvent::DetailFinished {
        revision: request.revision,
        result,
    });
}
