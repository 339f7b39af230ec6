//! Background worker draining the click queue into the durable store.

use std::sync::Arc;

use tokio::sync::{Semaphore, mpsc};
use tracing::{debug, error};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkStore;

/// Consumes click events and applies `clicks + 1` increments.
///
/// Runs until the sending side of the channel is dropped. `concurrency`
/// bounds how many increments are in flight at once; when all permits are
/// taken the worker stops pulling from the (itself bounded) channel, which
/// backpressures into dropped events at the resolver's `try_send`.
///
/// The worker owns its `store` handle. It must not borrow one from an
/// inbound request: increments routinely run after the originating request
/// has completed and its context is gone.
///
/// Increment failures are logged and dropped, never retried.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    store: Arc<dyn LinkStore>,
    concurrency: usize,
) {
    let permits = concurrency.max(1).min(u32::MAX as usize) as u32;
    let semaphore = Arc::new(Semaphore::new(permits as usize));

    while let Some(event) = rx.recv().await {
        let permit = match semaphore.clone().acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => break,
        };

        let store = store.clone();
        tokio::spawn(async move {
            let _permit = permit;
            match store.increment_clicks(&event.slug).await {
                Ok(()) => debug!("click recorded for {}", event.slug),
                Err(e) => error!("failed to record click for {}: {}", event.slug, e),
            }
        });
    }

    // Drain in-flight increments before returning.
    let _ = semaphore.acquire_many(permits).await;

    debug!("click worker shutting down");
}
