//! Keeps a shared [`CollectionView`] in sync with collection changes.

use std::sync::Arc;

use inspira_db::KeyValueStore;
use inspira_events::CollectionEvent;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;

use crate::collection::CollectionView;

/// Spawn a task that reloads `view` on every event from `rx`.
///
/// A lagged receiver reloads once. The task ends when the bus is dropped.
pub fn spawn_reload_watcher<S>(
    view: Arc<Mutex<CollectionView<S>>>,
    mut rx: broadcast::Receiver<CollectionEvent>,
) -> JoinHandle<()>
where
    S: KeyValueStore + 'static,
{
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    tracing::debug!(event_type = %event.event_type(), "Collection changed, reloading");
                    view.lock().await.reload();
                }
                Err(RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Reload watcher lagged, reloading");
                    view.lock().await.reload();
                }
                Err(RecvError::Closed) => {
                    tracing::info!("Event bus closed, reload watcher shutting down");
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use inspira_core::palette::{Palette, PaletteRecord};
    use inspira_db::{CollectionStore, MemoryStore};
    use inspira_events::EventBus;
    use std::time::Duration;

    #[tokio::test]
    async fn writes_from_another_store_reach_the_view() {
        let shared = Arc::new(MemoryStore::new());
        let bus = Arc::new(EventBus::default());

        let view = Arc::new(Mutex::new(CollectionView::load(CollectionStore::new(
            Arc::clone(&shared),
        ))));
        let handle = spawn_reload_watcher(Arc::clone(&view), bus.subscribe());

        let writer = CollectionStore::new(shared).with_events(Arc::clone(&bus));
        let palette = Palette::new("p1", "Moss", &["#335533"; 5]);
        writer.add_favorite(PaletteRecord::favorite_from(&palette, chrono::Utc::now()));

        let mut seen = 0;
        for _ in 0..50 {
            seen = view.lock().await.records().len();
            if seen == 1 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(seen, 1);

        drop(writer);
        drop(bus);
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("watcher should stop when the bus closes")
            .unwrap();
    }
}
