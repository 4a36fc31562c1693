//! Single-slot snapshot storage shared between the collector and handlers.

use crate::types::Snapshot;
use tokio::sync::RwLock;

/// Most-recent-wins storage for the latest snapshot.
///
/// Starts empty and is replaced wholesale on every publish; readers see
/// either the previous snapshot or the new one, never a mix. The lock is
/// held only for the instant of the swap or clone, so the collector never
/// blocks readers across a probe.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: RwLock<Option<Snapshot>>,
}

impl SnapshotStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    /// Replace the held snapshot wholesale.
    pub async fn publish(&self, snapshot: Snapshot) {
        *self.current.write().await = Some(snapshot);
    }

    /// Get the most recently published snapshot, or `None` before the
    /// first publish completes.
    pub async fn read(&self) -> Option<Snapshot> {
        self.current.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use probe::ProbeResult;
    use std::sync::Arc;

    fn snapshot(latency_ms: f64) -> Snapshot {
        Snapshot::new("10.0.2.133", 22, 30, ProbeResult::ok(22, latency_ms))
    }

    #[tokio::test]
    async fn test_store_starts_empty() {
        let store = SnapshotStore::new();
        assert!(store.read().await.is_none());
    }

    #[tokio::test]
    async fn test_publish_then_read() {
        let store = SnapshotStore::new();
        let published = snapshot(1.5);

        store.publish(published.clone()).await;

        assert_eq!(store.read().await, Some(published));
    }

    #[tokio::test]
    async fn test_latest_publish_wins() {
        let store = SnapshotStore::new();

        for i in 1..=5 {
            store.publish(snapshot(i as f64)).await;
        }

        let current = store.read().await.unwrap();
        assert_eq!(current.tcp.latency_ms, Some(5.0));
    }

    #[tokio::test]
    async fn test_concurrent_readers_and_writer() {
        let store = Arc::new(SnapshotStore::new());

        let writer = {
            let store = store.clone();
            tokio::spawn(async move {
                for i in 0..100 {
                    store.publish(snapshot(i as f64)).await;
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    for _ in 0..100 {
                        if let Some(s) = store.read().await {
                            // A snapshot is always fully formed
                            assert!(s.tcp.is_ok());
                            assert_eq!(s.tcp_port, 22);
                        }
                    }
                })
            })
            .collect();

        writer.await.unwrap();
        for reader in readers {
            reader.await.unwrap();
        }

        assert_eq!(store.read().await.unwrap().tcp.latency_ms, Some(99.0));
    }
}
