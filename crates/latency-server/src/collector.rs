//! Periodic probe collection loop.

use crate::config::Config;
use crate::store::SnapshotStore;
use crate::types::Snapshot;
use probe::Prober;
use std::sync::Arc;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info};

/// Runs the prober on a fixed interval and publishes each result.
///
/// Every cycle produces a valid snapshot, including cycles where the probe
/// fails; only a stop request ends the loop.
pub struct Collector {
    prober: Arc<dyn Prober>,
    store: Arc<SnapshotStore>,
    config: Config,
    stop_signal: Arc<Notify>,
}

impl Collector {
    /// Create a new collector over the given prober and store.
    pub fn new(prober: Arc<dyn Prober>, store: Arc<SnapshotStore>, config: Config) -> Self {
        Self {
            prober,
            store,
            config,
            stop_signal: Arc::new(Notify::new()),
        }
    }

    /// Spawn the collection loop.
    ///
    /// The first probe runs immediately; each subsequent cycle starts
    /// `measure_interval` after the previous probe finished, so the cadence
    /// drifts by probe duration. The returned handle resolves once a stop
    /// request has been observed.
    pub fn start(&self) -> JoinHandle<()> {
        let prober = self.prober.clone();
        let store = self.store.clone();
        let config = self.config.clone();
        let stop_signal = self.stop_signal.clone();

        tokio::spawn(async move {
            loop {
                let result = prober.probe().await;
                let snapshot = Snapshot::new(
                    config.target_host.clone(),
                    config.tcp_port,
                    config.interval_seconds(),
                    result,
                );
                store.publish(snapshot).await;
                debug!(
                    target = %config.target_host,
                    port = config.tcp_port,
                    "snapshot published"
                );

                tokio::select! {
                    _ = sleep(config.measure_interval) => {}
                    _ = stop_signal.notified() => {
                        info!("collector stopping");
                        break;
                    }
                }
            }
        })
    }

    /// Request cooperative shutdown, observed at the next inter-cycle wait.
    pub fn stop(&self) {
        self.stop_signal.notify_one();
    }
}
