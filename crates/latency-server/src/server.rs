//! Server wiring: the collector task plus the HTTP API.

use crate::collector::Collector;
use crate::config::{CONNECT_TIMEOUT, Config};
use crate::http_server::{AppState, router};
use crate::store::SnapshotStore;
use common::{Error, Result};
use probe::TcpProber;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Latency monitor server.
pub struct MonitorServer {
    config: Config,
}

impl MonitorServer {
    /// Create a new server from its configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run until a shutdown signal arrives.
    ///
    /// The collector is stopped cooperatively and its task awaited before
    /// this returns, so shutdown is acknowledged rather than abandoned.
    pub async fn run(self) -> Result<()> {
        info!(
            target = %self.config.target_host,
            port = self.config.tcp_port,
            interval_s = self.config.interval_seconds(),
            "starting latency monitor"
        );

        let store = Arc::new(SnapshotStore::new());
        let prober = Arc::new(TcpProber::new(
            self.config.target_host.clone(),
            self.config.tcp_port,
            CONNECT_TIMEOUT,
        ));

        let collector = Collector::new(prober, store.clone(), self.config.clone());
        let collector_handle = collector.start();

        let state = AppState {
            store,
            config: Arc::new(self.config.clone()),
        };
        let app = router(state);

        let addr: SocketAddr = self.config.listen_addr.parse().map_err(Error::config)?;
        let listener = TcpListener::bind(addr).await?;
        info!(listen_addr = %addr, "HTTP API listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        // HTTP side is down; stop the collector and wait for it to
        // acknowledge before returning.
        collector.stop();
        collector_handle.await.map_err(Error::other)?;
        info!("latency monitor stopped");

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
    }
}
