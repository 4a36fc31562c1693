//! TCP probe implementation.

use crate::types::ProbeResult;
use async_trait::async_trait;
use std::io;
use std::time::{Duration, Instant};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, warn};

/// A reachability probe against a fixed target.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Perform one probe. All failure modes are reported in the result;
    /// this call never returns an error.
    async fn probe(&self) -> ProbeResult;
}

/// TCP connect prober measuring handshake latency.
pub struct TcpProber {
    host: String,
    port: u16,
    connect_timeout: Duration,
}

impl TcpProber {
    /// Create a new TCP prober for the given target.
    pub fn new(host: impl Into<String>, port: u16, connect_timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            connect_timeout,
        }
    }
}

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self) -> ProbeResult {
        let start = Instant::now();

        match timeout(
            self.connect_timeout,
            TcpStream::connect((self.host.as_str(), self.port)),
        )
        .await
        {
            Ok(Ok(stream)) => {
                // Latency covers attempt-start to established; the close is
                // not part of the measurement.
                let latency_ms = round_ms(start.elapsed());
                drop(stream);
                debug!(host = %self.host, port = self.port, latency_ms, "TCP probe successful");
                ProbeResult::ok(self.port, latency_ms)
            }
            Ok(Err(e)) if e.kind() == io::ErrorKind::ConnectionRefused => {
                warn!(host = %self.host, port = self.port, "TCP probe refused");
                ProbeResult::refused(self.port)
            }
            Ok(Err(e)) => {
                warn!(host = %self.host, port = self.port, error = %e, "TCP probe failed");
                ProbeResult::error(self.port, e.to_string())
            }
            Err(_) => {
                warn!(host = %self.host, port = self.port, "TCP probe timed out");
                ProbeResult::timeout(self.port)
            }
        }
    }
}

/// Elapsed time in milliseconds, rounded to 3 decimal places.
fn round_ms(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1_000_000.0).round() / 1000.0
}
