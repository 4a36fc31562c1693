//! Wire types for the latency server.

use chrono::{DateTime, Utc};
use probe::ProbeResult;
use serde::{Deserialize, Serialize};

/// The most recently completed probe result plus target metadata.
///
/// Built once per collector cycle and published wholesale into the
/// snapshot store; never mutated field by field. This is exactly the body
/// served by `GET /latency`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// When the probe behind this snapshot completed (UTC)
    pub collected_at: DateTime<Utc>,

    /// Configured probe target host
    pub target_host: String,

    /// Configured probe target port
    pub tcp_port: u16,

    /// Configured probe period in seconds
    pub interval_seconds: u64,

    /// The probe outcome
    pub tcp: ProbeResult,
}

impl Snapshot {
    /// Create a snapshot stamped with the current time.
    pub fn new(
        target_host: impl Into<String>,
        tcp_port: u16,
        interval_seconds: u64,
        tcp: ProbeResult,
    ) -> Self {
        Self {
            collected_at: Utc::now(),
            target_host: target_host.into(),
            tcp_port,
            interval_seconds,
            tcp,
        }
    }
}
