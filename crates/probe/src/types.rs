//! Probe result types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome classification for a single TCP probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStatus {
    /// Connection established within the timeout
    Ok,
    /// No response within the connect timeout
    Timeout,
    /// Remote actively refused the connection
    ConnectionRefused,
    /// Any other transport or OS-level failure
    Error,
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeStatus::Ok => write!(f, "ok"),
            ProbeStatus::Timeout => write!(f, "timeout"),
            ProbeStatus::ConnectionRefused => write!(f, "connection_refused"),
            ProbeStatus::Error => write!(f, "error"),
        }
    }
}

/// Result of a single TCP connect probe.
///
/// Constructed once per probe and never mutated. `latency_ms` is present
/// only for successful probes, `detail` only for OS-level errors; both are
/// omitted from the JSON encoding when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Status of the probe
    pub status: ProbeStatus,

    /// Port that was probed
    pub port: u16,

    /// Connect latency in milliseconds, rounded to 3 decimal places
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<f64>,

    /// OS-level failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ProbeResult {
    /// Create a successful result with the measured connect latency.
    pub fn ok(port: u16, latency_ms: f64) -> Self {
        Self {
            status: ProbeStatus::Ok,
            port,
            latency_ms: Some(latency_ms),
            detail: None,
        }
    }

    /// Create a timeout result.
    pub fn timeout(port: u16) -> Self {
        Self {
            status: ProbeStatus::Timeout,
            port,
            latency_ms: None,
            detail: None,
        }
    }

    /// Create a connection-refused result.
    pub fn refused(port: u16) -> Self {
        Self {
            status: ProbeStatus::ConnectionRefused,
            port,
            latency_ms: None,
            detail: None,
        }
    }

    /// Create an error result with an OS-level failure description.
    pub fn error(port: u16, detail: impl Into<String>) -> Self {
        Self {
            status: ProbeStatus::Error,
            port,
            latency_ms: None,
            detail: Some(detail.into()),
        }
    }

    /// Check if the probe succeeded.
    pub fn is_ok(&self) -> bool {
        self.status == ProbeStatus::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(ProbeStatus::Ok.to_string(), "ok");
        assert_eq!(ProbeStatus::Timeout.to_string(), "timeout");
        assert_eq!(ProbeStatus::ConnectionRefused.to_string(), "connection_refused");
        assert_eq!(ProbeStatus::Error.to_string(), "error");
    }

    #[test]
    fn test_ok_result_carries_latency() {
        let result = ProbeResult::ok(22, 4.217);
        assert!(result.is_ok());
        assert_eq!(result.latency_ms, Some(4.217));
        assert!(result.detail.is_none());
    }

    #[test]
    fn test_ok_result_json_shape() {
        let json = serde_json::to_value(ProbeResult::ok(22, 4.217)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "ok", "port": 22, "latency_ms": 4.217})
        );
    }

    #[test]
    fn test_refused_result_omits_optional_fields() {
        let json = serde_json::to_value(ProbeResult::refused(22)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "connection_refused", "port": 22})
        );
    }

    #[test]
    fn test_error_result_carries_detail() {
        let result = ProbeResult::error(8080, "No route to host");
        assert_eq!(result.status, ProbeStatus::Error);
        assert_eq!(result.detail.as_deref(), Some("No route to host"));
        assert!(result.latency_ms.is_none());
    }

    #[test]
    fn test_json_round_trip() {
        for result in [
            ProbeResult::ok(22, 0.001),
            ProbeResult::timeout(443),
            ProbeResult::refused(1),
            ProbeResult::error(80, "Name or service not known"),
        ] {
            let json = serde_json::to_string(&result).unwrap();
            let parsed: ProbeResult = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, result);
        }
    }
}
