//! Environment-driven configuration for the latency server.

use std::time::Duration;
use thiserror::Error;

/// Connect timeout applied to every TCP probe.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

const ENV_TARGET_HOST: &str = "TARGET_HOST";
const ENV_TCP_PORT: &str = "TCP_PORT";
const ENV_MEASURE_INTERVAL: &str = "MEASURE_INTERVAL";
const ENV_LISTEN_ADDR: &str = "LISTEN_ADDR";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not a valid integer: {1}")]
    InvalidInteger(&'static str, String),

    #[error("TARGET_HOST must be non-empty")]
    EmptyHost,

    #[error("TCP_PORT must be between 1 and 65535")]
    ZeroPort,

    #[error("MEASURE_INTERVAL must be at least 1 second")]
    ZeroInterval,
}

/// Probe target and serving configuration.
///
/// Read once at startup and immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Host to probe
    pub target_host: String,

    /// Port to probe
    pub tcp_port: u16,

    /// Period between probes, measured from the end of each probe
    pub measure_interval: Duration,

    /// Bind address for the HTTP API
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_host: "10.0.2.133".to_string(),
            tcp_port: 22,
            measure_interval: Duration::from_secs(30),
            listen_addr: "0.0.0.0:8000".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// Unset variables fall back to defaults; set-but-invalid values are
    /// rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let target_host = lookup(ENV_TARGET_HOST).unwrap_or(defaults.target_host);
        if target_host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }

        let tcp_port = match lookup(ENV_TCP_PORT) {
            Some(v) => v
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidInteger(ENV_TCP_PORT, v))?,
            None => defaults.tcp_port,
        };
        if tcp_port == 0 {
            return Err(ConfigError::ZeroPort);
        }

        let measure_interval = match lookup(ENV_MEASURE_INTERVAL) {
            Some(v) => {
                let secs = v
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidInteger(ENV_MEASURE_INTERVAL, v))?;
                if secs == 0 {
                    return Err(ConfigError::ZeroInterval);
                }
                Duration::from_secs(secs)
            }
            None => defaults.measure_interval,
        };

        let listen_addr = lookup(ENV_LISTEN_ADDR).unwrap_or(defaults.listen_addr);

        Ok(Self {
            target_host,
            tcp_port,
            measure_interval,
            listen_addr,
        })
    }

    /// Probe period in whole seconds, as reported in snapshots.
    pub fn interval_seconds(&self) -> u64 {
        self.measure_interval.as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.target_host, "10.0.2.133");
        assert_eq!(config.tcp_port, 22);
        assert_eq!(config.interval_seconds(), 30);
        assert_eq!(config.listen_addr, "0.0.0.0:8000");
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = Config::from_lookup(|var| match var {
            "TARGET_HOST" => Some("db.internal".to_string()),
            "TCP_PORT" => Some("5432".to_string()),
            "MEASURE_INTERVAL" => Some("10".to_string()),
            "LISTEN_ADDR" => Some("127.0.0.1:9000".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.target_host, "db.internal");
        assert_eq!(config.tcp_port, 5432);
        assert_eq!(config.measure_interval, Duration::from_secs(10));
        assert_eq!(config.listen_addr, "127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_lookup(|var| match var {
            "TCP_PORT" => Some("not-a-port".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidInteger("TCP_PORT", _)));
    }

    #[test]
    fn test_port_out_of_range_is_rejected() {
        let err = Config::from_lookup(|var| match var {
            "TCP_PORT" => Some("70000".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidInteger("TCP_PORT", _)));
    }

    #[test]
    fn test_port_zero_is_rejected() {
        let err = Config::from_lookup(|var| match var {
            "TCP_PORT" => Some("0".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPort));
    }

    #[test]
    fn test_empty_host_is_rejected() {
        let err = Config::from_lookup(|var| match var {
            "TARGET_HOST" => Some("   ".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyHost));
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let err = Config::from_lookup(|var| match var {
            "MEASURE_INTERVAL" => Some("0".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::ZeroInterval));
    }

    #[test]
    fn test_invalid_interval_is_rejected() {
        let err = Config::from_lookup(|var| match var {
            "MEASURE_INTERVAL" => Some("30s".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidInteger("MEASURE_INTERVAL", _)
        ));
    }
}
