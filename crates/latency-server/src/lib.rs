//! Latency monitor server.
//!
//! Probes a single TCP endpoint on a fixed interval, keeps the most recent
//! measurement in a shared snapshot slot, and serves it over three
//! read-only HTTP endpoints:
//!
//! - `GET /health` — liveness, always `{"status":"ok"}`
//! - `GET /latency` — the latest snapshot as JSON
//! - `GET /metrics` — Prometheus-style text exposition
//!
//! Probe failures are data, not errors: a timeout or refused connection
//! still produces a snapshot, and every endpoint answers 200 with the
//! status embedded in the body.
//!
//! # Components
//!
//! - **Collector**: background task driving the prober and publishing
//!   snapshots
//! - **SnapshotStore**: single-slot, most-recent-wins shared state
//! - **HTTP API**: stateless read handlers over the store

pub mod collector;
pub mod config;
pub mod http_server;
pub mod server;
pub mod store;
pub mod types;

pub use collector::Collector;
pub use config::{CONNECT_TIMEOUT, Config, ConfigError};
pub use server::MonitorServer;
pub use store::SnapshotStore;
pub use types::Snapshot;
