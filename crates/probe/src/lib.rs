//! TCP reachability probing for the latency monitor.
//!
//! A probe is a single timed TCP connect against a fixed host:port with a
//! bounded timeout. Every outcome is classified into a [`ProbeResult`]:
//! the connection either succeeds (with its handshake latency), times out,
//! is refused, or fails with some other OS-level error. The probe call
//! itself never fails; all failure modes are data in the returned value.
//!
//! # Example
//!
//! ```no_run
//! use probe::{Prober, TcpProber};
//! use std::time::Duration;
//!
//! # async fn example() {
//! let prober = TcpProber::new("10.0.2.133", 22, Duration::from_secs(5));
//! let result = prober.probe().await;
//! if result.is_ok() {
//!     println!("reachable in {:?} ms", result.latency_ms);
//! }
//! # }
//! ```

pub mod prober;
pub mod types;

pub use prober::{Prober, TcpProber};
pub use types::{ProbeResult, ProbeStatus};
