//! Shared utilities for the latency monitor components.

pub mod error;
pub mod logging;

pub use error::{Error, Result};
