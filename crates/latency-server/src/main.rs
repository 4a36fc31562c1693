//! Latency monitor server binary.

use anyhow::Context;
use latency_server::{Config, MonitorServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    common::logging::init();

    let config = Config::from_env().context("invalid environment configuration")?;
    let server = MonitorServer::new(config);
    server.run().await?;

    Ok(())
}
