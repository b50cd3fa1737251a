// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;
use coloring_page_api::{api::ApiServer, cli::Cli};
use std::env;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = cli.load_config()?;

    let server = ApiServer::new(config).await?;
    info!("Health:   GET  http://{}/api/health", server.local_addr());
    info!("Generate: POST http://{}/api/generate", server.local_addr());

    // Wait for shutdown signal
    signal::ctrl_c().await?;

    info!("Shutting down...");
    server.shutdown().await;

    Ok(())
}
