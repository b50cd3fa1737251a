// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use std::net::SocketAddr;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use super::http_server::{create_app, AppState};
use crate::config::ServerConfig;

/// HTTP server running in the background
pub struct ApiServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl ApiServer {
    /// Bind `config.bind_host:config.port` and start serving.
    ///
    /// A port of 0 binds an ephemeral port; see `local_addr`.
    pub async fn new(config: ServerConfig) -> Result<Self> {
        if !config.has_api_key() {
            warn!("OPENAI_API_KEY is not set. Image generation requests will fail until it is provided.");
        }

        let listen_addr = format!("{}:{}", config.bind_host, config.port);
        let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
        let addr = listener.local_addr()?;

        info!(
            "CORS origin: {}, provider model: {}",
            config.client_origin, config.image_model
        );

        let state = AppState::new(config)?;
        let app = create_app(state);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let serve_future = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });

            if let Err(e) = serve_future.await {
                error!("HTTP server error: {}", e);
            }
        });

        info!("Image generation API listening on port {}", addr.port());

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop accepting connections and wait for in-flight requests
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}
