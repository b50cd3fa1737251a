// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::HeaderMap,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::cors::{cors_headers, cors_middleware};
use super::errors::ApiError;
use super::generate_image::generate_image_handler;
use crate::coloring::ImageClient;
use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub image_client: ImageClient,
    pub cors_headers: Arc<HeaderMap>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> anyhow::Result<Self> {
        let image_client = ImageClient::new(&config.openai_base_url, &config.image_model)?;
        let cors_headers = Arc::new(cors_headers(&config.client_origin));
        Ok(Self {
            config: Arc::new(config),
            image_client,
            cors_headers,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

/// Build the application router.
///
/// Unknown paths and unsupported methods on known paths both answer 404.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/health",
            get(health_handler)
                .head(not_found_handler)
                .fallback(not_found_handler),
        )
        .route(
            "/api/generate",
            post(generate_image_handler).fallback(not_found_handler),
        )
        .fallback(not_found_handler)
        .layer(middleware::from_fn_with_state(state.clone(), cors_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn not_found_handler() -> impl IntoResponse {
    ApiError::NotFound
}
