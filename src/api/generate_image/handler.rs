// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Coloring page endpoint handler

use axum::{
    extract::{Request, State},
    Json,
};
use tracing::{debug, info};

use super::request::GenerateImageRequest;
use super::response::GenerateImageResponse;
use crate::api::body::{read_body_limited, MAX_BODY_BYTES};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::coloring::build_image_params;

/// POST /api/generate - Generate a coloring page from a description
///
/// Pipeline:
/// 1. Read the body, capped at `MAX_BODY_BYTES` (413)
/// 2. Parse JSON (400)
/// 3. Validate the description (400)
/// 4. Require a provider credential (500)
/// 5. Build size and prompt, falling back to square/classic
/// 6. Call the provider once and relay its outcome
pub async fn generate_image_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<GenerateImageResponse>, ApiError> {
    // 1. Bounded read
    let body = read_body_limited(request.into_body(), MAX_BODY_BYTES).await?;

    // 2. Parse
    let payload: serde_json::Value =
        serde_json::from_slice(&body).map_err(|_| ApiError::InvalidJson)?;
    let request = GenerateImageRequest::from_json(&payload);

    // 3. Validate
    let description = request.validate()?;

    // 4. Credential
    let api_key = state
        .config
        .openai_api_key
        .as_deref()
        .ok_or(ApiError::MissingApiKey)?;

    // 5. Prompt
    let aspect_ratio = request.aspect_ratio();
    let style = request.style();
    let params = build_image_params(description, aspect_ratio, style);
    debug!(
        "Coloring page request: description_len={}, aspect_ratio={}, style={}",
        description.len(),
        aspect_ratio.name(),
        style.name()
    );

    // 6. Generate
    let image = state.image_client.generate(api_key, &params).await?;

    info!(
        "Coloring page generated: size={}, style={}, payload_len={}",
        params.size,
        style.name(),
        image.len()
    );

    Ok(Json(GenerateImageResponse::from_base64(&image)))
}
