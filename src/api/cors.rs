// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! CORS headers and preflight handling for the browser front-end

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use super::http_server::AppState;
use crate::config::AllowedOrigin;

pub const ALLOWED_HEADERS: &str = "Content-Type";
pub const ALLOWED_METHODS: &str = "GET,POST,OPTIONS";

/// CORS headers for the configured origin
pub fn cors_headers(origin: &AllowedOrigin) -> HeaderMap {
    let mut headers = HeaderMap::new();

    match origin {
        AllowedOrigin::Any => {
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            );
        }
        AllowedOrigin::Exact(value) => match HeaderValue::from_str(value) {
            Ok(value) => {
                headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
                headers.insert(header::VARY, HeaderValue::from_static("Origin"));
            }
            Err(e) => warn!("Configured client origin is not a valid header value: {}", e),
        },
    }

    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );

    headers
}

/// Middleware: answer every `OPTIONS` with 204 and stamp CORS headers on
/// every other response, including errors and 404s
pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let headers = state.cors_headers.as_ref().clone();

    if request.method() == Method::OPTIONS {
        return (StatusCode::NO_CONTENT, headers).into_response();
    }

    let mut response = next.run(request).await;
    response.headers_mut().extend(headers);
    response
}
