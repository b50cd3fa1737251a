// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use super::body::BodyReadError;
use crate::coloring::ImageClientError;

/// JSON error body returned to the browser
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request body too large.")]
    BodyTooLarge,
    #[error("Request body must be valid JSON.")]
    InvalidJson,
    #[error("A description is required to generate an image.")]
    MissingDescription,
    #[error("OPENAI_API_KEY is not configured.")]
    MissingApiKey,
    #[error("Image generation failed.")]
    Upstream { status: StatusCode, details: String },
    #[error("Image service did not return data.")]
    EmptyUpstreamResponse,
    #[error("Not found")]
    NotFound,
    #[error("Unable to generate image at this time.")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::InvalidJson | ApiError::MissingDescription => StatusCode::BAD_REQUEST,
            ApiError::MissingApiKey | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream { status, .. } => *status,
            ApiError::EmptyUpstreamResponse => StatusCode::BAD_GATEWAY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        let details = match self {
            ApiError::Upstream { details, .. } => Some(details.clone()),
            _ => None,
        };
        ErrorResponse {
            error: self.to_string(),
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = (status, Json(self.to_response())).into_response();

        // Drop the connection instead of draining the rest of an oversized body
        if matches!(self, ApiError::BodyTooLarge) {
            response
                .headers_mut()
                .insert(header::CONNECTION, HeaderValue::from_static("close"));
        }

        response
    }
}

impl From<BodyReadError> for ApiError {
    fn from(err: BodyReadError) -> Self {
        match err {
            BodyReadError::TooLarge { limit } => {
                warn!("Request body exceeded {} bytes", limit);
                ApiError::BodyTooLarge
            }
            BodyReadError::Stream(e) => {
                error!("Failed to read request body: {}", e);
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<ImageClientError> for ApiError {
    fn from(err: ImageClientError) -> Self {
        match err {
            ImageClientError::Status { status, body } => {
                warn!("OpenAI API error: {} {}", status, body);
                let status = StatusCode::from_u16(status.as_u16())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                ApiError::Upstream {
                    status,
                    details: body,
                }
            }
            ImageClientError::MissingImageData { raw } => {
                error!("OpenAI response did not include image data: {}", raw);
                ApiError::EmptyUpstreamResponse
            }
            other => {
                error!("Failed to generate image: {}", other);
                ApiError::Internal(other.to_string())
            }
        }
    }
}
