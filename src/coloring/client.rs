// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Client for an OpenAI-compatible image generation API

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::prompt::ImageParams;

/// Response format requested from the provider
pub const RESPONSE_FORMAT_B64_JSON: &str = "b64_json";

/// Errors from a single provider call
#[derive(Error, Debug)]
pub enum ImageClientError {
    /// Provider answered with a non-success status
    #[error("image provider returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Provider answered 2xx but without `data[0].b64_json`
    #[error("image provider response did not include image data: {raw}")]
    MissingImageData { raw: String },

    /// Provider answered 2xx with a body that is not JSON
    #[error("failed to decode image provider response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request never completed
    #[error("image provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Body of `POST /v1/images/generations`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageGenerationRequest {
    pub model: String,
    pub prompt: String,
    pub size: String,
    pub response_format: String,
}

// --- OpenAI-compatible response types ---

#[derive(Debug, Deserialize)]
pub struct OpenAIImageResponse {
    #[serde(default)]
    pub data: Vec<OpenAIImageData>,
}

#[derive(Debug, Deserialize)]
pub struct OpenAIImageData {
    #[serde(default)]
    pub b64_json: Option<serde_json::Value>,
}

impl OpenAIImageResponse {
    /// First non-empty base64 payload, if any
    pub fn first_image(&self) -> Option<&str> {
        self.data
            .first()
            .and_then(|d| d.b64_json.as_ref())
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }
}

/// Extract `data[0].b64_json` from a raw provider body
pub fn extract_image_data(body: &serde_json::Value) -> Option<String> {
    serde_json::from_value::<OpenAIImageResponse>(body.clone())
        .ok()
        .and_then(|r| r.first_image().map(str::to_string))
}

fn is_loopback(endpoint: &str) -> bool {
    reqwest::Url::parse(endpoint)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .map(|host| host == "localhost" || host == "127.0.0.1" || host == "[::1]")
        .unwrap_or(false)
}

/// Client for the provider's image generation endpoint
#[derive(Debug, Clone)]
pub struct ImageClient {
    client: Client,
    endpoint: String,
    model_name: String,
}

impl ImageClient {
    /// Create a new ImageClient for `base_url` (e.g. `https://api.openai.com`)
    pub fn new(base_url: &str, model_name: &str) -> anyhow::Result<Self> {
        let endpoint = base_url.trim_end_matches('/').to_string();

        // Local sidecars are reached directly, never through a system proxy
        let mut builder = Client::builder();
        if is_loopback(&endpoint) {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        info!(
            "Image client configured: endpoint={}, model={}",
            endpoint, model_name
        );

        Ok(Self {
            client,
            endpoint,
            model_name: model_name.to_string(),
        })
    }

    /// Get the model name
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Full URL of the generations endpoint
    pub fn generations_url(&self) -> String {
        format!("{}/v1/images/generations", self.endpoint)
    }

    /// Build the request body for a set of image parameters
    pub fn build_request(&self, params: &ImageParams) -> ImageGenerationRequest {
        ImageGenerationRequest {
            model: self.model_name.clone(),
            prompt: params.prompt.clone(),
            size: params.size.to_string(),
            response_format: RESPONSE_FORMAT_B64_JSON.to_string(),
        }
    }

    /// Generate one image and return its base64 PNG payload.
    ///
    /// Exactly one request is sent; there is no retry and no timeout.
    pub async fn generate(
        &self,
        api_key: &str,
        params: &ImageParams,
    ) -> Result<String, ImageClientError> {
        let body = self.build_request(params);
        let url = self.generations_url();
        debug!("Image generate POST {} size={}", url, body.size);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(ImageClientError::Status { status, body: text });
        }

        let raw = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&raw)?;

        extract_image_data(&value).ok_or(ImageClientError::MissingImageData { raw })
    }
}
