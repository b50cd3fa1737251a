// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Coloring page request types and validation

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::errors::ApiError;
use crate::coloring::{AspectRatio, Style};

/// Request for a coloring page via POST /api/generate
///
/// Fields that are present but not strings are treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageRequest {
    /// Scene to draw
    #[serde(default)]
    pub description: Option<String>,

    /// `square`, `portrait` or `landscape`
    #[serde(default)]
    pub aspect_ratio: Option<String>,

    /// `classic`, `minimalist` or `detailed`
    #[serde(default)]
    pub style: Option<String>,
}

impl GenerateImageRequest {
    /// Read the request out of an arbitrary JSON payload.
    ///
    /// Non-object payloads yield an empty request.
    pub fn from_json(payload: &Value) -> Self {
        let field = |name: &str| {
            payload
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        Self {
            description: field("description"),
            aspect_ratio: field("aspectRatio"),
            style: field("style"),
        }
    }

    /// Validate the request and return the trimmed description
    pub fn validate(&self) -> Result<&str, ApiError> {
        match self.description.as_deref().map(trim_description) {
            Some(description) if !description.is_empty() => Ok(description),
            _ => Err(ApiError::MissingDescription),
        }
    }

    /// Requested aspect ratio, `square` when absent or unknown
    pub fn aspect_ratio(&self) -> AspectRatio {
        AspectRatio::from_name_or_default(self.aspect_ratio.as_deref())
    }

    /// Requested style, `classic` when absent or unknown
    pub fn style(&self) -> Style {
        Style::from_name_or_default(self.style.as_deref())
    }
}

/// Trim whitespace and byte order marks from both ends
fn trim_description(description: &str) -> &str {
    description.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
