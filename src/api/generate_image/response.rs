// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Coloring page response types

use serde::{Deserialize, Serialize};

/// Prefix turning a base64 PNG into a browser-ready data URI
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Response from coloring page generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateImageResponse {
    /// Data URI of the generated PNG
    pub image: String,
}

impl GenerateImageResponse {
    /// Wrap a base64 PNG payload as a data URI
    pub fn from_base64(payload: &str) -> Self {
        Self {
            image: format!("{}{}", PNG_DATA_URI_PREFIX, payload),
        }
    }
}
