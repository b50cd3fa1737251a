// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Coloring page generation: prompt building and the image provider client

pub mod client;
pub mod prompt;

pub use client::{ImageClient, ImageClientError, ImageGenerationRequest, OpenAIImageResponse};
pub use prompt::{build_image_params, AspectRatio, ImageParams, Style};
