// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod coloring;
pub mod config;

pub use api::{create_app, ApiError, ApiServer, AppState};
pub use coloring::{build_image_params, AspectRatio, ImageClient, ImageParams, Style};
pub use config::{AllowedOrigin, ServerConfig};
