// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod body;
pub mod cors;
pub mod errors;
pub mod generate_image;
pub mod http_server;
pub mod server;

pub use body::{read_body_limited, BodyReadError, MAX_BODY_BYTES};
pub use errors::{ApiError, ErrorResponse};
pub use generate_image::{generate_image_handler, GenerateImageRequest, GenerateImageResponse};
pub use http_server::{create_app, AppState, HealthResponse};
pub use server::ApiServer;
