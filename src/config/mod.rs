// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Process configuration, resolved once at startup

pub mod server;

pub use server::{
    AllowedOrigin, ServerConfig, DEFAULT_BIND_HOST, DEFAULT_IMAGE_MODEL, DEFAULT_OPENAI_BASE_URL,
    DEFAULT_PORT,
};
