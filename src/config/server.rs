// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Server configuration for the coloring page API

use std::fmt;
use std::path::Path;

/// Default listening port
pub const DEFAULT_PORT: u16 = 5000;

/// Default interface to bind
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// Default base URL of the OpenAI-compatible image provider
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Default image model requested from the provider
pub const DEFAULT_IMAGE_MODEL: &str = "gpt-image-1";

/// Browser origin allowed to call the API
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AllowedOrigin {
    /// Any origin (`*`)
    #[default]
    Any,
    /// A single explicit origin, e.g. `http://localhost:5173`
    Exact(String),
}

impl AllowedOrigin {
    /// Parse a configured origin. Only `*` means any origin; every other
    /// value, including an empty one, is echoed verbatim.
    pub fn parse(value: &str) -> Self {
        if value == "*" {
            Self::Any
        } else {
            Self::Exact(value.to_string())
        }
    }

    /// Value for the `Access-Control-Allow-Origin` header
    pub fn header_value(&self) -> &str {
        match self {
            Self::Any => "*",
            Self::Exact(origin) => origin,
        }
    }
}

impl fmt::Display for AllowedOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header_value())
    }
}

/// Configuration for the HTTP server and its image provider
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bearer credential for the image provider
    pub openai_api_key: Option<String>,
    /// Interface to bind
    pub bind_host: String,
    /// Listening port (0 picks an ephemeral port)
    pub port: u16,
    /// Allowed browser origin for CORS
    pub client_origin: AllowedOrigin,
    /// Base URL of the provider, without the `/v1/...` path
    pub openai_base_url: String,
    /// Model name sent with every generation request
    pub image_model: String,
}

impl ServerConfig {
    /// Build configuration from a variable lookup.
    ///
    /// Missing or unparsable values fall back to defaults. An empty
    /// credential counts as missing.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            openai_api_key: lookup("OPENAI_API_KEY").and_then(non_empty),
            bind_host: lookup("HOST")
                .and_then(non_empty)
                .unwrap_or(defaults.bind_host),
            port: lookup("PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.port),
            client_origin: lookup("CLIENT_ORIGIN")
                .map(|v| AllowedOrigin::parse(&v))
                .unwrap_or(defaults.client_origin),
            openai_base_url: lookup("OPENAI_BASE_URL")
                .and_then(non_empty)
                .unwrap_or(defaults.openai_base_url),
            image_model: lookup("OPENAI_IMAGE_MODEL")
                .and_then(non_empty)
                .unwrap_or(defaults.image_model),
        }
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load a `.env` style file into the process environment.
    ///
    /// Variables already set in the environment are left untouched.
    pub fn load_env_file(path: impl AsRef<Path>) -> anyhow::Result<()> {
        dotenv::from_path(path.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to load {}: {}", path.as_ref().display(), e))
    }

    /// Whether a provider credential is available
    pub fn has_api_key(&self) -> bool {
        self.openai_api_key.is_some()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.bind_host.trim().is_empty() {
            return Err("bind host must not be empty".to_string());
        }
        if self.openai_base_url.trim().is_empty() {
            return Err("OpenAI base URL must not be empty".to_string());
        }
        if !self.openai_base_url.starts_with("http://")
            && !self.openai_base_url.starts_with("https://")
        {
            return Err(format!(
                "OpenAI base URL must start with http:// or https://, got '{}'",
                self.openai_base_url
            ));
        }
        if self.image_model.trim().is_empty() {
            return Err("image model must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            bind_host: DEFAULT_BIND_HOST.to_string(),
            port: DEFAULT_PORT,
            client_origin: AllowedOrigin::Any,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
