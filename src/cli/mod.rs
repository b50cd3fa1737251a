// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use crate::config::{AllowedOrigin, ServerConfig};

/// Coloring page generation API
#[derive(Parser, Debug, Default)]
#[command(name = "coloring-page-api")]
#[command(version)]
#[command(about = "HTTP backend that turns scene descriptions into coloring book pages", long_about = None)]
pub struct Cli {
    /// Optional `.env` file; variables already in the environment win
    #[arg(long, env = "ENV_FILE")]
    pub env_file: Option<PathBuf>,

    /// Listening port [env: PORT, default: 5000]
    #[arg(long)]
    pub port: Option<u16>,

    /// Interface to bind [env: HOST, default: 0.0.0.0]
    #[arg(long)]
    pub host: Option<String>,

    /// Allowed browser origin, or `*` [env: CLIENT_ORIGIN]
    #[arg(long)]
    pub client_origin: Option<String>,

    /// Provider base URL [env: OPENAI_BASE_URL]
    #[arg(long)]
    pub openai_base_url: Option<String>,

    /// Image model name [env: OPENAI_IMAGE_MODEL]
    #[arg(long)]
    pub image_model: Option<String>,
}

impl Cli {
    /// Resolve the final configuration.
    ///
    /// Order of precedence: flags, process environment, the `.env` file,
    /// built-in defaults.
    pub fn load_config(&self) -> Result<ServerConfig> {
        match &self.env_file {
            Some(path) => {
                ServerConfig::load_env_file(path)?;
                info!("Loaded environment overrides from {}", path.display());
            }
            None => {
                if let Ok(path) = dotenv::dotenv() {
                    info!("Loaded environment overrides from {}", path.display());
                } else {
                    debug!("No .env file found");
                }
            }
        }

        let config = self.apply(ServerConfig::from_env());
        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }

    /// Overlay explicit flags on top of an existing configuration
    pub fn apply(&self, mut config: ServerConfig) -> ServerConfig {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(ref host) = self.host {
            config.bind_host = host.clone();
        }
        if let Some(ref origin) = self.client_origin {
            config.client_origin = AllowedOrigin::parse(origin);
        }
        if let Some(ref url) = self.openai_base_url {
            config.openai_base_url = url.clone();
        }
        if let Some(ref model) = self.image_model {
            config.image_model = model.clone();
        }
        config
    }
}
