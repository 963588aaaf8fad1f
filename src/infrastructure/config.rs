//! Application configuration

use std::env;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Treasure generator base URL
    pub treasure_gen_base_url: String,
    /// Encounter generator base URL
    pub encounter_gen_base_url: String,
    /// Character generator base URL
    pub character_gen_base_url: String,

    /// HTTP server port
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            treasure_gen_base_url: env::var("TREASURE_GEN_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:5001".to_string()),
            encounter_gen_base_url: env::var("ENCOUNTER_GEN_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:5002".to_string()),
            character_gen_base_url: env::var("CHARACTER_GEN_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:5003".to_string()),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }
}
