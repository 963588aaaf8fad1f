//! HTTP client for the treasure generator service

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::application::ports::outbound::{ItemGeneratorPort, TreasureGeneratorPort};
use crate::domain::entities::{Item, Treasure};

/// Client for the treasure generator API
pub struct TreasureGenClient {
    client: Client,
    base_url: String,
}

impl TreasureGenClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Request a full treasure hoard for an encounter level
    pub async fn generate_treasure(&self, level: u32) -> Result<Treasure, TreasureGenError> {
        let response = self
            .client
            .post(format!("{}/v1/treasure", self.base_url))
            .json(&TreasureRequest { level })
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(TreasureGenError::ApiError(error_text));
        }

        let treasure: Treasure = response.json().await?;
        Ok(treasure)
    }

    /// Request one item at a power tier. The generator picks the category.
    pub async fn generate_item(&self, power: &str) -> Result<Item, TreasureGenError> {
        let response = self
            .client
            .post(format!("{}/v1/item", self.base_url))
            .json(&ItemRequest { power })
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(TreasureGenError::ApiError(error_text));
        }

        let item: Item = response.json().await?;
        Ok(item)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TreasureGenError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error: {0}")]
    ApiError(String),
}

#[derive(Debug, Serialize)]
struct TreasureRequest {
    level: u32,
}

#[derive(Debug, Serialize)]
struct ItemRequest<'a> {
    power: &'a str,
}

// =============================================================================
// Port Implementations
// =============================================================================

#[async_trait]
impl TreasureGeneratorPort for TreasureGenClient {
    async fn generate_at_level(&self, level: u32) -> Result<Treasure> {
        let treasure = self.generate_treasure(level).await?;
        Ok(treasure)
    }
}

#[async_trait]
impl ItemGeneratorPort for TreasureGenClient {
    async fn generate_at_power(&self, power: &str) -> Result<Item> {
        let item = self.generate_item(power).await?;
        Ok(item)
    }
}
