//! HTTP client for the encounter generator service

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::outbound::{EncounterGeneratorPort, EncounterVerifierPort};
use crate::domain::entities::Encounter;
use crate::domain::value_objects::EncounterCriteria;

/// Client for the encounter generator API
pub struct EncounterGenClient {
    client: Client,
    base_url: String,
}

impl EncounterGenClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Request an encounter for the given criteria
    pub async fn generate_encounter(
        &self,
        criteria: &EncounterCriteria,
    ) -> Result<Encounter, EncounterGenError> {
        let response = self
            .client
            .post(format!("{}/v1/encounter", self.base_url))
            .json(criteria)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(EncounterGenError::ApiError(error_text));
        }

        let encounter: Encounter = response.json().await?;
        Ok(encounter)
    }

    /// Ask whether any encounter exists for the given criteria
    pub async fn validate_criteria(
        &self,
        criteria: &EncounterCriteria,
    ) -> Result<bool, EncounterGenError> {
        let response = self
            .client
            .post(format!("{}/v1/encounter/validate", self.base_url))
            .json(criteria)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(EncounterGenError::ApiError(error_text));
        }

        let verdict: ValidationResponse = response.json().await?;
        Ok(verdict.valid)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EncounterGenError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error: {0}")]
    ApiError(String),
}

#[derive(Debug, Deserialize)]
struct ValidationResponse {
    valid: bool,
}

// =============================================================================
// Port Implementations
// =============================================================================

#[async_trait]
impl EncounterGeneratorPort for EncounterGenClient {
    async fn generate(&self, criteria: &EncounterCriteria) -> Result<Encounter> {
        let encounter = self.generate_encounter(criteria).await?;
        Ok(encounter)
    }
}

#[async_trait]
impl EncounterVerifierPort for EncounterGenClient {
    async fn valid_exists(&self, criteria: &EncounterCriteria) -> Result<bool> {
        let valid = self.validate_criteria(criteria).await?;
        Ok(valid)
    }
}
