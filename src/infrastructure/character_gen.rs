//! HTTP client for the character generator service
//!
//! Serves the leadership endpoints: leadership stats, cohorts, and followers
//! all come from this one generator.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::application::ports::outbound::LeadershipGeneratorPort;
use crate::domain::entities::{Character, Leadership};

/// Client for the character generator API
pub struct CharacterGenClient {
    client: Client,
    base_url: String,
}

impl CharacterGenClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Request leadership stats for a leader
    pub async fn generate_leadership(
        &self,
        leader_level: u32,
        leader_charisma_bonus: i32,
        leader_animal: &str,
    ) -> Result<Leadership, CharacterGenError> {
        let request = LeadershipRequest {
            leader_level,
            leader_charisma_bonus,
            leader_animal,
        };

        let response = self
            .client
            .post(format!("{}/v1/leadership", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(CharacterGenError::ApiError(error_text));
        }

        let leadership: Leadership = response.json().await?;
        Ok(leadership)
    }

    /// Request a cohort for a leader
    pub async fn generate_cohort(
        &self,
        cohort_score: i32,
        leader_level: u32,
        leader_alignment: &str,
        leader_class: &str,
    ) -> Result<Character, CharacterGenError> {
        let request = CohortRequest {
            cohort_score,
            leader_level,
            leader_alignment,
            leader_class,
        };

        let response = self
            .client
            .post(format!("{}/v1/cohort", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(CharacterGenError::ApiError(error_text));
        }

        let cohort: Character = response.json().await?;
        Ok(cohort)
    }

    /// Request a follower of the given level
    pub async fn generate_follower(
        &self,
        follower_level: u32,
        leader_alignment: &str,
        leader_class: &str,
    ) -> Result<Character, CharacterGenError> {
        let request = FollowerRequest {
            follower_level,
            leader_alignment,
            leader_class,
        };

        let response = self
            .client
            .post(format!("{}/v1/follower", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(CharacterGenError::ApiError(error_text));
        }

        let follower: Character = response.json().await?;
        Ok(follower)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CharacterGenError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error: {0}")]
    ApiError(String),
}

#[derive(Debug, Serialize)]
struct LeadershipRequest<'a> {
    leader_level: u32,
    leader_charisma_bonus: i32,
    leader_animal: &'a str,
}

#[derive(Debug, Serialize)]
struct CohortRequest<'a> {
    cohort_score: i32,
    leader_level: u32,
    leader_alignment: &'a str,
    leader_class: &'a str,
}

#[derive(Debug, Serialize)]
struct FollowerRequest<'a> {
    follower_level: u32,
    leader_alignment: &'a str,
    leader_class: &'a str,
}

// =============================================================================
// Port Implementation
// =============================================================================

#[async_trait]
impl LeadershipGeneratorPort for CharacterGenClient {
    async fn generate_leadership(
        &self,
        leader_level: u32,
        leader_charisma_bonus: i32,
        leader_animal: &str,
    ) -> Result<Leadership> {
        // Call the inherent method using CharacterGenClient:: syntax to avoid recursion
        let leadership = CharacterGenClient::generate_leadership(
            self,
            leader_level,
            leader_charisma_bonus,
            leader_animal,
        )
        .await?;
        Ok(leadership)
    }

    async fn generate_cohort(
        &self,
        cohort_score: i32,
        leader_level: u32,
        leader_alignment: &str,
        leader_class: &str,
    ) -> Result<Character> {
        // Call the inherent method using CharacterGenClient:: syntax to avoid recursion
        let cohort = CharacterGenClient::generate_cohort(
            self,
            cohort_score,
            leader_level,
            leader_alignment,
            leader_class,
        )
        .await?;
        Ok(cohort)
    }

    async fn generate_follower(
        &self,
        follower_level: u32,
        leader_alignment: &str,
        leader_class: &str,
    ) -> Result<Character> {
        // Call the inherent method using CharacterGenClient:: syntax to avoid recursion
        let follower = CharacterGenClient::generate_follower(
            self,
            follower_level,
            leader_alignment,
            leader_class,
        )
        .await?;
        Ok(follower)
    }
}
