//! Generator ports - Interfaces to the external content generator suite
//!
//! These traits define the contracts that infrastructure clients must implement.
//! Application services depend on these traits, not concrete implementations.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::{Character, Encounter, Item, Leadership, Treasure};
use crate::domain::value_objects::EncounterCriteria;

// =============================================================================
// Treasure Generator Port
// =============================================================================

/// Port for whole-hoard treasure generation
#[async_trait]
pub trait TreasureGeneratorPort: Send + Sync {
    /// Generate a full treasure hoard for an encounter level
    async fn generate_at_level(&self, level: u32) -> Result<Treasure>;
}

/// Port for single-item generation
///
/// Each call rolls a fresh item whose category the caller cannot choose; the
/// generator decides independently every time.
#[async_trait]
pub trait ItemGeneratorPort: Send + Sync {
    /// Generate one random item at a power tier
    async fn generate_at_power(&self, power: &str) -> Result<Item>;
}

// =============================================================================
// Encounter Generator Port
// =============================================================================

/// Port for encounter generation and validation
#[async_trait]
pub trait EncounterGeneratorPort: Send + Sync {
    /// Generate an encounter for the given criteria
    async fn generate(&self, criteria: &EncounterCriteria) -> Result<Encounter>;
}

/// Port for asking the generator whether criteria can produce an encounter
#[async_trait]
pub trait EncounterVerifierPort: Send + Sync {
    /// Report whether any encounter exists for the given criteria
    async fn valid_exists(&self, criteria: &EncounterCriteria) -> Result<bool>;
}

// =============================================================================
// Character Generator Port
// =============================================================================

/// Port for leadership, cohort, and follower generation
#[async_trait]
pub trait LeadershipGeneratorPort: Send + Sync {
    /// Generate leadership stats for a leader
    async fn generate_leadership(
        &self,
        leader_level: u32,
        leader_charisma_bonus: i32,
        leader_animal: &str,
    ) -> Result<Leadership>;

    /// Generate a cohort for a leader
    async fn generate_cohort(
        &self,
        cohort_score: i32,
        leader_level: u32,
        leader_alignment: &str,
        leader_class: &str,
    ) -> Result<Character>;

    /// Generate a follower of the given level
    async fn generate_follower(
        &self,
        follower_level: u32,
        leader_alignment: &str,
        leader_class: &str,
    ) -> Result<Character>;
}
