//! Encounter Service - Application service for encounter generation
//!
//! Delegates generation and criteria validation to the external encounter
//! generator. The generator owns the knowledge of which criteria combinations
//! can produce an encounter, so no checks are duplicated here.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, instrument};

use crate::application::ports::outbound::{EncounterGeneratorPort, EncounterVerifierPort};
use crate::domain::entities::Encounter;
use crate::domain::value_objects::EncounterCriteria;

/// Service for generating and validating encounters
pub struct EncounterService<G, V>
where
    G: EncounterGeneratorPort,
    V: EncounterVerifierPort,
{
    generator: Arc<G>,
    verifier: Arc<V>,
}

impl<G, V> EncounterService<G, V>
where
    G: EncounterGeneratorPort,
    V: EncounterVerifierPort,
{
    pub fn new(generator: Arc<G>, verifier: Arc<V>) -> Self {
        Self {
            generator,
            verifier,
        }
    }

    /// Generate an encounter for fully-resolved criteria
    #[instrument(
        skip(self, criteria),
        fields(environment = %criteria.environment, level = criteria.level)
    )]
    pub async fn generate_encounter(&self, criteria: EncounterCriteria) -> Result<Encounter> {
        let encounter = self.generator.generate(&criteria).await?;

        info!(
            creatures = encounter.creatures.len(),
            characters = encounter.characters.len(),
            "Generated encounter in {} ({})",
            criteria.environment,
            criteria.temperature
        );
        Ok(encounter)
    }

    /// Ask the generator whether the criteria can produce any encounter.
    ///
    /// The verdict comes back exactly as the generator reported it. `false`
    /// is an answer, not an error; only transport or generator faults surface
    /// as errors.
    #[instrument(
        skip(self, criteria),
        fields(environment = %criteria.environment, level = criteria.level)
    )]
    pub async fn validate_criteria(&self, criteria: EncounterCriteria) -> Result<bool> {
        self.verifier.valid_exists(&criteria).await
    }
}
