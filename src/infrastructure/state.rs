//! Shared application state

use std::sync::Arc;

use crate::application::services::{EncounterService, LeadershipService, TreasureService};
use crate::infrastructure::character_gen::CharacterGenClient;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::encounter_gen::EncounterGenClient;
use crate::infrastructure::treasure_gen::TreasureGenClient;

/// Shared application state
///
/// Holds only configuration and services over the generator clients. Nothing
/// here is mutable: every request owns its data end to end, so no locks or
/// caches are involved.
pub struct AppState {
    pub config: AppConfig,
    // Application services
    pub treasure_service: TreasureService<TreasureGenClient>,
    pub encounter_service: EncounterService<EncounterGenClient, EncounterGenClient>,
    pub leadership_service: LeadershipService<CharacterGenClient>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        // Initialize generator clients
        let treasure_gen = Arc::new(TreasureGenClient::new(&config.treasure_gen_base_url));
        let encounter_gen = Arc::new(EncounterGenClient::new(&config.encounter_gen_base_url));
        let character_gen = Arc::new(CharacterGenClient::new(&config.character_gen_base_url));

        // Initialize application services
        let treasure_service = TreasureService::new(treasure_gen);
        let encounter_service = EncounterService::new(encounter_gen.clone(), encounter_gen);
        let leadership_service = LeadershipService::new(character_gen);

        Self {
            config,
            treasure_service,
            encounter_service,
            leadership_service,
        }
    }
}
