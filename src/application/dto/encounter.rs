use serde::{Deserialize, Serialize};

use crate::application::dto::CharacterDto;
use crate::application::services::normalize_filters;
use crate::domain::entities::{Creature, Encounter, Treasure};
use crate::domain::value_objects::{
    EncounterCriteria, CREATURE_TYPES, ENVIRONMENTS, TEMPERATURES, TIMES_OF_DAY,
};

#[derive(Debug, Deserialize)]
pub struct EncounterRequestDto {
    pub environment: String,
    pub level: u32,
    pub temperature: String,
    pub time_of_day: String,
    #[serde(default)]
    pub filters: Option<Vec<String>>,
}

impl EncounterRequestDto {
    /// Resolve the request into concrete criteria. This is the only place
    /// the optional filter list exists; it is made concrete here and stays
    /// that way for the rest of the request's life.
    pub fn into_criteria(self) -> EncounterCriteria {
        EncounterCriteria {
            environment: self.environment,
            level: self.level,
            temperature: self.temperature,
            time_of_day: self.time_of_day,
            filters: normalize_filters(self.filters),
        }
    }
}

/// Envelope for encounter generation.
#[derive(Debug, Serialize)]
pub struct EncounterResponseDto {
    pub encounter: EncounterDto,
}

impl From<Encounter> for EncounterResponseDto {
    fn from(encounter: Encounter) -> Self {
        Self {
            encounter: EncounterDto::from(encounter),
        }
    }
}

/// Wire representation of an encounter. Creatures and treasures pass through
/// as the generator produced them; each character is converted separately, so
/// every character's collections are ordered on their own.
#[derive(Debug, Serialize)]
pub struct EncounterDto {
    pub description: Option<String>,
    pub creatures: Vec<Creature>,
    pub characters: Vec<CharacterDto>,
    pub treasures: Vec<Treasure>,
}

impl From<Encounter> for EncounterDto {
    fn from(encounter: Encounter) -> Self {
        Self {
            description: encounter.description,
            creatures: encounter.creatures,
            characters: encounter
                .characters
                .into_iter()
                .map(CharacterDto::from)
                .collect(),
            treasures: encounter.treasures,
        }
    }
}

/// Envelope for encounter validation. The flag holds the generator's verdict
/// exactly as reported.
#[derive(Debug, Serialize)]
pub struct ValidationResponseDto {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
}

#[derive(Debug, Serialize)]
pub struct EncounterOptionsDto {
    pub environments: Vec<String>,
    pub temperatures: Vec<String>,
    pub times_of_day: Vec<String>,
    pub creature_types: Vec<String>,
}

impl EncounterOptionsDto {
    pub fn current() -> Self {
        Self {
            environments: ENVIRONMENTS.iter().map(|e| e.to_string()).collect(),
            temperatures: TEMPERATURES.iter().map(|t| t.to_string()).collect(),
            times_of_day: TIMES_OF_DAY.iter().map(|t| t.to_string()).collect(),
            creature_types: CREATURE_TYPES.iter().map(|c| c.to_string()).collect(),
        }
    }
}
