//! Encounter payloads produced by the encounter generator

use serde::{Deserialize, Serialize};

use super::{Character, Treasure};

/// A generated encounter: creatures, the characters among them, and the
/// treasure they guard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    pub description: Option<String>,
    pub creatures: Vec<Creature>,
    pub characters: Vec<Character>,
    pub treasures: Vec<Treasure>,
}

/// One creature line in an encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub name: String,
    pub description: Option<String>,
    pub quantity: u32,
    pub challenge_rating: String,
}
