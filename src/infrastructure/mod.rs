//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - HTTP: REST API routes
//! - TreasureGen: Treasure generator client
//! - EncounterGen: Encounter generator client
//! - CharacterGen: Character generator client
//! - Config: Application configuration
//! - State: Shared application state

pub mod character_gen;
pub mod config;
pub mod encounter_gen;
pub mod http;
pub mod state;
pub mod treasure_gen;
