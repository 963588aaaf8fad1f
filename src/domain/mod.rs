//! Domain layer - Core business objects with no infrastructure dependencies
//!
//! This layer contains:
//! - Entities: Treasure, Item, Encounter, Character, Leadership
//! - Value Objects: ItemCategory, EncounterCriteria, generator catalogs
//! - Domain Services: Pure presentation-ordering operations

pub mod entities;
pub mod services;
pub mod value_objects;
