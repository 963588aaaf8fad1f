//! Application services - Use case implementations
//!
//! This module contains the application services that implement the gateway's
//! use cases. Each service follows hexagonal architecture principles,
//! accepting generator ports and returning domain entities.

pub mod encounter_service;
pub mod filters;
pub mod leadership_service;
pub mod treasure_service;

pub use encounter_service::EncounterService;
pub use filters::normalize_filters;
pub use leadership_service::LeadershipService;
pub use treasure_service::TreasureService;
