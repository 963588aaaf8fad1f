//! Outbound ports - Interfaces that the application requires from external systems

mod generator_port;

pub use generator_port::{
    EncounterGeneratorPort, EncounterVerifierPort, ItemGeneratorPort, LeadershipGeneratorPort,
    TreasureGeneratorPort,
};
