//! Ports - Hexagonal architecture boundary interfaces

pub mod outbound;
