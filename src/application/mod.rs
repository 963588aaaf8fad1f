//! Application layer - Use cases and boundary interfaces
//!
//! This layer contains:
//! - Services: Use case implementations over the generator ports
//! - Ports: Interfaces the application requires from external systems
//! - DTOs: Wire representations for the HTTP surface

pub mod dto;
pub mod ports;
pub mod services;
