//! HTTP REST API routes

mod encounter_routes;
mod leadership_routes;
mod treasure_routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

pub use encounter_routes::*;
pub use leadership_routes::*;
pub use treasure_routes::*;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Treasure routes
        .route(
            "/api/treasures/generate",
            post(treasure_routes::generate_treasure),
        )
        .route(
            "/api/treasures/items/{category}",
            post(treasure_routes::generate_item),
        )
        .route(
            "/api/treasures/options",
            get(treasure_routes::get_treasure_options),
        )
        // Encounter routes
        .route(
            "/api/encounters/generate",
            post(encounter_routes::generate_encounter),
        )
        .route(
            "/api/encounters/validate",
            post(encounter_routes::validate_encounter),
        )
        .route(
            "/api/encounters/options",
            get(encounter_routes::get_encounter_options),
        )
        // Leadership routes
        .route(
            "/api/leadership/generate",
            post(leadership_routes::generate_leadership),
        )
        .route(
            "/api/leadership/cohort",
            post(leadership_routes::generate_cohort),
        )
        .route(
            "/api/leadership/follower",
            post(leadership_routes::generate_follower),
        )
}
