//! Encounter API routes - Generation, validation, and picker options

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::application::dto::{
    EncounterOptionsDto, EncounterRequestDto, EncounterResponseDto, ValidationResponseDto,
};
use crate::infrastructure::state::AppState;

/// Generate an encounter for the requested criteria
pub async fn generate_encounter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EncounterRequestDto>,
) -> Result<Json<EncounterResponseDto>, (StatusCode, String)> {
    let criteria = req.into_criteria();

    let encounter = state
        .encounter_service
        .generate_encounter(criteria)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(EncounterResponseDto::from(encounter)))
}

/// Ask whether the requested criteria can produce any encounter
pub async fn validate_encounter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EncounterRequestDto>,
) -> Result<Json<ValidationResponseDto>, (StatusCode, String)> {
    let criteria = req.into_criteria();

    let is_valid = state
        .encounter_service
        .validate_criteria(criteria)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(ValidationResponseDto { is_valid }))
}

/// List the environments, temperatures, times of day, and creature types the
/// encounter endpoints accept
pub async fn get_encounter_options() -> Json<EncounterOptionsDto> {
    Json(EncounterOptionsDto::current())
}
