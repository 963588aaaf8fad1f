//! Treasure API routes - Hoard and single-item generation

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::dto::{
    GenerateItemRequestDto, GenerateTreasureRequestDto, TreasureOptionsDto, TreasureResponseDto,
};
use crate::domain::entities::Treasure;
use crate::domain::value_objects::ItemCategory;
use crate::infrastructure::state::AppState;

/// Generate a full treasure hoard for an encounter level
pub async fn generate_treasure(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateTreasureRequestDto>,
) -> Result<Json<TreasureResponseDto>, (StatusCode, String)> {
    let treasure = state
        .treasure_service
        .generate_treasure(req.level)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(TreasureResponseDto::from(treasure)))
}

/// Generate a single item of the category named in the path
pub async fn generate_item(
    State(state): State<Arc<AppState>>,
    Path(category): Path<ItemCategory>,
    Json(req): Json<GenerateItemRequestDto>,
) -> Result<Json<TreasureResponseDto>, (StatusCode, String)> {
    let item = state
        .treasure_service
        .generate_item(category, &req.power)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(TreasureResponseDto::from(Treasure::of_item(item))))
}

/// List the powers and item categories the treasure endpoints accept
pub async fn get_treasure_options() -> Json<TreasureOptionsDto> {
    Json(TreasureOptionsDto::current())
}
