//! Leadership API routes - Leadership stats, cohorts, and followers

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::application::dto::{
    CohortRequestDto, CohortResponseDto, FollowerRequestDto, FollowerResponseDto,
    LeadershipRequestDto, LeadershipResponseDto,
};
use crate::infrastructure::state::AppState;

/// Generate leadership stats for a leader
pub async fn generate_leadership(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LeadershipRequestDto>,
) -> Result<Json<LeadershipResponseDto>, (StatusCode, String)> {
    let leadership = state
        .leadership_service
        .generate_leadership(req.leader_level, req.leader_charisma_bonus, &req.leader_animal)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(LeadershipResponseDto::from(leadership)))
}

/// Generate a cohort attracted by a leader
pub async fn generate_cohort(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CohortRequestDto>,
) -> Result<Json<CohortResponseDto>, (StatusCode, String)> {
    let cohort = state
        .leadership_service
        .generate_cohort(
            req.cohort_score,
            req.leader_level,
            &req.leader_alignment,
            &req.leader_class,
        )
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(CohortResponseDto::from(cohort)))
}

/// Generate a follower of the requested level
pub async fn generate_follower(
    State(state): State<Arc<AppState>>,
    Json(req): Json<FollowerRequestDto>,
) -> Result<Json<FollowerResponseDto>, (StatusCode, String)> {
    let follower = state
        .leadership_service
        .generate_follower(req.follower_level, &req.leader_alignment, &req.leader_class)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(FollowerResponseDto::from(follower)))
}
