use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{EntityId, Season};

use super::members::DeleteResponse;

#[derive(Debug, Serialize)]
pub struct SeasonListResponse {
    pub seasons: Vec<Season>,
    pub total: u32,
}

pub async fn list_seasons(
    State(state): State<AppState>,
) -> Result<Json<SeasonListResponse>, ApiError> {
    let mut seasons = state.store.seasons()?;

    // Most recent first
    seasons.sort_by(|a, b| b.start_date.cmp(&a.start_date).then_with(|| a.id.cmp(&b.id)));

    let total = seasons.len() as u32;
    Ok(Json(SeasonListResponse { seasons, total }))
}

pub async fn get_season(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Season>, ApiError> {
    let season = state
        .store
        .season_by_id(&EntityId::from(id.as_str()))?
        .ok_or_else(|| ApiError::NotFound(format!("Season {}", id)))?;
    Ok(Json(season))
}

#[derive(Debug, Deserialize)]
pub struct CreateSeasonRequest {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

pub async fn create_season(
    State(state): State<AppState>,
    Json(req): Json<CreateSeasonRequest>,
) -> Result<Json<Season>, ApiError> {
    if req.name.trim().is_empty() {
        return Err(ApiError::BadRequest("name must not be empty".to_string()));
    }
    if req.end_date < req.start_date {
        return Err(ApiError::BadRequest(
            "end_date must not precede start_date".to_string(),
        ));
    }

    let season = Season::new(req.name.trim().to_string(), req.start_date, req.end_date);
    let season = state.store.upsert_season(season)?;
    Ok(Json(season))
}

#[derive(Debug, Deserialize)]
pub struct UpdateSeasonRequest {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

pub async fn update_season(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateSeasonRequest>,
) -> Result<Json<Season>, ApiError> {
    let mut season = state
        .store
        .season_by_id(&EntityId::from(id.as_str()))?
        .ok_or_else(|| ApiError::NotFound(format!("Season {}", id)))?;

    if let Some(name) = req.name {
        if name.trim().is_empty() {
            return Err(ApiError::BadRequest("name must not be empty".to_string()));
        }
        season.name = name.trim().to_string();
    }
    if let Some(start_date) = req.start_date {
        season.start_date = start_date;
    }
    if let Some(end_date) = req.end_date {
        season.end_date = end_date;
    }
    if season.end_date < season.start_date {
        return Err(ApiError::BadRequest(
            "end_date must not precede start_date".to_string(),
        ));
    }
    if let Some(is_active) = req.is_active {
        season.is_active = is_active;
    }

    let season = state.store.upsert_season(season)?;
    Ok(Json(season))
}

pub async fn delete_season(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = state
        .store
        .soft_delete_season(&EntityId::from(id.as_str()))?;

    if !deleted {
        return Err(ApiError::NotFound(format!("Season {}", id)));
    }
    Ok(Json(DeleteResponse { deleted }))
}
