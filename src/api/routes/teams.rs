use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{EntityId, Team};

use super::members::DeleteResponse;

#[derive(Debug, Deserialize)]
pub struct ListTeamsParams {
    pub active: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct TeamListResponse {
    pub teams: Vec<Team>,
    pub total: u32,
}

pub async fn list_teams(
    State(state): State<AppState>,
    Query(params): Query<ListTeamsParams>,
) -> Result<Json<TeamListResponse>, ApiError> {
    let mut teams = state.store.teams()?;

    if params.active.unwrap_or(false) {
        teams.retain(|t| t.is_active);
    }

    teams.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

    let total = teams.len() as u32;
    Ok(Json(TeamListResponse { teams, total }))
}

pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Team>, ApiError> {
    let team = state
        .store
        .team_by_id(&EntityId::from(id.as_str()))?
        .ok_or_else(|| ApiError::NotFound(format!("Team {}", id)))?;
    Ok(Json(team))
}

#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub description: Option<String>,
}

pub async fn create_team(
    State(state): State<AppState>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<Json<Team>, ApiError> {
    if req.name.trim().is_empty() {
        return Err(ApiError::BadRequest("name must not be empty".to_string()));
    }

    let mut team = Team::new(req.name.trim().to_string());
    if let Some(description) = req.description {
        team = team.with_description(description);
    }

    let team = state.store.upsert_team(team)?;
    Ok(Json(team))
}

#[derive(Debug, Deserialize)]
pub struct UpdateTeamRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTeamRequest>,
) -> Result<Json<Team>, ApiError> {
    let mut team = state
        .store
        .team_by_id(&EntityId::from(id.as_str()))?
        .ok_or_else(|| ApiError::NotFound(format!("Team {}", id)))?;

    if let Some(name) = req.name {
        if name.trim().is_empty() {
            return Err(ApiError::BadRequest("name must not be empty".to_string()));
        }
        team.name = name.trim().to_string();
    }
    if let Some(description) = req.description {
        team.description = Some(description);
    }
    if let Some(is_active) = req.is_active {
        team.is_active = is_active;
    }

    let team = state.store.upsert_team(team)?;
    Ok(Json(team))
}

pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = state.store.soft_delete_team(&EntityId::from(id.as_str()))?;

    if !deleted {
        return Err(ApiError::NotFound(format!("Team {}", id)));
    }
    Ok(Json(DeleteResponse { deleted }))
}
