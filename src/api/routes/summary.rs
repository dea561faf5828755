use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{ClubSummary, EntityId, SeasonFixtureCount, TeamFixtureSummary};
use crate::stats;

pub async fn club_summary(
    State(state): State<AppState>,
) -> Result<Json<ClubSummary>, ApiError> {
    let members = state.store.members()?;
    let fixtures = state.store.fixtures()?;

    Ok(Json(stats::club_summary(&members, &fixtures)))
}

pub async fn team_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TeamFixtureSummary>, ApiError> {
    let team_id = EntityId::from(id.as_str());
    if state.store.team_by_id(&team_id)?.is_none() {
        return Err(ApiError::NotFound(format!("Team {}", id)));
    }

    let fixtures = state.store.fixtures()?;
    Ok(Json(stats::team_fixture_summary(
        &team_id,
        &fixtures,
        Utc::now(),
    )))
}

#[derive(Debug, Serialize)]
pub struct SeasonFixtureCountsResponse {
    pub seasons: Vec<SeasonFixtureCount>,
}

pub async fn season_fixture_counts(
    State(state): State<AppState>,
) -> Result<Json<SeasonFixtureCountsResponse>, ApiError> {
    let fixtures = state.store.fixtures()?;

    Ok(Json(SeasonFixtureCountsResponse {
        seasons: stats::season_fixture_counts(&fixtures),
    }))
}
