use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{
    BattingLeaderboardEntry, BowlingLeaderboardEntry, EntityId, MemberId, PlayerBattingStats,
    PlayerBowlingStats, SeasonRef,
};
use crate::stats;

#[derive(Debug, Deserialize)]
pub struct StatsParams {
    pub season: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MemberStatsResponse {
    pub batting: PlayerBattingStats,
    pub bowling: PlayerBowlingStats,
}

/// Per-member career or per-season statistics.
///
/// An unknown or soft-deleted member is a 404 even when scorecard rows
/// reference the id, checked before any aggregation runs; a known active
/// member with no recorded performances gets zeroed stats.
pub async fn member_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<StatsParams>,
) -> Result<Json<MemberStatsResponse>, ApiError> {
    let member = state
        .store
        .member_by_id(&EntityId::from(id.as_str()))?
        .filter(|m| m.is_active)
        .ok_or_else(|| ApiError::NotFound(format!("Member {}", id)))?;

    let season = resolve_season(&state, params.season.as_deref())?;
    let season_id = season.as_ref().map(|s| s.id.clone());

    let innings = state.store.batting_innings_for_stats(season_id.as_ref())?;
    let spells = state.store.bowling_spells_for_stats(season_id.as_ref())?;

    let batting = stats::batting_stats(&innings, &member.id, &member.name, season.clone());
    let bowling = stats::bowling_stats(&spells, &member.id, &member.name, season);

    Ok(Json(MemberStatsResponse { batting, bowling }))
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardParams {
    pub season: Option<String>,
    pub top: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct BattingLeaderboardResponse {
    pub season: Option<SeasonRef>,
    pub entries: Vec<BattingLeaderboardEntry>,
}

pub async fn batting_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> Result<Json<BattingLeaderboardResponse>, ApiError> {
    let season = resolve_season(&state, params.season.as_deref())?;
    let season_id = season.as_ref().map(|s| s.id.clone());

    let innings = state.store.batting_innings_for_stats(season_id.as_ref())?;
    let rows = stats::batting_leaderboard_rows(&innings);
    let names = member_names(&state)?;

    let entries = stats::batting_leaderboard(rows, &names, season.clone(), params.top);

    Ok(Json(BattingLeaderboardResponse { season, entries }))
}

#[derive(Debug, Serialize)]
pub struct BowlingLeaderboardResponse {
    pub season: Option<SeasonRef>,
    pub entries: Vec<BowlingLeaderboardEntry>,
}

pub async fn bowling_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> Result<Json<BowlingLeaderboardResponse>, ApiError> {
    let season = resolve_season(&state, params.season.as_deref())?;
    let season_id = season.as_ref().map(|s| s.id.clone());

    let spells = state.store.bowling_spells_for_stats(season_id.as_ref())?;
    let rows = stats::bowling_leaderboard_rows(&spells);
    let names = member_names(&state)?;

    let entries = stats::bowling_leaderboard(rows, &names, season.clone(), params.top);

    Ok(Json(BowlingLeaderboardResponse { season, entries }))
}

/// Resolve an optional season query parameter to a reference, rejecting
/// unknown ids.
fn resolve_season(state: &AppState, season: Option<&str>) -> Result<Option<SeasonRef>, ApiError> {
    match season {
        Some(id) => {
            let season = state
                .store
                .season_by_id(&EntityId::from(id))?
                .ok_or_else(|| ApiError::NotFound(format!("Season {}", id)))?;
            Ok(Some(SeasonRef::from(&season)))
        }
        None => Ok(None),
    }
}

/// Display names for active members. Inactive members intentionally drop
/// out so their leaderboard rows fall back to a synthesized label.
fn member_names(state: &AppState) -> Result<HashMap<MemberId, String>, ApiError> {
    Ok(state
        .store
        .members()?
        .into_iter()
        .filter(|m| m.is_active)
        .map(|m| (m.id, m.name))
        .collect())
}
