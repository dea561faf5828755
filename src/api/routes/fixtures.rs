use std::collections::HashSet;

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{BattingInnings, BowlingSpell, EntityId, Fixture, HomeAway, MemberId};

use super::members::DeleteResponse;

#[derive(Debug, Deserialize)]
pub struct ListFixturesParams {
    pub season: Option<String>,
    pub team: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FixtureListResponse {
    pub fixtures: Vec<Fixture>,
    pub total: u32,
}

pub async fn list_fixtures(
    State(state): State<AppState>,
    Query(params): Query<ListFixturesParams>,
) -> Result<Json<FixtureListResponse>, ApiError> {
    let mut fixtures = state.store.fixtures()?;

    if let Some(ref season) = params.season {
        fixtures.retain(|f| f.season_id.as_str() == season);
    }
    if let Some(ref team) = params.team {
        fixtures.retain(|f| f.team_id.as_str() == team);
    }
    if let Some(ref status) = params.status {
        fixtures.retain(|f| f.has_status(status));
    }

    // Earliest first
    fixtures.sort_by(|a, b| a.start_time.cmp(&b.start_time).then_with(|| a.id.cmp(&b.id)));

    let total = fixtures.len() as u32;
    Ok(Json(FixtureListResponse { fixtures, total }))
}

pub async fn get_fixture(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Fixture>, ApiError> {
    let fixture = state
        .store
        .fixture_by_id(&EntityId::from(id.as_str()))?
        .ok_or_else(|| ApiError::NotFound(format!("Fixture {}", id)))?;
    Ok(Json(fixture))
}

#[derive(Debug, Deserialize)]
pub struct CreateFixtureRequest {
    pub season_id: String,
    pub team_id: String,
    pub opponent: String,
    pub home_away: HomeAway,
    pub start_time: DateTime<Utc>,
    pub venue: Option<String>,
    pub notes: Option<String>,
}

pub async fn create_fixture(
    State(state): State<AppState>,
    Json(req): Json<CreateFixtureRequest>,
) -> Result<Json<Fixture>, ApiError> {
    if req.opponent.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "opponent must not be empty".to_string(),
        ));
    }

    let season_id = EntityId::from(req.season_id.as_str());
    if state.store.season_by_id(&season_id)?.is_none() {
        return Err(ApiError::BadRequest(format!(
            "Unknown season: {}",
            req.season_id
        )));
    }
    let team_id = EntityId::from(req.team_id.as_str());
    if state.store.team_by_id(&team_id)?.is_none() {
        return Err(ApiError::BadRequest(format!("Unknown team: {}", req.team_id)));
    }

    let mut fixture = Fixture::new(
        season_id,
        team_id,
        req.opponent.trim().to_string(),
        req.home_away,
        req.start_time,
    );
    if let Some(venue) = req.venue {
        fixture = fixture.with_venue(venue);
    }
    fixture.notes = req.notes;

    let fixture = state.store.upsert_fixture(fixture)?;
    Ok(Json(fixture))
}

#[derive(Debug, Deserialize)]
pub struct UpdateFixtureRequest {
    pub opponent: Option<String>,
    pub home_away: Option<HomeAway>,
    pub start_time: Option<DateTime<Utc>>,
    pub venue: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

pub async fn update_fixture(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateFixtureRequest>,
) -> Result<Json<Fixture>, ApiError> {
    let mut fixture = state
        .store
        .fixture_by_id(&EntityId::from(id.as_str()))?
        .ok_or_else(|| ApiError::NotFound(format!("Fixture {}", id)))?;

    if let Some(opponent) = req.opponent {
        if opponent.trim().is_empty() {
            return Err(ApiError::BadRequest(
                "opponent must not be empty".to_string(),
            ));
        }
        fixture.opponent = opponent.trim().to_string();
    }
    if let Some(home_away) = req.home_away {
        fixture.home_away = home_away;
    }
    if let Some(start_time) = req.start_time {
        fixture.start_time = start_time;
    }
    if let Some(venue) = req.venue {
        fixture.venue = Some(venue);
    }
    if let Some(status) = req.status {
        fixture.status = status;
    }
    if let Some(notes) = req.notes {
        fixture.notes = Some(notes);
    }

    let fixture = state.store.upsert_fixture(fixture)?;
    Ok(Json(fixture))
}

/// Hard delete: the fixture and any scorecard recorded against it go away.
pub async fn delete_fixture(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = state.store.delete_fixture(&EntityId::from(id.as_str()))?;

    if !deleted {
        return Err(ApiError::NotFound(format!("Fixture {}", id)));
    }
    Ok(Json(DeleteResponse { deleted }))
}

// ── Match results ────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct FixtureResultResponse {
    pub fixture_id: String,
    pub batting: Vec<BattingInnings>,
    pub bowling: Vec<BowlingSpell>,
}

pub async fn get_result(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FixtureResultResponse>, ApiError> {
    let fixture_id = EntityId::from(id.as_str());
    if state.store.fixture_by_id(&fixture_id)?.is_none() {
        return Err(ApiError::NotFound(format!("Fixture {}", id)));
    }

    let (mut batting, mut bowling) = state.store.fixture_result(&fixture_id)?;
    batting.sort_by(|a, b| a.batting_order.cmp(&b.batting_order));
    bowling.sort_by(|a, b| a.member_id.cmp(&b.member_id));

    Ok(Json(FixtureResultResponse {
        fixture_id: id,
        batting,
        bowling,
    }))
}

#[derive(Debug, Deserialize)]
pub struct BattingRowRequest {
    pub member_id: String,
    pub batting_order: u32,
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub balls: u32,
    #[serde(default)]
    pub fours: u32,
    #[serde(default)]
    pub sixes: u32,
    #[serde(default)]
    pub is_out: bool,
    pub dismissal_type: Option<String>,
    pub bowler_id: Option<String>,
    pub fielder_id: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BowlingRowRequest {
    pub member_id: String,
    #[serde(default)]
    pub overs: f64,
    #[serde(default)]
    pub maidens: u32,
    #[serde(default)]
    pub runs_conceded: u32,
    #[serde(default)]
    pub wickets: u32,
    #[serde(default)]
    pub no_balls: u32,
    #[serde(default)]
    pub wides: u32,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PutResultRequest {
    #[serde(default)]
    pub batting: Vec<BattingRowRequest>,
    #[serde(default)]
    pub bowling: Vec<BowlingRowRequest>,
}

#[derive(Debug, Serialize)]
pub struct PutResultResponse {
    pub fixture_id: String,
    pub batting_rows: u32,
    pub bowling_rows: u32,
}

/// Upsert the match result for a fixture. The stored scorecard is replaced
/// wholesale; rows absent from the request are deleted.
pub async fn put_result(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<PutResultRequest>,
) -> Result<Json<PutResultResponse>, ApiError> {
    let fixture_id = EntityId::from(id.as_str());
    let fixture = state
        .store
        .fixture_by_id(&fixture_id)?
        .ok_or_else(|| ApiError::NotFound(format!("Fixture {}", id)))?;

    let known_members: HashSet<MemberId> = state
        .store
        .members()?
        .into_iter()
        .map(|m| m.id)
        .collect();

    for row in req.batting.iter().map(|r| r.member_id.as_str()).chain(
        req.bowling.iter().map(|r| r.member_id.as_str()),
    ) {
        if !known_members.contains(&EntityId::from(row)) {
            return Err(ApiError::BadRequest(format!("Unknown member: {}", row)));
        }
    }

    for row in &req.bowling {
        if row.overs < 0.0 {
            return Err(ApiError::BadRequest(
                "overs must not be negative".to_string(),
            ));
        }
    }

    let batting: Vec<BattingInnings> = req
        .batting
        .into_iter()
        .map(|row| {
            let mut innings = BattingInnings::new(
                fixture_id.clone(),
                fixture.team_id.clone(),
                EntityId::from(row.member_id.as_str()),
                row.batting_order,
            )
            .with_score(row.runs, row.balls)
            .with_boundaries(row.fours, row.sixes);
            if row.is_out {
                innings = innings.out(row.dismissal_type);
            }
            innings.bowler_id = row.bowler_id.map(|b| EntityId::from(b.as_str()));
            innings.fielder_id = row.fielder_id.map(|f| EntityId::from(f.as_str()));
            innings.notes = row.notes;
            innings
        })
        .collect();

    let bowling: Vec<BowlingSpell> = req
        .bowling
        .into_iter()
        .map(|row| {
            let mut spell = BowlingSpell::new(
                fixture_id.clone(),
                fixture.team_id.clone(),
                EntityId::from(row.member_id.as_str()),
            )
            .with_figures(row.overs, row.maidens, row.runs_conceded, row.wickets)
            .with_extras(row.no_balls, row.wides);
            spell.notes = row.notes;
            spell
        })
        .collect();

    let batting_rows = batting.len() as u32;
    let bowling_rows = bowling.len() as u32;

    state
        .store
        .replace_fixture_result(&fixture_id, batting, bowling)?;

    Ok(Json(PutResultResponse {
        fixture_id: id,
        batting_rows,
        bowling_rows,
    }))
}

#[derive(Debug, Serialize)]
pub struct DeleteResultResponse {
    pub fixture_id: String,
    pub batting_rows_deleted: u32,
    pub bowling_rows_deleted: u32,
}

pub async fn delete_result(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResultResponse>, ApiError> {
    let fixture_id = EntityId::from(id.as_str());
    if state.store.fixture_by_id(&fixture_id)?.is_none() {
        return Err(ApiError::NotFound(format!("Fixture {}", id)));
    }

    let (batting_rows_deleted, bowling_rows_deleted) =
        state.store.delete_fixture_result(&fixture_id)?;

    Ok(Json(DeleteResultResponse {
        fixture_id: id,
        batting_rows_deleted: batting_rows_deleted as u32,
        bowling_rows_deleted: bowling_rows_deleted as u32,
    }))
}
