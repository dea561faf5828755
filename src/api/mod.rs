//! REST API endpoints.
//!
//! Axum-based HTTP API for managing club records and querying
//! derived statistics.

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::storage::StorageError;

pub mod routes;
pub mod state;

pub use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Build the application router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_origin);

    Router::new()
        .route("/api/health", get(routes::health))
        .route(
            "/api/members",
            get(routes::members::list_members).post(routes::members::create_member),
        )
        .route(
            "/api/members/:id",
            get(routes::members::get_member)
                .put(routes::members::update_member)
                .delete(routes::members::delete_member),
        )
        .route("/api/members/:id/stats", get(routes::stats::member_stats))
        .route(
            "/api/teams",
            get(routes::teams::list_teams).post(routes::teams::create_team),
        )
        .route(
            "/api/teams/:id",
            get(routes::teams::get_team)
                .put(routes::teams::update_team)
                .delete(routes::teams::delete_team),
        )
        .route("/api/teams/:id/summary", get(routes::summary::team_summary))
        .route(
            "/api/seasons",
            get(routes::seasons::list_seasons).post(routes::seasons::create_season),
        )
        .route(
            "/api/seasons/:id",
            get(routes::seasons::get_season)
                .put(routes::seasons::update_season)
                .delete(routes::seasons::delete_season),
        )
        .route(
            "/api/seasons/fixture-counts",
            get(routes::summary::season_fixture_counts),
        )
        .route(
            "/api/fixtures",
            get(routes::fixtures::list_fixtures).post(routes::fixtures::create_fixture),
        )
        .route(
            "/api/fixtures/:id",
            get(routes::fixtures::get_fixture)
                .put(routes::fixtures::update_fixture)
                .delete(routes::fixtures::delete_fixture),
        )
        .route(
            "/api/fixtures/:id/result",
            get(routes::fixtures::get_result)
                .put(routes::fixtures::put_result)
                .delete(routes::fixtures::delete_result),
        )
        .route(
            "/api/leaderboards/batting",
            get(routes::stats::batting_leaderboard),
        )
        .route(
            "/api/leaderboards/bowling",
            get(routes::stats::bowling_leaderboard),
        )
        .route("/api/summary", get(routes::summary::club_summary))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    if origin == "*" {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    match origin.parse::<HeaderValue>() {
        Ok(value) => CorsLayer::new()
            .allow_origin(value)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => {
            warn!("Invalid CORS origin {:?}, allowing any origin", origin);
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}
