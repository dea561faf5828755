//! Route handlers, one module per resource.

use axum::Json;
use serde::Serialize;

pub mod fixtures;
pub mod members;
pub mod seasons;
pub mod stats;
pub mod summary;
pub mod teams;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
