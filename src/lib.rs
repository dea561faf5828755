//! # Scorebook
//!
//! A cricket club management and statistics service.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (members, teams, fixtures, scorecards)
//! - **stats**: Pure statistics computation (aggregates, leaderboards, rollups)
//! - **storage**: Filesystem JSONL record store
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod config;
pub mod models;
pub mod stats;
pub mod storage;

pub use models::*;
