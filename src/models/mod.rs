//! Core data models for the scorebook service.

mod fixture;
mod ids;
mod member;
mod scorecard;
mod season;
mod stats;
mod team;

pub use fixture::*;
pub use ids::*;
pub use member::*;
pub use scorecard::*;
pub use season::*;
pub use stats::*;
pub use team::*;
