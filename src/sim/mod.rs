//! Deterministic skill-check simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Marker position is a pure function of elapsed time and configuration
//! - Discrete inputs only (one call per logical input event)
//! - No rendering or platform dependencies

pub mod model;
pub mod track;

pub use model::{AttemptResult, MarkerState, Outcome, SkillCheck, SkillCheckError, marker_speed};
pub use track::{TrackBounds, Zone};
