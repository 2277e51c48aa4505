//! The skill-check model
//!
//! Owns everything that changes over one duel: the speed parameters, the
//! derived zone and marker speed, the marker state, and the win latch. The
//! host owns the instance (no global lookup), calls `tick` once per
//! simulation step, and delivers `attempt`/`set_speeds` exactly once per
//! discrete input event.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::track::{TrackBounds, Zone};
use crate::consts::{MARKER_MAX_SPEED, MARKER_MIN_SPEED};
use crate::osc_phase;

/// Configuration and parameter errors
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SkillCheckError {
    /// Track width must be positive
    #[error("track width must be positive, got {0}")]
    InvalidTrackWidth(f32),
    /// Scale factor must be positive
    #[error("scale factor must be positive, got {0}")]
    InvalidScaleFactor(f32),
    /// Marker speed is undefined when both draw speeds are zero
    #[error("both draw speeds are zero, marker speed is undefined")]
    SpeedsUndefined,
}

/// Result of a single discrete attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptResult {
    /// The marker was inside the zone, or the duel was already won
    Hit,
    /// The marker was outside the zone; nothing changed
    Miss,
}

/// Lifecycle of one duel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No successful attempt yet
    #[default]
    Pending,
    /// A successful attempt landed; terminal for this model's lifetime
    Won,
}

/// Marker state, recomputed in full by every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerState {
    /// Marker coordinate within the track bounds
    pub position: f32,
    /// Oscillation speed the position was derived with (rad/s)
    pub speed: f32,
    /// Whether the marker currently lies inside the target zone
    pub in_zone: bool,
}

/// Derive the marker oscillation speed from the competing draw speeds.
///
/// The opponent's share of the combined speed interpolates between
/// [`MARKER_MIN_SPEED`] and [`MARKER_MAX_SPEED`]: a relatively faster
/// opponent sweeps the marker faster, independent of zone size. Both
/// speeds zero is rejected rather than dividing by zero.
pub fn marker_speed(player_speed: u32, opponent_speed: u32) -> Result<f32, SkillCheckError> {
    if player_speed == 0 && opponent_speed == 0 {
        return Err(SkillCheckError::SpeedsUndefined);
    }
    let ratio = opponent_speed as f32 / (player_speed + opponent_speed) as f32;
    Ok(MARKER_MIN_SPEED + ratio * (MARKER_MAX_SPEED - MARKER_MIN_SPEED))
}

/// The oscillating-marker skill check.
///
/// Until the first successful [`set_speeds`](Self::set_speeds) the model
/// runs on documented defaults: marker at [`MARKER_MIN_SPEED`], zone
/// spanning the full track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCheck {
    bounds: TrackBounds,
    scale_factor: f32,
    player_speed: u32,
    opponent_speed: u32,
    zone: Zone,
    marker_speed: f32,
    marker: MarkerState,
    outcome: Outcome,
}

impl SkillCheck {
    /// Create a model with validated geometry and the stale-state defaults.
    pub fn new(bounds: TrackBounds, scale_factor: f32) -> Result<Self, SkillCheckError> {
        validate(bounds, scale_factor)?;
        Ok(Self {
            bounds,
            scale_factor,
            player_speed: 0,
            opponent_speed: 0,
            zone: Zone::full(),
            marker_speed: MARKER_MIN_SPEED,
            marker: MarkerState {
                position: bounds.center,
                speed: MARKER_MIN_SPEED,
                in_zone: true,
            },
            outcome: Outcome::Pending,
        })
    }

    /// Reconfigure track geometry and zone-shrink exponent in place.
    ///
    /// The zone is re-derived against the new exponent once speeds have
    /// been set; the win latch is untouched.
    pub fn configure(
        &mut self,
        bounds: TrackBounds,
        scale_factor: f32,
    ) -> Result<(), SkillCheckError> {
        validate(bounds, scale_factor)?;
        self.bounds = bounds;
        self.scale_factor = scale_factor;
        if self.player_speed > 0 || self.opponent_speed > 0 {
            self.zone = Zone::from_speeds(self.player_speed, self.opponent_speed, scale_factor);
        }
        Ok(())
    }

    /// Store new draw speeds, then re-derive zone size and marker speed.
    ///
    /// Rejects `(0, 0)` and leaves every field unchanged in that case.
    pub fn set_speeds(
        &mut self,
        player_speed: u32,
        opponent_speed: u32,
    ) -> Result<(), SkillCheckError> {
        let speed = marker_speed(player_speed, opponent_speed)?;
        self.player_speed = player_speed;
        self.opponent_speed = opponent_speed;
        self.zone = Zone::from_speeds(player_speed, opponent_speed, self.scale_factor);
        self.marker_speed = speed;
        log::debug!(
            "speeds {player_speed}/{opponent_speed}: zone fraction {:.4}, marker speed {:.3}",
            self.zone.half_width_fraction,
            self.marker_speed,
        );
        Ok(())
    }

    /// Advance the marker to its position at `elapsed_secs`.
    ///
    /// Position is the sine oscillation mapped into the track bounds; no
    /// internal time integration, so the same elapsed time always yields
    /// the identical state.
    pub fn tick(&mut self, elapsed_secs: f32) -> MarkerState {
        let position = self.bounds.at(osc_phase(elapsed_secs, self.marker_speed));
        let marker = MarkerState {
            position,
            speed: self.marker_speed,
            in_zone: self.zone.contains(position, &self.bounds),
        };
        self.marker = marker;
        marker
    }

    /// Evaluate one discrete attempt against the current marker state.
    ///
    /// A hit latches the outcome to [`Outcome::Won`]; once won, further
    /// attempts keep returning [`AttemptResult::Hit`] without touching
    /// any state. A miss changes nothing.
    pub fn attempt(&mut self) -> AttemptResult {
        if self.outcome == Outcome::Won {
            return AttemptResult::Hit;
        }
        if self.marker.in_zone {
            self.outcome = Outcome::Won;
            log::info!("attempt landed at {:.3}, duel won", self.marker.position);
            AttemptResult::Hit
        } else {
            AttemptResult::Miss
        }
    }

    /// Track bounds the marker is mapped into
    pub fn bounds(&self) -> TrackBounds {
        self.bounds
    }

    /// Current target zone
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Marker state as of the last tick
    pub fn marker(&self) -> MarkerState {
        self.marker
    }

    /// Last-set draw speeds as (player, opponent)
    pub fn speeds(&self) -> (u32, u32) {
        (self.player_speed, self.opponent_speed)
    }

    /// Duel lifecycle state
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether a successful attempt has landed
    pub fn won(&self) -> bool {
        self.outcome == Outcome::Won
    }
}

// `!(x > 0.0)` also rejects NaN
fn validate(bounds: TrackBounds, scale_factor: f32) -> Result<(), SkillCheckError> {
    if !(bounds.width > 0.0) {
        return Err(SkillCheckError::InvalidTrackWidth(bounds.width));
    }
    if !(scale_factor > 0.0) {
        return Err(SkillCheckError::InvalidScaleFactor(scale_factor));
    }
    Ok(())
}
