//! Track and target-zone geometry
//!
//! The track is a one-dimensional segment defined by a center coordinate
//! and a width. The target zone is a sub-interval of the track, stored as
//! a half-width fraction so it rescales with the track it sits on.

use serde::{Deserialize, Serialize};

use crate::lerp;

/// The bounded segment the marker sweeps along
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackBounds {
    /// Center coordinate of the track
    pub center: f32,
    /// Total track width (> 0)
    pub width: f32,
}

impl TrackBounds {
    pub fn new(center: f32, width: f32) -> Self {
        Self { center, width }
    }

    /// Left edge of the track
    #[inline]
    pub fn left(&self) -> f32 {
        self.center - self.width / 2.0
    }

    /// Right edge of the track
    #[inline]
    pub fn right(&self) -> f32 {
        self.center + self.width / 2.0
    }

    /// Half the track width
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    /// Check if a coordinate lies on the track
    pub fn contains(&self, x: f32) -> bool {
        x >= self.left() && x <= self.right()
    }

    /// Map a parameter `t` in [0, 1] to a coordinate on the track
    #[inline]
    pub fn at(&self, t: f32) -> f32 {
        lerp(self.left(), self.right(), t)
    }
}

/// The target zone, centered on the track center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Zone half-width as a fraction of the track half-width, in [0, 1]
    pub half_width_fraction: f32,
}

impl Zone {
    /// Zone spanning the full track (every marker position is a hit)
    pub fn full() -> Self {
        Self {
            half_width_fraction: 1.0,
        }
    }

    /// Derive the zone from the competing draw speeds.
    ///
    /// A zero opponent speed yields the full track (the ratio below would
    /// divide by zero). Otherwise the player's share of the combined speed
    /// is raised to `scale_factor`, so the zone shrinks super-linearly as
    /// the opponent gets relatively faster. Clamped so the zone never
    /// exceeds the track.
    pub fn from_speeds(player_speed: u32, opponent_speed: u32, scale_factor: f32) -> Self {
        if opponent_speed == 0 {
            return Self::full();
        }
        let ratio = player_speed as f32 / (player_speed + opponent_speed) as f32;
        Self {
            half_width_fraction: ratio.powf(scale_factor).min(1.0),
        }
    }

    /// Zone half-width in track units
    #[inline]
    pub fn half_width(&self, bounds: &TrackBounds) -> f32 {
        self.half_width_fraction * bounds.half_width()
    }

    /// Check if a coordinate lies inside the zone
    pub fn contains(&self, x: f32, bounds: &TrackBounds) -> bool {
        (x - bounds.center).abs() <= self.half_width(bounds)
    }
}
