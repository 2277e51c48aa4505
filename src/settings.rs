//! Duel settings and tuning parameters
//!
//! Persisted as JSON next to the binary so live-tuning tweaks survive runs.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable duel parameters plus demo-driver knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Player draw speed fed to the skill check
    pub player_draw_speed: u32,
    /// Opponent draw speed fed to the skill check
    pub opponent_draw_speed: u32,
    /// Zone-shrink exponent
    pub scale_factor: f32,

    // === Track geometry ===
    /// Track center coordinate
    pub track_center: f32,
    /// Track width
    pub track_width: f32,

    // === Demo driver ===
    /// Seconds before an unfinished round is called a timeout
    pub round_timeout_secs: f32,
    /// Seed for the auto-player's reaction jitter
    pub demo_seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_draw_speed: 100,
            opponent_draw_speed: 40,
            scale_factor: DEFAULT_SCALE_FACTOR,

            track_center: DEFAULT_TRACK_CENTER,
            track_width: DEFAULT_TRACK_WIDTH,

            round_timeout_secs: 20.0,
            demo_seed: 42,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings in {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
