//! Quickdraw entry point
//!
//! Runs headless demo duels: a fixed-timestep loop drives the skill check
//! while an auto-player delivers discrete attempts after a seeded reaction
//! delay.

use std::error::Error;
use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use quickdraw::Settings;
use quickdraw::consts::SIM_DT;
use quickdraw::sim::{AttemptResult, SkillCheck, TrackBounds};

/// What happened in one demo round
struct RoundOutcome {
    hit_at: Option<f32>,
    attempts: u32,
}

/// Drive one duel to a hit or a timeout.
///
/// The auto-player mirrors a human: when the marker enters the zone it
/// commits to firing after a reaction delay, whether or not the marker is
/// still inside by then. Fast markers over small zones produce misses.
fn run_round(check: &mut SkillCheck, timeout_secs: f32, rng: &mut Pcg32) -> RoundOutcome {
    let mut attempts = 0;
    let mut fire_at: Option<f32> = None;

    let steps = (timeout_secs / SIM_DT).ceil() as u32;
    for step in 0..steps {
        let t = step as f32 * SIM_DT;
        let marker = check.tick(t);

        match fire_at {
            Some(fire) if t >= fire => {
                fire_at = None;
                attempts += 1;
                if check.attempt() == AttemptResult::Hit {
                    return RoundOutcome {
                        hit_at: Some(t),
                        attempts,
                    };
                }
                // The marker slipped out during the reaction delay; wait
                // for the next zone entry
            }
            None if marker.in_zone => {
                fire_at = Some(t + rng.random_range(0.05..0.25));
            }
            _ => {}
        }
    }

    RoundOutcome {
        hit_at: None,
        attempts,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "quickdraw.json".into());
    let path = Path::new(&path);
    let settings = Settings::load(path);
    if !path.exists() {
        settings.save(path)?;
    }

    let bounds = TrackBounds::new(settings.track_center, settings.track_width);
    let mut rng = Pcg32::seed_from_u64(settings.demo_seed);

    // The configured matchup first, then spreads that show the scaling
    let matchups = [
        (settings.player_draw_speed, settings.opponent_draw_speed),
        (100, 0),
        (100, 100),
        (40, 100),
    ];

    for (round, &(player, opponent)) in matchups.iter().enumerate() {
        let mut check = SkillCheck::new(bounds, settings.scale_factor)?;
        check.set_speeds(player, opponent)?;

        let zone = check.zone().half_width(&bounds);
        let outcome = run_round(&mut check, settings.round_timeout_secs, &mut rng);
        let marker_speed = check.marker().speed;

        match outcome.hit_at {
            Some(t) => println!(
                "round {}: {player:>3} vs {opponent:>3}  zone ±{zone:.2}  marker {marker_speed:.2}/s  hit at {t:.2}s ({} attempt{})",
                round + 1,
                outcome.attempts,
                if outcome.attempts == 1 { "" } else { "s" },
            ),
            None => println!(
                "round {}: {player:>3} vs {opponent:>3}  zone ±{zone:.2}  marker {marker_speed:.2}/s  timed out ({} attempts)",
                round + 1,
                outcome.attempts,
            ),
        }
    }

    Ok(())
}
