//! Open Road - A lane-based endless road racer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, nitro, spawning, collisions, scoring)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Session leaderboard

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
///
/// These are the authoritative defaults behind [`Tuning::default`].
pub mod consts {
    /// Fixed simulation timestep in milliseconds (60 Hz)
    pub const SIM_DT_MS: f32 = 1000.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the session driver will account for
    pub const MAX_FRAME_MS: f32 = 100.0;

    /// Viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 640.0;
    pub const VIEWPORT_HEIGHT: f32 = 960.0;

    /// Lane centerlines (x, pixels)
    pub const LANE_X: [f32; 3] = [220.0, 320.0, 420.0];
    /// Player car sits this far above the bottom edge
    pub const PLAYER_Y: f32 = VIEWPORT_HEIGHT - 120.0;

    /// World scroll speed (pixels/s)
    pub const BASE_SPEED: f32 = 260.0;
    pub const MAX_SPEED: f32 = 520.0;
    /// Post-boost speed never decays below this
    pub const FLOOR_SPEED: f32 = 220.0;

    /// Difficulty ramp
    pub const RAMP_PERIOD_MS: f32 = 1200.0;
    pub const RAMP_INCREMENT: f32 = 8.0;

    /// Nitro
    pub const NITRO_BOOST_FACTOR: f32 = 1.45;
    pub const NITRO_OVERSHOOT_FACTOR: f32 = 1.05;
    pub const NITRO_DECAY_FACTOR: f32 = 0.7;
    pub const NITRO_ACTIVE_MS: f32 = 1200.0;
    pub const NITRO_COOLDOWN_MS: f32 = 4500.0;
    /// Displayed score multiplier while boosting
    pub const NITRO_SCORE_MULTIPLIER: f32 = 1.2;

    /// Spawning
    pub const TRAFFIC_PERIOD_MS: f32 = 700.0;
    pub const CHECKPOINT_PERIOD_MS: f32 = 2000.0;
    pub const TRAFFIC_SPAWN_Y: f32 = -80.0;
    pub const CHECKPOINT_SPAWN_Y: f32 = -40.0;
    pub const TRAFFIC_JITTER_MIN: i32 = 20;
    pub const TRAFFIC_JITTER_MAX: i32 = 120;
    pub const CHECKPOINT_SPEED_FACTOR: f32 = 0.9;

    /// Traffic never drifts slower than this fraction of world speed
    pub const FLOW_FACTOR: f32 = 0.8;
    /// Distance past the bottom edge before an entity is removed
    pub const TRAFFIC_DESPAWN_MARGIN: f32 = 80.0;
    pub const CHECKPOINT_DESPAWN_MARGIN: f32 = 40.0;

    /// Scoring
    pub const CHECKPOINT_BONUS: f32 = 150.0;
    pub const DISTANCE_FACTOR: f32 = 0.6;

    /// Day/night tint oscillation rate (cycles of t per second)
    pub const DAY_NIGHT_RATE: f32 = 0.12;

    /// Collision half-extents (physics body 36x64 for cars, 32x32 token)
    pub const CAR_HALF_EXTENTS: (f32, f32) = (18.0, 32.0);
    pub const CHECKPOINT_HALF_EXTENTS: (f32, f32) = (16.0, 16.0);
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
