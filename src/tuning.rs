//! Data-driven game balance
//!
//! [`Tuning`] mirrors every constant in [`crate::consts`]. A JSON document can
//! override any subset of fields; missing keys fall back to the compile-time
//! defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected tuning values
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("at least one lane is required")]
    NoLanes,
    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: f32 },
    #[error("floor speed {floor} exceeds base speed {base}")]
    FloorAboveBase { floor: f32, base: f32 },
    #[error("base speed {base} exceeds max speed {max}")]
    BaseAboveMax { base: f32, max: f32 },
    #[error("traffic jitter range {min}..={max} is inverted")]
    InvertedJitter { min: i32, max: i32 },
    #[error("{name} must be at least 1.0 (got {value})")]
    BelowUnity { name: &'static str, value: f32 },
    #[error("lane {lane} at x={x} lies outside the viewport (width {width})")]
    LaneOutsideViewport { lane: usize, x: f32, width: f32 },
    #[error("nitro decay factor must be in (0, 1] (got {0})")]
    DecayOutOfRange(f32),
}

/// Runtime-tunable gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Layout ===
    /// Lane centerlines; the number of entries is the lane count
    pub lane_x: Vec<f32>,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub player_y: f32,

    // === Speed ===
    pub base_speed: f32,
    pub max_speed: f32,
    pub floor_speed: f32,
    pub ramp_period_ms: f32,
    pub ramp_increment: f32,

    // === Nitro ===
    pub nitro_boost_factor: f32,
    pub nitro_overshoot_factor: f32,
    pub nitro_decay_factor: f32,
    pub nitro_active_ms: f32,
    pub nitro_cooldown_ms: f32,
    pub nitro_score_multiplier: f32,

    // === Spawning ===
    pub traffic_period_ms: f32,
    pub checkpoint_period_ms: f32,
    pub traffic_spawn_y: f32,
    pub checkpoint_spawn_y: f32,
    pub traffic_jitter_min: i32,
    pub traffic_jitter_max: i32,
    pub checkpoint_speed_factor: f32,

    // === Movement ===
    pub flow_factor: f32,
    pub traffic_despawn_margin: f32,
    pub checkpoint_despawn_margin: f32,

    // === Scoring ===
    pub checkpoint_bonus: f32,
    pub distance_factor: f32,

    // === Cosmetic ===
    pub day_night_rate: f32,

    // === Collision ===
    pub player_half_extents: Vec2,
    pub traffic_half_extents: Vec2,
    pub checkpoint_half_extents: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            lane_x: LANE_X.to_vec(),
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            player_y: PLAYER_Y,

            base_speed: BASE_SPEED,
            max_speed: MAX_SPEED,
            floor_speed: FLOOR_SPEED,
            ramp_period_ms: RAMP_PERIOD_MS,
            ramp_increment: RAMP_INCREMENT,

            nitro_boost_factor: NITRO_BOOST_FACTOR,
            nitro_overshoot_factor: NITRO_OVERSHOOT_FACTOR,
            nitro_decay_factor: NITRO_DECAY_FACTOR,
            nitro_active_ms: NITRO_ACTIVE_MS,
            nitro_cooldown_ms: NITRO_COOLDOWN_MS,
            nitro_score_multiplier: NITRO_SCORE_MULTIPLIER,

            traffic_period_ms: TRAFFIC_PERIOD_MS,
            checkpoint_period_ms: CHECKPOINT_PERIOD_MS,
            traffic_spawn_y: TRAFFIC_SPAWN_Y,
            checkpoint_spawn_y: CHECKPOINT_SPAWN_Y,
            traffic_jitter_min: TRAFFIC_JITTER_MIN,
            traffic_jitter_max: TRAFFIC_JITTER_MAX,
            checkpoint_speed_factor: CHECKPOINT_SPEED_FACTOR,

            flow_factor: FLOW_FACTOR,
            traffic_despawn_margin: TRAFFIC_DESPAWN_MARGIN,
            checkpoint_despawn_margin: CHECKPOINT_DESPAWN_MARGIN,

            checkpoint_bonus: CHECKPOINT_BONUS,
            distance_factor: DISTANCE_FACTOR,

            day_night_rate: DAY_NIGHT_RATE,

            player_half_extents: Vec2::from(CAR_HALF_EXTENTS),
            traffic_half_extents: Vec2::from(CAR_HALF_EXTENTS),
            checkpoint_half_extents: Vec2::from(CHECKPOINT_HALF_EXTENTS),
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document and validate the result
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning ({} lanes)", tuning.lane_count());
        Ok(tuning)
    }

    /// Check that the values describe a playable game
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.lane_x.is_empty() {
            return Err(TuningError::NoLanes);
        }

        let positive = [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("base_speed", self.base_speed),
            ("floor_speed", self.floor_speed),
            ("ramp_period_ms", self.ramp_period_ms),
            ("nitro_active_ms", self.nitro_active_ms),
            ("nitro_cooldown_ms", self.nitro_cooldown_ms),
            ("traffic_period_ms", self.traffic_period_ms),
            ("checkpoint_period_ms", self.checkpoint_period_ms),
            ("player_half_extents.x", self.player_half_extents.x),
            ("player_half_extents.y", self.player_half_extents.y),
            ("traffic_half_extents.x", self.traffic_half_extents.x),
            ("traffic_half_extents.y", self.traffic_half_extents.y),
            ("checkpoint_half_extents.x", self.checkpoint_half_extents.x),
            ("checkpoint_half_extents.y", self.checkpoint_half_extents.y),
        ];
        for (name, value) in positive {
            // Negated comparison also rejects NaN
            if !(value > 0.0) {
                return Err(TuningError::NonPositive { name, value });
            }
        }

        for (lane, &x) in self.lane_x.iter().enumerate() {
            if !(x >= 0.0 && x <= self.viewport_width) {
                return Err(TuningError::LaneOutsideViewport {
                    lane,
                    x,
                    width: self.viewport_width,
                });
            }
        }

        if self.floor_speed > self.base_speed {
            return Err(TuningError::FloorAboveBase {
                floor: self.floor_speed,
                base: self.base_speed,
            });
        }
        if self.base_speed > self.max_speed {
            return Err(TuningError::BaseAboveMax {
                base: self.base_speed,
                max: self.max_speed,
            });
        }
        if self.traffic_jitter_min > self.traffic_jitter_max {
            return Err(TuningError::InvertedJitter {
                min: self.traffic_jitter_min,
                max: self.traffic_jitter_max,
            });
        }
        for (name, value) in [
            ("nitro_boost_factor", self.nitro_boost_factor),
            ("nitro_overshoot_factor", self.nitro_overshoot_factor),
        ] {
            if !(value >= 1.0) {
                return Err(TuningError::BelowUnity { name, value });
            }
        }
        if !(self.nitro_decay_factor > 0.0 && self.nitro_decay_factor <= 1.0) {
            return Err(TuningError::DecayOutOfRange(self.nitro_decay_factor));
        }

        Ok(())
    }

    #[inline]
    pub fn lane_count(&self) -> usize {
        self.lane_x.len()
    }

    /// Starting lane for a fresh run
    #[inline]
    pub fn middle_lane(&self) -> usize {
        self.lane_count().saturating_sub(1) / 2
    }

    /// Centerline x of a lane (clamped to the last lane)
    pub fn lane_x(&self, lane: usize) -> f32 {
        let last = self.lane_count().saturating_sub(1);
        self.lane_x.get(lane.min(last)).copied().unwrap_or(0.0)
    }

    /// Highest speed nitro may push the world to
    #[inline]
    pub fn boosted_ceiling(&self) -> f32 {
        self.max_speed * self.nitro_overshoot_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.lane_count(), 3);
        assert_eq!(tuning.middle_lane(), 1);
        assert_eq!(tuning.lane_x(2), 420.0);
        assert!((tuning.boosted_ceiling() - 546.0).abs() < 0.001);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let tuning = Tuning::from_json(r#"{ "max_speed": 600.0, "lane_x": [100, 200, 300, 400, 500] }"#)
            .unwrap();
        assert_eq!(tuning.max_speed, 600.0);
        assert_eq!(tuning.lane_count(), 5);
        assert_eq!(tuning.middle_lane(), 2);
        assert_eq!(tuning.base_speed, BASE_SPEED);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Tuning::from_json(r#"{ "lane_x": [] }"#),
            Err(TuningError::NoLanes)
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "floor_speed": 300.0 }"#),
            Err(TuningError::FloorAboveBase { .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "base_speed": 600.0 }"#),
            Err(TuningError::BaseAboveMax { .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "traffic_jitter_min": 200 }"#),
            Err(TuningError::InvertedJitter { .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "nitro_decay_factor": 1.5 }"#),
            Err(TuningError::DecayOutOfRange(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "traffic_period_ms": 0.0 }"#),
            Err(TuningError::NonPositive { name: "traffic_period_ms", .. })
        ));
        assert!(matches!(Tuning::from_json("not json"), Err(TuningError::Parse(_))));
    }

    #[test]
    fn test_lanes_must_fit_viewport() {
        assert!(matches!(
            Tuning::from_json(r#"{ "lane_x": [220, 320, 700] }"#),
            Err(TuningError::LaneOutsideViewport { lane: 2, .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "viewport_width": 400.0 }"#),
            Err(TuningError::LaneOutsideViewport { lane: 2, .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "viewport_width": 0.0 }"#),
            Err(TuningError::NonPositive { name: "viewport_width", .. })
        ));
        assert!(Tuning::from_json(r#"{ "viewport_width": 500.0 }"#).is_ok());
    }
}
