//! Game state and core simulation types
//!
//! All state needed to resume a run deterministically lives here, including
//! the cadence accumulators that replace engine timers.

use serde::{Deserialize, Serialize};

use super::difficulty::Cadence;
use crate::lerp;
use crate::tuning::Tuning;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Crashed; only a restart is accepted
    GameOver,
}

/// Entity types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Oncoming car; overlapping it ends the run
    Traffic,
    /// Bonus token; overlapping it awards distance
    Checkpoint,
}

/// A traffic car or checkpoint token scrolling down the road
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    pub lane: usize,
    /// Vertical position (pixels, grows downward)
    pub y: f32,
    /// Downward speed (pixels/s)
    pub vertical_speed: f32,
}

/// Nitro boost phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NitroPhase {
    #[default]
    Ready,
    Active,
    Cooldown,
}

/// Nitro boost state
///
/// `timer` counts elapsed ms within the current phase and is reset on
/// every transition.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Nitro {
    pub phase: NitroPhase,
    pub timer: f32,
}

/// Cosmetic day/night oscillator (no gameplay effect)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayNight {
    /// Phase in [0, 1]
    pub t: f32,
    /// +1.0 or -1.0
    pub direction: f32,
}

impl Default for DayNight {
    fn default() -> Self {
        Self {
            t: 0.0,
            direction: 1.0,
        }
    }
}

impl DayNight {
    /// Advance the oscillator, bouncing between 0 and 1
    pub fn advance(&mut self, delta_ms: f32, rate: f32) {
        self.t += (delta_ms / 1000.0) * self.direction * rate;
        if self.t > 1.0 || self.t < 0.0 {
            self.direction = -self.direction;
            self.t = self.t.clamp(0.0, 1.0);
        }
    }

    /// Alpha of the night tint overlay
    pub fn tint_alpha(&self) -> f32 {
        lerp(0.05, 0.25, self.t)
    }
}

/// Periodic timers, modeled as accumulators
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timers {
    pub ramp: Cadence,
    pub traffic: Cadence,
    pub checkpoint: Cadence,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Balance values this run was started with
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Player lane index in [0, lane_count)
    pub lane: usize,
    /// World scroll speed (pixels/s)
    pub speed: f32,
    /// Stored score accumulator (never decreases during a run)
    pub distance: f32,
    pub nitro: Nitro,
    /// Traffic and checkpoints on the road
    pub entities: Vec<Entity>,
    pub day_night: DayNight,
    pub timers: Timers,
    /// Checkpoints picked up this run
    pub checkpoints_collected: u32,
    /// Running time of this run (ms), frozen on crash
    pub elapsed_ms: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Fresh run: middle lane, base speed, nitro ready, empty road
    pub fn new(tuning: Tuning) -> Self {
        Self {
            lane: tuning.middle_lane(),
            speed: tuning.base_speed,
            tuning,
            phase: GamePhase::Running,
            distance: 0.0,
            nitro: Nitro::default(),
            entities: Vec::new(),
            day_night: DayNight::default(),
            timers: Timers::default(),
            checkpoints_collected: 0,
            elapsed_ms: 0.0,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Reset to a fresh run with the same tuning
    pub fn reset(&mut self) {
        let tuning = std::mem::take(&mut self.tuning);
        *self = Self::new(tuning);
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an entity to the road
    pub fn push_entity(&mut self, kind: EntityKind, lane: usize, y: f32, vertical_speed: f32) -> u32 {
        let id = self.next_entity_id();
        self.entities.push(Entity {
            id,
            kind,
            lane,
            y,
            vertical_speed,
        });
        id
    }

    /// Player car x (lane-aligned; visual easing is left to the renderer)
    pub fn player_x(&self) -> f32 {
        self.tuning.lane_x(self.lane)
    }

    pub fn traffic(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.kind == EntityKind::Traffic)
    }

    pub fn checkpoints(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.kind == EntityKind::Checkpoint)
    }

    /// Serialize a snapshot of the run
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Restore a snapshot produced by [`GameState::to_json`]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::default();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.lane, 1);
        assert_eq!(state.speed, 260.0);
        assert_eq!(state.distance, 0.0);
        assert_eq!(state.nitro.phase, NitroPhase::Ready);
        assert!(state.entities.is_empty());
    }

    #[test]
    fn test_reset_keeps_tuning() {
        let tuning = Tuning {
            base_speed: 300.0,
            ..Default::default()
        };
        let mut state = GameState::new(tuning.clone());
        state.distance = 500.0;
        state.phase = GamePhase::GameOver;
        state.push_entity(EntityKind::Traffic, 0, 10.0, 300.0);

        state.reset();
        assert_eq!(state.tuning, tuning);
        assert_eq!(state.speed, 300.0);
        assert_eq!(state.distance, 0.0);
        assert!(!state.is_game_over());
        assert!(state.entities.is_empty());
    }

    #[test]
    fn test_day_night_bounces() {
        let mut dn = DayNight::default();
        // 0.12/s -> reaches 1.0 after ~8.3s
        for _ in 0..100 {
            dn.advance(100.0, 0.12);
            assert!((0.0..=1.0).contains(&dn.t));
        }
        assert_eq!(dn.direction, -1.0);
        assert!(dn.tint_alpha() >= 0.05 && dn.tint_alpha() <= 0.25);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut state = GameState::default();
        state.push_entity(EntityKind::Checkpoint, 2, -40.0, 234.0);
        state.distance = 42.5;

        let json = state.to_json().unwrap();
        let restored = GameState::from_json(&json).unwrap();
        assert_eq!(restored, state);
    }
}
