//! Simulation step
//!
//! One call advances the run by `delta_ms` and returns the events the
//! presentation layer should react to.

use serde::{Deserialize, Serialize};

use super::collision::{self, OverlapTest};
use super::difficulty;
use super::lane::{self, LaneDirection};
use super::movement;
use super::nitro::{self, NitroTransition};
use super::random::RandomSource;
use super::scoring;
use super::spawn;
use super::state::GameState;

/// A single edge-triggered player action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    LaneLeft,
    LaneRight,
    NitroTrigger,
    Restart,
}

/// Input commands for a single tick (deterministic)
///
/// Each flag is an edge: true at most once per physical press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub lane_left: bool,
    pub lane_right: bool,
    pub nitro: bool,
    pub restart: bool,
}

impl TickInput {
    /// Fold a list of intents into one tick's input
    pub fn from_intents(intents: &[Intent]) -> Self {
        let mut input = Self::default();
        for intent in intents {
            match intent {
                Intent::LaneLeft => input.lane_left = true,
                Intent::LaneRight => input.lane_right = true,
                Intent::NitroTrigger => input.nitro = true,
                Intent::Restart => input.restart = true,
            }
        }
        input
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Events emitted for rendering, audio and UI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player moved lanes; ease the car toward `target_x`
    LaneChanged { lane: usize, target_x: f32 },
    NitroActivated,
    NitroBecameReady,
    CheckpointCollected { bonus: f32 },
    Crashed,
    /// A fresh run started
    Restarted,
}

/// Advance the game state by one tick
///
/// While running: lanes, nitro, ramp, spawns, movement, collisions, then
/// scoring. After a crash only `restart` is honoured, and a restart tick
/// does nothing else.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    delta_ms: f32,
    rng: &mut impl RandomSource,
    overlap: &impl OverlapTest,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.is_game_over() {
        if input.restart {
            state.reset();
            log::info!("Run restarted");
            events.push(GameEvent::Restarted);
        }
        return events;
    }

    // Reject NaN, infinite and negative frame times from the host
    if !delta_ms.is_finite() || delta_ms < 0.0 {
        log::warn!("Ignoring invalid tick delta {}", delta_ms);
        return events;
    }

    state.time_ticks += 1;

    // Lanes
    for (pressed, direction) in [
        (input.lane_left, LaneDirection::Left),
        (input.lane_right, LaneDirection::Right),
    ] {
        if !pressed {
            continue;
        }
        if let Some(lane) = lane::try_change_lane(state, direction) {
            events.push(GameEvent::LaneChanged {
                lane,
                target_x: state.tuning.lane_x(lane),
            });
        }
    }

    // Nitro: advance timers, then honour the trigger
    match nitro::update(state, delta_ms) {
        Some(NitroTransition::Expired) => {
            log::debug!("Nitro expired, speed {:.0}", state.speed);
        }
        Some(NitroTransition::BecameReady) => {
            log::debug!("Nitro ready");
            events.push(GameEvent::NitroBecameReady);
        }
        None => {}
    }
    if input.nitro && nitro::trigger(state) {
        log::debug!("Nitro activated, speed {:.0}", state.speed);
        events.push(GameEvent::NitroActivated);
    }

    difficulty::advance_ramp(state, delta_ms);
    spawn::advance(state, delta_ms, rng);
    movement::advance(state, delta_ms);
    state.day_night.advance(delta_ms, state.tuning.day_night_rate);

    let resolution = collision::resolve(state, overlap);
    if resolution.crashed {
        events.push(GameEvent::Crashed);
        return events;
    }
    for bonus in resolution.collected {
        events.push(GameEvent::CheckpointCollected { bonus });
    }

    scoring::accumulate(state, delta_ms);
    state.elapsed_ms += delta_ms;

    events
}
