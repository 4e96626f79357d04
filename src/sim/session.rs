//! Owning driver for one play session
//!
//! Holds the state, the seeded RNG and the overlap test, and converts
//! variable frame times into fixed simulation ticks.

use super::collision::{AabbOverlap, OverlapTest};
use super::random::SeededRandom;
use super::state::GameState;
use super::tick::{GameEvent, TickInput, tick};
use crate::consts::{MAX_FRAME_MS, MAX_SUBSTEPS, SIM_DT_MS};
use crate::tuning::Tuning;

/// A play session
pub struct Session<O: OverlapTest = AabbOverlap> {
    state: GameState,
    rng: SeededRandom,
    overlap: O,
    accumulator: f32,
}

impl Session<AabbOverlap> {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self::with_overlap(tuning, seed, AabbOverlap)
    }
}

impl<O: OverlapTest> Session<O> {
    /// Session with a host-provided overlap test
    pub fn with_overlap(tuning: Tuning, seed: u64, overlap: O) -> Self {
        log::info!("Session started with seed: {}", seed);
        Self {
            state: GameState::new(tuning),
            rng: SeededRandom::new(seed),
            overlap,
            accumulator: 0.0,
        }
    }

    /// Read-only view for rendering
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Run exactly one tick
    pub fn step(&mut self, input: &TickInput, delta_ms: f32) -> Vec<GameEvent> {
        tick(&mut self.state, input, delta_ms, &mut self.rng, &self.overlap)
    }

    /// Run as many fixed ticks as `frame_ms` covers
    ///
    /// Intents are edges, so they are delivered to the first substep only.
    pub fn advance(&mut self, frame_ms: f32, input: &TickInput) -> Vec<GameEvent> {
        let frame_ms = if frame_ms > MAX_FRAME_MS {
            log::warn!("Clamping long frame ({:.1}ms)", frame_ms);
            MAX_FRAME_MS
        } else {
            frame_ms.max(0.0)
        };
        self.accumulator += frame_ms;

        let mut events = Vec::new();
        let mut pending = *input;
        let mut substeps = 0;
        while self.accumulator >= SIM_DT_MS && substeps < MAX_SUBSTEPS {
            events.extend(self.step(&pending, SIM_DT_MS));
            self.accumulator -= SIM_DT_MS;
            substeps += 1;

            // Clear one-shot inputs after processing
            pending = TickInput::default();
        }
        events
    }
}
