//! Difficulty ramp and periodic cadences

use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Most periods a single advance may report; the rest are dropped
pub const MAX_FIRES_PER_ADVANCE: u32 = 16;

/// Elapsed-time accumulator standing in for a looping engine timer
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Cadence {
    pub elapsed_ms: f32,
}

impl Cadence {
    /// Advance by `delta_ms` and return how many periods completed
    pub fn advance(&mut self, delta_ms: f32, period_ms: f32) -> u32 {
        if !(period_ms > 0.0) || !delta_ms.is_finite() || delta_ms < 0.0 {
            return 0;
        }
        self.elapsed_ms += delta_ms;
        if self.elapsed_ms < period_ms {
            return 0;
        }
        let periods = (self.elapsed_ms / period_ms).floor();
        self.elapsed_ms = self.elapsed_ms.rem_euclid(period_ms);
        periods.min(MAX_FIRES_PER_ADVANCE as f32) as u32
    }
}

/// Raise base speed by one increment, capped at max speed
///
/// The cap also applies while nitro has pushed speed past it.
pub fn ramp_tick(state: &mut GameState) {
    if state.is_game_over() {
        return;
    }
    state.speed = (state.speed + state.tuning.ramp_increment).min(state.tuning.max_speed);
}

/// Fire the ramp once per completed period
pub fn advance_ramp(state: &mut GameState, delta_ms: f32) {
    let fired = state.timers.ramp.advance(delta_ms, state.tuning.ramp_period_ms);
    for _ in 0..fired {
        ramp_tick(state);
    }
}
