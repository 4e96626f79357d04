//! Nitro boost state machine
//!
//! Ready -> Active -> Cooldown -> Ready. Activation multiplies world speed
//! (capped slightly above max speed); expiry decays it back toward the ramp.

use super::state::{GameState, NitroPhase};

/// Outcome of advancing the nitro timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NitroTransition {
    /// Boost ran out, now cooling down
    Expired,
    /// Cooldown finished, boost available again
    BecameReady,
}

/// Advance the active/cooldown timer by `delta_ms`
pub fn update(state: &mut GameState, delta_ms: f32) -> Option<NitroTransition> {
    let tuning = &state.tuning;
    let nitro = &mut state.nitro;
    match nitro.phase {
        NitroPhase::Ready => None,
        NitroPhase::Active => {
            nitro.timer += delta_ms;
            if nitro.timer < tuning.nitro_active_ms {
                return None;
            }
            nitro.phase = NitroPhase::Cooldown;
            nitro.timer = 0.0;
            state.speed = (state.speed * tuning.nitro_decay_factor).max(tuning.floor_speed);
            Some(NitroTransition::Expired)
        }
        NitroPhase::Cooldown => {
            nitro.timer += delta_ms;
            if nitro.timer < tuning.nitro_cooldown_ms {
                return None;
            }
            nitro.phase = NitroPhase::Ready;
            nitro.timer = 0.0;
            Some(NitroTransition::BecameReady)
        }
    }
}

/// Fire the boost; returns true if it activated
pub fn trigger(state: &mut GameState) -> bool {
    if state.is_game_over() || state.nitro.phase != NitroPhase::Ready {
        return false;
    }
    state.nitro.phase = NitroPhase::Active;
    state.nitro.timer = 0.0;
    state.speed = (state.speed * state.tuning.nitro_boost_factor).min(state.tuning.boosted_ceiling());
    true
}

/// Multiplier applied to the displayed score
pub fn score_multiplier(state: &GameState) -> f32 {
    if state.nitro.phase == NitroPhase::Active {
        state.tuning.nitro_score_multiplier
    } else {
        1.0
    }
}

/// HUD label for the nitro gauge
pub fn label(phase: NitroPhase) -> &'static str {
    match phase {
        NitroPhase::Active => "NITRO!",
        NitroPhase::Ready => "Ready",
        NitroPhase::Cooldown => "Cooling",
    }
}
