//! Distance scoring and HUD text
//!
//! `distance` is the stored accumulator. The nitro multiplier only affects
//! the displayed score and is never folded back into it.

use super::nitro;
use super::state::GameState;

/// Accumulate distance for `delta_ms` at the current speed
pub fn accumulate(state: &mut GameState, delta_ms: f32) {
    if state.is_game_over() {
        return;
    }
    state.distance += (state.speed / 1000.0) * delta_ms * state.tuning.distance_factor;
}

/// Score shown to the player
pub fn display_score(state: &GameState) -> u64 {
    (state.distance * nitro::score_multiplier(state)).floor().max(0.0) as u64
}

/// Top HUD line, e.g. `DIST 1234 | Ready`
pub fn hud_line(state: &GameState) -> String {
    format!(
        "DIST {} | {}",
        display_score(state),
        nitro::label(state.nitro.phase)
    )
}

/// Second HUD line
pub fn status_line(state: &GameState) -> &'static str {
    if state.is_game_over() {
        "Crashed! Press R to restart."
    } else {
        "Arrows/A,D to move | Shift for Nitro | R to restart"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{GamePhase, NitroPhase};

    #[test]
    fn test_accumulate() {
        let mut state = GameState::default();
        // 260 px/s for one second at factor 0.6
        accumulate(&mut state, 1000.0);
        assert!((state.distance - 156.0).abs() < 0.001);
    }

    #[test]
    fn test_frozen_when_game_over() {
        let mut state = GameState::default();
        state.distance = 10.0;
        state.phase = GamePhase::GameOver;
        accumulate(&mut state, 1000.0);
        assert_eq!(state.distance, 10.0);
    }

    #[test]
    fn test_display_multiplier_does_not_touch_distance() {
        let mut state = GameState::default();
        state.distance = 1000.0;
        assert_eq!(display_score(&state), 1000);

        state.nitro.phase = NitroPhase::Active;
        assert_eq!(display_score(&state), 1200);
        assert_eq!(state.distance, 1000.0);
        assert_eq!(hud_line(&state), "DIST 1200 | NITRO!");

        state.nitro.phase = NitroPhase::Cooldown;
        assert_eq!(hud_line(&state), "DIST 1000 | Cooling");
    }

    #[test]
    fn test_status_line() {
        let mut state = GameState::default();
        assert!(status_line(&state).starts_with("Arrows"));
        state.phase = GamePhase::GameOver;
        assert_eq!(status_line(&state), "Crashed! Press R to restart.");
    }
}
