//! Demo/idle controller
//!
//! Picks the lane with the most room ahead, detours for checkpoints when that
//! is safe, and burns nitro on an open road. Produces the same intents a
//! player would.

use super::state::{GameState, NitroPhase};
use super::tick::TickInput;

/// Room (pixels) ahead of the player considered comfortable
const SAFE_CLEARANCE: f32 = 260.0;
/// Room required before firing nitro
const NITRO_CLEARANCE: f32 = 600.0;

/// Distance from the player to the nearest oncoming car in `lane`
///
/// Cars already behind the player do not count.
pub fn lane_clearance(state: &GameState, lane: usize) -> f32 {
    let player_y = state.tuning.player_y;
    let reach = state.tuning.player_half_extents.y + state.tuning.traffic_half_extents.y;
    state
        .traffic()
        .filter(|e| e.lane == lane && e.y < player_y + reach)
        .map(|e| (player_y - e.y).max(0.0))
        .fold(f32::INFINITY, f32::min)
}

/// Lane the autopilot wants to be in
pub fn target_lane(state: &GameState) -> usize {
    let current = state.lane;
    let lanes = state.tuning.lane_count();

    let current_clearance = lane_clearance(state, current);
    if current_clearance >= SAFE_CLEARANCE {
        // Safe where we are; detour to an adjacent checkpoint if its lane is clear
        let neighbour_checkpoint = state
            .checkpoints()
            .filter(|cp| cp.lane.abs_diff(current) == 1 && cp.y < state.tuning.player_y)
            .max_by(|a, b| a.y.total_cmp(&b.y))
            .map(|cp| cp.lane);
        if let Some(lane) = neighbour_checkpoint {
            if lane_clearance(state, lane) >= SAFE_CLEARANCE {
                return lane;
            }
        }
        return current;
    }

    // Prefer the roomiest lane, closest to the current one on ties
    (0..lanes)
        .max_by(|&a, &b| {
            lane_clearance(state, a)
                .total_cmp(&lane_clearance(state, b))
                .then_with(|| b.abs_diff(current).cmp(&a.abs_diff(current)))
        })
        .unwrap_or(current)
}

/// Intents for the next tick
pub fn plan(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    if state.is_game_over() {
        return input;
    }

    let target = target_lane(state);
    if target < state.lane {
        input.lane_left = true;
    } else if target > state.lane {
        input.lane_right = true;
    }

    if state.nitro.phase == NitroPhase::Ready
        && target == state.lane
        && lane_clearance(state, state.lane) >= NITRO_CLEARANCE
    {
        input.nitro = true;
    }

    input
}
