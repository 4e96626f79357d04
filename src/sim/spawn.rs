//! Periodic traffic and checkpoint spawning

use super::random::RandomSource;
use super::state::{EntityKind, GameState};

/// Place one traffic car above the top edge in a random lane
pub fn spawn_traffic(state: &mut GameState, rng: &mut impl RandomSource) -> Option<u32> {
    if state.is_game_over() {
        return None;
    }
    let tuning = &state.tuning;
    let lane = rng.pick_lane(tuning.lane_count());
    let jitter = rng.random_between(tuning.traffic_jitter_min, tuning.traffic_jitter_max);
    let speed = state.speed + jitter as f32;
    let y = tuning.traffic_spawn_y;
    Some(state.push_entity(EntityKind::Traffic, lane, y, speed))
}

/// Place one checkpoint token above the top edge in a random lane
pub fn spawn_checkpoint(state: &mut GameState, rng: &mut impl RandomSource) -> Option<u32> {
    if state.is_game_over() {
        return None;
    }
    let tuning = &state.tuning;
    let lane = rng.pick_lane(tuning.lane_count());
    let speed = state.speed * tuning.checkpoint_speed_factor;
    let y = tuning.checkpoint_spawn_y;
    Some(state.push_entity(EntityKind::Checkpoint, lane, y, speed))
}

/// Run both generators for their completed periods
pub fn advance(state: &mut GameState, delta_ms: f32, rng: &mut impl RandomSource) {
    let traffic = state
        .timers
        .traffic
        .advance(delta_ms, state.tuning.traffic_period_ms);
    for _ in 0..traffic {
        spawn_traffic(state, rng);
    }

    let checkpoints = state
        .timers
        .checkpoint
        .advance(delta_ms, state.tuning.checkpoint_period_ms);
    for _ in 0..checkpoints {
        spawn_checkpoint(state, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::{ScriptedRandom, SeededRandom};
    use crate::sim::state::GamePhase;

    #[test]
    fn test_spawn_traffic() {
        let mut state = GameState::default();
        let mut rng = ScriptedRandom::new(vec![2], vec![50]);
        spawn_traffic(&mut state, &mut rng);

        let car = &state.entities[0];
        assert_eq!(car.kind, EntityKind::Traffic);
        assert_eq!(car.lane, 2);
        assert_eq!(car.y, -80.0);
        assert_eq!(car.vertical_speed, 310.0);
    }

    #[test]
    fn test_spawn_checkpoint() {
        let mut state = GameState::default();
        let mut rng = ScriptedRandom::new(vec![0], vec![]);
        spawn_checkpoint(&mut state, &mut rng);

        let cp = &state.entities[0];
        assert_eq!(cp.kind, EntityKind::Checkpoint);
        assert_eq!(cp.lane, 0);
        assert_eq!(cp.y, -40.0);
        assert!((cp.vertical_speed - 234.0).abs() < 0.001);
    }

    #[test]
    fn test_cadences() {
        let mut state = GameState::default();
        let mut rng = SeededRandom::new(3);
        advance(&mut state, 699.0, &mut rng);
        assert!(state.entities.is_empty());
        advance(&mut state, 1.0, &mut rng);
        assert_eq!(state.traffic().count(), 1);
        advance(&mut state, 1300.0, &mut rng);
        // 2000ms total: traffic at 700 and 1400, checkpoint at 2000
        assert_eq!(state.traffic().count(), 2);
        assert_eq!(state.checkpoints().count(), 1);
        assert!(state.entities.iter().all(|e| e.lane < 3));
    }

    #[test]
    fn test_noop_when_game_over() {
        let mut state = GameState::default();
        state.phase = GamePhase::GameOver;
        let mut rng = SeededRandom::new(3);
        assert_eq!(spawn_traffic(&mut state, &mut rng), None);
        assert_eq!(spawn_checkpoint(&mut state, &mut rng), None);
        assert!(state.entities.is_empty());
    }
}
