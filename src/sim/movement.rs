//! Entity movement and despawn policy

use super::state::{EntityKind, GameState};

/// Advance every entity by `delta_ms` and drop those past the bottom edge
///
/// Traffic is kept at or above `flow_factor * speed` so it never falls
/// behind the world; checkpoints keep their spawn speed.
pub fn advance(state: &mut GameState, delta_ms: f32) {
    let tuning = &state.tuning;
    let min_traffic_speed = state.speed * tuning.flow_factor;
    let dt = delta_ms / 1000.0;

    for entity in &mut state.entities {
        if entity.kind == EntityKind::Traffic {
            entity.vertical_speed = entity.vertical_speed.max(min_traffic_speed);
        }
        entity.y += entity.vertical_speed * dt;
    }

    let traffic_limit = tuning.viewport_height + tuning.traffic_despawn_margin;
    let checkpoint_limit = tuning.viewport_height + tuning.checkpoint_despawn_margin;
    state.entities.retain(|e| match e.kind {
        EntityKind::Traffic => e.y <= traffic_limit,
        EntityKind::Checkpoint => e.y <= checkpoint_limit,
    });
}
