//! Collision and pickup resolution
//!
//! Geometry is pluggable: the resolver asks an [`OverlapTest`] whether two
//! boxes touch and only owns the policy of what happens next. Traffic is
//! always resolved before checkpoints, so a crash tick never awards a bonus.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Entity, EntityKind, GamePhase, GameState};

/// Axis-aligned bounding box (center + half-extents)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Bounds {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }
}

/// Host-supplied overlap predicate
pub trait OverlapTest {
    fn overlaps(&self, a: &Bounds, b: &Bounds) -> bool;
}

impl<F> OverlapTest for F
where
    F: Fn(&Bounds, &Bounds) -> bool,
{
    fn overlaps(&self, a: &Bounds, b: &Bounds) -> bool {
        self(a, b)
    }
}

/// Default box-vs-box test (touching edges do not count)
#[derive(Debug, Clone, Copy, Default)]
pub struct AabbOverlap;

impl OverlapTest for AabbOverlap {
    fn overlaps(&self, a: &Bounds, b: &Bounds) -> bool {
        let delta = (a.center - b.center).abs();
        let reach = a.half_extents + b.half_extents;
        delta.x < reach.x && delta.y < reach.y
    }
}

/// Outcome of one resolution pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resolution {
    pub crashed: bool,
    /// Bonus awarded per collected checkpoint, in entity order
    pub collected: Vec<f32>,
}

/// Player's lane-aligned box
pub fn player_bounds(state: &GameState) -> Bounds {
    Bounds::new(
        Vec2::new(state.player_x(), state.tuning.player_y),
        state.tuning.player_half_extents,
    )
}

/// An entity's box
pub fn entity_bounds(state: &GameState, entity: &Entity) -> Bounds {
    let half_extents = match entity.kind {
        EntityKind::Traffic => state.tuning.traffic_half_extents,
        EntityKind::Checkpoint => state.tuning.checkpoint_half_extents,
    };
    Bounds::new(Vec2::new(state.tuning.lane_x(entity.lane), entity.y), half_extents)
}

/// End the run. Returns false if it had already ended.
pub fn crash(state: &mut GameState) -> bool {
    if state.is_game_over() {
        return false;
    }
    state.phase = GamePhase::GameOver;
    log::info!(
        "Crashed at distance {:.0} (speed {:.0}, {} checkpoints)",
        state.distance,
        state.speed,
        state.checkpoints_collected
    );
    true
}

/// Remove a checkpoint and award its bonus
pub fn collect_checkpoint(state: &mut GameState, entity_id: u32) -> Option<f32> {
    if state.is_game_over() {
        return None;
    }
    let index = state
        .entities
        .iter()
        .position(|e| e.id == entity_id && e.kind == EntityKind::Checkpoint)?;
    state.entities.remove(index);

    let bonus = state.tuning.checkpoint_bonus;
    state.distance += bonus;
    state.checkpoints_collected += 1;
    log::debug!("Checkpoint {} collected (+{})", entity_id, bonus);
    Some(bonus)
}

/// Apply crash/pickup policy for everything overlapping the player
pub fn resolve(state: &mut GameState, overlap: &impl OverlapTest) -> Resolution {
    let mut resolution = Resolution::default();
    if state.is_game_over() {
        return resolution;
    }

    let view: &GameState = state;
    let player = player_bounds(view);
    let hit_traffic = view
        .traffic()
        .any(|e| overlap.overlaps(&player, &entity_bounds(view, e)));
    if hit_traffic {
        resolution.crashed = crash(state);
        return resolution;
    }

    let view: &GameState = state;
    let touched: Vec<u32> = view
        .checkpoints()
        .filter(|e| overlap.overlaps(&player, &entity_bounds(view, e)))
        .map(|e| e.id)
        .collect();
    for id in touched {
        if let Some(bonus) = collect_checkpoint(state, id) {
            resolution.collected.push(bonus);
        }
    }
    resolution
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_y(state: &GameState) -> f32 {
        state.tuning.player_y
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Bounds::new(Vec2::new(0.0, 0.0), Vec2::new(18.0, 32.0));
        let b = Bounds::new(Vec2::new(30.0, 60.0), Vec2::new(18.0, 32.0));
        assert!(AabbOverlap.overlaps(&a, &b));

        // Neighbouring lanes are 100px apart
        let c = Bounds::new(Vec2::new(100.0, 0.0), Vec2::new(18.0, 32.0));
        assert!(!AabbOverlap.overlaps(&a, &c));

        // Touching edges
        let d = Bounds::new(Vec2::new(0.0, 64.0), Vec2::new(18.0, 32.0));
        assert!(!AabbOverlap.overlaps(&a, &d));
    }

    #[test]
    fn test_checkpoint_pickup() {
        let mut state = GameState::default();
        state.distance = 1000.0;
        let y = player_y(&state);
        state.push_entity(EntityKind::Checkpoint, state.lane, y, 234.0);

        let resolution = resolve(&mut state, &AabbOverlap);
        assert!(!resolution.crashed);
        assert_eq!(resolution.collected, vec![150.0]);
        assert_eq!(state.distance, 1150.0);
        assert_eq!(state.checkpoints_collected, 1);
        assert!(state.entities.is_empty());
    }

    #[test]
    fn test_other_lane_is_safe() {
        let mut state = GameState::default();
        let y = player_y(&state);
        state.push_entity(EntityKind::Traffic, 0, y, 300.0);
        state.push_entity(EntityKind::Checkpoint, 2, y, 234.0);

        let resolution = resolve(&mut state, &AabbOverlap);
        assert_eq!(resolution, Resolution::default());
        assert_eq!(state.entities.len(), 2);
    }

    #[test]
    fn test_crash_takes_precedence() {
        let mut state = GameState::default();
        state.distance = 1000.0;
        let y = player_y(&state);
        state.push_entity(EntityKind::Checkpoint, state.lane, y, 234.0);
        state.push_entity(EntityKind::Traffic, state.lane, y + 10.0, 300.0);

        let resolution = resolve(&mut state, &AabbOverlap);
        assert!(resolution.crashed);
        assert!(resolution.collected.is_empty());
        assert!(state.is_game_over());
        assert_eq!(state.distance, 1000.0);
        assert_eq!(state.checkpoints().count(), 1);
    }

    #[test]
    fn test_crash_only_once() {
        let mut state = GameState::default();
        assert!(crash(&mut state));
        assert!(!crash(&mut state));
    }

    #[test]
    fn test_injected_predicate() {
        let mut state = GameState::default();
        state.push_entity(EntityKind::Traffic, 0, -80.0, 300.0);

        let never = |_: &Bounds, _: &Bounds| false;
        assert!(!resolve(&mut state, &never).crashed);

        let always = |_: &Bounds, _: &Bounds| true;
        assert!(resolve(&mut state, &always).crashed);
    }
}
