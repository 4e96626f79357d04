//! Discrete lane controller

use super::state::GameState;

/// Single-step lateral move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneDirection {
    Left,
    Right,
}

impl LaneDirection {
    /// Accepts only -1 and +1
    pub fn from_step(step: i32) -> Option<Self> {
        match step {
            -1 => Some(LaneDirection::Left),
            1 => Some(LaneDirection::Right),
            _ => {
                log::warn!("Rejected lane step {}", step);
                None
            }
        }
    }

    #[inline]
    pub fn step(self) -> isize {
        match self {
            LaneDirection::Left => -1,
            LaneDirection::Right => 1,
        }
    }
}

/// Move one lane over, clamped to the road
///
/// Returns the new lane when it changed, `None` when the move was clamped away.
pub fn try_change_lane(state: &mut GameState, direction: LaneDirection) -> Option<usize> {
    let last = state.tuning.lane_count().saturating_sub(1) as isize;
    let next = (state.lane as isize + direction.step()).clamp(0, last) as usize;
    if next == state.lane {
        return None;
    }
    state.lane = next;
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_at_edges() {
        let mut state = GameState::default();
        assert_eq!(try_change_lane(&mut state, LaneDirection::Left), Some(0));
        assert_eq!(try_change_lane(&mut state, LaneDirection::Left), None);
        assert_eq!(state.lane, 0);

        assert_eq!(try_change_lane(&mut state, LaneDirection::Right), Some(1));
        assert_eq!(try_change_lane(&mut state, LaneDirection::Right), Some(2));
        assert_eq!(try_change_lane(&mut state, LaneDirection::Right), None);
        assert_eq!(state.lane, 2);
        assert_eq!(state.player_x(), 420.0);
    }

    #[test]
    fn test_from_step() {
        assert_eq!(LaneDirection::from_step(-1), Some(LaneDirection::Left));
        assert_eq!(LaneDirection::from_step(1), Some(LaneDirection::Right));
        assert_eq!(LaneDirection::from_step(0), None);
        assert_eq!(LaneDirection::from_step(2), None);
    }
}
