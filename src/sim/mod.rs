//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `tick` deltas
//! - Randomness only through an injected [`RandomSource`]
//! - Overlap geometry only through an injected [`OverlapTest`]
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod lane;
pub mod movement;
pub mod nitro;
pub mod random;
pub mod scoring;
pub mod session;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{AabbOverlap, Bounds, OverlapTest, Resolution};
pub use difficulty::Cadence;
pub use lane::LaneDirection;
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use scoring::{display_score, hud_line, status_line};
pub use session::Session;
pub use state::{DayNight, Entity, EntityKind, GamePhase, GameState, Nitro, NitroPhase, Timers};
pub use tick::{GameEvent, Intent, TickInput, tick};
