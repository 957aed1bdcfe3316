//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied time steps only
//! - Injected coin phases only (no ambient RNG)
//! - Stable iteration order (actor insertion order)
//! - No rendering, input or platform dependencies

pub mod actor;
pub mod entities;
pub mod grid;
pub mod level;
pub mod tick;
pub mod vector;

pub use actor::{Actor, ActorId, TouchKind};
pub use entities::{Behavior, FireballMotion, ObstacleResponse, Spring, random_phase};
pub use grid::{Grid, Obstacle};
pub use level::{Level, Status};
pub use tick::{LevelEvent, advance, tick};
pub use vector::{Vector, VectorOps};
