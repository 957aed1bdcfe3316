//! Lava Run - A tile-based platformer simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actors, obstacle grid, level outcome)
//! - `parser`: Text plans to grids and actors
//! - `levels`: Built-in level plans
//! - `settings`: Data-driven simulation tuning

pub mod error;
pub mod levels;
pub mod parser;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use parser::{ActorSpawner, LevelParser};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default grace period (seconds) between outcome and teardown
    pub const FINISH_DELAY: f32 = 1.0;
    /// Longest simulation step a frame is split into
    pub const MAX_STEP: f32 = 0.05;

    /// Fireball defaults
    pub const FIREBALL_SIZE: f32 = 1.0;
    pub const HORIZONTAL_FIREBALL_SPEED: f32 = 2.0;
    pub const VERTICAL_FIREBALL_SPEED: f32 = 2.0;
    pub const FIRE_RAIN_SPEED: f32 = 3.0;

    /// Coin defaults - offset into its tile so it floats centred
    pub const COIN_OFFSET_X: f32 = 0.2;
    pub const COIN_OFFSET_Y: f32 = 0.1;
    pub const COIN_SIZE: f32 = 0.6;
    /// Spring phase speed (radians/s)
    pub const COIN_SPRING_SPEED: f32 = 8.0;
    /// Spring amplitude (tiles)
    pub const COIN_SPRING_DIST: f32 = 0.07;

    /// Player defaults - stands on the tile below, half a tile taller
    pub const PLAYER_OFFSET_Y: f32 = -0.5;
    pub const PLAYER_WIDTH: f32 = 0.8;
    pub const PLAYER_HEIGHT: f32 = 1.5;
}
