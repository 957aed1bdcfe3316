//! Per-kind actor behavior: fireballs, coins and the player
//!
//! Fireball variants share one motion rule and differ only by their
//! starting velocity and what they do when terrain blocks the next step.

use std::f32::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, TouchKind};
use super::grid::Grid;
use super::vector::{Vector, VectorOps};
use crate::consts::*;

/// What a fireball does when its next position is blocked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleResponse {
    /// Reverse velocity
    Bounce,
    /// Jump back to the spawn position, keeping velocity
    Respawn,
}

/// Fireball motion state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireballMotion {
    pub on_obstacle: ObstacleResponse,
    pub start_pos: Vector,
}

/// Coin bobbing state: vertical sine offset around a fixed anchor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    /// Current phase (radians)
    pub phase: f32,
    /// Phase advance per second
    pub speed: f32,
    /// Amplitude (tiles)
    pub dist: f32,
    pub anchor: Vector,
}

impl Spring {
    pub fn new(anchor: Vector, phase: f32) -> Self {
        Self {
            phase,
            speed: COIN_SPRING_SPEED,
            dist: COIN_SPRING_DIST,
            anchor,
        }
    }

    /// Advance the phase and return the new position
    ///
    /// The phase is kept in [0, 2π) so long-lived coins keep their precision.
    pub fn advance(&mut self, time: f32) -> Vector {
        self.phase = (self.phase + self.speed * time).rem_euclid(TAU);
        self.anchor.plus(self.offset())
    }

    #[inline]
    pub fn offset(&self) -> Vector {
        Vector::new(0.0, self.phase.sin() * self.dist)
    }
}

/// Concrete actor kind and its per-kind state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Behavior {
    /// Plain actor, never acts
    Inert,
    /// Moved by the external control loop only
    Player,
    Coin(Spring),
    Fireball(FireballMotion),
}

impl Behavior {
    pub fn kind(&self) -> TouchKind {
        match self {
            Behavior::Inert => TouchKind::Actor,
            Behavior::Player => TouchKind::Player,
            Behavior::Coin(_) => TouchKind::Coin,
            Behavior::Fireball(_) => TouchKind::Fireball,
        }
    }
}

/// Random coin phase in [0, 2π)
pub fn random_phase<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(0.0..TAU)
}

impl Actor {
    /// Player standing on the tile at `pos`
    pub fn player(pos: Vector) -> Self {
        Actor::with_behavior(
            pos.plus(Vector::new(0.0, PLAYER_OFFSET_Y)),
            Vector::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            Vector::ZERO,
            Behavior::Player,
        )
    }

    /// Coin floating in the tile at `pos`, starting at spring phase `phase`
    pub fn coin(pos: Vector, phase: f32) -> Self {
        let anchor = pos.plus(Vector::new(COIN_OFFSET_X, COIN_OFFSET_Y));
        Actor::with_behavior(
            anchor,
            Vector::splat(COIN_SIZE),
            Vector::ZERO,
            Behavior::Coin(Spring::new(anchor, phase)),
        )
    }

    /// Bouncing fireball with an arbitrary velocity
    pub fn fireball(pos: Vector, speed: Vector) -> Self {
        Self::fireball_with(pos, speed, ObstacleResponse::Bounce)
    }

    pub fn horizontal_fireball(pos: Vector) -> Self {
        Self::fireball(pos, Vector::new(HORIZONTAL_FIREBALL_SPEED, 0.0))
    }

    pub fn vertical_fireball(pos: Vector) -> Self {
        Self::fireball(pos, Vector::new(0.0, VERTICAL_FIREBALL_SPEED))
    }

    /// Falling fireball that restarts from its spawn when it lands
    pub fn fire_rain(pos: Vector) -> Self {
        Self::fireball_with(pos, Vector::new(0.0, FIRE_RAIN_SPEED), ObstacleResponse::Respawn)
    }

    fn fireball_with(pos: Vector, speed: Vector, on_obstacle: ObstacleResponse) -> Self {
        Actor::with_behavior(
            pos,
            Vector::splat(FIREBALL_SIZE),
            speed,
            Behavior::Fireball(FireballMotion {
                on_obstacle,
                start_pos: pos,
            }),
        )
    }

    /// Where a fireball would be after `time`
    #[inline]
    pub fn next_position(&self, time: f32) -> Vector {
        self.pos.plus(self.speed.times(time))
    }

    /// Fireball reaction to blocked terrain ahead
    pub fn handle_obstacle(&mut self) {
        if let Behavior::Fireball(motion) = &self.behavior {
            match motion.on_obstacle {
                ObstacleResponse::Bounce => self.speed = self.speed.times(-1.0),
                ObstacleResponse::Respawn => self.pos = motion.start_pos,
            }
        }
    }

    /// Advance autonomous motion by `time` against the static terrain.
    /// Player and plain actors do nothing.
    pub fn act(&mut self, time: f32, grid: &Grid) {
        match self.behavior {
            Behavior::Inert | Behavior::Player => {}
            Behavior::Coin(ref mut spring) => {
                self.pos = spring.advance(time);
            }
            Behavior::Fireball(_) => {
                let next = self.next_position(time);
                match grid.obstacle_at(next, self.size) {
                    Some(obstacle) => {
                        log::debug!(
                            "Fireball {} blocked by {} at {}",
                            self.id.0,
                            obstacle.touch_kind().as_str(),
                            next
                        );
                        self.handle_obstacle();
                    }
                    None => self.pos = next,
                }
            }
        }
    }
}
