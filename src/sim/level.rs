//! Level state: terrain, live actors and the win/loss outcome
//!
//! The outcome is decided at most once. After that the level keeps running
//! for a short grace period (`finish_delay`) before it reports finished.

use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorId, TouchKind};
use super::grid::{Grid, Obstacle};
use super::vector::Vector;
use crate::consts::FINISH_DELAY;
use crate::error::SimError;

/// Level outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    /// No outcome yet
    #[default]
    Running,
    Won,
    Lost,
}

impl Status {
    #[inline]
    pub fn is_decided(self) -> bool {
        self != Status::Running
    }
}

/// A level in play
///
/// Fields are private so the outcome can only move forward through
/// `player_touched` and the actor set only shrinks through `remove_actor`.
#[derive(Debug, Clone, Serialize)]
pub struct Level {
    grid: Grid,
    /// Live actors in insertion order
    actors: Vec<Actor>,
    status: Status,
    /// Grace period remaining once the outcome is decided (seconds)
    finish_delay: f32,
    /// Id of the player actor, if the level has one
    player_id: Option<ActorId>,
    next_id: u32,
}

impl Level {
    /// Adopt a grid and an actor list.
    ///
    /// Each actor gets a fresh id. A level without a player is valid; a
    /// level with two players is not.
    pub fn new(rows: &[Vec<Option<Obstacle>>], actors: Vec<Actor>) -> Result<Self, SimError> {
        let mut level = Self {
            grid: Grid::from_rows(rows),
            actors: Vec::with_capacity(actors.len()),
            status: Status::Running,
            finish_delay: FINISH_DELAY,
            player_id: None,
            next_id: 1,
        };

        for mut actor in actors {
            actor.id = level.next_actor_id();
            if actor.kind() == TouchKind::Player {
                if level.player_id.is_some() {
                    return Err(SimError::DuplicatePlayer(actor.pos));
                }
                level.player_id = Some(actor.id);
            }
            level.actors.push(actor);
        }

        if level.player_id.is_none() {
            log::debug!("Level has no player");
        }

        Ok(level)
    }

    fn next_actor_id(&mut self) -> ActorId {
        let id = ActorId(self.next_id);
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Live actors in insertion order
    #[inline]
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn finish_delay(&self) -> f32 {
        self.finish_delay
    }

    /// Reset the grace period; only meaningful before the outcome is decided
    pub fn set_finish_delay(&mut self, delay: f32) {
        self.finish_delay = delay;
    }

    /// Run down the grace period once the outcome is decided
    pub fn count_down(&mut self, dt: f32) {
        if self.status.is_decided() {
            self.finish_delay -= dt;
        }
    }

    /// Advance every non-player actor against the static grid
    pub fn act_actors(&mut self, dt: f32) {
        // Actors only see the static grid, so order between them does not matter
        let grid = &self.grid;
        for actor in self.actors.iter_mut() {
            if actor.kind() != TouchKind::Player {
                actor.act(dt, grid);
            }
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The player actor
    pub fn player(&self) -> Option<&Actor> {
        self.player_id.and_then(|id| self.actor(id))
    }

    /// Move the player on behalf of the external control loop.
    /// Returns false for a player-less level.
    pub fn move_player(&mut self, pos: Vector, speed: Vector) -> bool {
        let Some(id) = self.player_id else {
            return false;
        };
        match self.actors.iter_mut().find(|a| a.id == id) {
            Some(player) => {
                player.pos = pos;
                player.speed = speed;
                true
            }
            None => false,
        }
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    /// Outcome decided and grace period over
    pub fn is_finished(&self) -> bool {
        self.status.is_decided() && self.finish_delay < 0.0
    }

    /// First actor (in insertion order) overlapping `other`, excluding
    /// `other` itself
    pub fn actor_at(&self, other: &Actor) -> Option<&Actor> {
        self.actors.iter().find(|a| a.intersects(other))
    }

    /// Terrain under a hypothetical box; see [`Grid::obstacle_at`]
    #[inline]
    pub fn obstacle_at(&self, pos: Vector, size: Vector) -> Option<Obstacle> {
        self.grid.obstacle_at(pos, size)
    }

    /// Remove by identity. Unknown ids are ignored.
    pub fn remove_actor(&mut self, id: ActorId) {
        if let Some(index) = self.actors.iter().position(|a| a.id == id) {
            self.actors.remove(index);
        }
    }

    /// True when no live actor has this kind
    pub fn no_more_actors(&self, kind: TouchKind) -> bool {
        !self.actors.iter().any(|a| a.kind() == kind)
    }

    /// Resolve the player touching something. First decision wins.
    pub fn player_touched(&mut self, touched: TouchKind, actor: Option<ActorId>) {
        if self.status.is_decided() {
            return;
        }

        match touched {
            TouchKind::Lava | TouchKind::Fireball => {
                self.status = Status::Lost;
                log::info!("Level lost: player touched {}", touched.as_str());
            }
            TouchKind::Coin => {
                let Some(id) = actor else {
                    return;
                };
                if self.actor(id).map(Actor::kind) != Some(TouchKind::Coin) {
                    return;
                }
                self.remove_actor(id);
                log::debug!("Coin {} collected", id.0);
                if self.no_more_actors(TouchKind::Coin) {
                    self.status = Status::Won;
                    log::info!("Level won: all coins collected");
                }
            }
            TouchKind::Actor | TouchKind::Wall | TouchKind::Player => {}
        }
    }
}
