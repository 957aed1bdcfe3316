//! Headless simulation tick
//!
//! Drives the autonomous part of the control-loop contract: move every
//! non-player actor, resolve what the player is touching, and run down
//! the finish grace period. Player movement belongs to the caller.

use super::actor::{ActorId, TouchKind};
use super::grid::Obstacle;
use super::level::{Level, Status};

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelEvent {
    CoinCollected(ActorId),
    Won,
    Lost,
}

/// Advance the level by one step of `dt` seconds
pub fn tick(level: &mut Level, dt: f32) -> Vec<LevelEvent> {
    let mut events = Vec::new();

    level.count_down(dt);
    level.act_actors(dt);
    resolve_player_contact(level, &mut events);

    events
}

/// Split a frame into steps of at most `max_step` and tick each.
/// Stops early once the level is finished.
///
/// A non-finite or non-positive `frame_time` is ignored. A non-finite or
/// non-positive `max_step` runs the whole frame as one step.
pub fn advance(level: &mut Level, frame_time: f32, max_step: f32) -> Vec<LevelEvent> {
    let mut events = Vec::new();
    if !frame_time.is_finite() || frame_time <= 0.0 {
        log::warn!("Ignoring frame of {frame_time}s");
        return events;
    }
    let step = if max_step.is_finite() && max_step > 0.0 {
        max_step
    } else {
        log::warn!("Invalid max step {max_step}, running frame as one step");
        frame_time
    };

    let mut remaining = frame_time;
    while remaining > 0.0 && !level.is_finished() {
        let dt = remaining.min(step);
        events.extend(tick(level, dt));
        remaining -= dt;
    }

    events
}

fn resolve_player_contact(level: &mut Level, events: &mut Vec<LevelEvent>) {
    let Some(player) = level.player() else {
        return;
    };

    let before = level.status();

    let lava = level.obstacle_at(player.pos, player.size) == Some(Obstacle::Lava);
    let contact = level.actor_at(player).map(|a| (a.kind(), a.id));

    if lava {
        level.player_touched(TouchKind::Lava, None);
    }
    if let Some((kind, id)) = contact {
        let count = level.actors().len();
        level.player_touched(kind, Some(id));
        if kind == TouchKind::Coin && level.actors().len() < count {
            events.push(LevelEvent::CoinCollected(id));
        }
    }

    if before != level.status() {
        match level.status() {
            Status::Won => events.push(LevelEvent::Won),
            Status::Lost => events.push(LevelEvent::Lost),
            Status::Running => {}
        }
    }
}
