//! Axis-aligned box actors and the contact vocabulary
//!
//! Every moving or collectible thing in a level is an `Actor`. Concrete
//! kinds (player, coin, fireballs) differ only by their `Behavior`.

use serde::{Deserialize, Serialize};

use super::entities::Behavior;
use super::vector::Vector;
use crate::error::SimError;

/// Everything the player can touch: terrain kinds and actor kinds in one
/// closed set, so the outcome rules are a single exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TouchKind {
    /// Plain actor with no concrete kind
    Actor,
    Wall,
    Lava,
    Player,
    Coin,
    Fireball,
}

impl TouchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TouchKind::Actor => "actor",
            TouchKind::Wall => "wall",
            TouchKind::Lava => "lava",
            TouchKind::Player => "player",
            TouchKind::Coin => "coin",
            TouchKind::Fireball => "fireball",
        }
    }
}

/// Level-assigned actor identity (0 = not yet adopted by a level)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl ActorId {
    pub const UNASSIGNED: ActorId = ActorId(0);

    #[inline]
    pub fn is_assigned(self) -> bool {
        self != Self::UNASSIGNED
    }
}

/// An axis-aligned box entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    /// Top-left corner
    pub pos: Vector,
    pub size: Vector,
    /// Velocity (tiles/s)
    pub speed: Vector,
    pub behavior: Behavior,
}

impl Actor {
    /// Create a plain actor, checking each vector separately
    pub fn new(pos: Vector, size: Vector, speed: Vector) -> Result<Self, SimError> {
        if !pos.is_finite() {
            return Err(SimError::InvalidPosition(pos));
        }
        if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
            return Err(SimError::InvalidSize(size));
        }
        if !speed.is_finite() {
            return Err(SimError::InvalidSpeed(speed));
        }
        Ok(Self::with_behavior(pos, size, speed, Behavior::Inert))
    }

    /// Unchecked constructor for kinds with fixed, known-good geometry
    pub(crate) fn with_behavior(pos: Vector, size: Vector, speed: Vector, behavior: Behavior) -> Self {
        Self {
            id: ActorId::UNASSIGNED,
            pos,
            size,
            speed,
            behavior,
        }
    }

    /// Concrete kind used for outcome-rule dispatch
    #[inline]
    pub fn kind(&self) -> TouchKind {
        self.behavior.kind()
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Same object, or both adopted by a level under the same id
    pub fn is_same(&self, other: &Actor) -> bool {
        std::ptr::eq(self, other) || (self.id.is_assigned() && self.id == other.id)
    }

    /// Positive-area overlap on both axes. Edge contact does not count and
    /// an actor never intersects itself.
    pub fn intersects(&self, other: &Actor) -> bool {
        if self.is_same(other) {
            return false;
        }
        self.right() > other.left()
            && self.left() < other.right()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn block(x: f32, y: f32, w: f32, h: f32) -> Actor {
        Actor::new(Vector::new(x, y), Vector::new(w, h), Vector::ZERO).unwrap()
    }

    #[test]
    fn test_new_defaults_to_plain_actor() {
        let actor = block(1.0, 2.0, 3.0, 4.0);
        assert_eq!(actor.kind(), TouchKind::Actor);
        assert_eq!(actor.id, ActorId::UNASSIGNED);
        assert_eq!(actor.left(), 1.0);
        assert_eq!(actor.right(), 4.0);
        assert_eq!(actor.top(), 2.0);
        assert_eq!(actor.bottom(), 6.0);
    }

    #[test]
    fn test_new_rejects_each_bad_field() {
        let ok = Vector::ONE;
        let nan = Vector::new(f32::NAN, 0.0);

        assert!(matches!(
            Actor::new(nan, ok, ok),
            Err(SimError::InvalidPosition(_))
        ));
        assert!(matches!(
            Actor::new(ok, Vector::new(0.0, 1.0), ok),
            Err(SimError::InvalidSize(_))
        ));
        assert!(matches!(
            Actor::new(ok, Vector::new(1.0, -1.0), ok),
            Err(SimError::InvalidSize(_))
        ));
        assert!(matches!(
            Actor::new(ok, ok, Vector::new(0.0, f32::INFINITY)),
            Err(SimError::InvalidSpeed(_))
        ));
    }

    #[test]
    fn test_bounds_follow_position() {
        let mut actor = block(0.0, 0.0, 1.0, 1.0);
        actor.pos = Vector::new(5.0, 7.0);
        assert_eq!(actor.right(), 6.0);
        assert_eq!(actor.bottom(), 8.0);
    }

    #[test]
    fn test_never_intersects_itself() {
        let actor = block(0.0, 0.0, 1.0, 1.0);
        assert!(!actor.intersects(&actor));
    }

    #[test]
    fn test_same_id_is_same_actor() {
        let mut a = block(0.0, 0.0, 1.0, 1.0);
        a.id = ActorId(7);
        let copy = a.clone();
        assert!(!a.intersects(&copy));

        // Unassigned copies are distinct actors
        let b = block(0.0, 0.0, 1.0, 1.0);
        let c = b.clone();
        assert!(b.intersects(&c));
    }

    #[test]
    fn test_overlap() {
        let a = block(0.0, 0.0, 2.0, 2.0);
        assert!(a.intersects(&block(1.0, 1.0, 2.0, 2.0)));
        assert!(a.intersects(&block(0.5, 0.5, 0.5, 0.5)));
        assert!(!a.intersects(&block(3.0, 3.0, 1.0, 1.0)));
    }

    #[test]
    fn test_edge_touching_does_not_intersect() {
        let a = block(0.0, 0.0, 1.0, 1.0);
        assert!(!a.intersects(&block(1.0, 0.0, 1.0, 1.0)));
        assert!(!a.intersects(&block(-1.0, 0.0, 1.0, 1.0)));
        assert!(!a.intersects(&block(0.0, 1.0, 1.0, 1.0)));
        assert!(!a.intersects(&block(0.0, -1.0, 1.0, 1.0)));
        // Corner only
        assert!(!a.intersects(&block(1.0, 1.0, 1.0, 1.0)));
    }

    proptest! {
        #[test]
        fn prop_intersection_is_symmetric(
            ax in -10.0f32..10.0, ay in -10.0f32..10.0,
            aw in 0.1f32..5.0, ah in 0.1f32..5.0,
            bx in -10.0f32..10.0, by in -10.0f32..10.0,
            bw in 0.1f32..5.0, bh in 0.1f32..5.0,
        ) {
            let a = block(ax, ay, aw, ah);
            let b = block(bx, by, bw, bh);
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
            prop_assert!(!a.intersects(&a));
        }

        #[test]
        fn prop_identical_geometry_distinct_actors_intersect(
            x in -10.0f32..10.0, y in -10.0f32..10.0,
            w in 0.1f32..5.0, h in 0.1f32..5.0,
        ) {
            let a = block(x, y, w, h);
            let b = block(x, y, w, h);
            prop_assert!(a.intersects(&b));
            prop_assert!(b.intersects(&a));
        }
    }
}
