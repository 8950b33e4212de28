//! Actors: movable axis-aligned boxes on the obstacle grid
//!
//! Every simulated entity is an [`Actor`] with a position, size, and
//! velocity in cell units, plus an [`ActorKind`] carrying the per-variant
//! behavior state. The level dispatches on the flat [`ActorTag`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Flat discriminant used for dispatch and win/lose rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorTag {
    Player,
    Coin,
    Fireball,
}

/// How a fireball reacts to terrain ahead
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FireballMode {
    /// Reverse direction
    Bounce,
    /// Teleport back to the spawn point, velocity unchanged
    Rain { start_pos: Vec2 },
}

/// Behavioral variant of an actor, with per-variant state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActorKind {
    /// Input-driven movement lives in the host; the core only collides it
    Player,
    Coin {
        /// Anchor the bob oscillates around; never changes after spawn
        base_pos: Vec2,
        /// Current bob phase (radians)
        phase: f32,
    },
    Fireball { mode: FireballMode },
}

impl ActorKind {
    pub fn tag(&self) -> ActorTag {
        match self {
            ActorKind::Player => ActorTag::Player,
            ActorKind::Coin { .. } => ActorTag::Coin,
            ActorKind::Fireball { .. } => ActorTag::Fireball,
        }
    }
}

/// A movable entity participating in collision checks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub kind: ActorKind,
}

impl Actor {
    /// Panics if `size` is not strictly positive on both axes. A degenerate
    /// box is a construction bug, not a runtime condition.
    pub fn new(id: u32, pos: Vec2, size: Vec2, vel: Vec2, kind: ActorKind) -> Self {
        assert!(
            size.x > 0.0 && size.y > 0.0,
            "actor size must be positive on both axes, got {size}"
        );
        Self {
            id,
            pos,
            size,
            vel,
            kind,
        }
    }

    /// Player spawns shifted up to reserve headroom above the placement cell
    pub fn player(id: u32, pos: Vec2) -> Self {
        Self::new(
            id,
            pos + Vec2::new(0.0, -PLAYER_SPAWN_LIFT),
            PLAYER_SIZE,
            Vec2::ZERO,
            ActorKind::Player,
        )
    }

    /// Coin at its fixed visual offset from the placement cell. `phase` is
    /// the initial bob phase, drawn from the seeded stream by the parser.
    pub fn coin(id: u32, pos: Vec2, phase: f32) -> Self {
        let base_pos = pos + COIN_OFFSET;
        Self::new(
            id,
            base_pos,
            COIN_SIZE,
            Vec2::ZERO,
            ActorKind::Coin { base_pos, phase },
        )
    }

    pub fn horizontal_fireball(id: u32, pos: Vec2) -> Self {
        Self::new(
            id,
            pos,
            FIREBALL_SIZE,
            HORIZONTAL_FIREBALL_VEL,
            ActorKind::Fireball {
                mode: FireballMode::Bounce,
            },
        )
    }

    pub fn vertical_fireball(id: u32, pos: Vec2) -> Self {
        Self::new(
            id,
            pos,
            FIREBALL_SIZE,
            VERTICAL_FIREBALL_VEL,
            ActorKind::Fireball {
                mode: FireballMode::Bounce,
            },
        )
    }

    /// Fire rain remembers where it spawned and returns there on impact
    pub fn fire_rain(id: u32, pos: Vec2) -> Self {
        Self::new(
            id,
            pos,
            FIREBALL_SIZE,
            FIRE_RAIN_VEL,
            ActorKind::Fireball {
                mode: FireballMode::Rain { start_pos: pos },
            },
        )
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

    /// Strict AABB overlap test. Boxes that merely share an edge do not
    /// overlap (this governs whether a coin flush against a wall is
    /// pickable), and an actor never overlaps itself.
    pub fn overlaps(&self, other: &Actor) -> bool {
        if self.id == other.id {
            return false;
        }
        self.right() > other.left()
            && self.left() < other.right()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Where this actor would be after `time` seconds of free movement
    #[inline]
    pub fn next_pos(&self, time: f32) -> Vec2 {
        self.pos + self.vel * time
    }
}
