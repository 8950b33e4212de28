//! Level state machine
//!
//! Owns the actor set and the terrain grid. Status only ever moves from
//! `Playing` to a terminal value, once; [`Level::on_player_touch`] is the
//! single writer, every other path just reads it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorTag};
use super::grid::{Grid, Terrain};
use crate::consts::FINISH_DELAY;

/// Level outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

impl Status {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        *self != Status::Playing
    }
}

/// What the player ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchKind {
    Wall,
    Lava,
    Coin,
    Fireball,
}

impl From<Terrain> for TouchKind {
    fn from(terrain: Terrain) -> Self {
        match terrain {
            Terrain::Wall => TouchKind::Wall,
            Terrain::Lava => TouchKind::Lava,
        }
    }
}

/// A single level's simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub grid: Grid,
    /// Active actors, in spawn order (stable iteration)
    pub actors: Vec<Actor>,
    pub status: Status,
    /// Counts down only after `status` goes terminal; the level reports
    /// finished once it has gone strictly negative, leaving the host a
    /// window to render a final frame
    pub finish_delay: f32,
}

impl Level {
    /// Panics if more than one actor is a player.
    pub fn new(grid: Grid, actors: Vec<Actor>) -> Self {
        let players = actors
            .iter()
            .filter(|a| a.kind.tag() == ActorTag::Player)
            .count();
        assert!(players <= 1, "level may hold at most one player");
        Self {
            grid,
            actors,
            status: Status::Playing,
            finish_delay: FINISH_DELAY,
        }
    }

    /// The distinguished player, if the plan placed one
    pub fn player(&self) -> Option<&Actor> {
        self.actors
            .iter()
            .find(|a| a.kind.tag() == ActorTag::Player)
    }

    /// True once the level is terminal and the finish countdown has run out
    pub fn is_finished(&self) -> bool {
        self.status.is_terminal() && self.finish_delay < 0.0
    }

    /// First other actor overlapping `actor`, in actor order
    pub fn actor_at(&self, actor: &Actor) -> Option<&Actor> {
        self.actors.iter().find(|a| a.overlaps(actor))
    }

    /// Terrain covered by the rectangle (delegates to the grid)
    #[inline]
    pub fn terrain_at(&self, pos: Vec2, size: Vec2) -> Option<Terrain> {
        self.grid.terrain_at(pos, size)
    }

    /// Remove an actor by id; no-op if absent
    pub fn remove_actor(&mut self, id: u32) {
        self.actors.retain(|a| a.id != id);
    }

    /// True iff no active actor carries `tag`
    pub fn none_left(&self, tag: ActorTag) -> bool {
        !self.actors.iter().any(|a| a.kind.tag() == tag)
    }

    /// Resolve a player contact. Ignored once the level is already terminal,
    /// so a lethal touch during the finish window cannot overwrite a win.
    pub fn on_player_touch(&mut self, kind: TouchKind, actor_id: Option<u32>) {
        if self.status.is_terminal() {
            return;
        }
        match kind {
            TouchKind::Lava | TouchKind::Fireball => {
                log::debug!("player touched {kind:?}, level lost");
                self.status = Status::Lost;
            }
            TouchKind::Coin => {
                if let Some(id) = actor_id {
                    self.remove_actor(id);
                }
                if self.none_left(ActorTag::Coin) {
                    log::debug!("last coin collected, level won");
                    self.status = Status::Won;
                }
            }
            TouchKind::Wall => {}
        }
    }
}
