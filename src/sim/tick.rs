//! Fixed timestep simulation tick
//!
//! Advances every non-player actor by its behavior rule, then resolves
//! player contacts through the level's touch handler. Actors keep animating
//! after the level goes terminal so the host can render a final frame; the
//! finish countdown runs during that window.

use glam::Vec2;

use super::actor::{Actor, ActorKind, ActorTag, FireballMode};
use super::grid::Grid;
use super::level::{Level, TouchKind};
use crate::consts::{COIN_WOBBLE_DIST, COIN_WOBBLE_SPEED};

/// Advance the level by one timestep of `dt` seconds
pub fn tick(level: &mut Level, dt: f32) {
    for actor in &mut level.actors {
        act(actor, dt, &level.grid);
    }
    resolve_player_contacts(level);
    if level.status.is_terminal() {
        level.finish_delay -= dt;
    }
}

/// Apply one actor's behavior rule for the elapsed slice
fn act(actor: &mut Actor, dt: f32, grid: &Grid) {
    match &mut actor.kind {
        ActorKind::Player => {}
        ActorKind::Coin { base_pos, phase } => {
            *phase += COIN_WOBBLE_SPEED * dt;
            // Pure vertical bob around the anchor; x never changes
            actor.pos = *base_pos + Vec2::new(0.0, phase.sin() * COIN_WOBBLE_DIST);
        }
        ActorKind::Fireball { mode } => {
            let next = actor.pos + actor.vel * dt;
            if grid.terrain_at(next, actor.size).is_some() {
                match mode {
                    FireballMode::Bounce => actor.vel = -actor.vel,
                    FireballMode::Rain { start_pos } => actor.pos = *start_pos,
                }
            } else {
                actor.pos = next;
            }
        }
    }
}

/// Test the player against terrain and against every other actor, reporting
/// each hit through the level's single transition authority
fn resolve_player_contacts(level: &mut Level) {
    let Some(player) = level.player().copied() else {
        return;
    };

    if let Some(terrain) = level.terrain_at(player.pos, player.size) {
        level.on_player_touch(terrain.into(), None);
    }

    let contact = level.actor_at(&player).map(|other| (other.id, other.kind.tag()));
    if let Some((id, tag)) = contact {
        let touch = match tag {
            ActorTag::Coin => TouchKind::Coin,
            ActorTag::Fireball => TouchKind::Fireball,
            ActorTag::Player => return,
        };
        level.on_player_touch(touch, Some(id));
    }
}
