//! Level-plan translation
//!
//! Turns an array of printable map rows into a [`Level`]. Two symbols map to
//! terrain (`x` wall, `!` lava); a character table maps the rest to actor
//! spawns. Anything unrecognized reads as empty ground, so plans can carry
//! decoration symbols without breaking.
//!
//! The only randomness in the whole simulation, the coins' initial bob
//! phases, is drawn here from a seeded stream: a (plan, seed) pair always
//! yields an identical level.

use std::collections::HashMap;
use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Actor, Grid, Level, Terrain};

/// What a map symbol spawns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorTemplate {
    Player,
    Coin,
    HorizontalFireball,
    VerticalFireball,
    FireRain,
}

impl ActorTemplate {
    fn spawn(self, id: u32, pos: Vec2, rng: &mut Pcg32) -> Actor {
        match self {
            ActorTemplate::Player => Actor::player(id, pos),
            ActorTemplate::Coin => Actor::coin(id, pos, rng.random_range(0.0..TAU)),
            ActorTemplate::HorizontalFireball => Actor::horizontal_fireball(id, pos),
            ActorTemplate::VerticalFireball => Actor::vertical_fireball(id, pos),
            ActorTemplate::FireRain => Actor::fire_rain(id, pos),
        }
    }
}

/// Symbol-to-spawn translation table
#[derive(Debug, Clone)]
pub struct LevelParser {
    table: HashMap<char, ActorTemplate>,
}

impl Default for LevelParser {
    fn default() -> Self {
        Self::new(Self::default_table())
    }
}

impl LevelParser {
    pub fn new(table: HashMap<char, ActorTemplate>) -> Self {
        Self { table }
    }

    /// The stock table: `@` player, `v` fire rain, `o` coin,
    /// `=` horizontal fireball, `|` vertical fireball
    pub fn default_table() -> HashMap<char, ActorTemplate> {
        HashMap::from([
            ('@', ActorTemplate::Player),
            ('v', ActorTemplate::FireRain),
            ('o', ActorTemplate::Coin),
            ('=', ActorTemplate::HorizontalFireball),
            ('|', ActorTemplate::VerticalFireball),
        ])
    }

    pub fn actor_from_symbol(&self, symbol: char) -> Option<ActorTemplate> {
        self.table.get(&symbol).copied()
    }

    /// Obstacle symbols are fixed regardless of the actor table
    pub fn obstacle_from_symbol(symbol: char) -> Option<Terrain> {
        match symbol {
            'x' => Some(Terrain::Wall),
            '!' => Some(Terrain::Lava),
            _ => None,
        }
    }

    /// Terrain rows for the plan (actor symbols read as empty cells)
    pub fn grid(&self, plan: &[impl AsRef<str>]) -> Grid {
        Grid::new(
            plan.iter()
                .map(|row| {
                    row.as_ref()
                        .chars()
                        .map(Self::obstacle_from_symbol)
                        .collect()
                })
                .collect(),
        )
    }

    /// Actor spawns for the plan, ids allocated in row-major scan order
    pub fn actors(&self, plan: &[impl AsRef<str>], rng: &mut Pcg32) -> Vec<Actor> {
        let mut actors = Vec::new();
        let mut next_id = 1;
        for (y, row) in plan.iter().enumerate() {
            for (x, symbol) in row.as_ref().chars().enumerate() {
                if let Some(template) = self.actor_from_symbol(symbol) {
                    let pos = Vec2::new(x as f32, y as f32);
                    actors.push(template.spawn(next_id, pos, rng));
                    next_id += 1;
                }
            }
        }
        actors
    }

    /// Build a level from a plan
    pub fn parse(&self, plan: &[impl AsRef<str>], seed: u64) -> Level {
        let mut rng = Pcg32::seed_from_u64(seed);
        let level = Level::new(self.grid(plan), self.actors(plan, &mut rng));
        log::debug!(
            "parsed level: {}x{} cells, {} actors",
            level.grid.width(),
            level.grid.height(),
            level.actors.len()
        );
        level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ActorKind, ActorTag, FireballMode};

    const PLAN: &[&str] = &[
        "  @  ",
        " o o ",
        "xxxxx",
        "  !  ",
    ];

    #[test]
    fn test_grid_symbols() {
        let parser = LevelParser::default();
        let grid = parser.grid(PLAN);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 4);
        // Actor symbols and spaces are empty ground
        assert_eq!(grid.terrain_at(Vec2::new(2.0, 0.0), Vec2::ONE), None);
        assert_eq!(
            grid.terrain_at(Vec2::new(0.0, 2.0), Vec2::ONE),
            Some(Terrain::Wall)
        );
        assert_eq!(
            grid.terrain_at(Vec2::new(2.0, 3.0), Vec2::ONE),
            Some(Terrain::Lava)
        );
    }

    #[test]
    fn test_actor_spawns() {
        let parser = LevelParser::default();
        let level = parser.parse(PLAN, 7);

        assert_eq!(level.actors.len(), 3);
        let player = level.player().expect("plan places a player");
        // Spawn cell (2, 0), lifted by the headroom offset
        assert_eq!(player.pos, Vec2::new(2.0, -0.5));

        let coins: Vec<_> = level
            .actors
            .iter()
            .filter(|a| a.kind.tag() == ActorTag::Coin)
            .collect();
        assert_eq!(coins.len(), 2);
        assert_eq!(coins[0].pos, Vec2::new(1.2, 1.1));
        assert_eq!(coins[1].pos, Vec2::new(3.2, 1.1));
    }

    #[test]
    fn test_ids_follow_scan_order() {
        let parser = LevelParser::default();
        let level = parser.parse(PLAN, 7);
        let ids: Vec<u32> = level.actors.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_default_table_fireballs() {
        let parser = LevelParser::default();
        let level = parser.parse(&["=v|"], 1);
        let modes: Vec<_> = level
            .actors
            .iter()
            .map(|a| match a.kind {
                ActorKind::Fireball { mode } => mode,
                _ => panic!("expected fireballs only"),
            })
            .collect();
        assert!(matches!(modes[0], FireballMode::Bounce));
        assert!(matches!(modes[1], FireballMode::Rain { .. }));
        assert!(matches!(modes[2], FireballMode::Bounce));
    }

    #[test]
    fn test_unknown_symbols_are_empty() {
        let parser = LevelParser::default();
        let level = parser.parse(&["?#* "], 1);
        assert!(level.actors.is_empty());
        assert_eq!(level.grid.terrain_at(Vec2::new(0.0, 0.0), Vec2::ONE), None);
    }

    #[test]
    fn test_same_seed_same_level() {
        let parser = LevelParser::default();
        let a = parser.parse(PLAN, 99);
        let b = parser.parse(PLAN, 99);
        assert_eq!(a, b);
    }

    #[test]
    fn test_coin_phase_in_range() {
        let parser = LevelParser::default();
        let level = parser.parse(&["oooooooo"], 5);
        for actor in &level.actors {
            match actor.kind {
                ActorKind::Coin { phase, .. } => {
                    assert!((0.0..TAU).contains(&phase));
                }
                _ => panic!("expected coins only"),
            }
        }
    }

    #[test]
    fn test_custom_table() {
        let table = HashMap::from([('P', ActorTemplate::Player)]);
        let parser = LevelParser::new(table);
        let level = parser.parse(&["P@"], 1);
        // '@' is not in the custom table, so only 'P' spawns
        assert_eq!(level.actors.len(), 1);
        assert!(level.player().is_some());
    }
}
