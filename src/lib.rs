//! Lava Leap - a tile-based platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actors, obstacle grid, level state machine)
//! - `parse`: Level-plan translation from printable map symbols
//!
//! The crate owns no rendering, input, or persistence. A host loop parses a
//! plan into a [`sim::Level`], then drives [`sim::tick`] at a fixed timestep
//! until the level reports finished, polling [`sim::Level::status`] for the
//! outcome.
//!
//! Coordinates are in grid cells with y growing downward: row 0 is the top
//! of the map and "up" is negative y.

pub mod parse;
pub mod sim;

pub use parse::LevelParser;
pub use sim::{Level, Status, tick};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Seconds a terminal level keeps animating before it reports finished
    pub const FINISH_DELAY: f32 = 1.0;

    /// Player hitbox (cells)
    pub const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.5);
    /// Headroom reserved above the player's placement cell at spawn
    pub const PLAYER_SPAWN_LIFT: f32 = 0.5;

    /// Coin hitbox offset from its placement cell
    pub const COIN_OFFSET: Vec2 = Vec2::new(0.2, 0.1);
    pub const COIN_SIZE: Vec2 = Vec2::new(0.6, 0.6);
    /// Coin bob phase advance (radians per second)
    pub const COIN_WOBBLE_SPEED: f32 = 8.0;
    /// Coin bob amplitude (cells)
    pub const COIN_WOBBLE_DIST: f32 = 0.07;

    /// Fireballs are one cell square
    pub const FIREBALL_SIZE: Vec2 = Vec2::new(1.0, 1.0);
    pub const HORIZONTAL_FIREBALL_VEL: Vec2 = Vec2::new(2.0, 0.0);
    pub const VERTICAL_FIREBALL_VEL: Vec2 = Vec2::new(0.0, 2.0);
    pub const FIRE_RAIN_VEL: Vec2 = Vec2::new(0.0, 3.0);
}
