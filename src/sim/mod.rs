//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (coin phases are drawn once, at parse time)
//! - Stable iteration order (actors in spawn order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod grid;
pub mod level;
pub mod tick;

pub use actor::{Actor, ActorKind, ActorTag, FireballMode};
pub use grid::{Grid, Terrain};
pub use level::{Level, Status, TouchKind};
pub use tick::tick;
