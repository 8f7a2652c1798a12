//! Simulation module
//!
//! All gameplay logic lives here. This module is pure and host-agnostic:
//! - Variable timestep supplied by the host, no internal clock
//! - Seeded RNG owned by the game state
//! - No rendering, input capture or platform dependencies

pub mod animation;
pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod layout;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod terrain;
pub mod tick;

pub use animation::AnimationClip;
pub use collision::overlaps;
pub use layout::{Layout, Rect};
pub use snapshot::Snapshot;
pub use state::{
    Enemy, EnemyKind, GameEvent, GameState, LifeBar, Player, PlayerSprite, SheetRegion,
    TerrainKind, TerrainTile,
};
pub use tick::{TickInput, tick};
