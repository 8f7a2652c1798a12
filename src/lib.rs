//! Lane Rush - a three-lane dodging arcade game
//!
//! Core modules:
//! - `sim`: Simulation core (entities, spawning, collisions, difficulty, tick)
//! - `platform`: Host abstractions (clock, key state)
//! - `session`: Frame driver tying a clock to the simulation
//! - `settings`: Viewport, seed and tuning knobs loaded from JSON

pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::{PauseMode, Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Number of discrete lanes on the road
    pub const LANE_COUNT: usize = 3;
    /// Index of the center lane
    pub const CENTER_LANE: usize = 1;

    /// Player movement speed, pixels/s (free movement and lane changes)
    pub const PLAYER_SPEED: f32 = 300.0;
    /// Base scroll speed of normal traffic, pixels/s
    pub const ENEMY_SPEED: f32 = 100.0;
    /// Obstacles (and terrain) close in this much faster than traffic
    pub const OBSTACLE_SPEED_FACTOR: f32 = 3.0;

    /// Unscaled player sprite height, used for the bottom margin and tolerance
    pub const BASE_PLAYER_HEIGHT: f32 = 65.0;
    /// Gap kept between the player and the bottom edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 33.0;
    /// Safety window (in player heights) used when choosing a spawn lane
    pub const TOLERANCE_FACTOR: f32 = 2.5;

    /// Unscaled height of one terrain line
    pub const TERRAIN_LINE_HEIGHT: f32 = 154.0;
    /// Unscaled width of a shoulder tile
    pub const SHOULDER_TILE_WIDTH: f32 = 77.0;
    /// Unscaled width of the road tile
    pub const ROAD_TILE_WIDTH: f32 = 169.0;

    /// Road geometry
    pub const MIN_MIDDLE_STRIP: f32 = 230.0;
    pub const MIDDLE_STRIP_RATIO: f32 = 0.6;
    pub const SIZE_REFERENCE_WIDTH: f32 = 166.67;
    pub const MAX_SIZE_MULTIPLIER: f32 = 1.8;
    pub const ROAD_EDGE_INSET: f32 = 20.0;
    pub const LANE_SPACING: f32 = 1.1;

    /// Per-second growth base of the speed multiplier
    pub const SPEED_GROWTH: f32 = 1.01;
    /// Speed multiplier is divided by this on a hit (floored at 1)
    pub const HIT_SLOWDOWN: f32 = 3.0;
    /// Length of the post-hit invulnerability window, host seconds
    pub const REVIVAL_SECONDS: f64 = 3.0;

    /// Default probability of a spawn attempt per tick
    pub const SPAWN_CHANCE: f32 = 0.02;
    /// Lives at game start
    pub const MAX_LIVES: u8 = 3;
}
