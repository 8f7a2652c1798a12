//! Game state and core simulation types
//!
//! The whole simulation is owned by [`GameState`]; every system takes it by
//! mutable reference. There are no ambient globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::animation::AnimationClip;
use super::layout::{Layout, Rect};
use super::terrain;
use crate::consts::*;
use crate::settings::{PauseMode, Settings};

/// Region of the sprite sheet an archetype is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRegion {
    /// Top-left of the first frame on the sheet
    pub origin: [u32; 2],
    /// Unscaled frame size
    pub size: [u32; 2],
}

/// The five player sprite variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSprite {
    Alive,
    Damaged,
    Immortal,
    ImmortalDamaged,
    Exploding,
}

impl PlayerSprite {
    pub const ALL: [PlayerSprite; 5] = [
        PlayerSprite::Alive,
        PlayerSprite::Damaged,
        PlayerSprite::Immortal,
        PlayerSprite::ImmortalDamaged,
        PlayerSprite::Exploding,
    ];

    /// Variant for a `(lives == 0, immortal, lives == 1)` combination
    pub fn select(out_of_lives: bool, immortal: bool, last_life: bool) -> Self {
        match (out_of_lives, immortal, last_life) {
            (true, _, _) => PlayerSprite::Exploding,
            (false, true, true) => PlayerSprite::ImmortalDamaged,
            (false, true, false) => PlayerSprite::Immortal,
            (false, false, true) => PlayerSprite::Damaged,
            (false, false, false) => PlayerSprite::Alive,
        }
    }

    pub fn region(self) -> SheetRegion {
        match self {
            PlayerSprite::Alive | PlayerSprite::Immortal => SheetRegion {
                origin: [352, 159],
                size: [35, 65],
            },
            PlayerSprite::Damaged | PlayerSprite::ImmortalDamaged => SheetRegion {
                origin: [396, 178],
                size: [35, 59],
            },
            PlayerSprite::Exploding => SheetRegion {
                origin: [383, 242],
                size: [45, 40],
            },
        }
    }

    fn clip(self) -> AnimationClip {
        match self {
            PlayerSprite::Alive | PlayerSprite::Damaged => AnimationClip::new(16.0, &[0]),
            // Blink by alternating with an empty frame
            PlayerSprite::Immortal | PlayerSprite::ImmortalDamaged => {
                AnimationClip::new(16.0, &[0, 6])
            }
            PlayerSprite::Exploding => AnimationClip::once(10.0, &[0, 1]),
        }
    }

    fn slot(self) -> usize {
        match self {
            PlayerSprite::Alive => 0,
            PlayerSprite::Damaged => 1,
            PlayerSprite::Immortal => 2,
            PlayerSprite::ImmortalDamaged => 3,
            PlayerSprite::Exploding => 4,
        }
    }
}

/// The player's vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    /// Current (or destination, while moving) lane
    pub lane: usize,
    /// Direction of the lane change in flight: -1, 0 or +1
    pub moving: i8,
    /// Collisions cost no life
    pub immortal: bool,
    /// Difficulty ramp is suspended
    pub revived: bool,
    pub lives: u8,
    /// One clip per sprite variant, indexed by `PlayerSprite::slot`
    clips: [AnimationClip; 5],
}

impl Player {
    pub fn new(layout: &Layout) -> Self {
        Self {
            pos: Vec2::new(layout.lane_x(CENTER_LANE), layout.max_player_y()),
            lane: CENTER_LANE,
            moving: 0,
            immortal: false,
            revived: false,
            lives: MAX_LIVES,
            clips: PlayerSprite::ALL.map(PlayerSprite::clip),
        }
    }

    pub fn sprite(&self) -> PlayerSprite {
        PlayerSprite::select(self.lives == 0, self.immortal, self.lives == 1)
    }

    pub fn clip(&self) -> &AnimationClip {
        &self.clips[self.sprite().slot()]
    }

    pub fn clip_mut(&mut self) -> &mut AnimationClip {
        let slot = self.sprite().slot();
        &mut self.clips[slot]
    }

    /// Scaled (width, height) of the active sprite
    pub fn size(&self, layout: &Layout) -> (f32, f32) {
        layout.scaled(self.sprite().region().size)
    }

    pub fn bounds(&self, layout: &Layout) -> Rect {
        let (w, h) = self.size(layout);
        Rect::from_pos_size(self.pos.x, self.pos.y, w, h)
    }

    /// y of the player's bottom edge
    pub fn trailing_edge(&self, layout: &Layout) -> f32 {
        self.pos.y + self.size(layout).1
    }

    pub fn is_changing_lane(&self) -> bool {
        self.moving != 0
    }

    /// Begin a lane change. Ignored while one is in flight or at the road edge.
    pub fn start_lane_change(&mut self, direction: i8) -> bool {
        if self.moving != 0 {
            return false;
        }
        match direction {
            -1 if self.lane > 0 => self.lane -= 1,
            1 if self.lane + 1 < LANE_COUNT => self.lane += 1,
            _ => return false,
        }
        self.moving = direction;
        true
    }

    /// Ease toward the destination lane anchor, snapping on arrival
    pub fn ease_lane_change(&mut self, layout: &Layout, dt: f32) {
        if self.moving == 0 {
            return;
        }
        let target = layout.lane_x(self.lane);
        self.pos.x += self.moving as f32 * PLAYER_SPEED * dt;

        let arrived = match self.moving {
            1 => self.pos.x >= target,
            _ => self.pos.x <= target,
        };
        if arrived {
            self.pos.x = target;
            self.moving = 0;
        }
    }

    fn reset(&mut self, layout: &Layout) {
        *self = Self::new(layout);
    }
}

/// Enemy archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Sedan,
    Compact,
    Truck,
    Van,
    /// Stationary road block; closes in at obstacle speed
    Roadblock,
}

impl EnemyKind {
    /// Map a draw in `0..10` onto the weighted archetype table
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            0..=2 => EnemyKind::Sedan,
            3..=5 => EnemyKind::Compact,
            6..=7 => EnemyKind::Truck,
            8 => EnemyKind::Van,
            _ => EnemyKind::Roadblock,
        }
    }

    pub fn is_obstacle(self) -> bool {
        self == EnemyKind::Roadblock
    }

    pub fn region(self) -> SheetRegion {
        let (origin, size) = match self {
            EnemyKind::Sedan => ([440, 176], [36, 56]),
            EnemyKind::Compact => ([352, 227], [27, 45]),
            EnemyKind::Truck => ([439, 0], [37, 81]),
            EnemyKind::Van => ([439, 88], [37, 81]),
            EnemyKind::Roadblock => ([356, 276], [25, 18]),
        };
        SheetRegion { origin, size }
    }

    /// Closing speed before the speed multiplier, pixels/s
    pub fn base_speed(self) -> f32 {
        if self.is_obstacle() {
            ENEMY_SPEED * OBSTACLE_SPEED_FACTOR
        } else {
            ENEMY_SPEED
        }
    }
}

/// Traffic or obstacle scrolling toward the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub lane: usize,
    pub clip: AnimationClip,
}

impl Enemy {
    pub fn new(kind: EnemyKind, lane: usize, y: f32, layout: &Layout) -> Self {
        Self {
            kind,
            pos: Vec2::new(layout.lane_x(lane), y),
            lane,
            clip: AnimationClip::new(16.0, &[0, 1]),
        }
    }

    pub fn is_obstacle(&self) -> bool {
        self.kind.is_obstacle()
    }

    pub fn bounds(&self, layout: &Layout) -> Rect {
        let (w, h) = layout.scaled(self.kind.region().size);
        Rect::from_pos_size(self.pos.x, self.pos.y, w, h)
    }
}

/// Background tile archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainKind {
    /// Left shoulder variants
    Grass,
    Trees,
    /// Center strip
    Road,
    /// Right shoulder variants
    Field,
    Houses,
}

impl TerrainKind {
    pub fn region(self) -> SheetRegion {
        let line = TERRAIN_LINE_HEIGHT as u32;
        let shoulder = SHOULDER_TILE_WIDTH as u32;
        match self {
            TerrainKind::Grass => SheetRegion {
                origin: [3, 134],
                size: [shoulder, line],
            },
            TerrainKind::Trees => SheetRegion {
                origin: [92, 134],
                size: [shoulder, line],
            },
            TerrainKind::Road => SheetRegion {
                origin: [262, 2],
                size: [ROAD_TILE_WIDTH as u32, line],
            },
            TerrainKind::Field => SheetRegion {
                origin: [181, 162],
                size: [shoulder, line],
            },
            TerrainKind::Houses => SheetRegion {
                origin: [269, 162],
                size: [shoulder, line],
            },
        }
    }
}

/// One background tile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainTile {
    pub kind: TerrainKind,
    pub pos: Vec2,
    pub clip: AnimationClip,
}

impl TerrainTile {
    pub fn new(kind: TerrainKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            pos: Vec2::new(x, y),
            clip: AnimationClip::still(),
        }
    }
}

/// Life bar image for the current number of lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeBar {
    Empty,
    One,
    Two,
    Three,
}

impl LifeBar {
    pub fn for_lives(lives: u8) -> Self {
        match lives {
            0 => LifeBar::Empty,
            1 => LifeBar::One,
            2 => LifeBar::Two,
            _ => LifeBar::Three,
        }
    }
}

/// Notable transitions, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemySpawned { lane: usize, kind: EnemyKind },
    PlayerHit { lives_left: u8 },
    RevivalEnded,
    /// Last life lost; exploding animation started
    Exploded,
    /// Exploding animation finished
    GameOver,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub layout: Layout,
    pub player: Player,
    /// Active enemies (order irrelevant)
    pub enemies: Vec<Enemy>,
    /// Background tiles
    pub terrain: Vec<TerrainTile>,
    /// Survival time, seconds
    pub elapsed: f32,
    /// Scroll speed scale, grows with `elapsed`
    pub speed_multiplier: f32,
    pub paused: bool,
    pub life_bar: LifeBar,
    /// Host time, advanced by every tick's dt regardless of pause
    pub host_time: f64,
    /// Host time at which the current revival ends
    pub revival_expires_at: Option<f64>,
    /// Pause key was held on the previous tick
    pub pause_held: bool,
    pub pause_mode: PauseMode,
    pub spawn_chance: f32,
    pub events: Vec<GameEvent>,
    /// Game-over has been reported
    pub over_reported: bool,
    pub seed: u64,
    pub rng: Pcg32,
}

impl GameState {
    /// New game with default settings and the given seed
    pub fn new(seed: u64) -> Self {
        let settings = Settings {
            seed,
            ..Settings::default()
        };
        Self::from_settings(&settings)
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let layout = Layout::new(settings.viewport_width, settings.viewport_height);
        let mut state = Self {
            player: Player::new(&layout),
            layout,
            enemies: Vec::new(),
            terrain: Vec::new(),
            elapsed: 0.0,
            speed_multiplier: 1.0,
            paused: false,
            life_bar: LifeBar::Three,
            host_time: 0.0,
            revival_expires_at: None,
            pause_held: false,
            pause_mode: settings.pause_mode,
            spawn_chance: settings.spawn_chance,
            events: Vec::new(),
            over_reported: false,
            seed: settings.seed,
            rng: Pcg32::seed_from_u64(settings.seed),
        };

        terrain::fill(&mut state);
        state
    }

    /// Restore the player and clear the road for a new run.
    /// Terrain and the pause flag are left as they are.
    pub fn reset(&mut self) {
        self.player.reset(&self.layout);
        self.speed_multiplier = 1.0;
        self.elapsed = 0.0;
        self.revival_expires_at = None;
        self.life_bar = LifeBar::for_lives(self.player.lives);
        self.over_reported = false;
        self.enemies.clear();
        log::info!("Game reset");
    }

    /// Start a lane change in `direction` (-1 left, +1 right)
    pub fn start_moving_player(&mut self, direction: i8) -> bool {
        self.player.start_lane_change(direction)
    }

    /// Lane-change direction for a pointer tap at `x`
    pub fn tap_direction(&self, x: f32) -> Option<i8> {
        let (width, _) = self.player.size(&self.layout);
        if x < self.player.pos.x {
            Some(-1)
        } else if x > self.player.pos.x + width {
            Some(1)
        } else {
            None
        }
    }

    /// Lives are gone and the explosion has played out
    pub fn is_game_over(&self) -> bool {
        self.player.lives == 0 && self.player.clip().is_done()
    }

    /// Survival time as shown to the player
    pub fn score_text(&self) -> String {
        format!("{:.2}", (self.elapsed * 100.0).floor() / 100.0)
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
