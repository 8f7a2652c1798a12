//! Read-only view of the simulation for the presentation layer

use glam::Vec2;
use serde::Serialize;

use super::state::{EnemyKind, GameState, LifeBar, PlayerSprite, TerrainKind};

#[derive(Debug, Clone, Serialize)]
pub struct TileView {
    pub kind: TerrainKind,
    pub pos: Vec2,
    pub frame: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub lane: usize,
    pub sprite: PlayerSprite,
    /// `None` once the explosion has finished
    pub frame: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub lane: usize,
    pub frame: Option<u32>,
}

/// Everything a renderer/HUD needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub terrain: Vec<TileView>,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub lives: u8,
    pub life_bar: LifeBar,
    pub elapsed: f32,
    pub score: String,
    pub paused: bool,
    pub game_over: bool,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            terrain: state
                .terrain
                .iter()
                .map(|tile| TileView {
                    kind: tile.kind,
                    pos: tile.pos,
                    frame: tile.clip.current_frame(),
                })
                .collect(),
            player: PlayerView {
                pos: state.player.pos,
                lane: state.player.lane,
                sprite: state.player.sprite(),
                frame: state.player.clip().current_frame(),
            },
            enemies: state
                .enemies
                .iter()
                .map(|enemy| EnemyView {
                    kind: enemy.kind,
                    pos: enemy.pos,
                    lane: enemy.lane,
                    frame: enemy.clip.current_frame(),
                })
                .collect(),
            lives: state.player.lives,
            life_bar: state.life_bar,
            elapsed: state.elapsed,
            score: state.score_text(),
            paused: state.paused,
            game_over: state.is_game_over(),
        }
    }
}
