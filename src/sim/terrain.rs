//! Scrolling background
//!
//! Terrain is laid out in horizontal lines of three tiles: a left shoulder, the
//! road and a right shoulder. Lines scroll down at obstacle speed; lines that
//! leave the bottom are dropped and a fresh one is stacked on top.

use rand::Rng;

use super::state::{GameState, TerrainKind, TerrainTile};
use crate::consts::*;

const LEFT_SHOULDER: [TerrainKind; 2] = [TerrainKind::Grass, TerrainKind::Trees];
const RIGHT_SHOULDER: [TerrainKind; 2] = [TerrainKind::Field, TerrainKind::Houses];

/// Cover the viewport with terrain lines from the top down
pub fn fill(state: &mut GameState) {
    let line_height = state.layout.terrain_line_height();
    let mut y = 0.0;
    while y < state.layout.height {
        push_line(state, y);
        y += line_height;
    }
}

/// Append one line of tiles with its top edge at `y`
pub fn push_line(state: &mut GameState, y: f32) {
    let layout = &state.layout;
    let shoulder_width = SHOULDER_TILE_WIDTH * layout.size_multiplier;
    let left_x = layout.blocks[0].min(layout.blocks[1] - shoulder_width);
    let road_x = layout.blocks[1];
    let right_x = layout.blocks[2];

    let left = LEFT_SHOULDER[state.rng.random_range(0..LEFT_SHOULDER.len())];
    let right = RIGHT_SHOULDER[state.rng.random_range(0..RIGHT_SHOULDER.len())];

    state.terrain.push(TerrainTile::new(left, left_x, y));
    state.terrain.push(TerrainTile::new(TerrainKind::Road, road_x, y));
    state.terrain.push(TerrainTile::new(right, right_x, y));
}

/// Scroll every tile, recycle the ones below the viewport and top up
pub fn advance(state: &mut GameState, dt: f32) {
    let delta = ENEMY_SPEED * OBSTACLE_SPEED_FACTOR * state.speed_multiplier * dt;
    for tile in &mut state.terrain {
        tile.pos.y += delta;
    }

    let bottom = state.layout.height;
    state.terrain.retain(|tile| tile.pos.y < bottom);

    let mut topmost = state
        .terrain
        .iter()
        .map(|tile| tile.pos.y)
        .fold(f32::INFINITY, f32::min);
    if !topmost.is_finite() {
        topmost = state.layout.height;
    }
    // Large steps can uncover more than one line
    while topmost >= 0.0 {
        topmost -= state.layout.terrain_line_height();
        push_line(state, topmost);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_covers_viewport() {
        let state = GameState::new(9);
        let line = state.layout.terrain_line_height();
        let lines = (state.layout.height / line).ceil() as usize;
        assert_eq!(state.terrain.len(), lines * 3);
        assert!(state.terrain.iter().all(|t| t.pos.y < state.layout.height));
        assert_eq!(
            state
                .terrain
                .iter()
                .filter(|t| t.kind == TerrainKind::Road)
                .count(),
            lines
        );
    }

    #[test]
    fn test_shoulders_come_from_their_zone() {
        let mut state = GameState::new(4);
        for i in 0..20 {
            push_line(&mut state, -(i as f32));
        }
        for tile in &state.terrain {
            if tile.pos.x == state.layout.blocks[1] {
                assert_eq!(tile.kind, TerrainKind::Road);
            } else if tile.pos.x == state.layout.blocks[2] {
                assert!(RIGHT_SHOULDER.contains(&tile.kind));
            } else {
                assert!(LEFT_SHOULDER.contains(&tile.kind));
            }
        }
    }

    #[test]
    fn test_scroll_recycles_and_stays_seamless() {
        let mut state = GameState::new(5);
        let line = state.layout.terrain_line_height();

        for _ in 0..600 {
            advance(&mut state, 1.0 / 60.0);

            let topmost = state
                .terrain
                .iter()
                .map(|t| t.pos.y)
                .fold(f32::INFINITY, f32::min);
            assert!(topmost < 0.0, "gap above topmost line: {topmost}");
            assert!(topmost > -line - 1e-3);
            assert!(state.terrain.iter().all(|t| t.pos.y < state.layout.height));
        }

        // Tile count stays bounded
        let max_lines = (state.layout.height / line).ceil() as usize + 2;
        assert!(state.terrain.len() <= max_lines * 3);
    }

    #[test]
    fn test_large_step_leaves_no_gap() {
        let mut state = GameState::new(6);
        advance(&mut state, 2.0);
        let line = state.layout.terrain_line_height();
        let mut ys: Vec<f32> = state.terrain.iter().map(|t| t.pos.y).collect();
        ys.sort_by(|a, b| a.partial_cmp(b).unwrap());
        ys.dedup();
        assert!(ys[0] < 0.0);
        for pair in ys.windows(2) {
            assert!(pair[1] - pair[0] <= line + 1e-2);
        }
        assert!(*ys.last().unwrap() + line >= state.layout.height);
    }

    #[test]
    fn test_scroll_speed_scales_with_multiplier() {
        let mut state = GameState::new(5);
        state.speed_multiplier = 2.0;
        let before = state.terrain[0].pos.y;
        advance(&mut state, 0.1);
        let after = state.terrain[0].pos.y;
        assert!((after - before - 60.0).abs() < 1e-3);
    }
}
