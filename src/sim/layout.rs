//! Road geometry derived from the viewport
//!
//! The viewport is split into three blocks: a left shoulder, the middle strip
//! holding the road, and a right shoulder. Everything the simulation needs
//! in pixels (lane anchors, sprite scale, player bounds) is computed once here.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn from_pos_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width,
            bottom: y + height,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Pixel layout of the road for one viewport size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    /// Left edges of the left shoulder, middle strip and right shoulder
    pub blocks: [f32; 3],
    /// Scale applied to every sprite
    pub size_multiplier: f32,
    /// Area the player may move within
    pub road: Rect,
}

impl Layout {
    pub fn new(width: f32, height: f32) -> Self {
        let middle = MIN_MIDDLE_STRIP.max(width * MIDDLE_STRIP_RATIO);
        let left_block = (width - middle) / 2.0;
        let blocks = [0.0, left_block, left_block + middle];

        Self {
            width,
            height,
            blocks,
            size_multiplier: (middle / SIZE_REFERENCE_WIDTH).min(MAX_SIZE_MULTIPLIER),
            road: Rect {
                left: blocks[1] + ROAD_EDGE_INSET,
                top: 0.0,
                right: blocks[2] - ROAD_EDGE_INSET,
                bottom: height,
            },
        }
    }

    /// Left x of an entity sitting in `lane`
    pub fn lane_x(&self, lane: usize) -> f32 {
        let lane_width = self.road.width() / LANE_COUNT as f32;
        self.blocks[0] + self.road.left + lane_width * lane as f32 * LANE_SPACING
    }

    /// Lowest top-edge y the player may reach
    pub fn max_player_y(&self) -> f32 {
        self.height - BASE_PLAYER_HEIGHT * self.size_multiplier - PLAYER_BOTTOM_MARGIN
    }

    /// Vertical window in which an approaching enemy makes its lane unsafe
    pub fn tolerance(&self) -> f32 {
        BASE_PLAYER_HEIGHT * self.size_multiplier * TOLERANCE_FACTOR
    }

    /// Scaled height of one terrain line
    pub fn terrain_line_height(&self) -> f32 {
        TERRAIN_LINE_HEIGHT * self.size_multiplier
    }

    /// Scale a sheet dimension into pixels
    pub fn scaled(&self, size: [u32; 2]) -> (f32, f32) {
        (
            size[0] as f32 * self.size_multiplier,
            size[1] as f32 * self.size_multiplier,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_viewport_uses_minimum_strip() {
        let layout = Layout::new(300.0, 600.0);
        assert_eq!(layout.blocks, [0.0, 35.0, 265.0]);
        assert!((layout.size_multiplier - 230.0 / 166.67).abs() < 1e-4);
        assert_eq!(layout.road.left, 55.0);
        assert_eq!(layout.road.right, 245.0);
    }

    #[test]
    fn test_wide_viewport_caps_scale() {
        let layout = Layout::new(1000.0, 800.0);
        assert_eq!(layout.blocks[1], 200.0);
        assert_eq!(layout.size_multiplier, MAX_SIZE_MULTIPLIER);
    }

    #[test]
    fn test_lane_anchors_increase() {
        let layout = Layout::new(480.0, 800.0);
        let xs: Vec<f32> = (0..LANE_COUNT).map(|l| layout.lane_x(l)).collect();
        assert_eq!(xs[0], layout.road.left);
        assert!(xs[0] < xs[1] && xs[1] < xs[2]);
        assert!(xs[2] < layout.road.right);
    }

    #[test]
    fn test_player_bounds() {
        let layout = Layout::new(480.0, 800.0);
        let expected = 800.0 - 65.0 * layout.size_multiplier - 33.0;
        assert!((layout.max_player_y() - expected).abs() < 1e-4);
        assert!((layout.tolerance() - 65.0 * layout.size_multiplier * 2.5).abs() < 1e-4);
    }
}
