//! Enemy spawning
//!
//! A new enemy is only placed in a lane if the player keeps an escape route:
//! every active enemy is projected forward to the moment the candidate would
//! reach the player, and lanes with an enemy near the player at that moment
//! count as blocked. The candidate may not close the last open lane next to
//! a blocked one.

use rand::Rng;
use rand::seq::SliceRandom;

use super::state::{Enemy, EnemyKind, GameEvent, GameState};
use crate::consts::*;

/// Lanes with an enemy expected near the player after `closing_time` seconds
pub type BlockedLanes = [bool; LANE_COUNT];

/// Weighted draw over the enemy archetypes (obstacles 1 in 10)
pub fn pick_kind<R: Rng>(rng: &mut R) -> EnemyKind {
    EnemyKind::from_roll(rng.random_range(0..10))
}

/// Spawn y for a kind: just above the visible top edge
pub fn spawn_y(state: &GameState, kind: EnemyKind) -> f32 {
    -state.layout.scaled(kind.region().size).1
}

/// Seconds until a `kind` spawned at `spawn_y` reaches the player's trailing
/// edge, at base speed
pub fn closing_time(state: &GameState, kind: EnemyKind, spawn_y: f32) -> f32 {
    let distance = state.player.trailing_edge(&state.layout) - spawn_y;
    distance / kind.base_speed()
}

/// Mark lanes whose enemies will be within `tolerance` of the player's
/// trailing edge after `closing_time` seconds
pub fn blocked_lanes(state: &GameState, closing_time: f32, tolerance: f32) -> BlockedLanes {
    let trailing_edge = state.player.trailing_edge(&state.layout);
    let mut blocked = [false; LANE_COUNT];
    for enemy in &state.enemies {
        let projected = enemy.pos.y + closing_time * enemy.kind.base_speed();
        if (trailing_edge - projected).abs() < tolerance {
            blocked[enemy.lane] = true;
        }
    }
    blocked
}

/// Whether placing a hazard in `lane` still leaves a dodge path
pub fn path_exists(blocked: &BlockedLanes, lane: usize) -> bool {
    if blocked[lane] {
        return false;
    }
    if lane == CENTER_LANE {
        !blocked[0] || !blocked[LANE_COUNT - 1]
    } else {
        !blocked[CENTER_LANE]
    }
}

/// Obstacles never share a lane with any other enemy
fn obstacle_conflict(state: &GameState, lane: usize, kind: EnemyKind) -> bool {
    kind.is_obstacle() && state.enemies.iter().any(|e| e.lane == lane)
}

/// Try to place a `kind` enemy, testing lanes in `order`.
/// Returns the lane used, or `None` if the spawn was skipped.
pub fn try_place(state: &mut GameState, kind: EnemyKind, order: &[usize]) -> Option<usize> {
    let y = spawn_y(state, kind);
    let closing = closing_time(state, kind, y);
    let blocked = blocked_lanes(state, closing, state.layout.tolerance());

    for &lane in order {
        if !path_exists(&blocked, lane) {
            continue;
        }
        if obstacle_conflict(state, lane, kind) {
            log::debug!("Obstacle skipped: lane {} occupied", lane);
            return None;
        }

        state.enemies.push(Enemy::new(kind, lane, y, &state.layout));
        state.events.push(GameEvent::EnemySpawned { lane, kind });
        log::debug!("Spawned {:?} in lane {} (closing in {:.2}s)", kind, lane, closing);
        return Some(lane);
    }

    log::debug!("No safe lane for {:?}, blocked={:?}", kind, blocked);
    None
}

/// One spawn attempt: random archetype, random lane order
pub fn attempt(state: &mut GameState) -> Option<usize> {
    let kind = pick_kind(&mut state.rng);
    let mut order: [usize; LANE_COUNT] = [0, 1, 2];
    order.shuffle(&mut state.rng);
    try_place(state, kind, &order)
}
