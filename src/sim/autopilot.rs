//! Idle/demo mode driver
//!
//! Picks lane changes for the player the way a cautious human would: leave a
//! lane when something is bearing down on it, otherwise drift back to the
//! center where both escapes are open.

use super::state::GameState;
use crate::consts::*;

/// How far ahead of the player (in tolerance windows) threats are considered
const LOOKAHEAD_WINDOWS: f32 = 3.0;

/// Distance from the player's leading edge to the nearest enemy in `lane`
/// that is still ahead of the player. `None` when the lane is clear.
fn nearest_threat(state: &GameState, lane: usize) -> Option<f32> {
    let player = state.player.bounds(&state.layout);
    state
        .enemies
        .iter()
        .filter(|e| e.lane == lane)
        .map(|e| e.bounds(&state.layout))
        // Anything not yet fully past the player; alongside counts as gap 0
        .filter(|b| b.top < player.bottom)
        .map(|b| (player.top - b.bottom).max(0.0))
        .fold(None, |acc: Option<f32>, gap| Some(acc.map_or(gap, |a| a.min(gap))))
}

/// Lane shift the autopilot wants this tick, if any
pub fn steer(state: &GameState) -> Option<i8> {
    let player = &state.player;
    if player.is_changing_lane() || player.lives == 0 {
        return None;
    }

    let lane = player.lane;
    let horizon = state.layout.tolerance() * LOOKAHEAD_WINDOWS;
    let danger = |gap: Option<f32>| gap.is_some_and(|g| g < horizon);
    let current = nearest_threat(state, lane);

    if danger(current) {
        let candidates = [-1i8, 1]
            .into_iter()
            .filter_map(|dir| {
                let next = lane as i32 + dir as i32;
                (0..LANE_COUNT as i32)
                    .contains(&next)
                    .then(|| (dir, nearest_threat(state, next as usize)))
            })
            .filter(|&(_, gap)| gap.is_none_or(|g| g > current.unwrap_or(0.0)));

        return candidates
            .max_by(|a, b| {
                let ga = a.1.unwrap_or(f32::INFINITY);
                let gb = b.1.unwrap_or(f32::INFINITY);
                ga.partial_cmp(&gb).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(dir, _)| dir);
    }

    if lane != CENTER_LANE && !danger(nearest_threat(state, CENTER_LANE)) {
        return Some(if lane < CENTER_LANE { 1 } else { -1 });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Enemy, EnemyKind};

    fn enemy_ahead(state: &GameState, lane: usize, gap: f32) -> Enemy {
        let mut enemy = Enemy::new(EnemyKind::Sedan, lane, 0.0, &state.layout);
        let height = enemy.bounds(&state.layout).height();
        enemy.pos.y = state.player.pos.y - gap - height;
        enemy
    }

    #[test]
    fn test_stays_put_on_clear_road() {
        let state = GameState::new(1);
        assert_eq!(steer(&state), None);
    }

    #[test]
    fn test_dodges_threat_in_lane() {
        let mut state = GameState::new(1);
        let threat = enemy_ahead(&state, 1, 50.0);
        let blocker = enemy_ahead(&state, 0, 120.0);
        state.enemies.push(threat);
        state.enemies.push(blocker);
        // Lane 2 is clear, lane 0 has something further up
        assert_eq!(steer(&state), Some(1));
    }

    #[test]
    fn test_returns_to_center() {
        let mut state = GameState::new(1);
        state.player.lane = 2;
        assert_eq!(steer(&state), Some(-1));

        let center_threat = enemy_ahead(&state, 1, 20.0);
        state.enemies.push(center_threat);
        assert_eq!(steer(&state), None);
    }

    #[test]
    fn test_ignores_enemies_behind() {
        let mut state = GameState::new(1);
        let mut passed = Enemy::new(EnemyKind::Sedan, 1, 0.0, &state.layout);
        passed.pos.y = state.player.pos.y + 500.0;
        state.enemies.push(passed);
        assert_eq!(steer(&state), None);
    }

    #[test]
    fn test_no_steering_mid_change() {
        let mut state = GameState::new(1);
        let threat = enemy_ahead(&state, 0, 10.0);
        state.enemies.push(threat);
        state.start_moving_player(-1);
        assert_eq!(steer(&state), None);
    }
}
