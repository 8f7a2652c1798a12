//! Player/enemy collision detection
//!
//! Plain AABB overlap. Hit enemies are removed after the scan so removal never
//! disturbs iteration.

use super::difficulty;
use super::layout::Rect;
use super::state::GameState;

/// Overlap test with the edge convention used for sprites: touching on the
/// leading edge counts, touching on the trailing edge does not
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.right >= b.left && a.left < b.right && a.bottom >= b.top && a.top < b.bottom
}

/// Remove every enemy overlapping the player and apply damage.
/// Returns the number of enemies consumed.
pub fn resolve(state: &mut GameState) -> usize {
    if state.player.lives == 0 {
        return 0;
    }

    // The player's box can change size after a hit, so it is rebuilt per enemy
    let mut hits = vec![false; state.enemies.len()];
    for (i, hit) in hits.iter_mut().enumerate() {
        let player_box = state.player.bounds(&state.layout);
        if !overlaps(&player_box, &state.enemies[i].bounds(&state.layout)) {
            continue;
        }
        *hit = true;
        // The first hit grants invulnerability
        if state.player.lives > 0 && !state.player.immortal {
            difficulty::take_damage(state);
        }
    }

    let consumed = hits.iter().filter(|&&hit| hit).count();
    let mut hit_iter = hits.iter();
    state.enemies.retain(|_| !hit_iter.next().copied().unwrap_or(false));
    consumed
}
