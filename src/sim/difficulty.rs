//! Difficulty ramp and the post-hit revival episode
//!
//! The speed multiplier grows as `1.01^elapsed` with no upper bound; in
//! practice f32 stays finite for any realistic session (it overflows after
//! roughly 8900 seconds of uninterrupted survival, where the game is long
//! unplayable anyway).
//!
//! Revival runs on host time, not survival time: pausing does not extend it.

use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Speed multiplier for a given survival time
pub fn speed_for(elapsed: f32) -> f32 {
    SPEED_GROWTH.powf(elapsed)
}

/// Whether survival time (and the ramp) advances this tick
pub fn clock_running(state: &GameState) -> bool {
    !state.paused && !state.player.revived && state.player.lives > 0
}

/// Accumulate survival time and recompute the multiplier
pub fn advance(state: &mut GameState, dt: f32) {
    if !clock_running(state) {
        return;
    }
    state.elapsed += dt;
    state.speed_multiplier = speed_for(state.elapsed);
}

/// Lose a life; start a revival episode or, on the last life, the explosion
pub fn take_damage(state: &mut GameState) {
    state.player.lives = state.player.lives.saturating_sub(1);
    let lives_left = state.player.lives;
    state.events.push(GameEvent::PlayerHit { lives_left });
    log::info!("Player hit, {} lives left", lives_left);

    if lives_left == 0 {
        state.player.clip_mut().reset();
        state.events.push(GameEvent::Exploded);
        log::info!("Player destroyed after {:.2}s", state.elapsed);
        return;
    }

    state.player.immortal = true;
    state.player.revived = true;
    state.speed_multiplier = (state.speed_multiplier / HIT_SLOWDOWN).max(1.0);
    state.revival_expires_at = Some(state.host_time + REVIVAL_SECONDS);
}

/// End the revival once its host-time deadline has passed
pub fn expire_revival(state: &mut GameState) {
    let Some(deadline) = state.revival_expires_at else {
        return;
    };
    if state.host_time < deadline {
        return;
    }
    state.revival_expires_at = None;
    state.player.immortal = false;
    state.player.revived = false;
    state.events.push(GameEvent::RevivalEnded);
    log::debug!("Revival ended");
}
