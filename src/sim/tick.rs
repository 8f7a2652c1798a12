//! Per-frame simulation tick
//!
//! The host calls [`tick`] once per rendered frame with the real elapsed time.
//! There is no fixed timestep: every rate in the game is expressed per second.

use rand::Rng;

use super::state::{GameEvent, GameState, LifeBar};
use super::{autopilot, collision, difficulty, spawn, terrain};
use crate::consts::*;
use crate::settings::PauseMode;

/// Input state for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Directional keys (free movement within the road)
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Pause key held
    pub pause: bool,
    /// Lane change request from a pointer tap: -1 left, +1 right
    pub lane_shift: Option<i8>,
    /// Idle/demo mode - autopilot picks lane changes
    pub idle_mode: bool,
}

/// Advance the game by `dt` seconds of host time
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Host clock runs through pauses and revivals
    state.host_time += f64::from(dt);
    difficulty::expire_revival(state);

    difficulty::advance(state, dt);

    apply_input(state, input, dt);
    toggle_pause(state, input.pause);

    if !state.paused {
        advance_entities(state, dt);

        if state.rng.random::<f32>() < state.spawn_chance {
            spawn::attempt(state);
        }
    }

    collision::resolve(state);
    state.life_bar = LifeBar::for_lives(state.player.lives);

    if !state.over_reported && state.is_game_over() {
        state.over_reported = true;
        state.events.push(GameEvent::GameOver);
        log::info!("Game over, survived {}s", state.score_text());
    }
}

fn apply_input(state: &mut GameState, input: &TickInput, dt: f32) {
    let shift = if input.idle_mode {
        autopilot::steer(state)
    } else {
        input.lane_shift
    };
    if let Some(direction) = shift {
        state.start_moving_player(direction);
    }

    let step = PLAYER_SPEED * dt;
    let player = &mut state.player;
    if input.down {
        player.pos.y += step;
    }
    if input.up {
        player.pos.y -= step;
    }
    if input.left {
        player.pos.x -= step;
    }
    if input.right {
        player.pos.x += step;
    }

    let layout = &state.layout;
    let (width, _) = player.size(layout);
    player.pos.x = player.pos.x.max(layout.road.left);
    if player.pos.x + width > layout.road.right {
        player.pos.x = layout.road.right - width;
    }
    player.pos.y = player.pos.y.clamp(0.0, layout.max_player_y());
}

fn toggle_pause(state: &mut GameState, pressed: bool) {
    let toggle = match state.pause_mode {
        PauseMode::EdgeTriggered => pressed && !state.pause_held,
        PauseMode::Level => pressed,
    };
    state.pause_held = pressed;
    if toggle {
        state.paused = !state.paused;
        log::debug!("Paused: {}", state.paused);
    }
}

fn advance_entities(state: &mut GameState, dt: f32) {
    state.player.clip_mut().advance(dt);

    terrain::advance(state, dt);

    let multiplier = state.speed_multiplier;
    for enemy in &mut state.enemies {
        enemy.pos.y += enemy.kind.base_speed() * multiplier * dt;
    }
    let bottom = state.layout.height;
    state.enemies.retain(|enemy| enemy.pos.y < bottom);

    state.player.ease_lane_change(&state.layout, dt);
}
