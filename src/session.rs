//! Frame driver
//!
//! Owns the game state together with the host-facing pieces (clock, held keys,
//! pending taps) and turns one host frame into one simulation tick.

use crate::platform::{Clock, KeyState};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Snapshot, TickInput, tick};

/// A running game bound to a clock
pub struct Session<C: Clock> {
    pub state: GameState,
    pub keys: KeyState,
    /// Autopilot drives lane changes
    pub idle_mode: bool,
    clock: C,
    last_time: f64,
    pending_shift: Option<i8>,
    events: Vec<GameEvent>,
}

impl<C: Clock> Session<C> {
    pub fn new(settings: &Settings, clock: C) -> Self {
        let last_time = clock.now();
        log::info!(
            "Session started: {}x{} viewport, seed {}, pause mode {}",
            settings.viewport_width,
            settings.viewport_height,
            settings.seed,
            settings.pause_mode.as_str()
        );
        Self {
            state: GameState::from_settings(settings),
            keys: KeyState::new(),
            idle_mode: false,
            clock,
            last_time,
            pending_shift: None,
            events: Vec::new(),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Pointer press at `x` (surface coordinates)
    pub fn tap(&mut self, x: f32) {
        if let Some(direction) = self.state.tap_direction(x) {
            self.pending_shift = Some(direction);
        }
    }

    /// Request a lane change on the next frame
    pub fn shift_lane(&mut self, direction: i8) {
        self.pending_shift = Some(direction);
    }

    /// Run one frame: read the clock, tick, report
    pub fn frame(&mut self) -> Snapshot {
        let now = self.clock.now();
        let dt = (now - self.last_time).max(0.0) as f32;
        self.last_time = now;

        let input = TickInput {
            lane_shift: self.pending_shift.take(),
            idle_mode: self.idle_mode,
            ..self.keys.to_tick_input()
        };
        tick(&mut self.state, &input, dt);

        self.events = self.state.drain_events();
        for event in &self.events {
            match event {
                GameEvent::EnemySpawned { .. } => log::trace!("{:?}", event),
                GameEvent::GameOver => {
                    log::info!("Game over at {}s", self.state.score_text())
                }
                _ => log::debug!("{:?}", event),
            }
        }

        Snapshot::capture(&self.state)
    }

    /// Events produced by the last frame
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Start a new run ("play again")
    pub fn restart(&mut self) {
        self.state.reset();
        self.pending_shift = None;
        self.events.clear();
        self.last_time = self.clock.now();
    }
}
