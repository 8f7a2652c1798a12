//! Lane Rush headless runner
//!
//! Drives a session on a simulated clock with the autopilot at the wheel and
//! prints the final state as JSON. Usage: `lane-rush [settings.json]`

use lane_rush::platform::ManualClock;
use lane_rush::sim::GameEvent;
use lane_rush::{Session, Settings};

fn load_settings() -> Settings {
    let Some(path) = std::env::args().nth(1) else {
        log::info!("No settings file given, using defaults");
        return Settings::default();
    };
    match Settings::load_from_path(&path) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("{err}; falling back to default settings");
            if let Some(source) = std::error::Error::source(&err) {
                log::warn!("  caused by: {source}");
            }
            Settings::default()
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Lane Rush (headless) starting...");

    let settings = load_settings();
    let clock = ManualClock::new(0.0);
    let mut session = Session::new(&settings, &clock);
    session.idle_mode = true;

    let frame_dt = 1.0 / f64::from(settings.demo_fps);
    let frames = (f64::from(settings.demo_seconds) * f64::from(settings.demo_fps)).ceil() as u64;

    let mut spawned = 0usize;
    let mut hits = 0usize;
    let mut snapshot = session.frame();
    for _ in 0..frames {
        clock.advance(frame_dt);
        snapshot = session.frame();

        for event in session.events() {
            match event {
                GameEvent::EnemySpawned { .. } => spawned += 1,
                GameEvent::PlayerHit { lives_left } => {
                    hits += 1;
                    log::info!("Hit at {}s, {} lives left", snapshot.score, lives_left);
                }
                _ => {}
            }
        }
        if snapshot.game_over {
            break;
        }
    }

    log::info!(
        "Run finished: survived {}s, {} enemies spawned, {} hits",
        snapshot.score,
        spawned,
        hits
    );

    let summary = serde_json::json!({
        "score": snapshot.score,
        "lives": snapshot.lives,
        "game_over": snapshot.game_over,
        "enemies_spawned": spawned,
        "hits": hits,
        "final_frame": snapshot,
    });
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Failed to serialize summary: {err}"),
    }
}
