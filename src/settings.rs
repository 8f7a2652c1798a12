//! Game settings
//!
//! Loaded from an optional JSON file by the native runner. Missing fields
//! fall back to their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::SPAWN_CHANCE;

/// How the pause key is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PauseMode {
    /// Toggle once per press (key must be released before the next toggle)
    #[default]
    EdgeTriggered,
    /// Toggle on every tick the key is held
    Level,
}

impl PauseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PauseMode::EdgeTriggered => "EdgeTriggered",
            PauseMode::Level => "Level",
        }
    }
}

/// Errors raised while loading settings from disk
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Drawing surface width in pixels
    pub viewport_width: f32,
    /// Drawing surface height in pixels
    pub viewport_height: f32,
    /// RNG seed for spawns and terrain
    pub seed: u64,
    /// Probability of a spawn attempt on each unpaused tick
    pub spawn_chance: f32,
    /// Pause key behavior
    pub pause_mode: PauseMode,

    // === Headless runner ===
    /// Simulated seconds to run before stopping
    pub demo_seconds: f32,
    /// Simulated frames per second
    pub demo_fps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: 480.0,
            viewport_height: 800.0,
            seed: 0x5eed,
            spawn_chance: SPAWN_CHANCE,
            pause_mode: PauseMode::EdgeTriggered,

            demo_seconds: 120.0,
            demo_fps: 60,
        }
    }
}

impl Settings {
    /// Check value ranges the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        let valid_extent = |v: f32| v.is_finite() && v > 0.0;
        if !(valid_extent(self.viewport_width) && valid_extent(self.viewport_height)) {
            return Err(SettingsError::Invalid(format!(
                "viewport must be finite and positive, got {}x{}",
                self.viewport_width, self.viewport_height
            )));
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(SettingsError::Invalid(format!(
                "spawn_chance must be within [0, 1], got {}",
                self.spawn_chance
            )));
        }
        if self.demo_fps == 0 {
            return Err(SettingsError::Invalid("demo_fps must be non-zero".into()));
        }
        Ok(())
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str, path: &Path) -> Result<Self, SettingsError> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json, path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings =
            Settings::from_json(r#"{ "seed": 7, "pause_mode": "Level" }"#, Path::new("x.json"))
                .unwrap();
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.pause_mode, PauseMode::Level);
        assert_eq!(settings.spawn_chance, SPAWN_CHANCE);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Settings::from_json(r#"{ "spawn_chance": 2.0 }"#, Path::new("x.json"));
        assert!(matches!(err, Err(SettingsError::Invalid(_))));

        let err = Settings::from_json(r#"{ "viewport_width": 0 }"#, Path::new("x.json"));
        assert!(matches!(err, Err(SettingsError::Invalid(_))));

        let err = Settings::from_json("not json", Path::new("x.json"));
        assert!(matches!(err, Err(SettingsError::Parse { .. })));
    }

    #[test]
    fn test_rejects_unbounded_viewport() {
        // 1e39 overflows f32 and deserializes as infinity
        let err = Settings::from_json(r#"{ "viewport_height": 1e39 }"#, Path::new("x.json"));
        assert!(matches!(err, Err(SettingsError::Invalid(_))));

        let settings = Settings {
            viewport_width: f32::NAN,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load_from_path("/definitely/not/here.json");
        assert!(matches!(err, Err(SettingsError::Io { .. })));
    }

    #[test]
    fn test_pause_mode_names_match_serde() {
        for mode in [PauseMode::EdgeTriggered, PauseMode::Level] {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
        }
    }
}
