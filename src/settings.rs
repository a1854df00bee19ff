//! Simulation settings
//!
//! Stored as JSON. A missing file means defaults; a malformed one is an error.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::{CameraMode, CameraThresholds};
use crate::error::ConfigError;
use crate::sim::MotionParams;

/// Everything needed to start a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Vehicle ===
    /// Motion constants and the starting threshold
    pub vehicle: MotionParams,

    // === Camera ===
    /// Threshold for each perspective
    pub cameras: CameraThresholds,
    /// Perspective applied when the session starts
    pub initial_camera: CameraMode,
    /// Seconds between automatic perspective switches in the demo (0 = never)
    pub camera_toggle_interval: f32,

    // === Demo run ===
    /// Seed for the autopilot driver
    pub autopilot_seed: u64,
    /// Simulated seconds to run
    pub run_seconds: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vehicle: MotionParams::default(),

            cameras: CameraThresholds::default(),
            initial_camera: CameraMode::ThirdPerson,
            camera_toggle_interval: 10.0,

            autopilot_seed: 0x5EED,
            run_seconds: 30.0,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.vehicle.validate()?;
        self.cameras.validate()?;
        if !self.camera_toggle_interval.is_finite() || self.camera_toggle_interval < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "camera_toggle_interval must be zero or positive, got {}",
                self.camera_toggle_interval
            )));
        }
        if !self.run_seconds.is_finite() || self.run_seconds < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "run_seconds must be zero or positive, got {}",
                self.run_seconds
            )));
        }
        Ok(())
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
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
    fn test_partial_json_fills_defaults() {
        let settings =
            Settings::from_json(r#"{ "vehicle": { "acceleration": 20.0 }, "run_seconds": 5 }"#)
                .unwrap();
        assert_eq!(settings.vehicle.acceleration, 20.0);
        assert_eq!(settings.vehicle.drag_factor, MotionParams::default().drag_factor);
        assert_eq!(settings.run_seconds, 5.0);
        assert_eq!(settings.cameras, CameraThresholds::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_json(r#"{ "vehicle": { "power_cut_duration": 0 } }"#);
        assert!(matches!(err, Err(ConfigError::Invalid(_))));

        let err = Settings::from_json(r#"{ "cameras": { "first_person": -5 } }"#);
        assert!(matches!(err, Err(ConfigError::Invalid(_))));

        let err = Settings::from_json("not json");
        assert!(matches!(err, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("power_cut_drive_missing_settings.json");
        let _ = std::fs::remove_file(&path);
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "power_cut_drive_settings_{}.json",
            std::process::id()
        ));
        let settings = Settings {
            initial_camera: CameraMode::FirstPerson,
            autopilot_seed: 7,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }
}
