//! Power Cut Drive - a tick-driven vehicle motion model
//!
//! Core modules:
//! - `sim`: Motion state machine (throttle, braking, drag, power cut) and pose
//! - `input`: Throttle/turn intent sources (devices, autopilot, scripts)
//! - `camera`: Perspective switching and per-perspective speed thresholds
//! - `hud`: Read-only telemetry and status text
//! - `session`: Fixed timestep driver tying the pieces together
//! - `settings`: Serializable configuration with validation

pub mod camera;
pub mod error;
pub mod hud;
pub mod input;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::Settings;
pub use sim::{MotionParams, MotionStep, VehicleMotionModel};

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the session will accumulate in one update. Covers more
    /// than `MAX_SUBSTEPS` steps, so a hitch leaves time in the accumulator.
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Vehicle defaults
    pub const DEFAULT_ACCELERATION: f32 = 15.0;
    pub const DEFAULT_DRAG_FACTOR: f32 = 1.5;
    pub const DEFAULT_TURN_SPEED: f32 = 90.0; // degrees per second

    /// Power cut defaults
    pub const DEFAULT_SPEED_THRESHOLD: f32 = 30.0;
    pub const DEFAULT_POWER_CUT_DURATION: f32 = 3.0; // seconds
    /// Floor applied when a non-positive threshold is set at runtime
    pub const MIN_SPEED_THRESHOLD: f32 = 1.0e-3;

    /// Per-perspective thresholds
    pub const FIRST_PERSON_THRESHOLD: f32 = 20.0; // narrow window
    pub const THIRD_PERSON_THRESHOLD: f32 = 35.0; // wide window
}

/// Move `current` toward `target` by at most `max_delta`, never overshooting
#[inline]
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}

/// Clamp an intent axis to [-1, 1], mapping NaN to 0
#[inline]
pub fn clamp_axis(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_towards_stops_at_target() {
        assert_eq!(move_towards(5.0, 0.0, 100.0), 0.0);
        assert_eq!(move_towards(-5.0, 0.0, 100.0), 0.0);
        assert!((move_towards(5.0, 0.0, 1.0) - 4.0).abs() < 1e-6);
        assert!((move_towards(-5.0, 0.0, 1.0) + 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_axis() {
        assert_eq!(clamp_axis(f32::NAN), 0.0);
        assert_eq!(clamp_axis(3.0), 1.0);
        assert_eq!(clamp_axis(-3.0), -1.0);
        assert_eq!(clamp_axis(0.25), 0.25);
    }
}
