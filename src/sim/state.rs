//! Vehicle motion state and tuning parameters
//!
//! Everything the per-tick update reads or writes lives here. The model is
//! plain numeric state; applying motion to a transform happens in `pose`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunable motion constants for one vehicle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionParams {
    /// Forward/reverse acceleration (units/s²). Braking uses twice this.
    pub acceleration: f32,
    /// Passive drag rate, proportional to current speed magnitude
    pub drag_factor: f32,
    /// Yaw rate at full turn input (degrees/s)
    pub turn_speed: f32,
    /// Speed magnitude whose crossing triggers a power cut
    pub speed_threshold: f32,
    /// Length of each power cut countdown (seconds)
    pub power_cut_duration: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            acceleration: DEFAULT_ACCELERATION,
            drag_factor: DEFAULT_DRAG_FACTOR,
            turn_speed: DEFAULT_TURN_SPEED,
            speed_threshold: DEFAULT_SPEED_THRESHOLD,
            power_cut_duration: DEFAULT_POWER_CUT_DURATION,
        }
    }
}

impl MotionParams {
    /// Reject values that would stop the power cut from ever triggering or lifting
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("acceleration", self.acceleration),
            ("drag_factor", self.drag_factor),
            ("speed_threshold", self.speed_threshold),
            ("power_cut_duration", self.power_cut_duration),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }
        if !self.turn_speed.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "turn_speed must be finite, got {}",
                self.turn_speed
            )));
        }
        Ok(())
    }
}

/// Power state of the drivetrain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionPhase {
    /// Forward throttle is honoured
    Normal,
    /// Forward throttle is ignored until the countdown ends
    PowerCut,
}

/// Which guard engaged a power cut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CutTrigger {
    /// Projected post-acceleration speed would reach the threshold
    Predictive,
    /// Speed already at or above the threshold before the step
    Reactive,
}

/// Speed and power cut state for one vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleMotionModel {
    pub(crate) params: MotionParams,
    /// Signed speed along the forward axis (negative = reverse)
    pub(crate) current_speed: f32,
    pub(crate) power_cut_active: bool,
    /// Seconds until the cut lifts; zero whenever the cut is inactive
    pub(crate) power_cut_timer: f32,
}

impl Default for VehicleMotionModel {
    fn default() -> Self {
        Self::from_valid(MotionParams::default())
    }
}

impl VehicleMotionModel {
    /// Create a stationary vehicle in the Normal phase
    pub fn new(params: MotionParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self::from_valid(params))
    }

    fn from_valid(params: MotionParams) -> Self {
        Self {
            params,
            current_speed: 0.0,
            power_cut_active: false,
            power_cut_timer: 0.0,
        }
    }

    /// Lift any power cut immediately
    pub fn reset_power_cut(&mut self) {
        self.power_cut_active = false;
        self.power_cut_timer = 0.0;
    }

    /// Replace the threshold. Evaluation against the current speed waits for
    /// the next step; callers wanting a clean slate call `reset_power_cut`.
    pub fn set_speed_threshold(&mut self, value: f32) {
        if !value.is_finite() || value <= 0.0 {
            log::warn!(
                "Rejected speed threshold {value}, clamping to {MIN_SPEED_THRESHOLD}"
            );
            self.params.speed_threshold = MIN_SPEED_THRESHOLD;
        } else {
            self.params.speed_threshold = value;
        }
    }

    pub(crate) fn engage_power_cut(&mut self) {
        self.power_cut_active = true;
        self.power_cut_timer = self.params.power_cut_duration;
    }

    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    pub fn is_power_cut_active(&self) -> bool {
        self.power_cut_active
    }

    pub fn power_cut_timer(&self) -> f32 {
        self.power_cut_timer
    }

    pub fn speed_threshold(&self) -> f32 {
        self.params.speed_threshold
    }

    pub fn params(&self) -> &MotionParams {
        &self.params
    }

    pub fn phase(&self) -> MotionPhase {
        if self.power_cut_active {
            MotionPhase::PowerCut
        } else {
            MotionPhase::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_is_normal_and_stationary() {
        let model = VehicleMotionModel::default();
        assert_eq!(model.phase(), MotionPhase::Normal);
        assert_eq!(model.current_speed(), 0.0);
        assert_eq!(model.power_cut_timer(), 0.0);
        assert_eq!(model.speed_threshold(), DEFAULT_SPEED_THRESHOLD);
    }

    #[test]
    fn test_new_rejects_non_positive_params() {
        for params in [
            MotionParams {
                acceleration: 0.0,
                ..Default::default()
            },
            MotionParams {
                speed_threshold: -1.0,
                ..Default::default()
            },
            MotionParams {
                power_cut_duration: 0.0,
                ..Default::default()
            },
            MotionParams {
                drag_factor: f32::NAN,
                ..Default::default()
            },
            MotionParams {
                turn_speed: f32::INFINITY,
                ..Default::default()
            },
        ] {
            assert!(matches!(
                VehicleMotionModel::new(params),
                Err(ConfigError::Invalid(_))
            ));
        }
        // Negative turn speed just steers the other way
        let params = MotionParams {
            turn_speed: -45.0,
            ..Default::default()
        };
        assert!(VehicleMotionModel::new(params).is_ok());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut model = VehicleMotionModel::default();
        model.engage_power_cut();
        assert_eq!(model.phase(), MotionPhase::PowerCut);

        model.reset_power_cut();
        let once = (model.is_power_cut_active(), model.power_cut_timer());
        model.reset_power_cut();
        let twice = (model.is_power_cut_active(), model.power_cut_timer());
        assert_eq!(once, (false, 0.0));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_threshold_swap_preserves_state() {
        let mut model = VehicleMotionModel::default();
        model.current_speed = 25.0;
        model.engage_power_cut();
        model.power_cut_timer = 1.25;

        model.set_speed_threshold(20.0);
        assert_eq!(model.speed_threshold(), 20.0);
        assert_eq!(model.current_speed(), 25.0);
        assert!(model.is_power_cut_active());
        assert_eq!(model.power_cut_timer(), 1.25);
    }

    #[test]
    fn test_non_positive_threshold_is_clamped() {
        let mut model = VehicleMotionModel::default();
        model.set_speed_threshold(0.0);
        assert_eq!(model.speed_threshold(), MIN_SPEED_THRESHOLD);
        model.set_speed_threshold(f32::NAN);
        assert_eq!(model.speed_threshold(), MIN_SPEED_THRESHOLD);
    }
}
