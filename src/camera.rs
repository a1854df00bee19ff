//! Camera perspective and the speed threshold that goes with it
//!
//! First person gets a narrow window before the power cut, third person a
//! wide one. Switching perspective always leaves the vehicle in Normal.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::VehicleMotionModel;

/// Active camera perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CameraMode {
    FirstPerson,
    #[default]
    ThirdPerson,
}

impl CameraMode {
    pub fn toggled(self) -> Self {
        match self {
            CameraMode::FirstPerson => CameraMode::ThirdPerson,
            CameraMode::ThirdPerson => CameraMode::FirstPerson,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CameraMode::FirstPerson => "first person",
            CameraMode::ThirdPerson => "third person",
        }
    }
}

/// Speed threshold per perspective
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraThresholds {
    pub first_person: f32,
    pub third_person: f32,
}

impl Default for CameraThresholds {
    fn default() -> Self {
        Self {
            first_person: FIRST_PERSON_THRESHOLD,
            third_person: THIRD_PERSON_THRESHOLD,
        }
    }
}

impl CameraThresholds {
    pub fn for_mode(&self, mode: CameraMode) -> f32 {
        match mode {
            CameraMode::FirstPerson => self.first_person,
            CameraMode::ThirdPerson => self.third_person,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("first_person", self.first_person),
            ("third_person", self.third_person),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "camera threshold {name} must be a positive finite number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Perspective switcher that pushes the matching threshold into a vehicle
#[derive(Debug, Clone, Default)]
pub struct CameraRig {
    mode: CameraMode,
    thresholds: CameraThresholds,
}

impl CameraRig {
    pub fn new(mode: CameraMode, thresholds: CameraThresholds) -> Self {
        Self { mode, thresholds }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn thresholds(&self) -> &CameraThresholds {
        &self.thresholds
    }

    /// Threshold first, then reset, so the new value governs from Normal
    pub fn apply(&self, vehicle: &mut VehicleMotionModel) {
        vehicle.set_speed_threshold(self.thresholds.for_mode(self.mode));
        vehicle.reset_power_cut();
    }

    /// Switch perspective and apply it. Returns the new mode.
    pub fn toggle(&mut self, vehicle: &mut VehicleMotionModel) -> CameraMode {
        self.mode = self.mode.toggled();
        self.apply(vehicle);
        log::info!(
            "Camera switched to {} (threshold {:.1})",
            self.mode.as_str(),
            vehicle.speed_threshold()
        );
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rig_starts_in_third_person() {
        let rig = CameraRig::default();
        let mut vehicle = VehicleMotionModel::default();
        rig.apply(&mut vehicle);
        assert_eq!(rig.mode(), CameraMode::ThirdPerson);
        assert_eq!(vehicle.speed_threshold(), THIRD_PERSON_THRESHOLD);
    }

    #[test]
    fn test_toggle_swaps_threshold_and_clears_cut() {
        let mut rig = CameraRig::default();
        let mut vehicle = VehicleMotionModel::default();
        rig.apply(&mut vehicle);

        // Drive until the cut engages under the third person threshold
        while !vehicle.is_power_cut_active() {
            vehicle.step(1.0 / 60.0, 1.0, 0.0);
        }
        let speed = vehicle.current_speed();

        assert_eq!(rig.toggle(&mut vehicle), CameraMode::FirstPerson);
        assert_eq!(vehicle.speed_threshold(), FIRST_PERSON_THRESHOLD);
        assert!(!vehicle.is_power_cut_active());
        assert_eq!(vehicle.power_cut_timer(), 0.0);
        assert_eq!(vehicle.current_speed(), speed);

        // Already above the narrow window, so the next step cuts again
        vehicle.step(1.0 / 60.0, 0.0, 0.0);
        assert!(vehicle.is_power_cut_active());

        assert_eq!(rig.toggle(&mut vehicle), CameraMode::ThirdPerson);
        assert_eq!(vehicle.speed_threshold(), THIRD_PERSON_THRESHOLD);
    }

    #[test]
    fn test_thresholds_validate() {
        assert!(CameraThresholds::default().validate().is_ok());
        let bad = CameraThresholds {
            first_person: 0.0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }
}
