//! Read-only status text for the dashboard and debug overlay

use serde::{Deserialize, Serialize};

use crate::sim::VehicleMotionModel;

/// Snapshot of what the display needs, taken once per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    pub speed: f32,
    pub power_cut_active: bool,
    pub power_cut_timer: f32,
    pub speed_threshold: f32,
}

impl Telemetry {
    pub fn from_vehicle(v: &VehicleMotionModel) -> Self {
        Self {
            speed: v.current_speed(),
            power_cut_active: v.is_power_cut_active(),
            power_cut_timer: v.power_cut_timer(),
            speed_threshold: v.speed_threshold(),
        }
    }

    /// `None` when there is no vehicle to read from
    pub fn capture(vehicle: Option<&VehicleMotionModel>) -> Option<Self> {
        vehicle.map(Self::from_vehicle)
    }
}

/// Dashboard speed label (unsigned)
pub fn dashboard_text(telemetry: Option<&Telemetry>) -> Option<String> {
    telemetry.map(|t| format!("Speed: {:.1}", t.speed.abs()))
}

/// Debug overlay lines, top to bottom
pub fn debug_overlay(t: &Telemetry) -> [String; 4] {
    [
        format!("Speed: {:.2}", t.speed),
        format!("Threshold: {:.1}", t.speed_threshold),
        format!("PowerCut: {} ({:.1}s)", t.power_cut_active, t.power_cut_timer),
        if t.power_cut_active {
            "FORWARD POWER CUT ACTIVE".to_string()
        } else {
            String::new()
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_vehicle_renders_nothing() {
        let telemetry = Telemetry::capture(None);
        assert!(telemetry.is_none());
        assert!(dashboard_text(telemetry.as_ref()).is_none());
    }

    #[test]
    fn test_dashboard_shows_magnitude() {
        let mut vehicle = VehicleMotionModel::default();
        vehicle.step(0.5, -1.0, 0.0);
        let t = Telemetry::capture(Some(&vehicle));
        assert_eq!(dashboard_text(t.as_ref()).as_deref(), Some("Speed: 7.5"));
    }

    #[test]
    fn test_overlay_lines() {
        let t = Telemetry {
            speed: -3.456,
            power_cut_active: true,
            power_cut_timer: 2.3,
            speed_threshold: 20.0,
        };
        let lines = debug_overlay(&t);
        assert_eq!(lines[0], "Speed: -3.46");
        assert_eq!(lines[1], "Threshold: 20.0");
        assert_eq!(lines[2], "PowerCut: true (2.3s)");
        assert_eq!(lines[3], "FORWARD POWER CUT ACTIVE");

        let idle = Telemetry {
            power_cut_active: false,
            power_cut_timer: 0.0,
            ..t
        };
        assert_eq!(debug_overlay(&idle)[3], "");
    }
}
