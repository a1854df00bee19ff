//! Per-frame motion update
//!
//! Advances a `VehicleMotionModel` by one frame. Order matters: both power cut
//! guards run before the countdown, and the countdown runs before throttle is
//! integrated, so the frame that would cross the threshold already loses power.

use serde::{Deserialize, Serialize};

use super::state::{CutTrigger, VehicleMotionModel};
use crate::{clamp_axis, move_towards};

/// Values produced by one step, for the caller to apply to its transform
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MotionStep {
    /// Rotation about the vertical axis (radians, positive = turn right)
    pub yaw_delta: f32,
    /// Translation along the forward axis, applied after the rotation
    pub forward_distance: f32,
    /// Throttle actually integrated after power cut suppression
    pub effective_throttle: f32,
    /// Set when a power cut engaged during this step
    pub engaged: Option<CutTrigger>,
    /// Set when a power cut lifted during this step. Both can be set when
    /// `dt` covers the whole cut duration.
    pub lifted: bool,
}

impl VehicleMotionModel {
    /// Advance the model by `dt` seconds.
    ///
    /// `throttle` and `turn` are clamped to [-1, 1] with NaN read as zero.
    /// A negative or NaN `dt` leaves the model untouched.
    pub fn step(&mut self, dt: f32, throttle: f32, turn: f32) -> MotionStep {
        if !dt.is_finite() || dt < 0.0 {
            return MotionStep::default();
        }
        let throttle = clamp_axis(throttle);
        let turn = clamp_axis(turn);
        let accel = self.params.acceleration;
        let threshold = self.params.speed_threshold;

        let mut engaged = None;
        let mut lifted = false;

        // Predictive: would this frame's forward acceleration reach the threshold?
        if !self.power_cut_active && throttle > 0.0 {
            let proposed = self.current_speed + accel * dt;
            if proposed.abs() >= threshold {
                self.engage_power_cut();
                engaged = Some(CutTrigger::Predictive);
            }
        }

        // Reactive: threshold lowered externally or speed got there another way
        if !self.power_cut_active && self.current_speed.abs() >= threshold {
            self.engage_power_cut();
            engaged = Some(CutTrigger::Reactive);
        }

        if self.power_cut_active {
            self.power_cut_timer -= dt;
            if self.power_cut_timer <= 0.0 {
                self.reset_power_cut();
                lifted = true;
            }
        }

        let effective_throttle = if self.power_cut_active && throttle > 0.0 {
            0.0
        } else {
            throttle
        };

        if effective_throttle > 0.0 {
            self.current_speed += accel * dt;
        } else if effective_throttle < 0.0 {
            if self.current_speed > 0.0 {
                let brake = 2.0 * accel * -effective_throttle;
                self.current_speed = move_towards(self.current_speed, 0.0, brake * dt);
            } else {
                self.current_speed += accel * effective_throttle * dt;
            }
        } else {
            let drag = self.current_speed.abs() * self.params.drag_factor;
            self.current_speed = move_towards(self.current_speed, 0.0, drag * dt);
        }

        MotionStep {
            yaw_delta: (turn * self.params.turn_speed * dt).to_radians(),
            forward_distance: self.current_speed * dt,
            effective_throttle,
            engaged,
            lifted,
        }
    }
}
