//! Spatial transform driven by the motion model
//!
//! The model only produces numbers. Anything that can turn about its vertical
//! axis and move along its own forward axis can consume them.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::tick::MotionStep;

/// Minimal transform capability needed to apply a `MotionStep`
pub trait Transform {
    /// Rotate about the vertical axis (radians, positive = turn right)
    fn rotate_yaw(&mut self, radians: f32);
    /// Move along the transform's own forward axis
    fn translate_forward(&mut self, distance: f32);
}

/// Apply one step: rotate first, then translate along the new heading
pub fn apply_step<T: Transform + ?Sized>(transform: &mut T, step: &MotionStep) {
    if step.yaw_delta != 0.0 {
        transform.rotate_yaw(step.yaw_delta);
    }
    if step.forward_distance != 0.0 {
        transform.translate_forward(step.forward_distance);
    }
}

/// World pose of a vehicle.
///
/// glam is right-handed: with +Y up and +Z forward, the vehicle's right is -X.
/// Positive yaw turns right, i.e. clockwise seen from above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Pose {
    /// Unit vector the vehicle is facing
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Unit vector to the vehicle's right
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::NEG_X
    }

    /// Heading in radians, 0 = facing +Z, increasing clockwise seen from above
    pub fn heading(&self) -> f32 {
        let f = self.forward();
        (-f.x).atan2(f.z)
    }
}

impl Transform for Pose {
    fn rotate_yaw(&mut self, radians: f32) {
        // Clockwise about +Y is a negative angle in a right-handed frame.
        // Renormalized to stop drift over long runs.
        self.rotation = (self.rotation * Quat::from_rotation_y(-radians)).normalize();
    }

    fn translate_forward(&mut self, distance: f32) {
        self.position += self.forward() * distance;
    }
}
