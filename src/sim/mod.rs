//! Vehicle motion simulation
//!
//! All motion logic lives here. This module must stay pure:
//! - Time only advances through the `dt` handed to `step`
//! - No input devices, rendering or platform dependencies
//! - Transforms are reached only through the `Transform` trait

pub mod pose;
pub mod state;
pub mod tick;

pub use pose::{Pose, Transform, apply_step};
pub use state::{CutTrigger, MotionParams, MotionPhase, VehicleMotionModel};
pub use tick::MotionStep;
