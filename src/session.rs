//! Fixed timestep driving session
//!
//! Owns one vehicle, its pose, the camera rig and an input source, and turns
//! variable frame times into fixed `SIM_DT` steps.

use crate::camera::CameraRig;
use crate::consts::*;
use crate::error::ConfigError;
use crate::hud::Telemetry;
use crate::input::InputSource;
use crate::settings::Settings;
use crate::sim::{CutTrigger, Pose, VehicleMotionModel, apply_step};

pub struct Session<I: InputSource> {
    vehicle: VehicleMotionModel,
    pose: Pose,
    camera: CameraRig,
    input: I,
    accumulator: f32,
    /// Camera switch requested since the last step
    toggle_requested: bool,
    time_ticks: u64,
    power_cuts: u32,
}

impl<I: InputSource> Session<I> {
    pub fn new(settings: &Settings, input: I) -> Result<Self, ConfigError> {
        settings.validate()?;
        let mut vehicle = VehicleMotionModel::new(settings.vehicle)?;
        let camera = CameraRig::new(settings.initial_camera, settings.cameras);
        camera.apply(&mut vehicle);
        log::info!(
            "Session started in {} view (threshold {:.1})",
            camera.mode().as_str(),
            vehicle.speed_threshold()
        );

        Ok(Self {
            vehicle,
            pose: Pose::default(),
            camera,
            input,
            accumulator: 0.0,
            toggle_requested: false,
            time_ticks: 0,
            power_cuts: 0,
        })
    }

    /// Ask for a perspective switch; applied before the next step
    pub fn request_camera_toggle(&mut self) {
        self.toggle_requested = true;
    }

    /// Run as many fixed steps as `frame_dt` covers. Returns the step count.
    pub fn update(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt < 0.0 {
            return 0;
        }
        self.accumulator += frame_dt.min(MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.tick(SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }

    fn tick(&mut self, dt: f32) {
        if self.toggle_requested {
            self.camera.toggle(&mut self.vehicle);
            self.toggle_requested = false;
        }

        let input = self.input.sample(dt);
        let step = self.vehicle.step(dt, input.throttle, input.turn);
        apply_step(&mut self.pose, &step);
        self.time_ticks += 1;

        if let Some(trigger) = step.engaged {
            self.power_cuts += 1;
            let kind = match trigger {
                CutTrigger::Predictive => "predictive",
                CutTrigger::Reactive => "reactive",
            };
            log::debug!(
                "Power cut engaged ({kind}) at speed {:.2}, threshold {:.1}",
                self.vehicle.current_speed(),
                self.vehicle.speed_threshold()
            );
        }
        if step.lifted {
            log::debug!("Power cut lifted at tick {}", self.time_ticks);
        }
    }

    pub fn telemetry(&self) -> Telemetry {
        Telemetry::from_vehicle(&self.vehicle)
    }

    pub fn vehicle(&self) -> &VehicleMotionModel {
        &self.vehicle
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    /// Simulated seconds so far
    pub fn elapsed(&self) -> f32 {
        self.time_ticks as f32 * SIM_DT
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Power cuts engaged since the session started
    pub fn power_cuts(&self) -> u32 {
        self.power_cuts
    }
}
