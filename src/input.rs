//! Drive intent sources
//!
//! Anything that produces a throttle and a turn value once per tick:
//! polled keyboard/gamepad state, a seeded autopilot, or a fixed script.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::clamp_axis;

/// Intents for a single tick, both in [-1, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DriveInput {
    /// Positive = forward, negative = brake/reverse, zero = coast
    pub throttle: f32,
    /// Positive = turn right, negative = turn left
    pub turn: f32,
}

impl DriveInput {
    pub fn new(throttle: f32, turn: f32) -> Self {
        Self {
            throttle: clamp_axis(throttle),
            turn: clamp_axis(turn),
        }
    }
}

/// Something that can be sampled for drive intents once per tick
pub trait InputSource {
    fn sample(&mut self, dt: f32) -> DriveInput;
}

/// Snapshot of the driving keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriveKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

/// Polled keyboard and gamepad state.
///
/// Keys take priority over the stick: forward beats back, right beats left.
/// A missing device contributes nothing.
#[derive(Debug, Clone, Default)]
pub struct KeyboardGamepad {
    pub keys: Option<DriveKeys>,
    /// Left stick (x, y)
    pub stick: Option<(f32, f32)>,
}

impl KeyboardGamepad {
    fn vertical(&self) -> f32 {
        if let Some(keys) = self.keys {
            if keys.forward {
                return 1.0;
            }
            if keys.back {
                return -1.0;
            }
        }
        self.stick.map(|(_, y)| y).unwrap_or(0.0)
    }

    fn horizontal(&self) -> f32 {
        if let Some(keys) = self.keys {
            if keys.right {
                return 1.0;
            }
            if keys.left {
                return -1.0;
            }
        }
        self.stick.map(|(x, _)| x).unwrap_or(0.0)
    }
}

impl InputSource for KeyboardGamepad {
    fn sample(&mut self, _dt: f32) -> DriveInput {
        DriveInput::new(self.vertical(), self.horizontal())
    }
}

/// How long the autopilot holds one intent (seconds)
const AUTOPILOT_HOLD_MIN: f32 = 0.5;
const AUTOPILOT_HOLD_MAX: f32 = 3.0;

/// Seeded AI driver: mostly accelerates, sometimes coasts or brakes,
/// and wanders left and right
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    current: DriveInput,
    hold_remaining: f32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            current: DriveInput::default(),
            hold_remaining: 0.0,
        }
    }

    fn pick(&mut self) -> DriveInput {
        let roll: f32 = self.rng.random();
        let throttle = if roll < 0.65 {
            1.0
        } else if roll < 0.85 {
            0.0
        } else {
            -self.rng.random_range(0.3f32..=1.0)
        };
        let turn = if self.rng.random_bool(0.4) {
            self.rng.random_range(-1.0f32..=1.0)
        } else {
            0.0
        };
        DriveInput::new(throttle, turn)
    }
}

impl InputSource for Autopilot {
    fn sample(&mut self, dt: f32) -> DriveInput {
        self.hold_remaining -= dt.max(0.0);
        if self.hold_remaining <= 0.0 {
            self.current = self.pick();
            self.hold_remaining = self
                .rng
                .random_range(AUTOPILOT_HOLD_MIN..=AUTOPILOT_HOLD_MAX);
            log::debug!(
                "Autopilot: throttle {:.2}, turn {:.2} for {:.1}s",
                self.current.throttle,
                self.current.turn,
                self.hold_remaining
            );
        }
        self.current
    }
}

/// Replays `(seconds, input)` segments in order, then coasts
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    segments: Vec<(f32, DriveInput)>,
    index: usize,
    elapsed: f32,
}

impl Scripted {
    pub fn new(segments: Vec<(f32, DriveInput)>) -> Self {
        Self {
            segments,
            index: 0,
            elapsed: 0.0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.segments.len()
    }
}

impl InputSource for Scripted {
    fn sample(&mut self, dt: f32) -> DriveInput {
        while let Some(&(duration, input)) = self.segments.get(self.index) {
            if self.elapsed < duration {
                self.elapsed += dt.max(0.0);
                return input;
            }
            self.elapsed -= duration;
            self.index += 1;
        }
        DriveInput::default()
    }
}
