//! Controller sampling and control sources
//!
//! Humans and AI pilots both produce a [`RawController`]; the same
//! normalization turns it into an [`InputSample`] for the player update.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::Player;
use crate::consts::*;

/// Controller state as reported by the host (or an AI pilot)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawController {
    pub stick_x: f32,
    pub stick_y: f32,
    /// Pull button (B)
    pub charge: bool,
    /// Start button, ends the round
    pub start: bool,
}

/// Sanitized controller state, kept on the player for edge detection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerSnapshot {
    pub stick_x: i8,
    pub stick_y: i8,
    pub charge: bool,
    pub start: bool,
}

impl ControllerSnapshot {
    /// Clamp axes into `[-limit, limit]`; NaN reads as centered
    pub fn from_raw(raw: &RawController, limit: i8) -> Self {
        Self {
            stick_x: sanitize_axis(raw.stick_x, limit),
            stick_y: sanitize_axis(raw.stick_y, limit),
            charge: raw.charge,
            start: raw.start,
        }
    }
}

/// Normalize one analog axis
#[inline]
pub fn sanitize_axis(value: f32, limit: i8) -> i8 {
    if value.is_nan() {
        return 0;
    }
    let limit = f32::from(limit.max(0));
    value.clamp(-limit, limit).round() as i8
}

/// Digital button with edges relative to the previous tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub held: bool,
    /// Went down this tick
    pub pressed: bool,
    /// Went up this tick
    pub released: bool,
}

impl ButtonState {
    #[inline]
    pub fn between(previous: bool, current: bool) -> Self {
        Self {
            held: current,
            pressed: current && !previous,
            released: previous && !current,
        }
    }
}

/// What the player state machine consumes each tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSample {
    pub stick_x: i8,
    pub stick_y: i8,
    pub charge: ButtonState,
    pub quit: ButtonState,
}

impl InputSample {
    /// Build a sample from this tick's snapshot and the previous one
    pub fn between(previous: &ControllerSnapshot, current: &ControllerSnapshot) -> Self {
        Self {
            stick_x: current.stick_x,
            stick_y: current.stick_y,
            charge: ButtonState::between(previous.charge, current.charge),
            quit: ButtonState::between(previous.start, current.start),
        }
    }

    /// Sample a raw read against the player's stored snapshot.
    ///
    /// Returns the sample and the snapshot to store for the next tick.
    pub fn read(
        raw: &RawController,
        previous: &ControllerSnapshot,
        limit: i8,
    ) -> (Self, ControllerSnapshot) {
        let current = ControllerSnapshot::from_raw(raw, limit);
        (Self::between(previous, &current), current)
    }
}

/// A non-human source of controller input
pub trait Pilot {
    /// Controller state for this tick, or `None` to leave the player untouched
    fn drive(&mut self, slot: usize, player: &Player) -> Option<RawController>;
}

/// AI control assigned to non-human slots
#[derive(Debug, Clone, Default)]
pub enum AiPilot {
    /// Produces no input; the slot stays idle
    #[default]
    Inert,
    Wander(WanderPilot),
}

impl Pilot for AiPilot {
    fn drive(&mut self, slot: usize, player: &Player) -> Option<RawController> {
        match self {
            AiPilot::Inert => None,
            AiPilot::Wander(pilot) => pilot.drive(slot, player),
        }
    }
}

/// Seeded random walker: drifts, idles, and takes random pulls
#[derive(Debug, Clone)]
pub struct WanderPilot {
    rng: Pcg32,
    current: RawController,
    hold_ticks: u32,
}

impl WanderPilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            current: RawController::default(),
            hold_ticks: 0,
        }
    }

    fn pick(&mut self) -> RawController {
        let limit = f32::from(STICK_LIMIT);
        match self.rng.random_range(0..3) {
            0 => RawController::default(),
            1 => RawController {
                stick_x: self.rng.random_range(-limit..=limit),
                ..Default::default()
            },
            _ => {
                let magnitude =
                    self.rng.random_range(f32::from(INPUT_PULL_MIN)..=f32::from(INPUT_PULL_MAX));
                let sign = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
                RawController {
                    stick_x: magnitude * sign,
                    charge: true,
                    ..Default::default()
                }
            }
        }
    }
}

impl Pilot for WanderPilot {
    fn drive(&mut self, _slot: usize, _player: &Player) -> Option<RawController> {
        if self.hold_ticks == 0 {
            self.current = self.pick();
            self.hold_ticks = self.rng.random_range(15..90);
        }
        self.hold_ticks -= 1;
        Some(self.current)
    }
}
