//! Data-driven movement tuning
//!
//! Defaults mirror `crate::consts`; a host may override them from JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Reasons a tuning document is rejected
#[derive(Debug)]
pub enum TuningError {
    /// Not valid JSON, or fields of the wrong type
    Parse(serde_json::Error),
    /// Parsed, but a value breaks a movement invariant
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "tuning parse error: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid tuning `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Movement constants used by the player update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Stick deflection needed to start moving from idle
    pub deadzone: i8,
    /// Deflection where a pull registers
    pub pull_min: i8,
    /// Deflection where a pull saturates
    pub pull_max: i8,
    /// Controller readings beyond this are clamped
    pub stick_limit: i8,
    /// Horizontal velocity per unit of stick while moving
    pub move_scale: f32,
    /// Inert ticks after a release
    pub recovery_ticks: u32,
    pub launch_speed_min: f32,
    pub launch_speed_max: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            deadzone: INPUT_DEADZONE,
            pull_min: INPUT_PULL_MIN,
            pull_max: INPUT_PULL_MAX,
            stick_limit: STICK_LIMIT,
            move_scale: MOVE_SCALE,
            recovery_ticks: RECOVERY_TICKS,
            launch_speed_min: LAUNCH_SPEED_MIN,
            launch_speed_max: LAUNCH_SPEED_MAX,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document. Missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check the relationships the player update relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |field, reason| Err(TuningError::Invalid { field, reason });

        if self.deadzone < 0 {
            return invalid("deadzone", "must not be negative");
        }
        if self.deadzone >= self.pull_min {
            return invalid("deadzone", "must be below pull_min");
        }
        if self.pull_min >= self.pull_max {
            return invalid("pull_min", "must be below pull_max");
        }
        if self.pull_max > self.stick_limit {
            return invalid("pull_max", "must not exceed stick_limit");
        }
        if !self.move_scale.is_finite() || self.move_scale < 0.0 {
            return invalid("move_scale", "must be finite and non-negative");
        }
        if self.recovery_ticks == 0 {
            return invalid("recovery_ticks", "must be at least one tick");
        }
        if !self.launch_speed_min.is_finite() || self.launch_speed_min < 0.0 {
            return invalid("launch_speed_min", "must be finite and non-negative");
        }
        if !self.launch_speed_max.is_finite() || self.launch_speed_max < self.launch_speed_min {
            return invalid("launch_speed_max", "must be finite and at least launch_speed_min");
        }
        Ok(())
    }

    /// Width of the pull band
    #[inline]
    pub fn pull_range(&self) -> f32 {
        f32::from(self.pull_max) - f32::from(self.pull_min)
    }
}
