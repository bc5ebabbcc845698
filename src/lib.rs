//! Spider Pull - pull-and-launch movement core for a four player minigame
//!
//! Core modules:
//! - `sim`: Deterministic fixed-step simulation (input, player FSM, physics, scores)
//! - `host`: Collaborator traits the host implements (controllers, participants, round end)
//! - `tuning`: Data-driven movement constants

pub mod host;
pub mod sim;
pub mod tuning;

pub use host::Host;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz host loop)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Player slots, human or AI
    pub const MAX_PLAYERS: usize = 4;
    /// Collectible balls per player slot
    pub const BALLS_PER_PLAYER: usize = 3;
    pub const MAX_BALLS: usize = MAX_PLAYERS * BALLS_PER_PLAYER;

    /// Stick deflection that counts as intentional movement
    pub const INPUT_DEADZONE: i8 = 5;
    /// Absolute deflection where a pull starts to register
    pub const INPUT_PULL_MIN: i8 = 20;
    /// Absolute deflection where a pull saturates
    pub const INPUT_PULL_MAX: i8 = 60;
    pub const INPUT_PULL_RANGE: i8 = INPUT_PULL_MAX - INPUT_PULL_MIN;
    /// Largest stick reading accepted from a controller
    pub const STICK_LIMIT: i8 = 100;

    /// Horizontal velocity per unit of stick while moving
    pub const MOVE_SCALE: f32 = 0.05;
    /// Ticks a player stays inert after releasing a pull
    pub const RECOVERY_TICKS: u32 = 20;

    /// Launch speed at the weakest and strongest pull (units/s)
    pub const LAUNCH_SPEED_MIN: f32 = 2.0;
    pub const LAUNCH_SPEED_MAX: f32 = 8.0;

    /// Play field half extents around the origin (320x240 screen)
    pub const ARENA_HALF_WIDTH: f32 = 160.0;
    pub const ARENA_HALF_HEIGHT: f32 = 120.0;

    /// Default ball radius
    pub const BALL_RADIUS: f32 = 4.0;

    /// Player colors (RGBA), slot order
    pub const PLAYER_COLORS: [u32; MAX_PLAYERS] = [
        0xFF4040FF, // Red
        0x4080FFFF, // Blue
        0xFFD040FF, // Yellow
        0x40E060FF, // Green
    ];
}
