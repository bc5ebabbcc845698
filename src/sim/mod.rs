//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by slot index)
//! - No rendering, audio or platform dependencies

pub mod balls;
pub mod input;
pub mod motion;
pub mod pull;
pub mod roster;
pub mod score;
pub mod state;
pub mod tick;

pub use balls::BallRegistry;
pub use input::{
    AiPilot, ButtonState, ControllerSnapshot, InputSample, Pilot, RawController, WanderPilot,
};
pub use pull::Pull;
pub use roster::PlayerRoster;
pub use state::{AttachSide, Ball, GameState, Player, PlayerState, PlayerView, RoundPhase};
pub use tick::{apply_input, tick};
