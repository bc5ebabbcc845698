//! Game state and core simulation types
//!
//! Everything the fixed-step update reads or writes lives here. Entities are
//! addressed by slot/pool index only.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::balls::BallRegistry;
use super::input::ControllerSnapshot;
use super::roster::PlayerRoster;
use crate::consts::*;
use crate::host::Host;
use crate::tuning::Tuning;

/// Enclosing minigame phase; only `Playing` runs the player update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    #[default]
    Init,
    Instructions,
    Intro,
    Playing,
    Ending,
    Cleanup,
}

impl RoundPhase {
    /// HUD label
    pub fn label(&self) -> &'static str {
        match self {
            RoundPhase::Init => "Init",
            RoundPhase::Instructions => "Instructions",
            RoundPhase::Intro => "Intro",
            RoundPhase::Playing => "Playing",
            RoundPhase::Ending => "Ending",
            RoundPhase::Cleanup => "Cleanup",
        }
    }
}

/// Per-player control mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerState {
    #[default]
    Idle,
    /// Pull button held, deflection not yet past `pull_min`
    ChargeStart,
    /// Pull is loaded and tracking the stick
    ChargeActive,
    /// Launched; inert for `recovery_ticks`
    Release,
    /// Direct horizontal control from the stick
    Moving,
}

/// Surface a player is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AttachSide {
    #[default]
    None,
    Ceiling,
    Floor,
    /// Wall on the player's west side
    West,
    /// Wall on the player's east side
    East,
}

/// One player slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Signed stick deflection of the loaded pull, magnitude in `[pull_min, pull_max]`
    pub pull: i8,
    /// Pull strength normalized to `[0, 1]`
    pub charge: f32,
    /// Authoritative score
    pub score: u32,
    /// Score shown on the HUD, converges on `score`
    pub score_displayed: u32,
    pub state: PlayerState,
    pub attach: AttachSide,
    pub previous_input: ControllerSnapshot,
    pub recovery_ticks: u32,
    pub ball_count: u32,
    color: u32,
    is_human: bool,
}

impl Player {
    pub fn new(color: u32, is_human: bool) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            pull: 0,
            charge: 0.0,
            score: 0,
            score_displayed: 0,
            state: PlayerState::Idle,
            attach: AttachSide::None,
            previous_input: ControllerSnapshot::default(),
            recovery_ticks: 0,
            ball_count: 0,
            color,
            is_human,
        }
    }

    #[inline]
    pub fn color(&self) -> u32 {
        self.color
    }

    #[inline]
    pub fn is_human(&self) -> bool {
        self.is_human
    }

    /// Inside the post-launch window where input is ignored
    #[inline]
    pub fn is_inert(&self) -> bool {
        self.state == PlayerState::Release && self.recovery_ticks > 0
    }

    /// Render-facing snapshot
    pub fn view(&self) -> PlayerView {
        PlayerView {
            pos: self.pos,
            state: self.state,
            score_displayed: self.score_displayed,
            color: self.color,
        }
    }
}

/// What the render/audio layer reads for one slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub state: PlayerState,
    pub score_displayed: u32,
    pub color: u32,
}

/// A collectible ball
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
    pub color: u32,
    /// Owning player slot, once claimed
    pub owner: Option<usize>,
}

/// Complete minigame state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: RoundPhase,
    pub roster: PlayerRoster,
    pub balls: BallRegistry,
    pub tuning: Tuning,
    /// Simulation tick counter (playing ticks only)
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh state in `Init`, reading the participant count from the host once
    pub fn new<H: Host>(host: &H, tuning: Tuning) -> Self {
        Self::with_humans(host.participant_count(), tuning)
    }

    /// Fresh state in `Init` with `human_count` human slots.
    ///
    /// Tuning that fails validation is replaced by the defaults.
    pub fn with_humans(human_count: usize, tuning: Tuning) -> Self {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(err) => {
                log::warn!("{err}, using default tuning");
                Tuning::default()
            }
        };
        Self {
            phase: RoundPhase::Init,
            roster: PlayerRoster::new(human_count),
            balls: BallRegistry::new(),
            tuning,
            time_ticks: 0,
        }
    }

    /// Lay out a fresh ball pool and start playing
    pub fn start_round(&mut self, seed: u64) {
        let half_extents = Vec2::new(ARENA_HALF_WIDTH, ARENA_HALF_HEIGHT);
        self.balls.scatter(&mut self.roster, seed, half_extents);
        self.time_ticks = 0;
        self.begin();
    }

    /// Enter `Playing`
    pub fn begin(&mut self) {
        self.set_phase(RoundPhase::Playing);
    }

    pub fn set_phase(&mut self, phase: RoundPhase) {
        if self.phase != phase {
            log::info!("Round phase {} -> {}", self.phase.label(), phase.label());
            self.phase = phase;
        }
    }

    /// Add points to a slot's authoritative score
    pub fn award(&mut self, slot: usize, points: u32) {
        let player = self.roster.player_mut(slot);
        player.score = player.score.saturating_add(points);
    }

    /// Render snapshot of every slot, in slot order
    pub fn views(&self) -> [PlayerView; MAX_PLAYERS] {
        self.roster.views()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_is_zeroed_idle() {
        let player = Player::new(0x112233FF, true);
        assert_eq!(player.state, PlayerState::Idle);
        assert_eq!(player.pos, Vec2::ZERO);
        assert_eq!(player.vel, Vec2::ZERO);
        assert_eq!(player.attach, AttachSide::None);
        assert!(player.is_human());
        assert_eq!(player.color(), 0x112233FF);
        assert!(!player.is_inert());
    }

    #[test]
    fn test_game_state_starts_in_init() {
        let mut state = GameState::with_humans(2, Tuning::default());
        assert_eq!(state.phase, RoundPhase::Init);
        state.begin();
        assert_eq!(state.phase, RoundPhase::Playing);
        assert_eq!(state.phase.label(), "Playing");
    }

    #[test]
    fn test_start_round_scatters_balls() {
        let mut state = GameState::with_humans(4, Tuning::default());
        state.start_round(11);
        assert_eq!(state.phase, RoundPhase::Playing);
        assert_eq!(state.balls.len(), MAX_BALLS);
        assert!(state.balls.iter().all(|b| b.owner.is_none()));
    }

    #[test]
    fn test_invalid_tuning_falls_back_to_defaults() {
        let tuning = Tuning {
            pull_min: 40,
            pull_max: 40,
            ..Default::default()
        };
        let state = GameState::with_humans(1, tuning);
        assert_eq!(state.tuning, Tuning::default());
    }

    #[test]
    fn test_new_reads_participant_count_from_host() {
        struct TwoPlayers;

        impl Host for TwoPlayers {
            fn participant_count(&self) -> usize {
                2
            }

            fn controller(&mut self, _slot: usize) -> Option<crate::sim::RawController> {
                None
            }

            fn end_round(&mut self) {}
        }

        let state = GameState::new(&TwoPlayers, Tuning::default());
        assert_eq!(state.roster.human_count(), 2);
        assert!(!state.roster.player(2).is_human());
    }

    #[test]
    fn test_award_saturates() {
        let mut state = GameState::with_humans(1, Tuning::default());
        state.award(0, u32::MAX);
        state.award(0, 5);
        assert_eq!(state.roster.player(0).score, u32::MAX);
    }
}
