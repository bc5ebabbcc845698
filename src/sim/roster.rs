//! Player slots and their control assignment

use super::input::AiPilot;
use super::state::{Player, PlayerView};
use crate::consts::{MAX_PLAYERS, PLAYER_COLORS};

/// Fixed array of player slots, addressed by index
#[derive(Debug, Clone)]
pub struct PlayerRoster {
    players: [Player; MAX_PLAYERS],
    /// Control source for AI slots (unused for human slots)
    pilots: [AiPilot; MAX_PLAYERS],
}

impl PlayerRoster {
    /// The first `human_count` slots are human, the rest AI
    pub fn new(human_count: usize) -> Self {
        if human_count > MAX_PLAYERS {
            log::warn!("Participant count {human_count} exceeds {MAX_PLAYERS} slots, clamping");
        }
        Self {
            players: std::array::from_fn(|i| Player::new(PLAYER_COLORS[i], i < human_count)),
            pilots: Default::default(),
        }
    }

    #[inline]
    pub fn player(&self, slot: usize) -> &Player {
        &self.players[slot]
    }

    #[inline]
    pub fn player_mut(&mut self, slot: usize) -> &mut Player {
        &mut self.players[slot]
    }

    pub fn players(&self) -> &[Player; MAX_PLAYERS] {
        &self.players
    }

    /// Player and AI pilot for one slot, borrowed together
    pub fn slot_mut(&mut self, slot: usize) -> (&mut Player, &mut AiPilot) {
        (&mut self.players[slot], &mut self.pilots[slot])
    }

    /// Replace the AI for a slot. Human slots keep reading the host controller.
    pub fn set_pilot(&mut self, slot: usize, pilot: AiPilot) {
        debug_assert!(
            !self.players[slot].is_human(),
            "slot {slot} is human controlled"
        );
        self.pilots[slot] = pilot;
    }

    pub fn human_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_human()).count()
    }

    pub fn views(&self) -> [PlayerView; MAX_PLAYERS] {
        std::array::from_fn(|i| self.players[i].view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::PlayerState;

    #[test]
    fn test_first_slots_are_human() {
        let roster = PlayerRoster::new(2);
        let humans: Vec<bool> = roster.players().iter().map(|p| p.is_human()).collect();
        assert_eq!(humans, vec![true, true, false, false]);
        assert_eq!(roster.human_count(), 2);
    }

    #[test]
    fn test_colors_follow_slot_order() {
        let roster = PlayerRoster::new(0);
        for (i, player) in roster.players().iter().enumerate() {
            assert_eq!(player.color(), PLAYER_COLORS[i]);
            assert_eq!(player.state, PlayerState::Idle);
        }
    }

    #[test]
    fn test_excess_participants_clamp() {
        let roster = PlayerRoster::new(9);
        assert_eq!(roster.human_count(), MAX_PLAYERS);
    }
}
