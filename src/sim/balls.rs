//! Collectible ball pool
//!
//! Fixed capacity, reset between rounds. Ownership changes go through
//! slot/pool indices; how a ball gets collected is decided by the caller.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::roster::PlayerRoster;
use super::state::Ball;
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct BallRegistry {
    balls: [Ball; MAX_BALLS],
    /// Live balls this round (prefix of `balls`)
    count: usize,
}

impl Default for BallRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BallRegistry {
    pub fn new() -> Self {
        Self {
            balls: [Ball::default(); MAX_BALLS],
            count: 0,
        }
    }

    /// Zero the pool and every player's ball count
    pub fn reset(&mut self, roster: &mut PlayerRoster) {
        self.balls = [Ball::default(); MAX_BALLS];
        self.count = 0;
        for slot in 0..MAX_PLAYERS {
            roster.player_mut(slot).ball_count = 0;
        }
    }

    /// Place a round's worth of unowned balls inside `half_extents` around the origin.
    ///
    /// Colors cycle through the player colors. Placement is deterministic per seed.
    pub fn scatter(&mut self, roster: &mut PlayerRoster, seed: u64, half_extents: Vec2) {
        self.reset(roster);
        let mut rng = Pcg32::seed_from_u64(seed);
        for (i, ball) in self.balls.iter_mut().enumerate() {
            let x = rng.random_range(-half_extents.x..=half_extents.x);
            let y = rng.random_range(-half_extents.y..=half_extents.y);
            *ball = Ball {
                pos: Vec2::new(x, y),
                radius: BALL_RADIUS,
                color: PLAYER_COLORS[i % MAX_PLAYERS],
                owner: None,
            };
        }
        self.count = MAX_BALLS;
        log::debug!("Scattered {} balls (seed {seed})", self.count);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn get(&self, index: usize) -> Option<&Ball> {
        self.balls[..self.count].get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ball> {
        self.balls[..self.count].iter()
    }

    /// Hand a ball to `slot`, moving it off any previous owner
    pub fn assign_owner(&mut self, roster: &mut PlayerRoster, index: usize, slot: usize) {
        debug_assert!(index < self.count, "ball {index} out of range");
        debug_assert!(slot < MAX_PLAYERS, "slot {slot} out of range");
        let ball = &mut self.balls[index];
        if ball.owner == Some(slot) {
            return;
        }
        if let Some(previous) = ball.owner.replace(slot) {
            let player = roster.player_mut(previous);
            player.ball_count = player.ball_count.saturating_sub(1);
        }
        roster.player_mut(slot).ball_count += 1;
    }

    /// Return a ball to the unowned pool
    pub fn release_owner(&mut self, roster: &mut PlayerRoster, index: usize) {
        debug_assert!(index < self.count, "ball {index} out of range");
        if let Some(previous) = self.balls[index].owner.take() {
            let player = roster.player_mut(previous);
            player.ball_count = player.ball_count.saturating_sub(1);
        }
    }

    /// Balls owned by `slot`, recounted from the pool
    pub fn owned_by(&self, slot: usize) -> usize {
        self.iter().filter(|b| b.owner == Some(slot)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scattered() -> (BallRegistry, PlayerRoster) {
        let mut roster = PlayerRoster::new(4);
        let mut balls = BallRegistry::new();
        balls.scatter(&mut roster, 42, Vec2::new(100.0, 60.0));
        (balls, roster)
    }

    #[test]
    fn test_scatter_fills_pool_unowned() {
        let (balls, _) = scattered();
        assert_eq!(balls.len(), MAX_BALLS);
        for ball in balls.iter() {
            assert!(ball.owner.is_none());
            assert!(ball.pos.x.abs() <= 100.0 && ball.pos.y.abs() <= 60.0);
            assert_eq!(ball.radius, BALL_RADIUS);
        }
    }

    #[test]
    fn test_scatter_is_deterministic() {
        let (a, _) = scattered();
        let (b, _) = scattered();
        assert!(a.iter().zip(b.iter()).all(|(x, y)| x == y));
    }

    #[test]
    fn test_ownership_transfer_keeps_counts() {
        let (mut balls, mut roster) = scattered();
        balls.assign_owner(&mut roster, 3, 0);
        balls.assign_owner(&mut roster, 4, 0);
        assert_eq!(roster.player(0).ball_count, 2);

        balls.assign_owner(&mut roster, 3, 2);
        assert_eq!(roster.player(0).ball_count, 1);
        assert_eq!(roster.player(2).ball_count, 1);
        assert_eq!(balls.owned_by(2), 1);

        balls.release_owner(&mut roster, 4);
        assert_eq!(roster.player(0).ball_count, 0);
        assert_eq!(balls.get(4).unwrap().owner, None);
    }

    #[test]
    fn test_reset_clears_counts() {
        let (mut balls, mut roster) = scattered();
        balls.assign_owner(&mut roster, 0, 1);
        balls.reset(&mut roster);
        assert!(balls.is_empty());
        assert_eq!(roster.player(1).ball_count, 0);
        assert!(balls.get(0).is_none());
    }
}
