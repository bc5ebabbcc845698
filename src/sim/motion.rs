//! Explicit Euler position integration

use glam::Vec2;

use super::state::Player;

/// Advance a position by one tick
#[inline]
pub fn integrate(pos: Vec2, vel: Vec2, dt: f32) -> Vec2 {
    pos + vel * dt
}

/// Move a player along its current velocity. No world bounds are applied.
pub fn step_player(player: &mut Player, dt: f32) {
    player.pos = integrate(player.pos, player.vel, dt);
}
