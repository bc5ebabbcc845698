//! Fixed timestep simulation tick
//!
//! One call advances every player slot, in slot order, by one tick.

use super::input::{InputSample, Pilot};
use super::motion::step_player;
use super::pull::{
    Pull, charge_pull, launch_velocity, leaves_deadzone, moving_velocity_x, reaches_pull,
};
use super::score::animate;
use super::state::{GameState, Player, PlayerState, RoundPhase};
use crate::consts::MAX_PLAYERS;
use crate::host::Host;
use crate::tuning::Tuning;

/// Result of updating one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotFlow {
    Continue,
    /// A human pressed start
    EndRound,
}

/// Advance the game state by one fixed timestep.
///
/// Outside `Playing` this does nothing.
pub fn tick<H: Host>(state: &mut GameState, host: &mut H, dt: f32) {
    if state.phase != RoundPhase::Playing {
        return;
    }
    state.time_ticks += 1;

    for slot in 0..MAX_PLAYERS {
        if update_slot(state, host, slot, dt) == SlotFlow::EndRound {
            log::info!("Player {} ended the round", slot + 1);
            host.end_round();
            state.set_phase(RoundPhase::Ending);
            return;
        }
    }
}

fn update_slot<H: Host>(state: &mut GameState, host: &mut H, slot: usize, dt: f32) -> SlotFlow {
    let GameState { roster, tuning, .. } = state;
    let (player, pilot) = roster.slot_mut(slot);

    if player.state == PlayerState::Release {
        debug_assert!(player.recovery_ticks > 0, "slot {slot} released with no recovery");
        player.recovery_ticks = player.recovery_ticks.saturating_sub(1);
        if player.recovery_ticks > 0 {
            return SlotFlow::Continue;
        }
        player.state = PlayerState::Idle;
        log::debug!("Player {} recovered", slot + 1);
    }

    let raw = if player.is_human() {
        host.controller(slot)
    } else {
        pilot.drive(slot, player)
    };

    match raw {
        Some(raw) => {
            let (sample, snapshot) =
                InputSample::read(&raw, &player.previous_input, tuning.stick_limit);
            player.previous_input = snapshot;

            if player.is_human() && sample.quit.pressed {
                return SlotFlow::EndRound;
            }

            let before = player.state;
            apply_input(player, &sample, tuning);
            if player.state != before {
                log::debug!("Player {}: {:?} -> {:?}", slot + 1, before, player.state);
            }
        }
        None if player.is_human() => {
            log::warn!("Player {}: controller read failed, holding state", slot + 1);
        }
        None => {}
    }

    step_player(player, dt);
    player.score_displayed = animate(player.score_displayed, player.score);
    SlotFlow::Continue
}

/// Run one tick of the player state machine against a sample.
///
/// Velocity is only written here; position is left to the integrator.
pub fn apply_input(player: &mut Player, sample: &InputSample, tuning: &Tuning) {
    let loaded = Pull {
        deflection: player.pull,
        charge: player.charge,
    };

    if sample.charge.held {
        match player.state {
            PlayerState::Idle => player.state = PlayerState::ChargeStart,
            PlayerState::ChargeStart if reaches_pull(sample.stick_x, tuning) => {
                player.state = PlayerState::ChargeActive;
                store_pull(player, charge_pull(sample.stick_x, Pull::default(), tuning));
            }
            PlayerState::ChargeActive => {
                store_pull(player, charge_pull(sample.stick_x, loaded, tuning));
            }
            _ => {}
        }
        return;
    }

    match player.state {
        PlayerState::ChargeStart => {
            player.state = PlayerState::Idle;
            store_pull(player, Pull::default());
        }
        PlayerState::ChargeActive => {
            let pull = charge_pull(sample.stick_x, loaded, tuning);
            player.vel = launch_velocity(pull, sample.stick_y, tuning);
            player.state = PlayerState::Release;
            player.recovery_ticks = tuning.recovery_ticks;
            store_pull(player, Pull::default());
            log::debug!("Launch at {:.2} charge, velocity {}", pull.charge, player.vel);
        }
        PlayerState::Idle => {
            if leaves_deadzone(sample.stick_x, tuning) {
                player.state = PlayerState::Moving;
            }
        }
        PlayerState::Moving => {
            player.vel.x = moving_velocity_x(sample.stick_x, tuning);
        }
        PlayerState::Release => {}
    }
}

#[inline]
fn store_pull(player: &mut Player, pull: Pull) {
    player.pull = pull.deflection;
    player.charge = pull.charge;
}
