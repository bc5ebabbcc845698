//! Spider Pull headless host
//!
//! Drives a scripted round at the fixed tick rate and prints the final
//! render snapshot as JSON. Usage: `spider-pull [tuning.json]`

use spider_pull::consts::*;
use spider_pull::sim::{AiPilot, GameState, RawController, RoundPhase, WanderPilot, tick};
use spider_pull::{Host, Tuning};

/// Round length in ticks (ten seconds)
const ROUND_TICKS: u64 = 600;
/// Points handed out periodically to show score smoothing
const AWARD_EVERY: u64 = 120;

/// One human on a scripted pad
struct ScriptedHost {
    tick: u64,
    round_over: bool,
}

impl ScriptedHost {
    fn pad(&self) -> RawController {
        // Drift right, then load a hard pull to the right and let go
        match self.tick % 180 {
            0..=59 => RawController {
                stick_x: 40.0,
                ..Default::default()
            },
            60..=89 => RawController::default(),
            90..=139 => RawController {
                stick_x: 60.0,
                charge: true,
                ..Default::default()
            },
            _ => RawController::default(),
        }
    }
}

impl Host for ScriptedHost {
    fn participant_count(&self) -> usize {
        1
    }

    fn controller(&mut self, _slot: usize) -> Option<RawController> {
        if self.tick + 1 >= ROUND_TICKS {
            return Some(RawController {
                start: true,
                ..Default::default()
            });
        }
        Some(self.pad())
    }

    fn end_round(&mut self) {
        self.round_over = true;
    }
}

fn load_tuning() -> Tuning {
    let Some(path) = std::env::args().nth(1) else {
        return Tuning::default();
    };
    let json = match std::fs::read_to_string(&path) {
        Ok(json) => json,
        Err(err) => {
            log::error!("Failed to read {path}: {err}, using default tuning");
            return Tuning::default();
        }
    };
    match Tuning::from_json(&json) {
        Ok(tuning) => {
            log::info!("Loaded tuning from {path}");
            tuning
        }
        Err(err) => {
            log::error!("{err}, using default tuning");
            Tuning::default()
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut host = ScriptedHost {
        tick: 0,
        round_over: false,
    };
    let mut state = GameState::new(&host, load_tuning());
    for slot in state.roster.human_count()..MAX_PLAYERS {
        state
            .roster
            .set_pilot(slot, AiPilot::Wander(WanderPilot::new(slot as u64)));
    }
    state.start_round(0x5EED);

    while !host.round_over && state.phase == RoundPhase::Playing {
        if host.tick > 0 && host.tick % AWARD_EVERY == 0 {
            let slot = (host.tick / AWARD_EVERY) as usize % MAX_PLAYERS;
            state.award(slot, 25);
        }
        tick(&mut state, &mut host, SIM_DT);
        host.tick += 1;
    }
    state.set_phase(RoundPhase::Cleanup);

    log::info!("Round finished after {} ticks", state.time_ticks);
    match serde_json::to_string_pretty(&state.views()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Failed to encode snapshot: {err}"),
    }
}
