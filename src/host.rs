//! Host collaborator interface
//!
//! The minigame host owns controllers and the round lifecycle. The core only
//! talks to it through this trait, once per tick.

use crate::sim::RawController;

/// Services the simulation consumes from the host
pub trait Host {
    /// How many of the slots are human controlled (read once at round start)
    fn participant_count(&self) -> usize;

    /// Current controller snapshot for a human slot.
    ///
    /// `None` means the read failed this tick; the player keeps its state.
    fn controller(&mut self, slot: usize) -> Option<RawController>;

    /// Fire-and-forget request to end the round
    fn end_round(&mut self);
}
