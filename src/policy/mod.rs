//! Opponent policies: how the scripted participant plays.
//!
//! A policy is handed mutable access to its own participant (and the
//! opponent, for attacking) and performs a whole turn by calling the same
//! participant operations a human would. It reports the events that
//! succeeded, in order; rejected attempts are dropped.

pub mod greedy;

pub use greedy::GreedyPolicy;

use crate::core::Event;
use crate::zones::Participant;

/// Decision procedure for a scripted participant.
pub trait OpponentPolicy: Send + Sync {
    /// Place starting creatures from the opening hand.
    fn setup(&self, me: &mut Participant) -> Vec<Event>;

    /// Play one turn after the draw step.
    fn take_turn(&self, me: &mut Participant, opponent: &mut Participant) -> Vec<Event>;
}
