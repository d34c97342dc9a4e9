//! Actions a participant can ask for, and the match's record of events.
//!
//! `Action` is what the human-turn loop hands to the orchestrator after
//! parsing a command. `ActionRecord` is one entry of the match log: who
//! did what, on which turn, in which order.

use serde::{Deserialize, Serialize};

use super::event::Event;
use super::player::Seat;

/// Where to attach a resource card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceTarget {
    /// The active creature.
    Active,
    /// Bench creature at this 0-based position.
    Bench(usize),
}

/// An intent from the acting participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play the card at a 0-based hand position.
    ///
    /// Creatures go active when the slot is empty, otherwise to the bench.
    /// Resources attach to the active creature. Effects resolve.
    PlayCard {
        /// Hand position.
        index: usize,
    },
    /// Attach the resource at a hand position to a chosen creature.
    AttachResource {
        /// Hand position.
        index: usize,
        /// Receiving creature.
        target: ResourceTarget,
    },
    /// Attack the opponent's active creature.
    Attack,
    /// Pass control to the opponent.
    EndTurn,
    /// Abandon the match.
    Quit,
}

/// A logged event with metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat the event happened to.
    pub seat: Seat,

    /// What happened.
    pub event: Event,

    /// Turn number (0 during setup).
    pub turn: u32,

    /// Position within the whole log.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(seat: Seat, event: Event, turn: u32, sequence: u32) -> Self {
        Self {
            seat,
            event,
            turn,
            sequence,
        }
    }
}
