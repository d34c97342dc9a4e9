//! In-memory match checkpoints.
//!
//! A snapshot holds everything a `Match` needs to continue exactly where it
//! was, including the RNG position, so a restored match replays the same
//! shuffles. Snapshots live in memory only; nothing is written to disk.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::action::ActionRecord;
use crate::core::config::GameConfig;
use crate::core::entity::EntityAllocator;
use crate::core::player::Seats;
use crate::core::rng::GameRngState;
use crate::zones::Participant;

use super::game::Phase;

/// Complete, serializable match state. The opponent policy is not part of
/// it and is supplied again on restore.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub config: GameConfig,
    pub participants: Seats<Participant>,
    pub rng: GameRngState,
    pub ids: EntityAllocator,
    pub deck_size: usize,
    pub phase: Phase,
    pub turn: u32,
    pub sequence: u32,
    pub log: Vector<ActionRecord>,
}

impl MatchSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Decode bytes produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}
