//! Running a match: turn orchestration, command parsing, checkpoints and
//! invariant checks.
//!
//! ## Key Types
//!
//! - `Match`: phases, turn order, win detection and the event log
//! - `Command`: a parsed line of human input
//! - `MatchSnapshot`: serializable copy of a whole match
//! - `InvariantViolation`: what `check_invariants` reports

pub mod command;
pub mod game;
pub mod invariants;
pub mod snapshot;

pub use command::{parse_choice, Command};
pub use game::{Match, Phase};
pub use invariants::{check_invariants, InvariantViolation};
pub use snapshot::MatchSnapshot;
