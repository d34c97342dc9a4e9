//! # rock-tcg
//!
//! A rules engine for a small rock-type trading card game: one human seat
//! against a scripted greedy opponent.
//!
//! ## Design Principles
//!
//! 1. **Participants own their cards**: every card sits in exactly one zone
//!    of one `Participant`, and only participant methods move it.
//!
//! 2. **Rule violations are values**: operations return `RuleResult<Event>`.
//!    A rejected operation changes nothing, and the caller decides what to
//!    show.
//!
//! 3. **Deterministic by seed**: all shuffling goes through one `GameRng`,
//!    so a seed and a list of actions reproduce a match exactly.
//!
//! ## Modules
//!
//! - `core`: entity ids, seats, configuration, actions, events, RNG
//! - `cards`: card definitions, dealt instances, the catalog
//! - `zones`: the participant state machine
//! - `policy`: the scripted opponent
//! - `rules`: match results and win detection
//! - `games`: the turn orchestrator, commands, snapshots, invariants
//!
//! ## Example
//!
//! ```
//! use rock_tcg::{Action, GameConfig, Match, Phase, Seat};
//!
//! let mut game = Match::new(GameConfig::new(7)).unwrap();
//! let basic = game.participant(Seat::Human).basic_creature_indices()[0];
//! game.place_starting_creature(basic, true).unwrap();
//! game.finish_setup().unwrap();
//!
//! assert_eq!(game.phase(), Phase::Turn(Seat::Human));
//! game.apply(Action::EndTurn).unwrap();
//! game.run_scripted_turn().unwrap();
//! ```

pub mod cards;
pub mod core;
pub mod error;
pub mod games;
pub mod policy;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, AttackReport, EntityAllocator, EntityId, Event, GameConfig, GameRng,
    GameRngState, ResourceTarget, Seat, Seats, Slot,
};

pub use crate::cards::{Card, CardCatalog, CardDefinition, CardId, CardKind, EffectKind};

pub use crate::error::{InputError, RuleError, RuleResult, SetupError};

pub use crate::zones::Participant;

pub use crate::policy::{GreedyPolicy, OpponentPolicy};

pub use crate::rules::{GameResult, WinReason};

pub use crate::games::{check_invariants, Command, InvariantViolation, Match, MatchSnapshot, Phase};
