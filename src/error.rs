//! Error types for rule violations, setup, and command input.
//!
//! Rule violations are ordinary values: every participant operation returns
//! `RuleResult<T>` and the caller shows the message and carries on. Only
//! `DeckEmpty` is turned into a game-ending event, by the orchestrator.

use std::fmt;

/// A rule the attempted operation would break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleError {
    /// Hand position does not exist.
    InvalidIndex(usize),
    /// Card at that position is the wrong kind for the operation.
    WrongCardKind {
        /// Kind the operation needed, with its article ("an energy").
        expected: &'static str,
    },
    /// Active slot already holds a creature.
    ActiveOccupied,
    /// Bench already holds the maximum number of creatures.
    BenchFull,
    /// No creature at the chosen resource target.
    NoValidTarget,
    /// Effect card cannot do anything right now.
    NoEffect,
    /// Acting participant has no active creature.
    NoActiveCreature,
    /// Opponent has no active creature to attack.
    OpponentHasNoActiveCreature,
    /// Attached resources do not cover the attack cost.
    InsufficientResources {
        /// Resources the attack needs.
        needed: u32,
        /// Resources currently attached.
        attached: u32,
    },
    /// No bench creature to promote.
    NoBenchPokemon,
    /// Nothing left to draw.
    DeckEmpty,
    /// Already attacked this turn.
    AttackSpent,
    /// Starting creatures must be basic.
    NotBasicCreature,
    /// Operation is not allowed in the current phase of the match.
    WrongPhase,
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::InvalidIndex(_) => write!(f, "Invalid card index"),
            RuleError::WrongCardKind { expected } => {
                write!(f, "This is not {expected} card")
            }
            RuleError::ActiveOccupied => write!(f, "You already have an active Pokémon"),
            RuleError::BenchFull => write!(f, "Your bench is full (max 5 Pokémon)"),
            RuleError::NoValidTarget => write!(f, "No valid Pokémon target for energy"),
            RuleError::NoEffect => write!(f, "Cannot play this trainer card now"),
            RuleError::NoActiveCreature => write!(f, "You don't have an active Pokémon"),
            RuleError::OpponentHasNoActiveCreature => {
                write!(f, "Opponent doesn't have an active Pokémon")
            }
            RuleError::InsufficientResources { needed, attached } => write!(
                f,
                "Not enough energy to attack (need {needed}, have {attached})"
            ),
            RuleError::NoBenchPokemon => write!(f, "No Pokémon on bench to promote"),
            RuleError::DeckEmpty => write!(f, "No cards left in the deck"),
            RuleError::AttackSpent => write!(f, "You've already attacked this turn!"),
            RuleError::NotBasicCreature => write!(f, "Please select a basic Pokémon"),
            RuleError::WrongPhase => write!(f, "That can't be done right now"),
        }
    }
}

impl std::error::Error for RuleError {}

/// Result type for participant and orchestrator operations.
pub type RuleResult<T> = Result<T, RuleError>;

/// Setup could not produce a playable opening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// The deck list has no basic creature, so no hand can ever qualify.
    NoBasicInDeck {
        /// Participant name.
        participant: String,
    },
    /// Redrew the allowed number of times without finding a basic creature.
    MulliganLimit {
        /// Participant name.
        participant: String,
        /// Mulligans performed.
        attempts: u32,
    },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::NoBasicInDeck { participant } => {
                write!(f, "{participant}'s deck contains no basic Pokémon")
            }
            SetupError::MulliganLimit {
                participant,
                attempts,
            } => write!(
                f,
                "{participant} found no basic Pokémon after {attempts} mulligans"
            ),
        }
    }
}

impl std::error::Error for SetupError {}

/// Command text that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Not a known word or a number.
    Unknown(String),
    /// Expected a number.
    NotANumber(String),
    /// Number outside the offered choices.
    OutOfRange {
        /// Number entered.
        value: usize,
        /// Highest valid choice.
        max: usize,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Unknown(_) => {
                write!(f, "Unknown command. Type 'help' for a list of commands.")
            }
            InputError::NotANumber(_) => write!(f, "Please enter a number."),
            InputError::OutOfRange { value, max } => {
                write!(f, "Invalid choice {value}: pick 1 to {max}")
            }
        }
    }
}

impl std::error::Error for InputError {}
