//! Match outcome rules.
//!
//! Participants enforce the per-operation rules; this module decides when
//! the match as a whole is over and who won.

pub mod engine;

pub use engine::{check_winner, GameResult, WinReason};
