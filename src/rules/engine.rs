//! Match results and win detection.
//!
//! A match ends in one of three ways:
//! - a participant takes its last prize card
//! - a participant has no creature left in play (active or bench)
//! - a participant cannot draw at the start of its turn
//!
//! or when the human quits. The first two are checked here; the deck-out
//! is raised by the orchestrator when `start_turn` fails.

use serde::{Deserialize, Serialize};

use crate::core::player::{Seat, Seats};
use crate::zones::Participant;

/// Why a seat won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// Winner took all of its prize cards.
    PrizesTaken,
    /// Loser has no creature in play.
    BoardWiped,
    /// Loser could not draw at turn start.
    DeckedOut,
}

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner {
        /// Winning seat.
        seat: Seat,
        /// How it was won.
        reason: WinReason,
    },
    /// The human abandoned the match.
    Quit,
}

impl GameResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(self, GameResult::Winner { seat: s, .. } if *s == seat)
    }

    /// Winning seat, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        match self {
            GameResult::Winner { seat, .. } => Some(*seat),
            GameResult::Quit => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner { seat, reason } => {
                let how = match reason {
                    WinReason::PrizesTaken => "took all prize cards",
                    WinReason::BoardWiped => "left the opponent without Pokémon",
                    WinReason::DeckedOut => "outlasted the opponent's deck",
                };
                write!(f, "{seat} wins: {how}")
            }
            GameResult::Quit => write!(f, "Game abandoned"),
        }
    }
}

/// Check both seats for a win, acting seat first.
///
/// A seat wins when its own prizes are gone or the other seat has neither
/// an active nor a bench creature.
#[must_use]
pub fn check_winner(participants: &Seats<Participant>, acting: Seat) -> Option<GameResult> {
    [acting, acting.opponent()].into_iter().find_map(|seat| {
        let me = &participants[seat];
        let other = &participants[seat.opponent()];

        let reason = if me.prizes_len() == 0 {
            WinReason::PrizesTaken
        } else if !other.has_creatures_in_play() {
            WinReason::BoardWiped
        } else {
            return None;
        };
        Some(GameResult::Winner { seat, reason })
    })
}
