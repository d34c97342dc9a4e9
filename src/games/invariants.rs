//! Match invariants - sanity checks that detect bugs.
//!
//! No sequence of legal operations should ever trip these. Tests and the
//! debug build of the CLI run them after every step.

use rustc_hash::FxHashSet;

use crate::core::config::{BENCH_CAPACITY, PRIZE_COUNT};
use super::game::{Match, Phase};

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all match invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(game: &Match) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut seen = FxHashSet::default();

    for (seat, participant) in game.participants().iter() {
        let name = participant.name();

        if participant.bench().len() > BENCH_CAPACITY {
            violations.push(InvariantViolation {
                message: format!(
                    "{name} has {} bench creatures > {BENCH_CAPACITY}",
                    participant.bench().len()
                ),
            });
        }

        if participant.prizes_len() > PRIZE_COUNT {
            violations.push(InvariantViolation {
                message: format!("{name} has {} prizes", participant.prizes_len()),
            });
        }

        let in_play = participant.active().into_iter().chain(participant.bench());
        for card in in_play {
            if !card.is_creature() {
                violations.push(InvariantViolation {
                    message: format!("{name} has non-creature {} in play", card.name()),
                });
            }
        }

        let count = participant.card_count();
        let expected = game.deck_size();
        if count != expected {
            violations.push(InvariantViolation {
                message: format!("{name} holds {count} cards, expected {expected}"),
            });
        }

        for card in participant.cards() {
            if !seen.insert(card.entity_id()) {
                violations.push(InvariantViolation {
                    message: format!("{} appears twice ({name})", card.entity_id()),
                });
            }
        }

        let out_of_turn = match game.phase() {
            Phase::Setup => true,
            Phase::Turn(current) => current != seat,
            Phase::GameOver(_) => false,
        };
        if participant.can_attack() && out_of_turn {
            violations.push(InvariantViolation {
                message: format!("{name} can attack outside its turn"),
            });
        }
    }

    if let Phase::Turn(_) = game.phase() {
        for (_, participant) in game.participants().iter() {
            if !participant.has_creatures_in_play() {
                violations.push(InvariantViolation {
                    message: format!("{} has no creatures but the match goes on", participant.name()),
                });
            }
        }
    }

    violations
}
