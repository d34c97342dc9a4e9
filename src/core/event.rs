//! Events: what a successful operation did.
//!
//! Participant operations return an `Event` rather than a preformatted
//! string. `Display` renders the line shown to the player; callers that need
//! facts (was there a knockout? are the prizes gone?) read the fields.

use serde::{Deserialize, Serialize};

use crate::cards::EffectKind;

/// Where a creature was placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// The active slot.
    Active,
    /// The bench.
    Bench,
}

/// Outcome of a resolved attack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackReport {
    /// Attacking creature.
    pub attacker: String,
    /// Attack name.
    pub attack: String,
    /// Damage dealt.
    pub damage: i32,
    /// Defending creature.
    pub defender: String,
    /// Defender hit points after the blow (may be negative).
    pub defender_hit_points: i32,
    /// Defender reached 0 or less and was discarded.
    pub knocked_out: bool,
    /// Attacker moved a prize card into hand.
    pub prize_taken: bool,
    /// Attacker has no prizes left.
    pub prizes_exhausted: bool,
}

/// Something that happened to the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Turn draw.
    Drew {
        /// Card drawn.
        card: String,
    },
    /// Hand returned and redrawn during setup.
    Mulliganed,
    /// Creature placed from hand.
    CreaturePlayed {
        /// Creature name.
        name: String,
        /// Destination.
        slot: Slot,
    },
    /// Resource attached to a creature.
    ResourceAttached {
        /// Receiving creature.
        target: String,
        /// Resources now attached to it.
        attached: u32,
    },
    /// Potion or Pokémon Center resolved.
    Healed {
        /// Which heal.
        effect: EffectKind,
        /// Healed creature.
        target: String,
        /// Hit points restored.
        restored: i32,
    },
    /// Energy Retrieval resolved.
    ResourceRetrieved,
    /// Professor's Research resolved.
    HandRefreshed {
        /// Cards discarded, including the Research itself.
        discarded: usize,
        /// Cards drawn.
        drawn: usize,
    },
    /// Switch resolved.
    Switched {
        /// Creature that is now active.
        new_active: String,
    },
    /// Attack resolved.
    Attacked(AttackReport),
    /// Bench creature moved up to the empty active slot.
    Promoted {
        /// Promoted creature.
        name: String,
    },
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Drew { card } => write!(f, "Drew {card}"),
            Event::Mulliganed => write!(f, "No basic Pokémon! Performed a mulligan"),
            Event::CreaturePlayed {
                name,
                slot: Slot::Active,
            } => write!(f, "Played {name} as your active Pokémon"),
            Event::CreaturePlayed {
                name,
                slot: Slot::Bench,
            } => write!(f, "Played {name} to your bench"),
            Event::ResourceAttached { target, .. } => write!(f, "Attached energy to {target}"),
            Event::Healed {
                effect: EffectKind::PokemonCenter,
                target,
                ..
            } => write!(f, "Healed all damage from {target}"),
            Event::Healed {
                target, restored, ..
            } => write!(f, "Used Potion to heal {target} by {restored}"),
            Event::ResourceRetrieved => {
                write!(f, "Retrieved an energy card from your discard pile")
            }
            Event::HandRefreshed { drawn, .. } => {
                write!(f, "Discarded your hand and drew {drawn} new cards")
            }
            Event::Switched { new_active } => {
                write!(f, "Switched your active Pokémon with {new_active}")
            }
            Event::Attacked(report) => {
                write!(
                    f,
                    "{} used {} for {} damage!",
                    report.attacker, report.attack, report.damage
                )?;
                if report.knocked_out {
                    write!(f, "\n{} was knocked out!", report.defender)?;
                    if report.prize_taken {
                        write!(f, " You took a prize card.")?;
                    }
                }
                if report.prizes_exhausted {
                    write!(f, "\nYou've taken all your prize cards!")?;
                }
                Ok(())
            }
            Event::Promoted { name } => write!(f, "Promoted {name} to active"),
        }
    }
}
