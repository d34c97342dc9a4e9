//! A participant and its six zones.
//!
//! `Participant` is the only owner of cards during a match. Every move of a
//! card between deck, hand, active slot, bench, discard and prizes goes
//! through one of its methods, so the zone invariants are enforced in one
//! place:
//!
//! - the bench never holds more than `BENCH_CAPACITY` creatures
//! - only creatures occupy the active slot or the bench
//! - a card is in exactly one zone
//!
//! Resource attachment, effect cards and combat live in the sibling
//! `resources`, `effects` and `combat` modules as further `impl` blocks.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::action::ResourceTarget;
use crate::core::config::{BENCH_CAPACITY, PRIZE_COUNT, STARTING_HAND_SIZE};
use crate::core::event::{Event, Slot};
use crate::core::rng::GameRng;
use crate::error::{RuleError, RuleResult};

/// Bench storage, inline up to capacity.
pub type Bench = SmallVec<[Card; BENCH_CAPACITY]>;

/// One side of the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub(super) name: String,
    pub(super) scripted: bool,
    /// Front is the next draw.
    pub(super) deck: VecDeque<Card>,
    pub(super) hand: Vec<Card>,
    pub(super) active: Option<Card>,
    pub(super) bench: Bench,
    pub(super) discard: Vec<Card>,
    pub(super) prizes: Vec<Card>,
    pub(super) can_attack: bool,
}

impl Participant {
    /// Create a participant holding `deck` in the given order.
    #[must_use]
    pub fn new(name: impl Into<String>, scripted: bool, deck: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            scripted,
            deck: deck.into(),
            hand: Vec::new(),
            active: None,
            bench: Bench::new(),
            discard: Vec::new(),
            prizes: Vec::new(),
            can_attack: false,
        }
    }

    // === Views ===

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Controlled by the opponent policy rather than a person.
    #[must_use]
    pub fn is_scripted(&self) -> bool {
        self.scripted
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn active(&self) -> Option<&Card> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn bench(&self) -> &[Card] {
        &self.bench
    }

    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    #[must_use]
    pub fn prizes_len(&self) -> usize {
        self.prizes.len()
    }

    #[must_use]
    pub fn can_attack(&self) -> bool {
        self.can_attack
    }

    #[must_use]
    pub fn bench_is_full(&self) -> bool {
        self.bench.len() >= BENCH_CAPACITY
    }

    /// Has a creature in the active slot or on the bench.
    #[must_use]
    pub fn has_creatures_in_play(&self) -> bool {
        self.active.is_some() || !self.bench.is_empty()
    }

    /// Every card this participant holds, across all zones.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.deck
            .iter()
            .chain(self.hand.iter())
            .chain(self.active.iter())
            .chain(self.bench.iter())
            .chain(self.discard.iter())
            .chain(self.prizes.iter())
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.hand.len()
            + usize::from(self.active.is_some())
            + self.bench.len()
            + self.discard.len()
            + self.prizes.len()
    }

    /// Hand positions holding basic creatures.
    #[must_use]
    pub fn basic_creature_indices(&self) -> Vec<usize> {
        self.hand
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_basic())
            .map(|(i, _)| i)
            .collect()
    }

    /// Creatures a resource could be attached to: active first, then bench.
    #[must_use]
    pub fn resource_targets(&self) -> Vec<(ResourceTarget, &Card)> {
        self.active
            .iter()
            .map(|card| (ResourceTarget::Active, card))
            .chain(
                self.bench
                    .iter()
                    .enumerate()
                    .map(|(i, card)| (ResourceTarget::Bench(i), card)),
            )
            .collect()
    }

    pub(super) fn card_at(&self, index: usize) -> RuleResult<&Card> {
        self.hand.get(index).ok_or(RuleError::InvalidIndex(index))
    }

    // === Drawing and setup ===

    /// Move the front of the deck into the hand.
    ///
    /// An empty deck yields `DeckEmpty` and leaves the hand as it was.
    pub fn draw_one(&mut self) -> RuleResult<&Card> {
        let card = self.deck.pop_front().ok_or(RuleError::DeckEmpty)?;
        self.hand.push(card);
        self.hand.last().ok_or(RuleError::DeckEmpty)
    }

    /// Draw up to a full starting hand. Returns the number drawn.
    pub fn draw_starting_hand(&mut self) -> usize {
        (0..STARTING_HAND_SIZE)
            .take_while(|_| self.draw_one().is_ok())
            .count()
    }

    /// Set aside up to `PRIZE_COUNT` cards from the deck front.
    pub fn setup_prizes(&mut self) -> usize {
        let count = PRIZE_COUNT.min(self.deck.len());
        self.prizes.extend(self.deck.drain(..count));
        count
    }

    #[must_use]
    pub fn has_basic_creature(&self) -> bool {
        self.hand.iter().any(Card::is_basic)
    }

    /// Could any hand drawn from these cards contain a basic creature?
    #[must_use]
    pub fn owns_basic_creature(&self) -> bool {
        self.deck.iter().chain(self.hand.iter()).any(Card::is_basic)
    }

    /// Return the hand to the deck, reshuffle, and draw a new hand.
    ///
    /// Returns `true` when the new hand still has no basic creature.
    pub fn mulligan(&mut self, rng: &mut GameRng) -> bool {
        self.deck.extend(self.hand.drain(..));
        rng.shuffle(self.deck.make_contiguous());
        self.draw_starting_hand();
        let still_needed = !self.has_basic_creature();
        tracing::debug!(participant = %self.name, still_needed, "mulligan");
        still_needed
    }

    /// Draw for the turn and regain the attack.
    pub fn start_turn(&mut self) -> RuleResult<Event> {
        let card = self.draw_one()?.to_string();
        self.can_attack = true;
        tracing::debug!(participant = %self.name, %card, "turn draw");
        Ok(Event::Drew { card })
    }

    /// Give up any unused attack.
    pub fn end_turn(&mut self) {
        self.can_attack = false;
    }

    // === Creatures ===

    /// Put the creature at `index` into the active slot or onto the bench.
    pub fn play_creature(&mut self, index: usize, as_active: bool) -> RuleResult<Event> {
        if !self.card_at(index)?.is_creature() {
            return Err(RuleError::WrongCardKind {
                expected: "a Pokémon",
            });
        }

        let slot = if as_active {
            if self.active.is_some() {
                return Err(RuleError::ActiveOccupied);
            }
            Slot::Active
        } else {
            if self.bench_is_full() {
                return Err(RuleError::BenchFull);
            }
            Slot::Bench
        };

        let card = self.hand.remove(index);
        let name = card.name().to_string();
        match slot {
            Slot::Active => self.active = Some(card),
            Slot::Bench => self.bench.push(card),
        }

        tracing::debug!(participant = %self.name, %name, ?slot, "creature played");
        Ok(Event::CreaturePlayed { name, slot })
    }

    /// Move the first bench creature into the empty active slot.
    ///
    /// Always promotes bench position 0.
    pub fn choose_new_active(&mut self) -> RuleResult<Event> {
        if self.active.is_some() {
            return Err(RuleError::ActiveOccupied);
        }
        if self.bench.is_empty() {
            return Err(RuleError::NoBenchPokemon);
        }

        let card = self.bench.remove(0);
        let name = card.name().to_string();
        self.active = Some(card);

        tracing::debug!(participant = %self.name, %name, "promoted from bench");
        Ok(Event::Promoted { name })
    }
}
