//! The fixed greedy opponent.
//!
//! One pass per turn, always in this order:
//!
//! 1. no active creature: the first creature in hand becomes active
//! 2. creatures from hand fill the bench, left to right
//! 3. one resource goes onto the active creature
//! 4. effect cards are tried left to right until one resolves
//! 5. attack when the attack is payable and there is a target
//!
//! A step that the rules reject is skipped, never retried.

use super::OpponentPolicy;
use crate::cards::{Card, CardKind};
use crate::core::action::ResourceTarget;
use crate::core::Event;
use crate::zones::Participant;

/// Deterministic greedy play. Holds no state.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    fn first_index(me: &Participant, wanted: impl Fn(&Card) -> bool) -> Option<usize> {
        me.hand().iter().position(wanted)
    }

    fn fill_active(me: &mut Participant, events: &mut Vec<Event>) {
        if me.active().is_some() {
            return;
        }
        if let Some(index) = Self::first_index(me, Card::is_creature) {
            events.extend(me.play_creature(index, true).ok());
        }
    }

    fn fill_bench(me: &mut Participant, events: &mut Vec<Event>) {
        // Each play shrinks the hand, so search again every time.
        while !me.bench_is_full() {
            let Some(index) = Self::first_index(me, Card::is_creature) else {
                break;
            };
            match me.play_creature(index, false) {
                Ok(event) => events.push(event),
                Err(_) => break,
            }
        }
    }

    fn attach_one(me: &mut Participant, events: &mut Vec<Event>) {
        if me.active().is_none() {
            return;
        }
        if let Some(index) = Self::first_index(me, Card::is_resource) {
            events.extend(me.play_resource(index, ResourceTarget::Active).ok());
        }
    }

    fn try_effects(me: &mut Participant, events: &mut Vec<Event>) {
        let candidates: Vec<usize> = me
            .hand()
            .iter()
            .enumerate()
            .filter(|(_, card)| matches!(card.kind(), CardKind::Effect(_)))
            .map(|(i, _)| i)
            .collect();

        // A rejected effect leaves the hand untouched, so later indices hold.
        for index in candidates {
            if let Ok(event) = me.play_effect(index) {
                events.push(event);
                break;
            }
        }
    }
}

impl OpponentPolicy for GreedyPolicy {
    fn setup(&self, me: &mut Participant) -> Vec<Event> {
        let mut events = Vec::new();

        while let Some(index) = Self::first_index(me, Card::is_basic) {
            let as_active = me.active().is_none();
            if !as_active && me.bench_is_full() {
                break;
            }
            match me.play_creature(index, as_active) {
                Ok(event) => events.push(event),
                Err(_) => break,
            }
        }

        tracing::debug!(participant = %me.name(), placed = events.len(), "policy setup");
        events
    }

    fn take_turn(&self, me: &mut Participant, opponent: &mut Participant) -> Vec<Event> {
        let mut events = Vec::new();

        Self::fill_active(me, &mut events);
        Self::fill_bench(me, &mut events);
        Self::attach_one(me, &mut events);
        Self::try_effects(me, &mut events);

        if me.is_ready_to_attack(opponent) {
            events.extend(me.attack(opponent).ok());
        }

        tracing::debug!(participant = %me.name(), actions = events.len(), "policy turn");
        events
    }
}
