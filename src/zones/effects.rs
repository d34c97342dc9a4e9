//! Effect (trainer) card resolution.
//!
//! Each `EffectKind` has a fixed behavior. An effect that cannot do anything
//! in the current state fails with `NoEffect` and the card stays in hand.

use super::participant::Participant;
use crate::cards::{CardKind, EffectKind};
use crate::core::config::{POTION_HEAL, STARTING_HAND_SIZE};
use crate::core::event::Event;
use crate::error::{RuleError, RuleResult};

impl Participant {
    /// Resolve the effect card at `index`.
    pub fn play_effect(&mut self, index: usize) -> RuleResult<Event> {
        let CardKind::Effect(effect) = self.card_at(index)?.kind() else {
            return Err(RuleError::WrongCardKind {
                expected: "a trainer",
            });
        };

        let event = match effect {
            EffectKind::Potion | EffectKind::PokemonCenter => self.heal_active(index, effect)?,
            EffectKind::EnergyRetrieval => self.retrieve_resource(index)?,
            EffectKind::ProfessorsResearch => self.refresh_hand(),
            EffectKind::Switch => self.switch_active(index)?,
        };

        tracing::debug!(participant = %self.name, ?effect, "effect resolved");
        Ok(event)
    }

    fn spend_card(&mut self, index: usize) {
        let card = self.hand.remove(index);
        self.discard.push(card);
    }

    fn heal_active(&mut self, index: usize, effect: EffectKind) -> RuleResult<Event> {
        let active = self
            .active
            .as_mut()
            .filter(|card| card.is_damaged())
            .ok_or(RuleError::NoEffect)?;

        let restored = match effect {
            EffectKind::PokemonCenter => active.heal_fully(),
            _ => active.heal(POTION_HEAL),
        };
        let target = active.name().to_string();

        self.spend_card(index);
        Ok(Event::Healed {
            effect,
            target,
            restored,
        })
    }

    fn retrieve_resource(&mut self, index: usize) -> RuleResult<Event> {
        let position = self
            .discard
            .iter()
            .position(|card| card.is_resource())
            .ok_or(RuleError::NoEffect)?;

        // `position` stays valid: spending only appends to the discard.
        self.spend_card(index);
        let resource = self.discard.remove(position);
        self.hand.push(resource);
        Ok(Event::ResourceRetrieved)
    }

    fn refresh_hand(&mut self) -> Event {
        let discarded = self.hand.len();
        self.discard.append(&mut self.hand);
        let drawn = (0..STARTING_HAND_SIZE)
            .take_while(|_| self.draw_one().is_ok())
            .count();
        Event::HandRefreshed { discarded, drawn }
    }

    fn switch_active(&mut self, index: usize) -> RuleResult<Event> {
        let (Some(active), Some(first)) = (self.active.as_mut(), self.bench.first_mut()) else {
            return Err(RuleError::NoEffect);
        };

        std::mem::swap(active, first);
        let new_active = active.name().to_string();

        self.spend_card(index);
        Ok(Event::Switched { new_active })
    }
}
