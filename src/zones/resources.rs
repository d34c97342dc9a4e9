//! Attaching resource cards to creatures in play.

use super::participant::Participant;
use crate::core::action::ResourceTarget;
use crate::core::event::Event;
use crate::error::{RuleError, RuleResult};

impl Participant {
    /// Attach the resource at `index` to the creature at `target`.
    ///
    /// Nothing moves unless the card is a resource and the target holds a
    /// creature.
    ///
    /// The attachment is kept as a count on the creature and the card itself
    /// goes to the discard pile, so every dealt card stays in exactly one
    /// zone. Energy Retrieval may therefore return an energy that was
    /// attached earlier; its attachment still counts.
    pub fn play_resource(&mut self, index: usize, target: ResourceTarget) -> RuleResult<Event> {
        if !self.card_at(index)?.is_resource() {
            return Err(RuleError::WrongCardKind {
                expected: "an energy",
            });
        }

        let creature = match target {
            ResourceTarget::Active => self.active.as_mut(),
            ResourceTarget::Bench(i) => self.bench.get_mut(i),
        }
        .ok_or(RuleError::NoValidTarget)?;

        creature.attach_resource();
        let event = Event::ResourceAttached {
            target: creature.name().to_string(),
            attached: creature.attached_resources(),
        };

        // Resources stay bound to the creature as a count; the card itself
        // is spent.
        let card = self.hand.remove(index);
        self.discard.push(card);

        tracing::debug!(participant = %self.name, ?target, "resource attached");
        Ok(event)
    }
}
