//! Attack resolution between two participants.

use super::participant::Participant;
use crate::core::event::{AttackReport, Event};
use crate::error::{RuleError, RuleResult};

impl Participant {
    /// Attack the opponent's active creature with this participant's.
    ///
    /// Damage is not clamped, so the defender may end below zero. A defender
    /// at zero or less goes to its owner's discard and the attacker takes
    /// its first prize card into hand. The caller decides whether the match
    /// is over; the report only records what happened.
    ///
    /// The once-per-turn limit is the caller's to enforce. This clears
    /// `can_attack` on success but does not read it.
    pub fn attack(&mut self, opponent: &mut Participant) -> RuleResult<Event> {
        let attacker = self.active.as_ref().ok_or(RuleError::NoActiveCreature)?;
        let defender = opponent
            .active
            .as_mut()
            .ok_or(RuleError::OpponentHasNoActiveCreature)?;

        if !attacker.can_pay_attack() {
            return Err(RuleError::InsufficientResources {
                needed: attacker.resource_cost(),
                attached: attacker.attached_resources(),
            });
        }

        let damage = attacker.damage();
        defender.take_damage(damage);

        let mut report = AttackReport {
            attacker: attacker.name().to_string(),
            attack: attacker.description().to_string(),
            damage,
            defender: defender.name().to_string(),
            defender_hit_points: defender.hit_points(),
            knocked_out: defender.is_knocked_out(),
            prize_taken: false,
            prizes_exhausted: false,
        };

        if report.knocked_out {
            if let Some(fallen) = opponent.active.take() {
                opponent.discard.push(fallen);
            }
            if !self.prizes.is_empty() {
                let prize = self.prizes.remove(0);
                self.hand.push(prize);
                report.prize_taken = true;
            }
        }
        report.prizes_exhausted = self.prizes.is_empty();
        self.can_attack = false;

        tracing::debug!(
            participant = %self.name,
            attacker = %report.attacker,
            defender = %report.defender,
            damage,
            knocked_out = report.knocked_out,
            "attack resolved"
        );
        Ok(Event::Attacked(report))
    }

    /// Could `attack` succeed right now, given the turn still allows one?
    #[must_use]
    pub fn is_ready_to_attack(&self, opponent: &Participant) -> bool {
        self.can_attack
            && opponent.active.is_some()
            && self.active.as_ref().is_some_and(|card| card.can_pay_attack())
    }
}
