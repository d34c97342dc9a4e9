//! Card instances - a dealt copy of a definition.
//!
//! `Card` owns its definition data outright. Twenty resource cards in a
//! deck are twenty independent values; attaching to or damaging one copy
//! never touches another.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardKind};
use crate::core::entity::EntityId;

/// A card dealt into a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    entity_id: EntityId,
    definition: CardDefinition,
    hit_points: i32,
    attached_resources: u32,
}

impl Card {
    /// Deal a fresh copy of a definition.
    #[must_use]
    pub fn new(entity_id: EntityId, definition: CardDefinition) -> Self {
        Self {
            entity_id,
            hit_points: definition.hit_points,
            definition,
            attached_resources: 0,
        }
    }

    /// Unique id of this copy.
    #[must_use]
    pub fn entity_id(&self) -> EntityId {
        self.entity_id
    }

    /// The template this copy was dealt from.
    #[must_use]
    pub fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.definition.kind
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.definition.description
    }

    /// Current hit points. May be zero or negative after a knockout blow.
    #[must_use]
    pub fn hit_points(&self) -> i32 {
        self.hit_points
    }

    #[must_use]
    pub fn max_hit_points(&self) -> i32 {
        self.definition.hit_points
    }

    #[must_use]
    pub fn damage(&self) -> i32 {
        self.definition.damage
    }

    #[must_use]
    pub fn resource_cost(&self) -> u32 {
        self.definition.resource_cost
    }

    #[must_use]
    pub fn attached_resources(&self) -> u32 {
        self.attached_resources
    }

    #[must_use]
    pub fn is_creature(&self) -> bool {
        self.kind() == CardKind::Creature
    }

    #[must_use]
    pub fn is_resource(&self) -> bool {
        self.kind() == CardKind::Resource
    }

    #[must_use]
    pub fn is_basic(&self) -> bool {
        self.definition.is_basic()
    }

    /// Has enough resources attached to pay for its attack.
    #[must_use]
    pub fn can_pay_attack(&self) -> bool {
        self.attached_resources >= self.definition.resource_cost
    }

    #[must_use]
    pub fn is_knocked_out(&self) -> bool {
        self.hit_points <= 0
    }

    #[must_use]
    pub fn is_damaged(&self) -> bool {
        self.hit_points < self.definition.hit_points
    }

    pub(crate) fn attach_resource(&mut self) {
        self.attached_resources += 1;
    }

    pub(crate) fn take_damage(&mut self, amount: i32) {
        self.hit_points -= amount;
    }

    /// Restore up to `amount` hit points, never above the maximum.
    /// Returns the amount actually restored.
    pub(crate) fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hit_points;
        self.hit_points = (self.hit_points + amount).min(self.definition.hit_points);
        self.hit_points - before
    }

    pub(crate) fn heal_fully(&mut self) -> i32 {
        let before = self.hit_points;
        self.hit_points = self.definition.hit_points;
        self.hit_points - before
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            CardKind::Creature => write!(
                f,
                "{} (HP: {}/{}, DMG: {}, Energy: {}/{})",
                self.name(),
                self.hit_points,
                self.max_hit_points(),
                self.damage(),
                self.attached_resources,
                self.resource_cost()
            ),
            CardKind::Resource => write!(f, "{} Energy", self.name()),
            CardKind::Effect(_) => write!(f, "{} ({})", self.name(), self.description()),
        }
    }
}
