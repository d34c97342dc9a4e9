//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card template.
//! Geodude always has 60 hit points and a 20-damage Rock Throw; those are
//! part of the definition. Per-copy state (damage taken, attached
//! resources) lives in `Card`.

use serde::{Deserialize, Serialize};

/// Identifier for a card definition.
///
/// This identifies the template ("Geodude"), not a dealt copy of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Which built-in effect an effect card performs.
///
/// Chosen once when the catalog defines the card; play-time dispatch
/// matches on this, never on the display name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    /// Restore a fixed amount of hit points to the active creature.
    Potion,
    /// Return a resource card from discard to hand.
    EnergyRetrieval,
    /// Discard the hand and draw a fresh one.
    ProfessorsResearch,
    /// Swap the active creature with the first bench creature.
    Switch,
    /// Restore the active creature to full hit points.
    PokemonCenter,
}

/// The three card kinds of the ruleset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Can occupy the active slot or the bench and attack.
    Creature,
    /// Attaches to a creature to pay for its attack.
    Resource,
    /// One-shot card with a built-in effect.
    Effect(EffectKind),
}

impl CardKind {
    /// Short label for display.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CardKind::Creature => "pokemon",
            CardKind::Resource => "energy",
            CardKind::Effect(_) => "trainer",
        }
    }
}

/// Static card definition.
///
/// ```
/// use rock_tcg::cards::{CardDefinition, CardId, CardKind};
///
/// let geodude = CardDefinition::creature(CardId::new(1), "Geodude", 60, 20, 1, "Rock Throw");
///
/// assert_eq!(geodude.kind, CardKind::Creature);
/// assert!(geodude.is_basic());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Identifier for this definition.
    pub id: CardId,

    /// Card name.
    pub name: String,

    /// Card kind, carrying the effect identity for effect cards.
    pub kind: CardKind,

    /// Maximum hit points (0 for non-creatures).
    pub hit_points: i32,

    /// Attack damage (0 for non-creatures).
    pub damage: i32,

    /// Resources that must be attached before attacking.
    pub resource_cost: u32,

    /// Attack name for creatures, rules text otherwise.
    pub description: String,
}

impl CardDefinition {
    /// Define a creature.
    #[must_use]
    pub fn creature(
        id: CardId,
        name: impl Into<String>,
        hit_points: i32,
        damage: i32,
        resource_cost: u32,
        attack_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind: CardKind::Creature,
            hit_points,
            damage,
            resource_cost,
            description: attack_name.into(),
        }
    }

    /// Define a resource card.
    #[must_use]
    pub fn resource(id: CardId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: CardKind::Resource,
            hit_points: 0,
            damage: 0,
            resource_cost: 0,
            description: description.into(),
        }
    }

    /// Define an effect card.
    #[must_use]
    pub fn effect(
        id: CardId,
        name: impl Into<String>,
        effect: EffectKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind: CardKind::Effect(effect),
            hit_points: 0,
            damage: 0,
            resource_cost: 0,
            description: description.into(),
        }
    }

    /// Is this a creature that may be placed without prerequisites?
    #[must_use]
    pub fn is_basic(&self) -> bool {
        self.kind == CardKind::Creature && self.resource_cost <= crate::core::config::BASIC_MAX_COST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_basic_is_cost_at_most_one() {
        let cheap = CardDefinition::creature(CardId::new(1), "Larvitar", 50, 10, 1, "Bite");
        let heavy = CardDefinition::creature(CardId::new(2), "Golem", 120, 70, 3, "Earthquake");
        let energy = CardDefinition::resource(CardId::new(3), "Rock", "Energy");

        assert!(cheap.is_basic());
        assert!(!heavy.is_basic());
        assert!(!energy.is_basic());
    }

    #[test]
    fn test_effect_kind_is_carried() {
        let switch = CardDefinition::effect(CardId::new(4), "Switch", EffectKind::Switch, "Swap");

        assert_eq!(switch.kind, CardKind::Effect(EffectKind::Switch));
        assert_eq!(switch.kind.label(), "trainer");
        assert_eq!(switch.hit_points, 0);
    }

    #[test]
    fn test_card_definition_serialization() {
        let card = CardDefinition::creature(CardId::new(1), "Onix", 90, 30, 2, "Rock Throw");

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
