//! Card catalog: the fixed rock-type card pool and deck construction.
//!
//! The catalog stores every definition by name and records the deck list
//! (which definitions go into a deck and how many copies). Building a deck
//! deals a fresh `Card` per copy and shuffles with the caller's `GameRng`.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, CardKind, EffectKind};
use super::instance::Card;
use crate::core::config::RESOURCE_COPIES;
use crate::core::entity::EntityAllocator;
use crate::core::rng::GameRng;

/// (name, hp, damage, cost, attack)
const ROCK_CREATURES: [(&str, i32, i32, u32, &str); 10] = [
    ("Geodude", 60, 20, 1, "Rock Throw"),
    ("Graveler", 90, 40, 2, "Rock Slide"),
    ("Golem", 120, 70, 3, "Earthquake"),
    ("Onix", 90, 30, 2, "Rock Throw"),
    ("Rhyhorn", 80, 30, 2, "Horn Attack"),
    ("Rhydon", 100, 50, 3, "Horn Drill"),
    ("Sudowoodo", 70, 30, 1, "Rock Throw"),
    ("Larvitar", 50, 10, 1, "Bite"),
    ("Pupitar", 70, 30, 2, "Rock Slide"),
    ("Tyranitar", 130, 80, 4, "Hyper Beam"),
];

const ROCK_ENERGY: (&str, &str) = ("Rock", "Provides energy for Rock-type Pokémon");

const TRAINERS: [(&str, EffectKind, &str); 5] = [
    ("Potion", EffectKind::Potion, "Heal 20 damage from one of your Pokémon"),
    (
        "Energy Retrieval",
        EffectKind::EnergyRetrieval,
        "Add an energy card from your discard pile to your hand",
    ),
    (
        "Professor's Research",
        EffectKind::ProfessorsResearch,
        "Discard your hand and draw 7 cards",
    ),
    (
        "Switch",
        EffectKind::Switch,
        "Switch your active Pokémon with one on your bench",
    ),
    (
        "Pokémon Center",
        EffectKind::PokemonCenter,
        "Heal all damage from your active Pokémon",
    ),
];

/// Registry of card definitions plus the deck list.
///
/// ```
/// use rock_tcg::cards::CardCatalog;
/// use rock_tcg::core::{EntityAllocator, GameRng};
///
/// let catalog = CardCatalog::standard();
/// let mut ids = EntityAllocator::new();
/// let mut rng = GameRng::new(1);
///
/// let deck = catalog.build_shuffled_deck(&mut ids, &mut rng);
/// assert_eq!(deck.len(), 35);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<String, CardDefinition>,
    deck_list: Vec<(CardId, usize)>,
    next_id: u32,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The rock-type pool: 10 creatures, 20 energy, 5 trainers.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();

        for (name, hp, damage, cost, attack) in ROCK_CREATURES {
            let id = catalog.next_card_id();
            catalog.register(CardDefinition::creature(id, name, hp, damage, cost, attack), 1);
        }

        let id = catalog.next_card_id();
        let (name, text) = ROCK_ENERGY;
        catalog.register(CardDefinition::resource(id, name, text), RESOURCE_COPIES);

        for (name, effect, text) in TRAINERS {
            let id = catalog.next_card_id();
            catalog.register(CardDefinition::effect(id, name, effect, text), 1);
        }

        catalog
    }

    fn next_card_id(&mut self) -> CardId {
        let id = CardId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Register a definition with the number of copies per deck.
    ///
    /// Panics if a card with the same name already exists.
    pub fn register(&mut self, card: CardDefinition, copies: usize) {
        if self.cards.contains_key(&card.name) {
            panic!("Card {:?} already registered", card.name);
        }
        self.next_id = self.next_id.max(card.id.raw() + 1);
        self.deck_list.push((card.id, copies));
        self.cards.insert(card.name.clone(), card);
    }

    /// Look up a definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardDefinition> {
        self.cards.get(name)
    }

    fn get_by_id(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.values().find(|c| c.id == id)
    }

    /// Deal a single fresh copy of a named card.
    pub fn instantiate(&self, name: &str, ids: &mut EntityAllocator) -> Option<Card> {
        self.get(name).map(|def| Card::new(ids.alloc(), def.clone()))
    }

    /// Definitions and copy counts, in registration order.
    pub fn deck_list(&self) -> impl Iterator<Item = (&CardDefinition, usize)> + '_ {
        self.deck_list
            .iter()
            .filter_map(|&(id, copies)| self.get_by_id(id).map(|def| (def, copies)))
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Does the deck list contain at least one basic creature?
    #[must_use]
    pub fn has_basic_creature(&self) -> bool {
        self.deck_list()
            .any(|(def, copies)| copies > 0 && def.is_basic())
    }

    /// Deal every copy in registration order, unshuffled.
    #[must_use]
    pub fn build_deck(&self, ids: &mut EntityAllocator) -> Vec<Card> {
        let mut deck = Vec::new();
        for (def, copies) in self.deck_list() {
            for _ in 0..copies {
                deck.push(Card::new(ids.alloc(), def.clone()));
            }
        }
        deck
    }

    /// Deal every copy and shuffle uniformly.
    #[must_use]
    pub fn build_shuffled_deck(&self, ids: &mut EntityAllocator, rng: &mut GameRng) -> Vec<Card> {
        let mut deck = self.build_deck(ids);
        rng.shuffle(&mut deck);
        tracing::debug!(cards = deck.len(), "built shuffled deck");
        deck
    }

    /// Count of copies per kind in the deck list: (creatures, resources, effects).
    #[must_use]
    pub fn composition(&self) -> (usize, usize, usize) {
        self.deck_list()
            .fold((0, 0, 0), |(c, r, e), (def, copies)| match def.kind {
                CardKind::Creature => (c + copies, r, e),
                CardKind::Resource => (c, r + copies, e),
                CardKind::Effect(_) => (c, r, e + copies),
            })
    }
}

/// Build a shuffled standard deck.
#[must_use]
pub fn build_shuffled_deck(ids: &mut EntityAllocator, rng: &mut GameRng) -> Vec<Card> {
    CardCatalog::standard().build_shuffled_deck(ids, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DECK_SIZE;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_standard_composition() {
        let catalog = CardCatalog::standard();

        assert_eq!(catalog.len(), 16);
        assert_eq!(catalog.composition(), (10, 20, 5));
        assert!(catalog.has_basic_creature());
    }

    #[test]
    fn test_deck_has_35_unique_instances() {
        let mut ids = EntityAllocator::new();
        let mut rng = GameRng::new(9);
        let deck = build_shuffled_deck(&mut ids, &mut rng);

        assert_eq!(deck.len(), DECK_SIZE);
        let unique: FxHashSet<_> = deck.iter().map(Card::entity_id).collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_deck_kinds() {
        let mut ids = EntityAllocator::new();
        let deck = CardCatalog::standard().build_deck(&mut ids);

        let creatures: FxHashSet<_> = deck
            .iter()
            .filter(|c| c.is_creature())
            .map(|c| c.name().to_string())
            .collect();
        let resources = deck.iter().filter(|c| c.is_resource()).count();
        let effects: FxHashSet<_> = deck
            .iter()
            .filter_map(|c| match c.kind() {
                CardKind::Effect(kind) => Some(kind),
                _ => None,
            })
            .collect();

        assert_eq!(creatures.len(), 10);
        assert_eq!(resources, 20);
        assert_eq!(effects.len(), 5);
    }

    #[test]
    fn test_shuffle_depends_on_seed() {
        let catalog = CardCatalog::standard();
        let names = |seed| {
            let mut ids = EntityAllocator::new();
            catalog
                .build_shuffled_deck(&mut ids, &mut GameRng::new(seed))
                .iter()
                .map(|c| c.name().to_string())
                .collect::<Vec<_>>()
        };

        assert_eq!(names(5), names(5));
        assert_ne!(names(5), names(6));
    }

    #[test]
    fn test_instantiate_by_name() {
        let catalog = CardCatalog::standard();
        let mut ids = EntityAllocator::new();

        let golem = catalog.instantiate("Golem", &mut ids).unwrap();
        assert_eq!(golem.damage(), 70);
        assert_eq!(golem.resource_cost(), 3);

        assert!(catalog.instantiate("Pikachu", &mut ids).is_none());
        assert_eq!(ids.allocated(), 1);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_name_panics() {
        let mut catalog = CardCatalog::new();
        catalog.register(CardDefinition::resource(CardId::new(0), "Rock", "a"), 1);
        catalog.register(CardDefinition::resource(CardId::new(1), "Rock", "b"), 1);
    }
}
