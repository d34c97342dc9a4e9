//! Participant state machine tests.
//!
//! These tests drive single participants through the card operations:
//! - Deck construction and drawing
//! - Creature placement and the bench limit
//! - Attacks, knockouts and prizes

use rock_tcg::cards::build_shuffled_deck;
use rock_tcg::core::config::{BENCH_CAPACITY, DECK_SIZE};
use rock_tcg::{
    Card, CardCatalog, CardDefinition, CardId, CardKind, EntityAllocator, Event, GameRng,
    Participant, ResourceTarget, RuleError,
};

fn from_names(catalog: &CardCatalog, names: &[&str], ids: &mut EntityAllocator) -> Vec<Card> {
    names
        .iter()
        .map(|name| catalog.instantiate(name, ids).expect("card exists"))
        .collect()
}

/// Catalog with the standard pool plus a heavy hitter that needs no energy.
fn catalog_with_hitter() -> CardCatalog {
    let mut catalog = CardCatalog::standard();
    catalog.register(
        CardDefinition::creature(CardId::new(100), "Boulder", 100, 60, 0, "Crush"),
        1,
    );
    catalog.register(
        CardDefinition::creature(CardId::new(101), "Pebble", 60, 10, 1, "Tap"),
        1,
    );
    catalog
}

/// Every seed gives 35 cards: 10 distinct creatures, 20 resources, 5 distinct effects.
#[test]
fn test_deck_composition_across_seeds() {
    for seed in 0..50 {
        let mut ids = EntityAllocator::new();
        let deck = build_shuffled_deck(&mut ids, &mut GameRng::new(seed));

        assert_eq!(deck.len(), DECK_SIZE);

        let mut creatures: Vec<_> = deck
            .iter()
            .filter(|c| c.is_creature())
            .map(Card::name)
            .collect();
        creatures.sort_unstable();
        creatures.dedup();
        assert_eq!(creatures.len(), 10);

        assert_eq!(deck.iter().filter(|c| c.is_resource()).count(), 20);

        let mut effects: Vec<_> = deck
            .iter()
            .filter(|c| matches!(c.kind(), CardKind::Effect(_)))
            .map(Card::name)
            .collect();
        effects.sort_unstable();
        effects.dedup();
        assert_eq!(effects.len(), 5);
    }
}

/// Drawing from an empty deck fails and leaves the hand alone.
#[test]
fn test_empty_deck_draw() {
    let mut p = Participant::new("P", false, Vec::new());

    for _ in 0..3 {
        assert_eq!(p.draw_one().unwrap_err(), RuleError::DeckEmpty);
        assert!(p.hand().is_empty());
    }
}

/// An occupied active slot rejects every card in hand.
#[test]
fn test_active_occupied_regardless_of_hand() {
    let catalog = CardCatalog::standard();
    let mut ids = EntityAllocator::new();
    let deck = from_names(
        &catalog,
        &["Geodude", "Golem", "Rock", "Potion", "Larvitar", "Switch", "Onix"],
        &mut ids,
    );
    let mut p = Participant::new("P", false, deck);
    p.draw_starting_hand();
    p.play_creature(0, true).unwrap();

    for index in 0..p.hand().len() {
        let result = p.play_creature(index, true);
        assert!(
            matches!(
                result,
                Err(RuleError::ActiveOccupied | RuleError::WrongCardKind { .. })
            ),
            "index {index}: {result:?}"
        );
        if p.hand()[index].is_creature() {
            assert_eq!(result, Err(RuleError::ActiveOccupied));
        }
    }
    assert_eq!(p.hand().len(), 6);
}

/// A 60-damage attack on a 60 hp defender knocks it out and takes one prize.
#[test]
fn test_exact_knockout_takes_one_prize() {
    let catalog = catalog_with_hitter();
    let mut ids = EntityAllocator::new();

    let mut prizes_then_hand = from_names(&catalog, &["Rock"; 6], &mut ids);
    prizes_then_hand.extend(from_names(&catalog, &["Boulder"], &mut ids));
    let mut attacker = Participant::new("A", false, prizes_then_hand);
    attacker.setup_prizes();
    attacker.draw_starting_hand();
    attacker.play_creature(0, true).unwrap();

    let mut defender = Participant::new("D", true, from_names(&catalog, &["Pebble"], &mut ids));
    defender.draw_starting_hand();
    defender.play_creature(0, true).unwrap();

    let hand_before = attacker.hand().len();
    let event = attacker.attack(&mut defender).unwrap();

    let Event::Attacked(report) = event else {
        panic!("expected attack event, got {event:?}");
    };
    assert_eq!(report.damage, 60);
    assert_eq!(report.defender_hit_points, 0);
    assert!(report.knocked_out);
    assert!(report.prize_taken);
    assert!(!report.prizes_exhausted);

    assert_eq!(attacker.hand().len(), hand_before + 1);
    assert_eq!(attacker.prizes_len(), 5);
    assert!(defender.active().is_none());
    assert_eq!(defender.discard().len(), 1);
}

/// Damage short of a knockout just lowers hit points.
#[test]
fn test_attack_arithmetic() {
    let catalog = catalog_with_hitter();
    let mut ids = EntityAllocator::new();
    let mut attacker = Participant::new("A", false, from_names(&catalog, &["Boulder"], &mut ids));
    let mut defender = Participant::new("D", true, from_names(&catalog, &["Golem"], &mut ids));
    attacker.draw_starting_hand();
    defender.draw_starting_hand();
    attacker.play_creature(0, true).unwrap();
    defender.play_creature(0, true).unwrap();

    attacker.attack(&mut defender).unwrap();
    assert_eq!(defender.active().unwrap().hit_points(), 60);

    attacker.attack(&mut defender).unwrap();
    assert!(defender.active().is_none());
    assert_eq!(defender.discard()[0].hit_points(), 0);
}

/// An unpaid attack is rejected and changes nothing on either side.
#[test]
fn test_insufficient_resources_changes_nothing() {
    let catalog = CardCatalog::standard();
    let mut ids = EntityAllocator::new();
    let mut attacker = Participant::new(
        "A",
        false,
        from_names(&catalog, &["Geodude", "Rock"], &mut ids),
    );
    let mut defender = Participant::new("D", true, from_names(&catalog, &["Onix"], &mut ids));
    attacker.draw_starting_hand();
    defender.draw_starting_hand();
    attacker.play_creature(0, true).unwrap();
    defender.play_creature(0, true).unwrap();

    let (a_before, d_before) = (attacker.clone(), defender.clone());

    assert_eq!(
        attacker.attack(&mut defender),
        Err(RuleError::InsufficientResources {
            needed: 1,
            attached: 0
        })
    );
    assert_eq!(attacker, a_before);
    assert_eq!(defender, d_before);

    attacker.play_resource(0, ResourceTarget::Active).unwrap();
    assert!(attacker.attack(&mut defender).is_ok());
}

/// The bench never grows past its capacity, whatever is played.
#[test]
fn test_bench_limit_with_full_deck() {
    let catalog = CardCatalog::standard();
    let mut ids = EntityAllocator::new();
    let mut p = Participant::new("P", false, catalog.build_deck(&mut ids));
    while p.draw_one().is_ok() {}

    let mut attempts = 0;
    while let Some(index) = p.hand().iter().position(Card::is_creature) {
        attempts += 1;
        match p.play_creature(index, false) {
            Ok(_) => assert!(p.bench().len() <= BENCH_CAPACITY),
            Err(e) => {
                assert_eq!(e, RuleError::BenchFull);
                break;
            }
        }
    }

    assert_eq!(attempts, BENCH_CAPACITY + 1);
    assert_eq!(p.bench().len(), BENCH_CAPACITY);
    assert_eq!(p.card_count(), DECK_SIZE);
}

/// A hand already holding a basic creature needs no mulligan.
#[test]
fn test_basic_in_opening_hand() {
    let catalog = CardCatalog::standard();
    let mut ids = EntityAllocator::new();
    let deck = from_names(
        &catalog,
        &["Rock", "Golem", "Sudowoodo", "Rock", "Rock", "Rock", "Rock", "Onix"],
        &mut ids,
    );
    let mut p = Participant::new("P", false, deck);
    p.draw_starting_hand();

    assert!(p.has_basic_creature());
    assert_eq!(p.basic_creature_indices(), vec![2]);
}

/// Promotion always takes the first bench creature.
#[test]
fn test_promotion_order() {
    let catalog = CardCatalog::standard();
    let mut ids = EntityAllocator::new();
    let deck = from_names(&catalog, &["Rhyhorn", "Pupitar", "Rhydon"], &mut ids);
    let mut p = Participant::new("P", false, deck);
    p.draw_starting_hand();
    for _ in 0..3 {
        p.play_creature(0, false).unwrap();
    }

    assert_eq!(
        p.choose_new_active().unwrap(),
        Event::Promoted {
            name: "Rhyhorn".into()
        }
    );
    assert_eq!(p.choose_new_active(), Err(RuleError::ActiveOccupied));
    assert_eq!(p.bench()[0].name(), "Pupitar");
}
