//! Whole-match tests.
//!
//! These tests play complete matches with a scripted stand-in for the
//! human seat and verify:
//! - Every match terminates with a winner
//! - Cards are conserved across both participants at every step
//! - Seeds reproduce matches exactly, including through snapshots

use rock_tcg::core::config::DECK_SIZE;
use rock_tcg::{
    check_invariants, Action, CardCatalog, CardDefinition, CardId, CardKind, Event, GameConfig,
    GameResult, GreedyPolicy, Match, Phase, RuleError, Seat, SetupError, WinReason,
};

/// Place the first basic creature active, then start.
fn started(seed: u64) -> Match {
    let mut game = Match::new(GameConfig::new(seed)).expect("standard deck sets up");
    let basic = game.participant(Seat::Human).basic_creature_indices()[0];
    game.place_starting_creature(basic, true).unwrap();
    game.finish_setup().unwrap();
    game
}

/// Simple human stand-in: fill the board, attach one resource, attack, end.
fn play_human_turn(game: &mut Match) {
    loop {
        let human = game.participant(Seat::Human);
        let Some(index) = human.hand().iter().position(|c| c.is_creature()) else {
            break;
        };
        if game.apply(Action::PlayCard { index }).is_err() {
            break;
        }
    }

    let human = game.participant(Seat::Human);
    if human.active().is_some() {
        if let Some(index) = human.hand().iter().position(|c| c.kind() == CardKind::Resource) {
            game.apply(Action::PlayCard { index }).unwrap();
        }
    }

    let _ = game.apply(Action::Attack);
    if !game.is_over() {
        game.apply(Action::EndTurn).unwrap();
    }
}

/// Play to the end, checking invariants after every half-turn.
fn play_out(game: &mut Match) -> GameResult {
    for _ in 0..200 {
        assert_eq!(check_invariants(game), Vec::new(), "turn {}", game.turn());
        match game.phase() {
            Phase::Turn(Seat::Human) => play_human_turn(game),
            Phase::Turn(Seat::Computer) => {
                game.run_scripted_turn().unwrap();
            }
            Phase::GameOver(result) => return result,
            Phase::Setup => unreachable!("setup already finished"),
        }
    }
    panic!("match did not finish: {game:?}");
}

/// Matches always end with a winner, and nobody ever holds more or fewer
/// than the 35 cards dealt to them.
#[test]
fn test_full_matches_terminate_and_conserve_cards() {
    for seed in 0..40 {
        let mut game = started(seed);
        let result = play_out(&mut game);

        assert!(result.winner().is_some(), "seed {seed}: {result:?}");
        let total: usize = Seat::ALL
            .iter()
            .map(|&seat| game.participant(seat).card_count())
            .sum();
        assert_eq!(total, 2 * DECK_SIZE);
        assert!(check_invariants(&game).is_empty());
    }
}

/// Prize wins come with an empty prize pile; deck-outs with an empty deck.
#[test]
fn test_win_reasons_match_board() {
    for seed in 100..130 {
        let mut game = started(seed);
        let GameResult::Winner { seat, reason } = play_out(&mut game) else {
            panic!("seed {seed}: nobody quit");
        };

        match reason {
            WinReason::PrizesTaken => assert_eq!(game.participant(seat).prizes_len(), 0),
            WinReason::BoardWiped => {
                assert!(!game.participant(seat.opponent()).has_creatures_in_play());
            }
            WinReason::DeckedOut => {
                assert_eq!(game.participant(seat.opponent()).deck_len(), 0);
            }
        }
    }
}

/// The same seed and the same choices give the same match.
#[test]
fn test_seed_determinism() {
    let mut a = started(77);
    let mut b = started(77);

    assert_eq!(play_out(&mut a), play_out(&mut b));
    assert_eq!(a.log(), b.log());
    assert_eq!(a.snapshot(), b.snapshot());
}

/// A match restored from bytes mid-game finishes exactly like the original.
#[test]
fn test_snapshot_replay_mid_game() {
    let mut original = started(5);
    for _ in 0..3 {
        if original.is_over() {
            break;
        }
        play_human_turn(&mut original);
        if !original.is_over() {
            original.run_scripted_turn().unwrap();
        }
    }

    let bytes = original.snapshot().to_bytes().unwrap();
    let mut restored = Match::restore(rock_tcg::MatchSnapshot::from_bytes(&bytes).unwrap());

    assert_eq!(play_out(&mut original), play_out(&mut restored));
    assert_eq!(original.log(), restored.log());
}

/// Attacking twice in one turn is refused.
#[test]
fn test_second_attack_refused() {
    for seed in 0..30 {
        let mut game = started(seed);
        let human = game.participant(Seat::Human);
        if let Some(index) = human.hand().iter().position(|c| c.kind() == CardKind::Resource) {
            game.apply(Action::PlayCard { index }).unwrap();
        }
        if game.apply(Action::Attack).is_ok() && !game.is_over() {
            assert_eq!(game.apply(Action::Attack), Err(RuleError::AttackSpent));
            return;
        }
    }
    panic!("no seed allowed an opening attack");
}

/// Knocking out the computer's active promotes its first bench creature.
#[test]
fn test_knockout_promotes_defender_bench() {
    for seed in 0..200 {
        let mut game = started(seed);
        let computer = game.participant(Seat::Computer);
        let Some(next) = computer.bench().first().map(|c| c.name().to_string()) else {
            continue;
        };

        for _ in 0..40 {
            if game.is_over() {
                break;
            }
            match game.phase() {
                Phase::Turn(Seat::Human) => {
                    let before = game.log().len();
                    play_human_turn(&mut game);
                    let knocked_out = game.log().iter().skip(before).any(|r| {
                        matches!(&r.event, Event::Attacked(report) if report.knocked_out)
                    });
                    if knocked_out && !game.is_over() {
                        let promoted = game.log().iter().skip(before).find_map(|r| match &r.event {
                            Event::Promoted { name } => Some(name.clone()),
                            _ => None,
                        });
                        assert_eq!(promoted.as_deref(), Some(next.as_str()));
                        return;
                    }
                }
                _ => {
                    game.run_scripted_turn().unwrap();
                }
            }
            // The bench may have changed; track its new head.
            if let Some(card) = game.participant(Seat::Computer).bench().first() {
                if card.name() != next {
                    break;
                }
            }
        }
    }
}

/// A deck with no basic creature fails setup instead of looping.
#[test]
fn test_setup_without_basics_fails() {
    let mut catalog = CardCatalog::new();
    catalog.register(
        CardDefinition::creature(CardId::new(0), "Monolith", 200, 50, 3, "Slam"),
        10,
    );
    catalog.register(CardDefinition::resource(CardId::new(1), "Rock", "Energy"), 25);

    let err = Match::with_catalog(GameConfig::new(1), &catalog, Box::new(GreedyPolicy))
        .unwrap_err();

    assert_eq!(
        err,
        SetupError::NoBasicInDeck {
            participant: "PLAYER".into()
        }
    );
}

/// A scarce basic and a low bound stop the mulligan loop.
#[test]
fn test_mulligan_bound() {
    let mut catalog = CardCatalog::new();
    catalog.register(
        CardDefinition::creature(CardId::new(0), "Pebble", 40, 10, 1, "Tap"),
        1,
    );
    catalog.register(CardDefinition::resource(CardId::new(1), "Rock", "Energy"), 99);

    let config = GameConfig::new(3).with_max_mulligans(0);
    let result = Match::with_catalog(config, &catalog, Box::new(GreedyPolicy));

    // 7 of 100 cards: most seeds miss the basic in the opening hand.
    if let Err(err) = result {
        assert!(matches!(err, SetupError::MulliganLimit { attempts: 0, .. }));
    }
}

/// Mulligans are logged during setup, before turn one.
#[test]
fn test_mulligans_logged_at_turn_zero() {
    for seed in 0..100 {
        let game = Match::new(GameConfig::new(seed)).unwrap();
        for record in game.log() {
            assert_eq!(record.turn, 0);
            assert_eq!(record.event, Event::Mulliganed);
        }
    }
}
