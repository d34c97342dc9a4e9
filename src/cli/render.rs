//! Text rendering of the board, hands and logged events.

use std::fmt::Write as _;

use rock_tcg::{ActionRecord, Card, Event, GameResult, Participant, Seat};

pub(super) const TITLE: &str = r"
==============================================
        ROCK-TYPE POKÉMON CARD BATTLE
==============================================";

pub(super) const HELP: &str = "
Commands:
  <number>  play the card at that position in your hand
  attack    attack with your active Pokémon
  end       end your turn
  help      show this list
  quit      leave the game";

/// One participant's side of the table.
pub(super) fn side(participant: &Participant) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "==== {} ====  Deck: {}  Hand: {}  Prizes: {}  Discard: {}",
        participant.name(),
        participant.deck_len(),
        participant.hand().len(),
        participant.prizes_len(),
        participant.discard().len()
    );
    match participant.active() {
        Some(card) => {
            let _ = writeln!(out, "Active: {card}");
        }
        None => out.push_str("Active: (none)\n"),
    }
    if participant.bench().is_empty() {
        out.push_str("Bench: (empty)");
    } else {
        out.push_str("Bench:");
        for (i, card) in participant.bench().iter().enumerate() {
            let _ = write!(out, "\n  {}. {card}", i + 1);
        }
    }
    out
}

/// Both sides, opponent on top.
pub(super) fn board(human: &Participant, computer: &Participant) -> String {
    format!("\n{}\n\n{}", side(computer), side(human))
}

/// Numbered list of cards, 1-based.
pub(super) fn numbered<'a>(cards: impl IntoIterator<Item = (usize, &'a Card)>) -> String {
    cards
        .into_iter()
        .map(|(i, card)| format!("{}. {card}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(super) fn hand(participant: &Participant) -> String {
    format!(
        "\nYour hand:\n{}",
        numbered(participant.hand().iter().enumerate())
    )
}

/// A logged event as the human should read it.
pub(super) fn record(record: &ActionRecord) -> String {
    match (record.seat, &record.event) {
        (Seat::Human, Event::Drew { card }) => format!("You drew: {card}"),
        (Seat::Computer, Event::Drew { .. }) => "Computer drew a card.".to_string(),
        (Seat::Human, Event::Mulliganed) => {
            "You have no basic Pokémon! Performing a mulligan...".to_string()
        }
        (Seat::Computer, Event::Mulliganed) => {
            "Computer has no basic Pokémon! Performing a mulligan...".to_string()
        }
        (Seat::Human, event) => format!(">>> {event}"),
        (Seat::Computer, event) => format!(">>> Computer: {event}"),
    }
}

pub(super) fn result(result: &GameResult, human_name: &str) -> String {
    match result {
        GameResult::Winner { seat: Seat::Human, .. } => {
            format!("\n*** {human_name} WINS! *** {result}")
        }
        GameResult::Winner { .. } => format!("\n*** COMPUTER WINS! *** {result}"),
        GameResult::Quit => "\nGame ended by player. Thanks for playing!".to_string(),
    }
}
