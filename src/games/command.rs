//! Parsing of typed commands into actions.
//!
//! Numbers shown to the player are 1-based; everything past this module
//! is 0-based.

use crate::core::action::Action;
use crate::error::InputError;

/// A command typed during the human's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    End,
    Quit,
    Attack,
    /// Play the card at this 0-based hand position.
    Play(usize),
}

impl Command {
    /// Parse a command line. Case and surrounding whitespace are ignored.
    ///
    /// `hand_len` bounds the card numbers that are accepted.
    ///
    /// ```
    /// use rock_tcg::games::Command;
    ///
    /// assert_eq!(Command::parse(" Attack ", 3), Ok(Command::Attack));
    /// assert_eq!(Command::parse("2", 3), Ok(Command::Play(1)));
    /// assert!(Command::parse("4", 3).is_err());
    /// ```
    pub fn parse(input: &str, hand_len: usize) -> Result<Self, InputError> {
        let input = input.trim().to_lowercase();
        match input.as_str() {
            "help" => Ok(Command::Help),
            "end" => Ok(Command::End),
            "quit" => Ok(Command::Quit),
            "attack" => Ok(Command::Attack),
            text if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) => {
                parse_choice(text, hand_len).map(Command::Play)
            }
            _ => Err(InputError::Unknown(input)),
        }
    }

    /// The engine action this command maps to. `Help` has none.
    #[must_use]
    pub fn action(self) -> Option<Action> {
        match self {
            Command::Help => None,
            Command::End => Some(Action::EndTurn),
            Command::Quit => Some(Action::Quit),
            Command::Attack => Some(Action::Attack),
            Command::Play(index) => Some(Action::PlayCard { index }),
        }
    }
}

/// Parse a 1-based menu choice in `1..=max` into a 0-based index.
pub fn parse_choice(input: &str, max: usize) -> Result<usize, InputError> {
    let text = input.trim();
    let value: usize = text
        .parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))?;

    if value == 0 || value > max {
        return Err(InputError::OutOfRange { value, max });
    }
    Ok(value - 1)
}
