//! The interactive game loop.

use std::io::{BufRead, Write};
use std::time::Duration;

use rock_tcg::games::parse_choice;
use rock_tcg::{
    check_invariants, Action, CardKind, Command, GameConfig, GameResult, Match, Phase,
    ResourceTarget, Seat,
};

use super::render;
use super::{CliError, Console};

/// Whether the human is still at the keyboard.
enum Flow {
    Continue,
    Quit,
}

/// Play one match on stdin/stdout.
pub(crate) fn execute(seed: u64, delay_ms: u64, name: String) -> Result<(), CliError> {
    let stdin = std::io::stdin();
    // Unlocked handle: the Ctrl-C handler prints from another thread while
    // this one blocks on input.
    let mut console = Console::new(
        stdin.lock(),
        std::io::stdout(),
        Duration::from_millis(delay_ms),
    );

    let config = GameConfig::new(seed).with_name(Seat::Human, name);
    run(&mut console, config)
}

/// Drive a whole match through `console`.
pub(crate) fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: GameConfig,
) -> Result<(), CliError> {
    console.say(render::TITLE)?;
    tracing::info!(seed = config.seed, "starting match");

    let mut game = Match::new(config)?;
    let mut printed = 0;
    print_new_records(console, &game, &mut printed)?;

    if let Flow::Quit = place_starting_creatures(console, &mut game, &mut printed)? {
        return console.say(render::result(&GameResult::Quit, ""));
    }

    console.say("\nComputer is setting up...")?;
    game.finish_setup()
        .map_err(|e| CliError::new(e.to_string()))?;
    print_new_records(console, &game, &mut printed)?;

    loop {
        debug_check(&game);
        match game.phase() {
            Phase::Turn(Seat::Human) => {
                if let Flow::Quit = human_step(console, &mut game)? {
                    game.apply(Action::Quit).ok();
                }
            }
            Phase::Turn(Seat::Computer) => {
                console.say("\n========== COMPUTER'S TURN ==========")?;
                game.run_scripted_turn()
                    .map_err(|e| CliError::new(e.to_string()))?;
                for record in game.log().iter().skip(printed) {
                    console.wait();
                    console.say(render::record(record))?;
                }
                printed = game.log().len();

                if !game.is_over() {
                    let human = game.participant(Seat::Human);
                    let computer = game.participant(Seat::Computer);
                    console.say(render::board(human, computer))?;
                    if console
                        .ask("\nPress Enter to continue to your turn...")?
                        .is_none()
                    {
                        game.apply(Action::Quit).ok();
                    } else {
                        console.say("\n========== YOUR TURN ==========")?;
                    }
                }
            }
            Phase::GameOver(result) => {
                let name = game.config().name(Seat::Human).to_string();
                return console.say(render::result(&result, &name));
            }
            Phase::Setup => return Err(CliError::new("match left setup unfinished")),
        }
        print_new_records(console, &game, &mut printed)?;
    }
}

fn print_new_records<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &Match,
    printed: &mut usize,
) -> Result<(), CliError> {
    for record in game.log().iter().skip(*printed) {
        console.say(render::record(record))?;
    }
    *printed = game.log().len();
    Ok(())
}

fn debug_check(game: &Match) {
    if cfg!(debug_assertions) {
        for violation in check_invariants(game) {
            tracing::error!(%violation, "invariant broken");
        }
    }
}

fn basic_list(game: &Match) -> String {
    let hand = game.participant(Seat::Human).hand();
    render::numbered(
        game.participant(Seat::Human)
            .basic_creature_indices()
            .into_iter()
            .map(|i| (i, &hand[i])),
    )
}

fn place_starting_creatures<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut Match,
    printed: &mut usize,
) -> Result<Flow, CliError> {
    // Active first: the opening hand always holds a basic creature.
    loop {
        console.say("\nSelect a basic Pokémon to be your active Pokémon:")?;
        console.say(basic_list(game))?;
        let Some(line) = console.ask("\nEnter card number: ")? else {
            return Ok(Flow::Quit);
        };
        let hand_len = game.participant(Seat::Human).hand().len();
        let placed = parse_choice(&line, hand_len)
            .map_err(|e| e.to_string())
            .and_then(|i| game.place_starting_creature(i, true).map_err(|e| e.to_string()));
        match placed {
            Ok(_) => break,
            Err(message) => console.say(message)?,
        }
    }
    print_new_records(console, game, printed)?;

    loop {
        if game.participant(Seat::Human).basic_creature_indices().is_empty() {
            return Ok(Flow::Continue);
        }
        let Some(answer) =
            console.ask("\nDo you want to place any basic Pokémon on your bench? (y/n) ")?
        else {
            return Ok(Flow::Quit);
        };
        match answer.to_lowercase().as_str() {
            "n" => return Ok(Flow::Continue),
            "y" => {}
            _ => continue,
        }

        console.say("\nSelect a basic Pokémon for your bench:")?;
        console.say(basic_list(game))?;
        let Some(line) = console.ask("\nEnter card number (0 to stop): ")? else {
            return Ok(Flow::Quit);
        };
        if line == "0" {
            return Ok(Flow::Continue);
        }
        let hand_len = game.participant(Seat::Human).hand().len();
        let placed = parse_choice(&line, hand_len)
            .map_err(|e| e.to_string())
            .and_then(|i| game.place_starting_creature(i, false).map_err(|e| e.to_string()));
        if let Err(message) = placed {
            console.say(message)?;
        }
        print_new_records(console, game, printed)?;
    }
}

/// Read and carry out one human command.
fn human_step<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut Match,
) -> Result<Flow, CliError> {
    let human = game.participant(Seat::Human);
    console.say(render::board(human, game.participant(Seat::Computer)))?;
    console.say(render::hand(human))?;

    let Some(line) = console.ask("\nEnter command (help for list of commands): ")? else {
        return Ok(Flow::Quit);
    };
    let command = match Command::parse(&line, game.participant(Seat::Human).hand().len()) {
        Ok(command) => command,
        Err(e) => {
            console.say(e)?;
            return Ok(Flow::Continue);
        }
    };

    let action = match command {
        Command::Help => {
            console.say(render::HELP)?;
            return Ok(Flow::Continue);
        }
        Command::Play(index) => match choose_play(console, game, index)? {
            Some(action) => action,
            None => return Ok(Flow::Continue),
        },
        other => match other.action() {
            Some(action) => action,
            None => return Ok(Flow::Continue),
        },
    };

    if let Err(e) = game.apply(action) {
        console.say(format!(">>> {e}"))?;
    }
    Ok(Flow::Continue)
}

/// Turn a card number into an action, asking for a resource target when
/// the card is a resource.
fn choose_play<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &Match,
    index: usize,
) -> Result<Option<Action>, CliError> {
    let human = game.participant(Seat::Human);
    let is_resource = human
        .hand()
        .get(index)
        .is_some_and(|card| card.kind() == CardKind::Resource);
    if !is_resource {
        return Ok(Some(Action::PlayCard { index }));
    }

    let targets = human.resource_targets();
    if targets.is_empty() {
        console.say(">>> You have no Pokémon to attach energy to!")?;
        return Ok(None);
    }

    console.say("\nChoose a Pokémon to attach energy to:")?;
    for (i, (target, card)) in targets.iter().enumerate() {
        let label = match target {
            ResourceTarget::Active => "active".to_string(),
            ResourceTarget::Bench(b) => format!("bench {}", b + 1),
        };
        console.say(format!("{}. {} ({label})", i + 1, card.name()))?;
    }

    let Some(line) = console.ask("Enter choice number: ")? else {
        return Ok(None);
    };
    match parse_choice(&line, targets.len()) {
        Ok(choice) => Ok(Some(Action::AttachResource {
            index,
            target: targets[choice].0,
        })),
        Err(e) => {
            console.say(format!(">>> {e}"))?;
            Ok(None)
        }
    }
}
