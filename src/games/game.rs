//! The turn orchestrator.
//!
//! `Match` owns both participants, the shared RNG and the event log, and
//! drives the phases:
//!
//! ```text
//! Setup -> Turn(Human) <-> Turn(Computer) -> GameOver(result)
//! ```
//!
//! The human side is driven from outside through `place_starting_creature`,
//! `finish_setup` and `apply`. The computer side runs in one call to
//! `run_scripted_turn`. Turn draws happen inside the orchestrator when a
//! turn begins, so a caller never observes a turn without its draw.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardKind};
use crate::core::action::{Action, ActionRecord, ResourceTarget};
use crate::core::config::GameConfig;
use crate::core::entity::EntityAllocator;
use crate::core::event::Event;
use crate::core::player::{Seat, Seats};
use crate::core::rng::GameRng;
use crate::error::{RuleError, RuleResult, SetupError};
use crate::policy::{GreedyPolicy, OpponentPolicy};
use crate::rules::{check_winner, GameResult, WinReason};
use crate::zones::Participant;

use super::snapshot::MatchSnapshot;

/// Where the match stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Starting creatures are being placed.
    Setup,
    /// A seat is taking its turn.
    Turn(Seat),
    /// The match has ended.
    GameOver(GameResult),
}

/// A match between the human seat and the scripted seat.
pub struct Match {
    pub(super) config: GameConfig,
    pub(super) participants: Seats<Participant>,
    pub(super) rng: GameRng,
    pub(super) ids: EntityAllocator,
    pub(super) deck_size: usize,
    pub(super) phase: Phase,
    pub(super) turn: u32,
    pub(super) sequence: u32,
    pub(super) log: Vector<ActionRecord>,
    pub(super) policy: Box<dyn OpponentPolicy>,
}

impl std::fmt::Debug for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("seed", &self.config.seed)
            .field("phase", &self.phase)
            .field("turn", &self.turn)
            .field("log_len", &self.log.len())
            .finish_non_exhaustive()
    }
}

impl Match {
    /// Deal both decks and draw opening hands against the greedy opponent.
    pub fn new(config: GameConfig) -> Result<Self, SetupError> {
        Self::with_policy(config, Box::new(GreedyPolicy))
    }

    /// Deal both decks and draw opening hands.
    ///
    /// Each side redraws until its hand holds a basic creature, then sets
    /// aside its prizes. Setup fails instead of looping forever when no
    /// basic creature can ever be drawn or the mulligan bound is reached.
    pub fn with_policy(
        config: GameConfig,
        policy: Box<dyn OpponentPolicy>,
    ) -> Result<Self, SetupError> {
        Self::with_catalog(config, &CardCatalog::standard(), policy)
    }

    /// Deal both decks from a custom catalog.
    pub fn with_catalog(
        config: GameConfig,
        catalog: &CardCatalog,
        policy: Box<dyn OpponentPolicy>,
    ) -> Result<Self, SetupError> {
        let mut rng = GameRng::new(config.seed);
        let mut ids = EntityAllocator::new();

        let participants = Seats::new(|seat| {
            let deck = catalog.build_shuffled_deck(&mut ids, &mut rng);
            Participant::new(config.name(seat), seat == Seat::Computer, deck)
        });
        let deck_size = participants[Seat::Human].card_count();

        let mut game = Self {
            config,
            participants,
            rng,
            ids,
            deck_size,
            phase: Phase::Setup,
            turn: 0,
            sequence: 0,
            log: Vector::new(),
            policy,
        };

        for seat in Seat::ALL {
            game.deal_opening(seat)?;
        }

        tracing::info!(seed = game.config.seed, "match set up");
        Ok(game)
    }

    fn deal_opening(&mut self, seat: Seat) -> Result<(), SetupError> {
        let max_mulligans = self.config.max_mulligans;
        self.participants[seat].draw_starting_hand();

        let mut attempts = 0;
        loop {
            let participant = &mut self.participants[seat];
            if participant.has_basic_creature() {
                break;
            }
            if !participant.owns_basic_creature() {
                return Err(SetupError::NoBasicInDeck {
                    participant: participant.name().to_string(),
                });
            }
            if attempts >= max_mulligans {
                return Err(SetupError::MulliganLimit {
                    participant: participant.name().to_string(),
                    attempts,
                });
            }

            participant.mulligan(&mut self.rng);
            attempts += 1;
            tracing::warn!(participant = %participant.name(), attempts, "mulligan");
            self.record(seat, Event::Mulliganed);
        }

        self.participants[seat].setup_prizes();
        Ok(())
    }

    // === Views ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Turns started so far (0 during setup).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Cards dealt to each participant.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    #[must_use]
    pub fn participant(&self, seat: Seat) -> &Participant {
        &self.participants[seat]
    }

    #[must_use]
    pub fn participants(&self) -> &Seats<Participant> {
        &self.participants
    }

    /// Every successful event, in order.
    #[must_use]
    pub fn log(&self) -> &Vector<ActionRecord> {
        &self.log
    }

    /// Seat whose turn it is, if a turn is in progress.
    #[must_use]
    pub fn current_seat(&self) -> Option<Seat> {
        match self.phase {
            Phase::Turn(seat) => Some(seat),
            _ => None,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    // === Setup ===

    /// Place a basic creature from the human's opening hand.
    pub fn place_starting_creature(&mut self, index: usize, as_active: bool) -> RuleResult<Event> {
        if self.phase != Phase::Setup {
            return Err(RuleError::WrongPhase);
        }

        let human = &mut self.participants[Seat::Human];
        let card = human.hand().get(index).ok_or(RuleError::InvalidIndex(index))?;
        if !card.is_basic() {
            return Err(RuleError::NotBasicCreature);
        }

        let event = human.play_creature(index, as_active)?;
        self.record(Seat::Human, event.clone());
        Ok(event)
    }

    /// Let the policy place the computer's creatures and start turn one.
    ///
    /// The human must have an active creature first.
    pub fn finish_setup(&mut self) -> RuleResult<Vec<Event>> {
        if self.phase != Phase::Setup {
            return Err(RuleError::WrongPhase);
        }
        if self.participants[Seat::Human].active().is_none() {
            return Err(RuleError::NoActiveCreature);
        }

        let events = self.policy.setup(&mut self.participants[Seat::Computer]);
        for event in &events {
            self.record(Seat::Computer, event.clone());
        }

        self.begin_turn(Seat::Human);
        Ok(events)
    }

    // === Turns ===

    /// Start `seat`'s turn with its draw. Losing the draw ends the match.
    fn begin_turn(&mut self, seat: Seat) {
        self.turn += 1;
        self.phase = Phase::Turn(seat);
        tracing::info!(turn = self.turn, %seat, "turn started");

        match self.participants[seat].start_turn() {
            Ok(event) => self.record(seat, event),
            Err(_) => self.end(GameResult::Winner {
                seat: seat.opponent(),
                reason: WinReason::DeckedOut,
            }),
        }
    }

    /// Carry out one human action.
    ///
    /// Rule violations leave the match untouched and are returned for the
    /// caller to show. The human keeps the turn until `EndTurn`, `Quit` or
    /// a win.
    pub fn apply(&mut self, action: Action) -> RuleResult<Vec<Event>> {
        if self.phase != Phase::Turn(Seat::Human) {
            return Err(RuleError::WrongPhase);
        }

        let events = match action {
            Action::PlayCard { index } => vec![self.play_card(index)?],
            Action::AttachResource { index, target } => {
                vec![self.participants[Seat::Human].play_resource(index, target)?]
            }
            Action::Attack => self.human_attack()?,
            Action::EndTurn => {
                self.run_turn_end(Seat::Human);
                return Ok(Vec::new());
            }
            Action::Quit => {
                self.end(GameResult::Quit);
                return Ok(Vec::new());
            }
        };

        for event in &events {
            self.record(Seat::Human, event.clone());
        }
        if let Some(result) = check_winner(&self.participants, Seat::Human) {
            self.end(result);
        }
        Ok(events)
    }

    fn play_card(&mut self, index: usize) -> RuleResult<Event> {
        let human = &mut self.participants[Seat::Human];
        let kind = human
            .hand()
            .get(index)
            .ok_or(RuleError::InvalidIndex(index))?
            .kind();

        match kind {
            CardKind::Creature => {
                let as_active = human.active().is_none();
                human.play_creature(index, as_active)
            }
            CardKind::Resource => human.play_resource(index, ResourceTarget::Active),
            CardKind::Effect(_) => human.play_effect(index),
        }
    }

    fn human_attack(&mut self) -> RuleResult<Vec<Event>> {
        let (human, computer) = self.participants.split_mut(Seat::Human);
        if human.active().is_none() {
            return Err(RuleError::NoActiveCreature);
        }
        if !human.can_attack() {
            return Err(RuleError::AttackSpent);
        }

        let mut events = vec![human.attack(computer)?];
        events.extend(Self::promote_after_knockout(computer));
        Ok(events)
    }

    /// A defender left without an active creature promotes bench[0].
    fn promote_after_knockout(defender: &mut Participant) -> Option<Event> {
        if defender.active().is_none() && !defender.bench().is_empty() {
            defender.choose_new_active().ok()
        } else {
            None
        }
    }

    fn run_turn_end(&mut self, seat: Seat) {
        self.participants[seat].end_turn();
        tracing::debug!(%seat, turn = self.turn, "turn ended");
        self.begin_turn(seat.opponent());
    }

    /// Play the computer's whole turn: draw, one policy pass, promotion of
    /// a knocked-out human active, and the win check.
    ///
    /// If the match continues, the human's turn begins before this returns.
    pub fn run_scripted_turn(&mut self) -> RuleResult<Vec<Event>> {
        if self.phase != Phase::Turn(Seat::Computer) {
            return Err(RuleError::WrongPhase);
        }

        let (computer, human) = self.participants.split_mut(Seat::Computer);
        let mut events = self.policy.take_turn(computer, human);
        let human_promotion = Self::promote_after_knockout(human);

        for event in &events {
            self.record(Seat::Computer, event.clone());
        }
        if let Some(event) = human_promotion {
            self.record(Seat::Human, event.clone());
            events.push(event);
        }

        match check_winner(&self.participants, Seat::Computer) {
            Some(result) => self.end(result),
            None => self.run_turn_end(Seat::Computer),
        }
        Ok(events)
    }

    fn end(&mut self, result: GameResult) {
        tracing::info!(turn = self.turn, %result, "game over");
        self.phase = Phase::GameOver(result);
    }

    fn record(&mut self, seat: Seat, event: Event) {
        self.log
            .push_back(ActionRecord::new(seat, event, self.turn, self.sequence));
        self.sequence += 1;
    }

    // === Checkpoints ===

    /// Capture the full match state.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            config: self.config.clone(),
            participants: self.participants.clone(),
            rng: self.rng.state(),
            ids: self.ids.clone(),
            deck_size: self.deck_size,
            phase: self.phase,
            turn: self.turn,
            sequence: self.sequence,
            log: self.log.clone(),
        }
    }

    /// Rebuild a match from a snapshot against the greedy opponent.
    #[must_use]
    pub fn restore(snapshot: MatchSnapshot) -> Self {
        Self::restore_with_policy(snapshot, Box::new(GreedyPolicy))
    }

    #[must_use]
    pub fn restore_with_policy(snapshot: MatchSnapshot, policy: Box<dyn OpponentPolicy>) -> Self {
        Self {
            config: snapshot.config,
            participants: snapshot.participants,
            rng: GameRng::from_state(&snapshot.rng),
            ids: snapshot.ids,
            deck_size: snapshot.deck_size,
            phase: snapshot.phase,
            turn: snapshot.turn,
            sequence: snapshot.sequence,
            log: snapshot.log,
            policy,
        }
    }
}
