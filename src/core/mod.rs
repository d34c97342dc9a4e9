//! Core engine types: entities, seats, configuration, actions, events, RNG.
//!
//! Everything here is plain data shared by the card, zone, policy and
//! match layers.

pub mod action;
pub mod config;
pub mod entity;
pub mod event;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord, ResourceTarget};
pub use config::GameConfig;
pub use entity::{EntityAllocator, EntityId};
pub use event::{AttackReport, Event, Slot};
pub use player::{Seat, Seats};
pub use rng::{GameRng, GameRngState};
