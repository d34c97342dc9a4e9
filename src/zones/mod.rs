//! Participant zones and every operation that moves cards between them.
//!
//! ## Key Types
//!
//! - `Participant`: name, scripted flag, and the six zones (deck, hand,
//!   active, bench, discard, prizes)
//! - `Bench`: inline bench storage bounded by `BENCH_CAPACITY`
//!
//! Operations are split by concern: creatures and drawing in
//! `participant`, resources in `resources`, effect cards in `effects`,
//! attacks in `combat`.

mod combat;
mod effects;
pub mod participant;
mod resources;

pub use participant::{Bench, Participant};
