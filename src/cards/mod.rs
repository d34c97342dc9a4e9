//! Card system: definitions, dealt instances, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardKind` / `EffectKind`: Creature, resource, or a specific effect
//! - `CardDefinition`: Static card data
//! - `Card`: A dealt copy with its own hit points and attached resources
//! - `CardCatalog`: The fixed card pool and deck construction

pub mod catalog;
pub mod definition;
pub mod instance;

pub use catalog::{build_shuffled_deck, CardCatalog};
pub use definition::{CardDefinition, CardId, CardKind, EffectKind};
pub use instance::Card;
