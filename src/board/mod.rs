//! The board: squares, properties and ownership queries.
//!
//! Squares are a tagged enum rather than a type hierarchy. Properties refer
//! to their owner by `PlayerId`; the player registry resolves it.

pub mod catalog;
pub mod property;
pub mod square;

pub use catalog::{Board, PropertyPositions};
pub use property::{Category, Property};
pub use square::{SpecialKind, Square, SquareKind};
