//! Board squares.

use serde::{Deserialize, Serialize};

use super::property::Property;

/// Kind of a non-purchasable square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialKind {
    /// Start square. Passing it pays the sustainability grant.
    Start,
    /// The wasteland.
    PenaltyZone,
}

/// What a square is, and its payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareKind {
    /// A purchasable property.
    Property(Property),
    /// A special square.
    Special(SpecialKind),
}

/// A single board square.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    /// 0-based board index.
    pub position: usize,
    /// Display name.
    pub name: String,
    /// Variant payload.
    pub kind: SquareKind,
}

impl Square {
    /// Create a property square.
    pub fn property(position: usize, name: impl Into<String>, property: Property) -> Self {
        Self {
            position,
            name: name.into(),
            kind: SquareKind::Property(property),
        }
    }

    /// Create a special square.
    pub fn special(position: usize, name: impl Into<String>, kind: SpecialKind) -> Self {
        Self {
            position,
            name: name.into(),
            kind: SquareKind::Special(kind),
        }
    }

    /// The property payload, if this is a property square.
    #[must_use]
    pub fn as_property(&self) -> Option<&Property> {
        match &self.kind {
            SquareKind::Property(property) => Some(property),
            SquareKind::Special(_) => None,
        }
    }

    /// Mutable property payload.
    pub fn as_property_mut(&mut self) -> Option<&mut Property> {
        match &mut self.kind {
            SquareKind::Property(property) => Some(property),
            SquareKind::Special(_) => None,
        }
    }

    /// Themed name of the current development for properties, the square
    /// name otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match &self.kind {
            SquareKind::Property(property) => property.development_name(&self.name),
            SquareKind::Special(_) => &self.name,
        }
    }
}
