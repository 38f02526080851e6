//! Turn choices and the record of what each turn did.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::rng::DiceRoll;

/// An option on the turn menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnChoice {
    /// Roll the dice and move.
    Roll,
    /// Develop one of the player's properties.
    Develop,
    /// End the game.
    Quit,
}

impl TurnChoice {
    /// Menu for a player, in display order.
    ///
    /// Development is only offered to players with something to develop,
    /// and quitting only to players without.
    #[must_use]
    pub fn menu(can_develop_any: bool) -> &'static [TurnChoice] {
        if can_develop_any {
            &[TurnChoice::Roll, TurnChoice::Develop]
        } else {
            &[TurnChoice::Roll, TurnChoice::Quit]
        }
    }
}

impl std::fmt::Display for TurnChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TurnChoice::Roll => "Roll dice",
            TurnChoice::Develop => "Develop a property",
            TurnChoice::Quit => "Quit game",
        };
        f.write_str(label)
    }
}

/// What actually happened on a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    /// The player was in the wasteland and lost the turn.
    Skipped,
    /// The player rolled and moved to `position`.
    Rolled {
        /// The dice.
        roll: DiceRoll,
        /// Landing square.
        position: usize,
    },
    /// The player developed the property at `position` to `level`.
    Developed {
        /// Board index of the property.
        position: usize,
        /// Level reached.
        level: u8,
    },
    /// The player chose to develop but nothing changed (declined or
    /// unaffordable).
    DevelopmentAbandoned {
        /// Board index of the selected property.
        position: usize,
    },
    /// The player ended the game.
    Quit,
}

/// A recorded turn with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The player whose turn it was.
    pub player: PlayerId,

    /// What the turn did.
    pub action: TurnAction,

    /// Turn number, starting at 1.
    pub turn: u32,
}

impl TurnRecord {
    /// Create a new turn record.
    #[must_use]
    pub fn new(player: PlayerId, action: TurnAction, turn: u32) -> Self {
        Self {
            player,
            action,
            turn,
        }
    }
}
