//! Read-only views of the game for display: the per-turn status snapshot
//! and the final results.

use serde::{Deserialize, Serialize};

use super::efficiency::efficiency;
use crate::core::GameState;

/// One board square as shown in the status table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareStatus {
    /// Board index.
    pub position: usize,
    /// Square name.
    pub name: String,
    /// Owner name for owned properties.
    pub owner: Option<String>,
    /// Development level for owned properties.
    pub level: Option<u8>,
    /// Whether an owned property has reached its maximum level.
    pub max_level: bool,
    /// Whether the square can be bought at all.
    pub purchasable: bool,
}

/// Board and balances at the start of a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Squares in board order.
    pub squares: Vec<SquareStatus>,
    /// `(name, resources)` in turn order.
    pub balances: Vec<(String, i64)>,
}

impl StatusSnapshot {
    /// Capture the current board and balances.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        let squares = state
            .board
            .squares()
            .iter()
            .map(|square| {
                let property = square.as_property();
                let owner = property.and_then(|p| p.owner());
                SquareStatus {
                    position: square.position,
                    name: square.name.clone(),
                    owner: owner.map(|id| state.players.get(id).name.clone()),
                    level: owner.and(property.map(|p| p.development_level())),
                    max_level: owner.is_some() && property.is_some_and(|p| !p.can_develop()),
                    purchasable: property.is_some(),
                }
            })
            .collect();

        let balances = state
            .players
            .iter()
            .map(|p| (p.name.clone(), p.resources()))
            .collect();

        Self { squares, balances }
    }
}

/// A property in the final standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    /// Square name.
    pub name: String,
    /// Development level reached.
    pub level: u8,
    /// Total investment.
    pub value: i64,
}

/// One player's final standing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Player name.
    pub name: String,
    /// Resources left.
    pub resources: i64,
    /// Final efficiency score.
    pub efficiency: i64,
    /// Owned properties in board order.
    pub holdings: Vec<Holding>,
    /// Resources plus the value of every holding.
    pub total_worth: i64,
}

/// Final results, one standing per player in turn order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalReport {
    /// Standings in turn order.
    pub standings: Vec<Standing>,
}

impl FinalReport {
    /// Build the report from the terminal state.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let standings = state
            .players
            .iter()
            .map(|player| {
                let holdings: Vec<Holding> = state
                    .board
                    .properties_owned_by(player.id)
                    .map(|(square, property)| Holding {
                        name: square.name.clone(),
                        level: property.development_level(),
                        value: property.total_investment(),
                    })
                    .collect();
                let total_worth =
                    player.resources() + holdings.iter().map(|h| h.value).sum::<i64>();

                Standing {
                    name: player.name.clone(),
                    resources: player.resources(),
                    efficiency: efficiency(player, &state.board),
                    holdings,
                    total_worth,
                }
            })
            .collect();

        Self { standings }
    }

    /// Standing of the player with the highest total worth. Ties go to the
    /// earlier player in turn order.
    #[must_use]
    pub fn leader(&self) -> Option<&Standing> {
        self.standings
            .iter()
            .rev()
            .max_by_key(|s| s.total_worth)
    }
}
