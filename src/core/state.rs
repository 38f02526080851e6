//! Game state: the board, the players, the session phase and turn history.
//!
//! `GameState` is plain data. The turn engine in `rules::engine` owns one and
//! is the only thing that mutates it during play.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::TurnRecord;
use super::config::GameConfig;
use super::registry::PlayerRegistry;
use crate::board::Board;

/// Turn engine phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the active player to start a turn.
    #[default]
    AwaitingTurn,
    /// Dice are being rolled and the token moved.
    Rolling,
    /// The landed square, or a development, is being resolved.
    Resolving,
    /// Resolution finished; end-of-game check pending.
    TurnComplete,
    /// Terminal.
    GameOver,
}

impl Phase {
    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(self) -> bool {
        self == Phase::GameOver
    }
}

/// Full game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    pub board: Board,

    /// Players and whose turn it is.
    pub players: PlayerRegistry,

    /// Current engine phase.
    pub phase: Phase,

    /// Turn number (starts at 1, counts skipped turns too).
    pub turn_number: u32,

    /// Every turn played so far.
    pub history: Vector<TurnRecord>,
}

impl GameState {
    /// Create a fresh game on the standard board.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_parts(
            Board::standard(),
            PlayerRegistry::from_names(config.player_names.iter().cloned()),
        )
    }

    /// Create a game from a prepared board and registry.
    #[must_use]
    pub fn with_parts(board: Board, players: PlayerRegistry) -> Self {
        Self {
            board,
            players,
            phase: Phase::AwaitingTurn,
            turn_number: 1,
            history: Vector::new(),
        }
    }

    /// Whether the game is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.phase.is_over()
    }

    /// Append a turn to the history and bump the turn counter.
    pub fn record_turn(&mut self, record: TurnRecord) {
        self.history.push_back(record);
        self.turn_number += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, TurnAction};

    #[test]
    fn test_new_state() {
        let config = GameConfig::new(["Ada", "Grace"]).unwrap();
        let state = GameState::new(&config);

        assert_eq!(state.players.len(), 2);
        assert_eq!(state.board.len(), 6);
        assert_eq!(state.phase, Phase::AwaitingTurn);
        assert_eq!(state.turn_number, 1);
        assert!(state.history.is_empty());
        assert!(state.is_running());
    }

    #[test]
    fn test_record_turn() {
        let config = GameConfig::new(["Ada", "Grace"]).unwrap();
        let mut state = GameState::new(&config);

        state.record_turn(TurnRecord::new(PlayerId::new(0), TurnAction::Skipped, 1));
        state.record_turn(TurnRecord::new(PlayerId::new(1), TurnAction::Quit, 2));

        assert_eq!(state.history.len(), 2);
        assert_eq!(state.turn_number, 3);
        assert_eq!(state.history[1].action, TurnAction::Quit);
    }

    #[test]
    fn test_clone_is_independent() {
        let config = GameConfig::new(["Ada", "Grace"]).unwrap();
        let mut state = GameState::new(&config);
        let snapshot = state.clone();

        state.record_turn(TurnRecord::new(PlayerId::new(0), TurnAction::Skipped, 1));
        state.players.current_mut().spend(100);

        assert!(snapshot.history.is_empty());
        assert_eq!(snapshot.players.current().resources(), 1000);
    }

    #[test]
    fn test_state_serialization() {
        let config = GameConfig::new(["Ada", "Grace"]).unwrap();
        let state = GameState::new(&config);

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(back.players.len(), 2);
        assert_eq!(back.board, state.board);
    }
}
