//! # save-our-planet
//!
//! Engine for a turn-based sustainability board game. Two to four players
//! move around a ring of six squares, buy and develop renewable-energy
//! properties, pay rent to each other and collect a grant on passing start
//! that scales with how efficiently they have spent their resources.
//!
//! ## Design Principles
//!
//! 1. **One Mutator**: The `TurnEngine` owns the `GameState` and is the only
//!    code that changes it during play.
//!
//! 2. **Injected I/O**: Every question and notification goes through the
//!    `UiPort` trait. The console and the scripted port are two
//!    implementations; the engine never touches stdin or stdout.
//!
//! 3. **Deterministic**: Dice come from a seedable ChaCha8 RNG behind the
//!    `Dice` trait, so a seed plus a script replays a game exactly.
//!
//! ## Modules
//!
//! - `core`: Players, registry, state, turn records, dice, configuration
//! - `board`: Squares, properties and the standard board
//! - `rules`: Efficiency score, turn engine, status and final reports
//! - `ui`: The UI port trait, game events and the two ports
//! - `error`: `GameError` and the crate `Result`

pub mod board;
pub mod core;
pub mod error;
pub mod rules;
pub mod ui;

// Re-export commonly used types
pub use crate::core::{
    Dice, DiceRoll, FixedDice, GameConfig, GameRng, GameRngState, GameState, Phase, Player,
    PlayerId, PlayerMap, PlayerRegistry, TurnAction, TurnChoice, TurnRecord,
};

pub use crate::board::{Board, Category, Property, SpecialKind, Square, SquareKind};

pub use crate::rules::{efficiency, grant_amount, FinalReport, StatusSnapshot, TurnEngine};

pub use crate::ui::{ConsolePort, GameEvent, ScriptedPort, UiPort};

pub use crate::error::{GameError, Result};
