//! Core engine types: players, registry, state, turn records, dice,
//! configuration.

pub mod action;
pub mod config;
pub mod player;
pub mod registry;
pub mod rng;
pub mod state;

pub use action::{TurnAction, TurnChoice, TurnRecord};
pub use config::GameConfig;
pub use player::{Player, PlayerId, PlayerMap};
pub use registry::{Distribution, PlayerRegistry};
pub use rng::{Dice, DiceRoll, FixedDice, GameRng, GameRngState};
pub use state::{GameState, Phase};
