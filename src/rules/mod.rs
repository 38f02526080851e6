//! Game rules: the efficiency score, the turn engine and the read-only
//! views handed to the UI.
//!
//! The engine is the only code that mutates a running game. Everything
//! else here is a pure function of the state.

pub mod efficiency;
pub mod engine;
pub mod report;

pub use efficiency::{efficiency, grant_amount};
pub use engine::TurnEngine;
pub use report::{FinalReport, Holding, SquareStatus, Standing, StatusSnapshot};
