//! Error types for the game engine.
//!
//! Running out of money is not an error: purchases and developments are
//! simply declined and rent degrades to a partial payment. Errors here are
//! either bad values coming back from a UI port or contract violations the
//! engine guards against before they can happen.

use thiserror::Error;

/// Errors raised by the board, the player registry and the turn engine.
#[derive(Debug, Error)]
pub enum GameError {
    /// A UI port returned a value outside the requested range, or a player
    /// setup (count, names) failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Board lookup outside `[0, len)`.
    #[error("square index {index} out of range (board has {len} squares)")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Board length.
        len: usize,
    },

    /// An operation that the current game state does not permit, such as
    /// acquiring an owned property or developing past the maximum level.
    #[error("illegal state transition: {0}")]
    IllegalState(String),

    /// The input source was exhausted before a valid answer was obtained.
    #[error("input closed")]
    InputClosed,

    /// Console I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Shorthand for [`GameError::IllegalState`].
    pub(crate) fn illegal(msg: impl Into<String>) -> Self {
        Self::IllegalState(msg.into())
    }

    /// Shorthand for [`GameError::InvalidInput`].
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
