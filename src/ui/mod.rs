//! The UI port: how the engine asks questions and reports what happened.
//!
//! Requests are synchronous and return a value or a typed failure. Ports
//! own any retry loop; the engine re-checks every returned value and treats
//! anything out of range as `InvalidInput`.
//!
//! - `console`: line-based text console over any reader/writer pair
//! - `scripted`: canned answers plus an event log, for tests and benches

pub mod console;
pub mod event;
pub mod scripted;

pub use console::ConsolePort;
pub use event::{DevelopmentOption, GameEvent};
pub use scripted::ScriptedPort;

use crate::error::Result;

/// Synchronous interface to whoever is playing.
pub trait UiPort {
    /// Ask how many players will play, within `[min, max]`.
    fn request_player_count(&mut self, min: usize, max: usize) -> Result<usize>;

    /// Ask for `count` unique, non-empty player names.
    fn request_player_names(&mut self, count: usize) -> Result<Vec<String>>;

    /// Ask for a menu choice in `1..=max_option`.
    fn request_choice(&mut self, max_option: usize) -> Result<usize>;

    /// Report an event.
    fn notify(&mut self, event: &GameEvent);
}

impl<P: UiPort + ?Sized> UiPort for &mut P {
    fn request_player_count(&mut self, min: usize, max: usize) -> Result<usize> {
        (**self).request_player_count(min, max)
    }

    fn request_player_names(&mut self, count: usize) -> Result<Vec<String>> {
        (**self).request_player_names(count)
    }

    fn request_choice(&mut self, max_option: usize) -> Result<usize> {
        (**self).request_choice(max_option)
    }

    fn notify(&mut self, event: &GameEvent) {
        (**self).notify(event);
    }
}
