//! A UI port that answers from a script and records every event.

use std::collections::VecDeque;

use super::{GameEvent, UiPort};
use crate::error::{GameError, Result};

/// Canned answers plus an event log.
///
/// ```
/// use save_our_planet::ui::{ScriptedPort, UiPort};
///
/// let mut port = ScriptedPort::new().with_players(["Ada", "Grace"]).with_choices([2]);
/// assert_eq!(port.request_player_count(2, 4).unwrap(), 2);
/// assert_eq!(port.request_choice(2).unwrap(), 2);
/// assert!(port.request_choice(2).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedPort {
    names: Vec<String>,
    choices: VecDeque<usize>,
    default_choice: Option<usize>,
    events: Vec<GameEvent>,
}

impl ScriptedPort {
    /// Create an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Player names answered during setup; their count answers the player
    /// count request.
    #[must_use]
    pub fn with_players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Append menu answers, consumed in order.
    #[must_use]
    pub fn with_choices(mut self, choices: impl IntoIterator<Item = usize>) -> Self {
        self.choices.extend(choices);
        self
    }

    /// Answer used once the scripted choices run out. The answer is clamped
    /// to the offered range.
    #[must_use]
    pub fn with_default_choice(mut self, choice: usize) -> Self {
        self.default_choice = Some(choice);
        self
    }

    /// Queue more menu answers.
    pub fn push_choices(&mut self, choices: impl IntoIterator<Item = usize>) {
        self.choices.extend(choices);
    }

    /// Menu answers not yet consumed.
    #[must_use]
    pub fn remaining_choices(&self) -> usize {
        self.choices.len()
    }

    /// Every event received so far.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Drain the event log.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl UiPort for ScriptedPort {
    fn request_player_count(&mut self, _min: usize, _max: usize) -> Result<usize> {
        if self.names.is_empty() {
            return Err(GameError::InputClosed);
        }
        Ok(self.names.len())
    }

    fn request_player_names(&mut self, count: usize) -> Result<Vec<String>> {
        if self.names.len() < count {
            return Err(GameError::InputClosed);
        }
        Ok(self.names[..count].to_vec())
    }

    fn request_choice(&mut self, max_option: usize) -> Result<usize> {
        match self.choices.pop_front() {
            Some(choice) => Ok(choice),
            None => self
                .default_choice
                .map(|c| c.clamp(1, max_option.max(1)))
                .ok_or(GameError::InputClosed),
        }
    }

    fn notify(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_answers() {
        let mut port = ScriptedPort::new().with_players(["A", "B", "C"]);
        assert_eq!(port.request_player_count(2, 4).unwrap(), 3);
        assert_eq!(port.request_player_names(3).unwrap(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_empty_script_is_closed() {
        let mut port = ScriptedPort::new();
        assert!(matches!(port.request_player_count(2, 4), Err(GameError::InputClosed)));
        assert!(matches!(port.request_choice(3), Err(GameError::InputClosed)));
    }

    #[test]
    fn test_default_choice_is_clamped() {
        let mut port = ScriptedPort::new().with_choices([3]).with_default_choice(2);
        assert_eq!(port.request_choice(3).unwrap(), 3);
        assert_eq!(port.request_choice(3).unwrap(), 2);
        assert_eq!(port.request_choice(1).unwrap(), 1);
    }

    #[test]
    fn test_records_events() {
        let mut port = ScriptedPort::new();
        port.notify(&GameEvent::Welcome);
        port.notify(&GameEvent::GameOver);

        assert_eq!(port.events(), &[GameEvent::Welcome, GameEvent::GameOver]);
        assert_eq!(port.take_events().len(), 2);
        assert!(port.events().is_empty());
    }
}
