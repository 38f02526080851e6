//! Game configuration.
//!
//! The rules constants are fixed at build time. The only per-session
//! configuration is the list of player names and the RNG seed, which the
//! shell collects and hands over as a `GameConfig`.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 6;

/// Resources each player starts with.
pub const STARTING_RESOURCES: i64 = 1000;

/// Fewest players a game accepts.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game accepts.
pub const MAX_PLAYERS: usize = 4;

/// Longest allowed player name, in characters.
pub const MAX_NAME_LEN: usize = 25;

/// Grant paid for passing start when the efficiency score is zero.
pub const GRANT_BASE: i64 = 100;

/// Extra grant per efficiency point.
pub const GRANT_EFFICIENCY_MULTIPLIER: i64 = 5;

/// A player is "wealthy" on the wasteland when holding more than this
/// multiple of the other players' average.
pub const WEALTH_FACTOR: f64 = 1.5;

/// Redistribution gives away `resources / REDISTRIBUTION_DIVISOR`.
pub const REDISTRIBUTION_DIVISOR: i64 = 4;

/// Seed used when none is supplied.
pub const DEFAULT_SEED: u64 = 0x5EED_0F_EA27;

/// Per-session game configuration.
///
/// ```
/// use save_our_planet::core::GameConfig;
///
/// let config = GameConfig::new(["Ada", "Grace"]).unwrap().with_seed(7);
/// assert_eq!(config.player_count(), 2);
/// assert_eq!(config.seed, 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player names in turn order.
    pub player_names: Vec<String>,

    /// Seed for the dice RNG.
    pub seed: u64,
}

impl GameConfig {
    /// Create a configuration, validating the player count and names.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let player_names: Vec<String> = names.into_iter().map(Into::into).collect();
        validate_player_count(player_names.len())?;
        validate_player_names(&player_names)?;

        Ok(Self {
            player_names,
            seed: DEFAULT_SEED,
        })
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }
}

/// Check that `count` lies within `[MIN_PLAYERS, MAX_PLAYERS]`.
pub fn validate_player_count(count: usize) -> Result<()> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        Ok(())
    } else {
        Err(GameError::invalid(format!(
            "number of players must be between {MIN_PLAYERS} and {MAX_PLAYERS}, got {count}"
        )))
    }
}

/// Check a single candidate name against the names already taken.
pub fn validate_player_name<S: AsRef<str>>(name: &str, taken: &[S]) -> Result<()> {
    if name.is_empty() {
        return Err(GameError::invalid("name cannot be empty"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(GameError::invalid(format!(
            "name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    if taken.iter().any(|t| t.as_ref() == name) {
        return Err(GameError::invalid(format!("name '{name}' already taken")));
    }
    Ok(())
}

/// Check that all names are non-empty, short enough and unique.
pub fn validate_player_names(names: &[String]) -> Result<()> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for name in names {
        validate_player_name::<&str>(name, &[])?;
        if !seen.insert(name.as_str()) {
            return Err(GameError::invalid(format!("name '{name}' already taken")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GameConfig::new(["A", "B", "C"]).unwrap();
        assert_eq!(config.player_count(), 3);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.player_names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_player_count_bounds() {
        assert!(GameConfig::new(["Solo"]).is_err());
        assert!(GameConfig::new(["A", "B", "C", "D", "E"]).is_err());
        assert!(GameConfig::new(["A", "B", "C", "D"]).is_ok());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = GameConfig::new(["Ada", "Ada"]).unwrap_err();
        assert!(matches!(err, GameError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(GameConfig::new(["Ada", ""]).is_err());
    }

    #[test]
    fn test_name_length_limit() {
        let max = "x".repeat(MAX_NAME_LEN);
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_player_name::<&str>(&max, &[]).is_ok());
        assert!(validate_player_name::<&str>(&long, &[]).is_err());
    }

    #[test]
    fn test_name_against_taken() {
        let taken = vec!["Ada".to_string()];
        assert!(validate_player_name("Ada", &taken).is_err());
        assert!(validate_player_name("Grace", &taken).is_ok());
    }
}
