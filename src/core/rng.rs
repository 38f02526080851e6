//! Deterministic dice.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Serializable**: O(1) state capture and restore
//! - **Injectable**: The engine rolls through the `Dice` trait, so tests can
//!   supply a fixed sequence with `FixedDice`
//!
//! ```
//! use save_our_planet::core::{Dice, GameRng};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//! assert_eq!(rng1.roll(), rng2.roll());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Faces on each die.
pub const DIE_FACES: u8 = 6;

/// The result of rolling two dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    /// First die, in `1..=6`.
    pub first: u8,
    /// Second die, in `1..=6`.
    pub second: u8,
}

impl DiceRoll {
    /// Create a roll from two face values.
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Sum of both dice.
    #[must_use]
    pub const fn total(self) -> usize {
        self.first as usize + self.second as usize
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} and {} for a total of {}", self.first, self.second, self.total())
    }
}

/// Source of dice rolls for the turn engine.
pub trait Dice {
    /// Roll two dice.
    fn roll(&mut self) -> DiceRoll;
}

/// Seedable RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll a single die.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl Dice for GameRng {
    fn roll(&mut self) -> DiceRoll {
        let first = self.roll_die();
        let second = self.roll_die();
        DiceRoll::new(first, second)
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position so capture and restore are O(1)
/// regardless of how many rolls have happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed list of rolls, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct FixedDice {
    rolls: Vec<DiceRoll>,
    next: usize,
}

impl FixedDice {
    /// Create from `(first, second)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if `rolls` is empty or a face is outside `1..=6`.
    pub fn new(rolls: impl IntoIterator<Item = (u8, u8)>) -> Self {
        let rolls: Vec<DiceRoll> = rolls
            .into_iter()
            .map(|(a, b)| DiceRoll::new(a, b))
            .collect();
        assert!(!rolls.is_empty(), "FixedDice needs at least one roll");
        assert!(
            rolls
                .iter()
                .all(|r| (1..=DIE_FACES).contains(&r.first) && (1..=DIE_FACES).contains(&r.second)),
            "die faces must be in 1..=6"
        );
        Self { rolls, next: 0 }
    }
}

impl Dice for FixedDice {
    fn roll(&mut self) -> DiceRoll {
        let roll = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        roll
    }
}
