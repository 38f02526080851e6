//! Player identification, per-player storage and the player ledger.
//!
//! ## PlayerId
//!
//! Type-safe handle for a seat at the table. Properties store a `PlayerId`
//! rather than a reference, and resolve it through the registry.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! Resource ledger, board position and wasteland flags.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::STARTING_RESOURCES;

/// Player identifier. Indices are 0-based in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build from values already in turn order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A player's ledger and board state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat at the table.
    pub id: PlayerId,

    /// Display name, unique within a game.
    pub name: String,

    resources: i64,
    total_spent: i64,

    /// Board index, always `< BOARD_SIZE`.
    pub position: usize,

    /// The next turn of this player is skipped.
    pub in_wasteland: bool,

    /// A wealth-based wasteland offer was made on the last wasteland visit.
    pub recent_wasteland_offer: bool,
}

impl Player {
    /// Create a player on the start square with the starting resources.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self::with_resources(id, name, STARTING_RESOURCES)
    }

    /// Create a player with a specific starting balance.
    pub fn with_resources(id: PlayerId, name: impl Into<String>, resources: i64) -> Self {
        Self {
            id,
            name: name.into(),
            resources,
            total_spent: 0,
            position: 0,
            in_wasteland: false,
            recent_wasteland_offer: false,
        }
    }

    /// Current balance.
    #[must_use]
    pub fn resources(&self) -> i64 {
        self.resources
    }

    /// Sum of every amount ever removed from this player.
    #[must_use]
    pub fn total_spent(&self) -> i64 {
        self.total_spent
    }

    /// Whether the player still holds any resources.
    #[must_use]
    pub fn has_resources(&self) -> bool {
        self.resources > 0
    }

    /// Credit resources.
    pub fn receive(&mut self, amount: i64) {
        self.resources += amount;
    }

    /// Remove resources and record them as spent.
    ///
    /// Callers check affordability first; the balance is clamped at zero so
    /// a settlement can never leave it negative.
    pub fn spend(&mut self, amount: i64) {
        self.resources -= amount;
        self.total_spent += amount;
        if self.resources < 0 {
            self.resources = 0;
        }
    }

    /// Whether the wasteland wealth check applies at all.
    #[must_use]
    pub fn is_eligible_for_wasteland_offer(&self) -> bool {
        self.resources > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 1");
    }

    #[test]
    fn test_player_map_from_vec() {
        let map = PlayerMap::from_vec(vec![10, 20, 30]);

        assert_eq!(map.player_count(), 3);
        assert_eq!(map[PlayerId::new(2)], 30);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[1], (PlayerId::new(1), &20));
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i64> = PlayerMap::from_vec(vec![0, 0]);

        map[PlayerId::new(0)] = 10;
        for (_, v) in map.iter_mut() {
            *v += 1;
        }

        assert_eq!(map[PlayerId::new(0)], 11);
        assert_eq!(map[PlayerId::new(1)], 1);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::from_vec(Vec::new());
    }

    #[test]
    fn test_new_player() {
        let player = Player::new(PlayerId::new(0), "Ada");

        assert_eq!(player.name, "Ada");
        assert_eq!(player.resources(), STARTING_RESOURCES);
        assert_eq!(player.total_spent(), 0);
        assert_eq!(player.position, 0);
        assert!(!player.in_wasteland);
        assert!(!player.recent_wasteland_offer);
    }

    #[test]
    fn test_spend_and_receive() {
        let mut player = Player::new(PlayerId::new(0), "Ada");

        player.spend(300);
        assert_eq!(player.resources(), 700);
        assert_eq!(player.total_spent(), 300);

        player.receive(50);
        assert_eq!(player.resources(), 750);
        assert_eq!(player.total_spent(), 300);
    }

    #[test]
    fn test_spend_clamps_at_zero() {
        let mut player = Player::with_resources(PlayerId::new(0), "Ada", 40);
        player.spend(100);
        assert_eq!(player.resources(), 0);
        assert_eq!(player.total_spent(), 100);
    }

    #[test]
    fn test_wasteland_eligibility() {
        let mut player = Player::with_resources(PlayerId::new(0), "Ada", 1);
        assert!(player.is_eligible_for_wasteland_offer());
        player.spend(1);
        assert!(!player.is_eligible_for_wasteland_offer());
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(PlayerId::new(1), "Grace");
        let json = serde_json::to_string(&player).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, back);
    }
}
