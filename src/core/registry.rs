//! Player registry: turn order, the round-robin cursor and aggregate
//! queries over all players.

use serde::{Deserialize, Serialize};

use super::config::REDISTRIBUTION_DIVISOR;
use super::player::{Player, PlayerId, PlayerMap};
use crate::error::{GameError, Result};

/// Outcome of a wasteland redistribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    /// Amount removed from the distributing player.
    pub amount: i64,
    /// Amount each other player received.
    pub per_recipient: i64,
    /// Remainder of the integer split that nobody received.
    pub lost: i64,
}

/// Players in turn order plus the index of whose turn it is.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerRegistry {
    players: PlayerMap<Player>,
    current: PlayerId,
}

impl PlayerRegistry {
    /// Create a registry from player names in turn order.
    ///
    /// Each player starts with the standard starting resources.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Player::new(PlayerId::new(i as u8), name))
            .collect();
        Self::from_players(players)
    }

    /// Create a registry from prepared players. Ids are reassigned to match
    /// the insertion order.
    pub fn from_players(mut players: Vec<Player>) -> Self {
        for (i, player) in players.iter_mut().enumerate() {
            player.id = PlayerId::new(i as u8);
        }
        Self {
            players: PlayerMap::from_vec(players),
            current: PlayerId::new(0),
        }
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.player_count()
    }

    /// Whether the registry holds no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Id of the player whose turn it is.
    #[must_use]
    pub fn current_id(&self) -> PlayerId {
        self.current
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current]
    }

    /// Mutable access to the player whose turn it is.
    pub fn current_mut(&mut self) -> &mut Player {
        &mut self.players[self.current]
    }

    /// Advance the cursor to the next player in turn order and return it.
    pub fn next_player(&mut self) -> PlayerId {
        self.current = PlayerId::new(((self.current.index() + 1) % self.len()) as u8);
        self.current
    }

    /// Look up a player.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Mutable lookup.
    pub fn get_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Players in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// Number of players with resources above zero.
    #[must_use]
    pub fn players_with_resources(&self) -> usize {
        self.iter().filter(|p| p.has_resources()).count()
    }

    /// Average resources of every player except `excluded`.
    ///
    /// Returns 0.0 when there are no other players.
    #[must_use]
    pub fn average_resources_excluding(&self, excluded: PlayerId) -> f64 {
        let (total, count) = self
            .players
            .iter()
            .filter(|(id, _)| *id != excluded)
            .fold((0i64, 0usize), |(total, count), (_, p)| {
                (total + p.resources(), count + 1)
            });

        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Move a quarter of `from`'s resources to the other players in equal
    /// integer shares. The remainder of the split is not paid out.
    pub fn distribute(&mut self, from: PlayerId) -> Result<Distribution> {
        let count = self.len();
        if count < 2 {
            return Err(GameError::illegal(
                "redistribution needs at least two players",
            ));
        }

        let recipients = count as i64 - 1;
        let amount = self.players[from].resources() / REDISTRIBUTION_DIVISOR;
        let per_recipient = amount / recipients;

        self.players[from].spend(amount);
        for (id, player) in self.players.iter_mut() {
            if id != from {
                player.receive(per_recipient);
            }
        }

        Ok(Distribution {
            amount,
            per_recipient,
            lost: amount - per_recipient * recipients,
        })
    }
}
