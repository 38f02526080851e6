//! Efficiency score and the pass-start grant.
//!
//! ```text
//! value      = resources + sum(total investment of owned properties)
//! efficiency = value * 100 / (total spent + value)     (0 if nothing spent)
//! ```
//!
//! Division truncates. The score is shown to players and sets grant
//! amounts, so it must never be rounded.

use crate::board::Board;
use crate::core::config::{GRANT_BASE, GRANT_EFFICIENCY_MULTIPLIER};
use crate::core::Player;

/// Efficiency score of `player` on `board`, as an integer percentage.
///
/// ```
/// use save_our_planet::board::Board;
/// use save_our_planet::core::{Player, PlayerId};
/// use save_our_planet::rules::efficiency;
///
/// let player = Player::new(PlayerId::new(0), "Ada");
/// assert_eq!(efficiency(&player, &Board::standard()), 0);
/// ```
#[must_use]
pub fn efficiency(player: &Player, board: &Board) -> i64 {
    let total_spent = player.total_spent();
    if total_spent == 0 {
        return 0;
    }

    let value = player.resources() + board.investment_of(player.id);
    let denominator = total_spent + value;
    if denominator <= 0 {
        return 0;
    }
    value * 100 / denominator
}

/// Grant paid for passing the start square.
#[must_use]
pub fn grant_amount(efficiency: i64) -> i64 {
    if efficiency == 0 {
        GRANT_BASE
    } else {
        GRANT_BASE + efficiency * GRANT_EFFICIENCY_MULTIPLIER
    }
}
