//! Notifications the engine sends to a UI port.
//!
//! Events carry player and square names rather than ids so a port can
//! render them without access to the game state.

use serde::{Deserialize, Serialize};

use crate::core::{DiceRoll, TurnChoice};
use crate::rules::{FinalReport, StatusSnapshot};

/// A property offered for development.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevelopmentOption {
    /// Square name.
    pub name: String,
    /// Current level.
    pub level: u8,
    /// Cost of the next level.
    pub cost: i64,
}

/// Fire-and-forget notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Game start banner.
    Welcome,
    /// How the efficiency score is computed.
    EfficiencyExplained,
    /// Board and balances before a turn.
    Status(StatusSnapshot),
    /// A player's turn begins.
    TurnStarted {
        /// Player name.
        player: String,
        /// Current balance.
        resources: i64,
    },
    /// The turn menu; the next choice request indexes into `choices`.
    TurnOptions {
        /// Options in menu order.
        choices: Vec<TurnChoice>,
    },
    /// A wasteland player loses the turn.
    TurnSkipped {
        /// Player name.
        player: String,
    },
    /// Dice result.
    DiceRolled {
        /// Player name.
        player: String,
        /// The roll.
        roll: DiceRoll,
    },
    /// Token moved.
    Moved {
        /// Player name.
        player: String,
        /// Landing index.
        position: usize,
        /// Landing square name.
        square: String,
    },
    /// Grant paid for passing start.
    GrantReceived {
        /// Player name.
        player: String,
        /// Efficiency score the grant was based on.
        efficiency: i64,
        /// Grant paid.
        amount: i64,
    },
    /// Unowned property; the next choice request is 1 = buy, 2 = decline.
    PurchaseOffered {
        /// Player name.
        player: String,
        /// Property name.
        property: String,
        /// Price.
        cost: i64,
    },
    /// Unowned property the player cannot afford.
    PurchaseUnaffordable {
        /// Player name.
        player: String,
        /// Property name.
        property: String,
        /// Price.
        cost: i64,
    },
    /// Purchase completed.
    Purchased {
        /// Player name.
        player: String,
        /// Property name.
        property: String,
        /// Price paid.
        cost: i64,
    },
    /// Purchase declined.
    PurchaseDeclined {
        /// Player name.
        player: String,
        /// Property name.
        property: String,
    },
    /// The player landed on the own property.
    OwnProperty {
        /// Player name.
        player: String,
        /// Property name.
        property: String,
    },
    /// Rent owed.
    RentDue {
        /// Paying player.
        payer: String,
        /// Receiving player.
        owner: String,
        /// Property name.
        property: String,
        /// Rent owed.
        amount: i64,
    },
    /// Rent paid in full.
    RentPaid {
        /// Paying player.
        payer: String,
        /// Receiving player.
        owner: String,
        /// Amount transferred.
        amount: i64,
    },
    /// Payer could not cover the rent and handed over everything left.
    RentPartial {
        /// Paying player.
        payer: String,
        /// Receiving player.
        owner: String,
        /// Amount transferred.
        amount: i64,
    },
    /// Landed on the wasteland.
    WastelandLanded {
        /// Player name.
        player: String,
    },
    /// Wealth offer; the next choice request is 1 = skip next turn,
    /// 2 = redistribute.
    WastelandOffer {
        /// Player name.
        player: String,
    },
    /// The player accepted a skipped turn.
    WastelandStay {
        /// Player name.
        player: String,
    },
    /// Resources redistributed.
    ResourcesDistributed {
        /// Distributing player.
        player: String,
        /// Amount given away.
        amount: i64,
        /// Amount each other player received.
        per_recipient: i64,
    },
    /// Nothing happens on the wasteland.
    WastelandQuiet {
        /// Player name.
        player: String,
    },
    /// Properties available for development; the next choice request
    /// indexes into `options`.
    DevelopmentOptions {
        /// Player name.
        player: String,
        /// Options in board order.
        options: Vec<DevelopmentOption>,
    },
    /// Eco city final development costs a turn; the next choice request is
    /// 1 = proceed, 2 = cancel.
    DevelopmentConfirmation {
        /// Player name.
        player: String,
        /// Property name.
        property: String,
    },
    /// Development completed.
    Developed {
        /// Player name.
        player: String,
        /// Property name.
        property: String,
        /// New themed development name.
        development: String,
        /// Level reached.
        level: u8,
        /// Amount paid.
        cost: i64,
    },
    /// Development cancelled at confirmation.
    DevelopmentCancelled {
        /// Player name.
        player: String,
        /// Property name.
        property: String,
    },
    /// Development not affordable.
    DevelopmentUnaffordable {
        /// Player name.
        player: String,
        /// Property name.
        property: String,
        /// Cost of the next level.
        cost: i64,
    },
    /// A player ended the game.
    Quit {
        /// Player name.
        player: String,
    },
    /// At most one player holds resources.
    GameOver,
    /// Final standings.
    FinalResults(FinalReport),
}
