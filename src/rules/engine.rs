//! The turn engine.
//!
//! `TurnEngine` owns the `GameState` and the dice and drives one player
//! turn at a time through the phases:
//!
//! ```text
//! AwaitingTurn -> Rolling -> Resolving -> TurnComplete -> AwaitingTurn
//!                                                      -> GameOver
//! ```
//!
//! A player in the wasteland skips straight back to `AwaitingTurn`, and
//! quitting jumps to `GameOver`. Every question goes through a `UiPort`;
//! answers are range-checked here even if the port already did so.
//!
//! ## Turn outline
//!
//! 1. Skipped turn: clear the wasteland flag and pass to the next player.
//! 2. Otherwise show the status, then the menu: roll/develop when the
//!    player has something to develop, roll/quit when not.
//! 3. Roll: move `(old + total) % len`, pay the grant when the token wraps
//!    past start, then resolve the landing square.
//! 4. After a roll or a development the game ends once at most one player
//!    holds resources.

use tracing::{debug, info};

use super::efficiency::{efficiency, grant_amount};
use super::report::{FinalReport, StatusSnapshot};
use crate::board::{Category, SpecialKind, SquareKind};
use crate::core::config::{validate_player_count, MAX_PLAYERS, MIN_PLAYERS, WEALTH_FACTOR};
use crate::core::{
    Dice, GameConfig, GameRng, GameState, Phase, PlayerId, TurnAction, TurnChoice, TurnRecord,
};
use crate::error::{GameError, Result};
use crate::ui::{DevelopmentOption, GameEvent, UiPort};

/// Drives a game session.
///
/// ```
/// use save_our_planet::core::{FixedDice, GameConfig, GameState};
/// use save_our_planet::rules::TurnEngine;
/// use save_our_planet::ui::ScriptedPort;
///
/// let config = GameConfig::new(["Ada", "Grace"]).unwrap();
/// let mut engine = TurnEngine::with_dice(GameState::new(&config), FixedDice::new([(1, 1)]));
///
/// // Ada rolls, lands on the marine plant and declines to buy it.
/// let mut port = ScriptedPort::new().with_choices([1, 2]);
/// engine.play_turn(&mut port).unwrap();
/// assert_eq!(engine.state().players.current().name, "Grace");
/// ```
#[derive(Clone, Debug)]
pub struct TurnEngine<D = GameRng> {
    state: GameState,
    dice: D,
}

impl TurnEngine<GameRng> {
    /// Start a game from a configuration, rolling with a `GameRng` seeded
    /// from `config.seed`.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_dice(GameState::new(config), GameRng::new(config.seed))
    }
}

impl<D: Dice> TurnEngine<D> {
    /// Wrap a prepared state and a dice source.
    #[must_use]
    pub fn with_dice(state: GameState, dice: D) -> Self {
        Self { state, dice }
    }

    /// Greet the players, ask for the player count and names, and build a
    /// fresh game on the standard board.
    pub fn setup<P: UiPort>(port: &mut P, dice: D) -> Result<Self> {
        port.notify(&GameEvent::Welcome);
        port.notify(&GameEvent::EfficiencyExplained);

        let count = port.request_player_count(MIN_PLAYERS, MAX_PLAYERS)?;
        validate_player_count(count)?;

        let names = port.request_player_names(count)?;
        if names.len() != count {
            return Err(GameError::invalid(format!(
                "expected {count} player names, got {}",
                names.len()
            )));
        }
        let config = GameConfig::new(names)?;

        info!(players = count, "game set up");
        Ok(Self::with_dice(GameState::new(&config), dice))
    }

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable game state, for preparing positions.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// The dice source.
    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Play turns until the game ends, then report the final results.
    pub fn run<P: UiPort>(&mut self, port: &mut P) -> Result<FinalReport> {
        while self.state.is_running() {
            self.play_turn(port)?;
        }

        let report = FinalReport::from_state(&self.state);
        if let Some(leader) = report.leader() {
            info!(
                turns = self.state.history.len(),
                leader = %leader.name,
                worth = leader.total_worth,
                "game finished"
            );
        }
        port.notify(&GameEvent::FinalResults(report.clone()));
        Ok(report)
    }

    /// Play the current player's turn.
    ///
    /// Fails with `IllegalState` once the game is over. A port error
    /// aborts the turn where it happened.
    pub fn play_turn<P: UiPort>(&mut self, port: &mut P) -> Result<TurnRecord> {
        if self.state.phase.is_over() {
            return Err(GameError::illegal("the game is over"));
        }

        let id = self.state.players.current_id();
        if self.state.players.current().in_wasteland {
            return Ok(self.skip_turn(port, id));
        }

        port.notify(&GameEvent::Status(StatusSnapshot::capture(&self.state)));
        let player = self.state.players.current();
        port.notify(&GameEvent::TurnStarted {
            player: player.name.clone(),
            resources: player.resources(),
        });
        debug!(player = %player.name, turn = self.state.turn_number, "turn started");

        let developable = self.state.board.developable_properties(id);
        let menu = TurnChoice::menu(!developable.is_empty());
        port.notify(&GameEvent::TurnOptions {
            choices: menu.to_vec(),
        });

        let choice = request_choice(port, menu.len())?;
        let action = match menu[choice - 1] {
            TurnChoice::Roll => self.roll_and_move(port)?,
            TurnChoice::Develop => self.develop_property(port, &developable)?,
            TurnChoice::Quit => {
                let name = self.state.players.current().name.clone();
                info!(player = %name, "player quit");
                port.notify(&GameEvent::Quit { player: name });
                self.state.phase = Phase::GameOver;
                return Ok(self.record(id, TurnAction::Quit));
            }
        };

        self.state.phase = Phase::TurnComplete;
        let record = self.record(id, action);
        self.end_turn(port);
        Ok(record)
    }

    fn skip_turn<P: UiPort>(&mut self, port: &mut P, id: PlayerId) -> TurnRecord {
        let player = self.state.players.current_mut();
        player.in_wasteland = false;
        info!(player = %player.name, "turn skipped in the wasteland");
        port.notify(&GameEvent::TurnSkipped {
            player: player.name.clone(),
        });

        let record = self.record(id, TurnAction::Skipped);
        self.state.players.next_player();
        self.state.phase = Phase::AwaitingTurn;
        record
    }

    fn record(&mut self, id: PlayerId, action: TurnAction) -> TurnRecord {
        let record = TurnRecord::new(id, action, self.state.turn_number);
        self.state.record_turn(record.clone());
        record
    }

    /// End the game when at most one player holds resources, otherwise
    /// pass the turn on.
    fn end_turn<P: UiPort>(&mut self, port: &mut P) {
        let solvent = self.state.players.players_with_resources();
        if solvent <= 1 {
            info!(solvent, turn = self.state.turn_number, "game over");
            self.state.phase = Phase::GameOver;
            port.notify(&GameEvent::GameOver);
        } else {
            let next = self.state.players.next_player();
            debug!(next = %next, "turn passed");
            self.state.phase = Phase::AwaitingTurn;
        }
    }

    fn roll_and_move<P: UiPort>(&mut self, port: &mut P) -> Result<TurnAction> {
        self.state.phase = Phase::Rolling;

        let roll = self.dice.roll();
        let board_len = self.state.board.len();
        let player = self.state.players.current();
        let name = player.name.clone();
        let old = player.position;
        let new = (old + roll.total()) % board_len;

        port.notify(&GameEvent::DiceRolled {
            player: name.clone(),
            roll,
        });

        if new < old {
            let score = efficiency(player, &self.state.board);
            let amount = grant_amount(score);
            self.state.players.current_mut().receive(amount);
            info!(player = %name, efficiency = score, amount, "grant paid");
            port.notify(&GameEvent::GrantReceived {
                player: name.clone(),
                efficiency: score,
                amount,
            });
        }

        self.state.players.current_mut().position = new;
        let square = self.state.board.square(new)?.name.clone();
        debug!(player = %name, roll = roll.total(), from = old, to = new, "moved");
        port.notify(&GameEvent::Moved {
            player: name,
            position: new,
            square,
        });

        self.state.phase = Phase::Resolving;
        self.resolve_square(port, new)?;
        Ok(TurnAction::Rolled {
            roll,
            position: new,
        })
    }

    fn resolve_square<P: UiPort>(&mut self, port: &mut P, position: usize) -> Result<()> {
        let square = self.state.board.square(position)?;
        let name = square.name.clone();

        match square.kind.clone() {
            SquareKind::Special(SpecialKind::Start) => Ok(()),
            SquareKind::Special(SpecialKind::PenaltyZone) => self.resolve_wasteland(port),
            SquareKind::Property(property) => match property.owner() {
                None => self.offer_purchase(port, position, name),
                Some(owner) if owner == self.state.players.current_id() => {
                    port.notify(&GameEvent::OwnProperty {
                        player: self.state.players.current().name.clone(),
                        property: name,
                    });
                    Ok(())
                }
                Some(owner) => self.pay_rent(port, owner, position, name),
            },
        }
    }

    fn offer_purchase<P: UiPort>(
        &mut self,
        port: &mut P,
        position: usize,
        property: String,
    ) -> Result<()> {
        let cost = self.state.board.property(position)?.base_cost();
        let id = self.state.players.current_id();
        let player = self.state.players.current();
        let name = player.name.clone();

        if player.resources() < cost {
            debug!(player = %name, cost, resources = player.resources(), "cannot afford property");
            port.notify(&GameEvent::PurchaseUnaffordable {
                player: name,
                property,
                cost,
            });
            return Ok(());
        }

        port.notify(&GameEvent::PurchaseOffered {
            player: name.clone(),
            property: property.clone(),
            cost,
        });

        if request_choice(port, 2)? == 1 {
            self.state.board.property_mut(position)?.acquire(id)?;
            self.state.players.current_mut().spend(cost);
            info!(player = %name, property = %property, cost, "property purchased");
            port.notify(&GameEvent::Purchased {
                player: name,
                property,
                cost,
            });
        } else {
            port.notify(&GameEvent::PurchaseDeclined {
                player: name,
                property,
            });
        }
        Ok(())
    }

    fn pay_rent<P: UiPort>(
        &mut self,
        port: &mut P,
        owner: PlayerId,
        position: usize,
        property: String,
    ) -> Result<()> {
        let rent = self.state.board.property(position)?.rent();
        let payer = self.state.players.current().name.clone();
        let owner_name = self.state.players.get(owner).name.clone();

        port.notify(&GameEvent::RentDue {
            payer: payer.clone(),
            owner: owner_name.clone(),
            property,
            amount: rent,
        });

        let available = self.state.players.current().resources();
        let amount = rent.min(available);
        self.state.players.current_mut().spend(amount);
        self.state.players.get_mut(owner).receive(amount);
        info!(payer = %payer, owner = %owner_name, rent, paid = amount, "rent settled");

        let event = if amount == rent {
            GameEvent::RentPaid {
                payer,
                owner: owner_name,
                amount,
            }
        } else {
            GameEvent::RentPartial {
                payer,
                owner: owner_name,
                amount,
            }
        };
        port.notify(&event);
        Ok(())
    }

    fn resolve_wasteland<P: UiPort>(&mut self, port: &mut P) -> Result<()> {
        let id = self.state.players.current_id();
        let player = self.state.players.current();
        let name = player.name.clone();
        port.notify(&GameEvent::WastelandLanded {
            player: name.clone(),
        });

        if !player.is_eligible_for_wasteland_offer() {
            debug!(player = %name, "no resources, wasteland has no effect");
            return Ok(());
        }

        let average = self.state.players.average_resources_excluding(id);
        let wealthy = player.resources() as f64 > average * WEALTH_FACTOR;
        if !wealthy || player.recent_wasteland_offer {
            self.state.players.current_mut().recent_wasteland_offer = false;
            port.notify(&GameEvent::WastelandQuiet { player: name });
            return Ok(());
        }

        debug!(player = %name, resources = player.resources(), average, "wasteland offer");
        port.notify(&GameEvent::WastelandOffer {
            player: name.clone(),
        });
        let choice = request_choice(port, 2)?;
        self.state.players.current_mut().recent_wasteland_offer = true;

        if choice == 1 {
            self.state.players.current_mut().in_wasteland = true;
            info!(player = %name, "staying in the wasteland");
            port.notify(&GameEvent::WastelandStay { player: name });
        } else {
            let distribution = self.state.players.distribute(id)?;
            info!(
                player = %name,
                amount = distribution.amount,
                per_recipient = distribution.per_recipient,
                lost = distribution.lost,
                "resources distributed"
            );
            port.notify(&GameEvent::ResourcesDistributed {
                player: name,
                amount: distribution.amount,
                per_recipient: distribution.per_recipient,
            });
        }
        Ok(())
    }

    fn develop_property<P: UiPort>(
        &mut self,
        port: &mut P,
        developable: &[usize],
    ) -> Result<TurnAction> {
        self.state.phase = Phase::Resolving;
        let name = self.state.players.current().name.clone();

        let options = developable
            .iter()
            .map(|&position| -> Result<DevelopmentOption> {
                let square = self.state.board.square(position)?;
                let property = self.state.board.property(position)?;
                Ok(DevelopmentOption {
                    name: square.name.clone(),
                    level: property.development_level(),
                    cost: property.development_cost(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        port.notify(&GameEvent::DevelopmentOptions {
            player: name.clone(),
            options: options.clone(),
        });

        let choice = request_choice(port, options.len())?;
        let position = developable[choice - 1];
        let selected = &options[choice - 1];
        let property_name = selected.name.clone();
        let cost = selected.cost;

        if self.state.players.current().resources() < cost {
            debug!(player = %name, property = %property_name, cost, "cannot afford development");
            port.notify(&GameEvent::DevelopmentUnaffordable {
                player: name,
                property: property_name,
                cost,
            });
            return Ok(TurnAction::DevelopmentAbandoned { position });
        }

        let property = self.state.board.property(position)?;
        let costs_a_turn =
            property.category() == Category::Eco && property.development_level() == 1;
        if costs_a_turn {
            port.notify(&GameEvent::DevelopmentConfirmation {
                player: name.clone(),
                property: property_name.clone(),
            });
            if request_choice(port, 2)? != 1 {
                port.notify(&GameEvent::DevelopmentCancelled {
                    player: name,
                    property: property_name,
                });
                return Ok(TurnAction::DevelopmentAbandoned { position });
            }
        }

        let property = self.state.board.property_mut(position)?;
        property.develop()?;
        let level = property.development_level();
        let development = self.state.board.square(position)?.display_name().to_string();

        let player = self.state.players.current_mut();
        player.spend(cost);
        if costs_a_turn {
            player.in_wasteland = true;
        }

        info!(player = %name, property = %property_name, level, cost, "property developed");
        port.notify(&GameEvent::Developed {
            player: name,
            property: property_name,
            development,
            level,
            cost,
        });
        Ok(TurnAction::Developed { position, level })
    }
}

/// Ask for a menu choice and check it lies in `1..=max_option`.
fn request_choice<P: UiPort>(port: &mut P, max_option: usize) -> Result<usize> {
    let choice = port.request_choice(max_option)?;
    if (1..=max_option).contains(&choice) {
        Ok(choice)
    } else {
        Err(GameError::invalid(format!(
            "choice {choice} is not between 1 and {max_option}"
        )))
    }
}
