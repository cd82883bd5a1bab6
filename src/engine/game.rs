//! The game engine: entry operations, turn advancement, treasure rules,
//! payout accounting.
//!
//! One instance models one deployed contract. Construction corresponds to
//! deployment: round 1 starts active with a random treasure cell, and the
//! constructing address becomes the owner.
//!
//! ## Atomicity
//!
//! Operations either fully apply or fully reject. The only failure that can
//! occur after state has been touched is an outgoing transfer being rejected;
//! those paths snapshot the state up front and restore it on failure, so a
//! failed payout never leaves a round half-ended or fees half-withdrawn.
//! Snapshots are cheap because [`GameState`] clones in O(1) for the history
//! log and O(players) for the rest.

use log::{debug, info};
use smallvec::smallvec;

use super::error::GameError;
use super::event::{EventBatch, GameEvent};
use super::state::{GameState, PlayerState, MINIMUM_BET, WINNER_SHARE_PERCENT};
use crate::core::{Address, Amount, Bank, Direction, Position, RandomSource, GRID_CELLS};

/// The treasure hunt engine.
///
/// Generic over the randomness source so hosts can inject
/// [`ChainEntropy`](crate::core::ChainEntropy) and tests a seeded
/// [`GameRng`](crate::core::GameRng).
#[derive(Clone, Debug)]
pub struct TreasureHunt<R: RandomSource> {
    state: GameState,
    rng: R,
}

impl<R: RandomSource> TreasureHunt<R> {
    /// Deploy a new game. Round 1 begins immediately with a random treasure.
    pub fn new(owner: Address, mut rng: R) -> Self {
        let treasure = random_position(&mut rng);
        info!("game deployed by {owner}, round 1, treasure at {treasure}");
        Self {
            state: GameState::new(owner, treasure),
            rng,
        }
    }

    /// Read-only view of the full state, including observers and history.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    // === Entry operations ===

    /// Join the current round with an attached bet.
    ///
    /// The caller is placed on a uniformly random cell and appended to the
    /// turn order; the bet joins the pot. The first joiner immediately holds
    /// the turn and a [`GameEvent::NextTurn`] is emitted for them.
    pub fn join_game(
        &mut self,
        caller: Address,
        attached_value: Amount,
    ) -> Result<EventBatch, GameError> {
        if !self.state.round.active {
            return Err(GameError::RoundNotActive);
        }
        if self.state.is_player_active(caller) {
            return Err(GameError::AlreadyJoined);
        }
        if attached_value < MINIMUM_BET {
            return Err(GameError::InsufficientBet);
        }

        let position = random_position(&mut self.rng);
        self.state.players.insert(
            caller,
            PlayerState {
                position,
                active: true,
            },
        );
        self.state.turn_order.push(caller);
        self.state.total_players += 1;
        self.state.round.pot += attached_value;

        debug!(
            "{caller} joined round {} at {position}, pot now {}",
            self.state.round.number, self.state.round.pot
        );

        let mut events = EventBatch::new();
        if self.state.total_players == 1 {
            self.state.current_turn = 0;
            events.push(GameEvent::NextTurn { player: caller });
        }
        self.commit(&events);
        Ok(events)
    }

    /// Submit a move for the player holding the turn.
    ///
    /// Boundary-crossing moves are not errors: they emit
    /// [`GameEvent::InvalidMove`] and leave both position and turn unchanged.
    /// A valid move applies the step, then checks in priority order: landing
    /// on the treasure wins the round; a cell divisible by 5 relocates the
    /// treasure away from the player; a prime cell relocates it anywhere.
    /// Valid non-winning moves pass the turn round-robin.
    ///
    /// The winner's reward is paid through `bank` as the final step; a
    /// rejected transfer rolls the whole move back.
    pub fn submit_move(
        &mut self,
        bank: &mut dyn Bank,
        caller: Address,
        direction: Direction,
    ) -> Result<EventBatch, GameError> {
        if !self.state.round.active {
            return Err(GameError::RoundNotActive);
        }
        if !self.state.is_player_active(caller) {
            return Err(GameError::PlayerNotActive);
        }
        if self.state.current_player() != Some(caller) {
            return Err(GameError::NotYourTurn);
        }

        let from = match self.state.player_position(caller) {
            Some(pos) => pos,
            None => return Err(GameError::PlayerNotActive),
        };

        let Some(to) = from.step(direction) else {
            debug!("{caller} attempted invalid move {direction} from {from}");
            let events: EventBatch = smallvec![GameEvent::InvalidMove {
                player: caller,
                direction,
            }];
            self.commit(&events);
            return Ok(events);
        };

        let snapshot = self.state.clone();

        if let Some(player) = self.state.players.get_mut(&caller) {
            player.position = to;
        }
        let mut events: EventBatch = smallvec![GameEvent::PlayerMoved {
            player: caller,
            from,
            to,
            direction,
        }];

        if to == self.state.round.treasure {
            let won = self.end_round(caller, &mut events);
            self.commit(&events);
            // Transfer last, after all state mutation is final. Roll back on
            // rejection so the round is never marked ended without the payout.
            if let Err(err) = bank.transfer(caller, won) {
                self.state = snapshot;
                return Err(err.into());
            }
            return Ok(events);
        }

        if to.divisible_by_five() {
            let old = self.state.round.treasure;
            let new = random_position_excluding(&mut self.rng, to);
            self.state.round.treasure = new;
            events.push(GameEvent::TreasureMoved { from: old, to: new });
            debug!("treasure fled {old} -> {new} (cell {to} divisible by 5)");
        } else if to.is_prime() {
            let old = self.state.round.treasure;
            let new = random_position(&mut self.rng);
            self.state.round.treasure = new;
            events.push(GameEvent::TreasureMoved { from: old, to: new });
            debug!("treasure fled {old} -> {new} (cell {to} is prime)");
        }

        self.state.current_turn = (self.state.current_turn + 1) % self.state.turn_order.len();
        let next = self.state.turn_order[self.state.current_turn];
        events.push(GameEvent::NextTurn { player: next });

        self.commit(&events);
        Ok(events)
    }

    /// Start the next round. Owner-only; the previous round must have ended.
    pub fn start_new_game(&mut self, caller: Address) -> Result<EventBatch, GameError> {
        if caller != self.state.owner {
            return Err(GameError::Unauthorized);
        }
        if self.state.round.active {
            return Err(GameError::RoundStillActive);
        }

        self.state.round.number += 1;
        self.state.round.active = true;
        self.state.round.pot = 0;
        self.state.round.treasure = random_position(&mut self.rng);
        // Round end already deactivated everyone; re-clear anyway.
        self.state.players.clear();
        self.state.turn_order.clear();
        self.state.current_turn = 0;
        self.state.total_players = 0;

        info!(
            "round {} started, treasure at {}",
            self.state.round.number, self.state.round.treasure
        );

        let events: EventBatch = smallvec![GameEvent::NewRound {
            round: self.state.round.number,
            treasure: self.state.round.treasure,
        }];
        self.commit(&events);
        Ok(events)
    }

    /// Withdraw the full accrued fee balance to the owner. Owner-only;
    /// independent of the round lifecycle.
    pub fn withdraw_fees(
        &mut self,
        bank: &mut dyn Bank,
        caller: Address,
    ) -> Result<EventBatch, GameError> {
        if caller != self.state.owner {
            return Err(GameError::Unauthorized);
        }

        let snapshot = self.state.clone();
        let amount = self.state.accrued_fees;
        self.state.accrued_fees = 0;

        let events: EventBatch = smallvec![GameEvent::FeesWithdrawn {
            owner: self.state.owner,
            amount,
        }];
        self.commit(&events);

        if let Err(err) = bank.transfer(self.state.owner, amount) {
            self.state = snapshot;
            return Err(err.into());
        }
        info!("owner withdrew {amount} in fees");
        Ok(events)
    }

    // === Harness hook ===

    /// Teleport a joined player, bypassing movement rules.
    ///
    /// The original contract exposes this for its test harness and the test
    /// suites here lean on it the same way. Unknown addresses are ignored.
    pub fn set_player_position(&mut self, player: Address, position: Position) {
        if let Some(state) = self.state.players.get_mut(&player) {
            state.position = position;
        }
    }

    // === Internals ===

    /// End the round with `winner` on the treasure. Returns the reward owed;
    /// the caller performs the transfer after all mutation is committed.
    fn end_round(&mut self, winner: Address, events: &mut EventBatch) -> Amount {
        let pot = self.state.round.pot;
        let reward = pot * WINNER_SHARE_PERCENT / 100;
        self.state.accrued_fees += pot - reward;

        self.state.round.active = false;
        self.state.round.pot = 0;
        for player in self.state.players.values_mut() {
            player.active = false;
        }
        self.state.turn_order.clear();
        self.state.current_turn = 0;
        self.state.total_players = 0;
        // Treasure stays put; the next round re-randomizes it.

        info!(
            "round {} won by {winner}, reward {reward}",
            self.state.round.number
        );
        events.push(GameEvent::GameWon { winner, reward });
        reward
    }

    /// Append an operation's events to the history log.
    fn commit(&mut self, events: &EventBatch) {
        for event in events {
            self.state.record_event(event.clone());
        }
    }
}

/// Uniform cell in [0, 99].
fn random_position(rng: &mut impl RandomSource) -> Position {
    Position::from_modulo(rng.next_in_range(u32::from(GRID_CELLS)))
}

/// Uniform cell in [0, 99] excluding `exclude`.
///
/// Draws from the 99 remaining cells and shifts past the excluded one, so
/// the result is uniform without rejection loops.
fn random_position_excluding(rng: &mut impl RandomSource, exclude: Position) -> Position {
    let draw = rng.next_in_range(u32::from(GRID_CELLS) - 1) as u8;
    let cell = if draw >= exclude.cell() { draw + 1 } else { draw };
    Position::from_modulo(u32::from(cell))
}
