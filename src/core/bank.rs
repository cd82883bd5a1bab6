//! Value transfer capability.
//!
//! On chain, the pot exists as contract balance and payouts are native-value
//! transfers. Here the engine keeps pot/fee *accounting* internally and calls
//! out through [`Bank`] only when value actually leaves the game: the winner's
//! reward and the owner's fee withdrawal. Incoming bets never touch the bank —
//! the host has already collected the attached value by the time `join_game`
//! runs, exactly as a contract's balance already holds `msg.value`.
//!
//! A transfer fails atomically or succeeds; the engine rolls its own state
//! back when a transfer fails, so a rejected payout never leaves the round
//! half-ended.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::address::Address;

/// Native-currency value at wei scale.
pub type Amount = u128;

/// Outgoing value transfer that fails atomically or succeeds.
pub trait Bank {
    /// Transfer `amount` to `recipient`.
    fn transfer(&mut self, recipient: Address, amount: Amount) -> Result<(), TransferError>;
}

/// A transfer was rejected by the hosting environment.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("transfer of {amount} to {recipient} rejected")]
pub struct TransferError {
    /// Intended recipient.
    pub recipient: Address,
    /// Amount that failed to move.
    pub amount: Amount,
}

/// In-memory ledger for tests and simulations.
///
/// Credits transfers to per-address balances and never rejects.
///
/// ```
/// use treasure_hunt::core::{Address, Bank, InMemoryBank};
///
/// let mut bank = InMemoryBank::new();
/// bank.transfer(Address::new(1), 500).unwrap();
/// assert_eq!(bank.balance_of(Address::new(1)), 500);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InMemoryBank {
    balances: FxHashMap<Address, Amount>,
}

impl InMemoryBank {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Balance credited to an address so far.
    #[must_use]
    pub fn balance_of(&self, address: Address) -> Amount {
        self.balances.get(&address).copied().unwrap_or(0)
    }
}

impl Bank for InMemoryBank {
    fn transfer(&mut self, recipient: Address, amount: Amount) -> Result<(), TransferError> {
        *self.balances.entry(recipient).or_insert(0) += amount;
        Ok(())
    }
}
