//! Caller identity.
//!
//! Every entry operation takes an explicit `Address` — the caller's immutable
//! address-like identifier. The hosting environment (a chain, a simulation
//! harness) is responsible for authenticating it; the engine only compares.

use serde::{Deserialize, Serialize};

/// Address-like identity for players and the owner.
///
/// Opaque to the engine: it is only stored, compared, and used as a map key.
///
/// ```
/// use treasure_hunt::core::Address;
///
/// let alice = Address::new(1);
/// let bob = Address::new(2);
/// assert_ne!(alice, bob);
/// assert_eq!(format!("{}", alice), "0x0000000000000001");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(pub u64);

impl Address {
    /// Create a new address.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for Address {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:016x}", self.0)
    }
}
