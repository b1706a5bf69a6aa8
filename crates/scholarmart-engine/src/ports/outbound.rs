//! # Driven Ports (Outbound)
//!
//! Interfaces the engine depends on. Adapters implement these traits to
//! provide record storage and value transfer (the host ledger runtime),
//! collectible issuance, wall-clock time, and event delivery.
//!
//! Dependencies point inward: the service never knows which adapter is behind
//! a port, and every operation handler is a complete synchronous computation,
//! so the traits are synchronous as well.

use crate::domain::entities::Record;
use crate::domain::value_objects::{Address, Identity, TokenRef};
use crate::errors::{LedgerError, TokenError};
use crate::events::MarketplaceEvent;

// =============================================================================
// LEDGER STORE (host ledger runtime)
// =============================================================================

/// Access to the host ledger: typed records at addresses, plus value accounts.
///
/// The host guarantees the properties the engine leans on: creation at an
/// occupied address fails cleanly (compare-and-swap semantics), reads within
/// an invocation see that invocation's prior writes, and invocations whose
/// write sets overlap are serialized.
pub trait LedgerStore: Send + Sync {
    /// Creates a record at `address`.
    ///
    /// # Errors
    ///
    /// `RecordAlreadyExists` if any record occupies the address. Exactly one
    /// of several concurrent creation attempts at the same address succeeds.
    fn create_record(&self, address: Address, record: Record) -> Result<(), LedgerError>;

    /// Reads the record at `address`, if one exists.
    fn read_record(&self, address: Address) -> Result<Option<Record>, LedgerError>;

    /// Overwrites the record at `address`.
    ///
    /// # Errors
    ///
    /// `RecordNotFound` if the address was never created.
    fn write_record(&self, address: Address, record: Record) -> Result<(), LedgerError>;

    /// Moves `amount` smallest units from `from` to `to`.
    ///
    /// # Errors
    ///
    /// `InsufficientFunds` if `from` cannot cover the amount; the transfer
    /// then has no effect on either side.
    fn transfer_value(&self, from: Address, to: Address, amount: u64) -> Result<(), LedgerError>;

    /// Current balance of the value account at `address` (0 if untouched).
    fn balance_of(&self, address: Address) -> u64;
}

// =============================================================================
// TOKEN ISSUANCE
// =============================================================================

/// Description of a collectible to issue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenSpec {
    /// Display name, already carrying the numbered suffix.
    pub name: String,
    /// Short symbol.
    pub symbol: String,
    /// Metadata locator.
    pub uri: String,
    /// Sequence number under the issuing platform.
    pub sequence: u64,
}

/// The collaborator that creates collectible tokens and their metadata.
///
/// The engine decides *when* to issue and *what* number and name to assign;
/// everything below that line (the token account, metadata storage, supply
/// rules) belongs to the collaborator.
pub trait TokenIssuer: Send + Sync {
    /// Issues a unique collectible to `owner` and returns its reference.
    fn issue_unique_token(&self, owner: Identity, spec: TokenSpec) -> Result<TokenRef, TokenError>;
}

// =============================================================================
// CLOCK
// =============================================================================

/// Wall-clock source for `created_at` / `purchased_at` stamps.
pub trait Clock: Send + Sync {
    /// Current time as unix seconds.
    fn unix_timestamp(&self) -> i64;
}

// =============================================================================
// EVENT SINK
// =============================================================================

/// Outbound channel for post-commit notifications.
///
/// Best-effort by design: emission happens after the transition committed,
/// returns nothing, and must not fail the operation.
pub trait EventSink: Send + Sync {
    /// Delivers one event describing a committed transition.
    fn emit(&self, event: MarketplaceEvent);
}

// =============================================================================
// TESTS
// =============================================================================
