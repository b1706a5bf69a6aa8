//! # Event Schema
//!
//! Typed payloads describing successful state transitions, handed to the
//! [`crate::ports::outbound::EventSink`] after commit. Events are best-effort
//! notifications for off-engine indexers; they sit outside the transactional
//! boundary and carry no invariants of their own.

use crate::domain::value_objects::{Address, Identity, TokenRef};
use serde::{Deserialize, Serialize};

// =============================================================================
// PAYLOADS
// =============================================================================

/// A platform and its treasury came into existence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInitialized {
    /// Derived platform address.
    pub platform: Address,
    /// Derived treasury address.
    pub treasury: Address,
    /// Administrator identity.
    pub admin: Identity,
    /// Platform display name.
    pub name: String,
    /// Listing fee in basis points.
    pub listing_fee_bps: u16,
}

/// A researcher listed a paper.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperCreated {
    /// The listing researcher.
    pub researcher: Identity,
    /// Address of the new paper entry.
    pub paper_entry: Address,
    /// Paper title.
    pub title: String,
    /// Open-access flag.
    pub is_open_access: bool,
    /// Access price in smallest native units.
    pub price: u64,
}

/// A buyer purchased an access pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperAccessPassCreated {
    /// The paper the pass grants access to.
    pub paper_entry: Address,
    /// Derived address of the new pass.
    pub paper_access_pass: Address,
    /// The purchasing identity.
    pub owner: Identity,
    /// Value paid (0 for open-access papers).
    pub price: u64,
    /// Purchase time, unix seconds.
    pub purchased_at: i64,
}

/// A pass was upgraded into a numbered collectible.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftMinted {
    /// Derived address of the upgraded pass.
    pub paper_access_pass: Address,
    /// The issued token.
    pub mint: TokenRef,
    /// The pass owner.
    pub owner: Identity,
    /// Sequence number of the collectible under its platform.
    pub sequence: u64,
}

/// The platform admin withdrew accumulated fees.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasuryWithdrawn {
    /// The platform whose treasury was drawn down.
    pub platform: Address,
    /// The treasury address.
    pub treasury: Address,
    /// The withdrawing admin.
    pub admin: Identity,
    /// Amount moved to the admin, in smallest native units.
    pub amount: u64,
}

// =============================================================================
// EVENT ENVELOPE
// =============================================================================

/// A successful state transition, as reported to the event sink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketplaceEvent {
    /// See [`PlatformInitialized`].
    PlatformInitialized(PlatformInitialized),
    /// See [`PaperCreated`].
    PaperCreated(PaperCreated),
    /// See [`PaperAccessPassCreated`].
    PaperAccessPassCreated(PaperAccessPassCreated),
    /// See [`NftMinted`].
    NftMinted(NftMinted),
    /// See [`TreasuryWithdrawn`].
    TreasuryWithdrawn(TreasuryWithdrawn),
}

impl MarketplaceEvent {
    /// Stable name of the event variant, for logging and routing.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::PlatformInitialized(_) => "platform_initialized",
            Self::PaperCreated(_) => "paper_created",
            Self::PaperAccessPassCreated(_) => "paper_access_pass_created",
            Self::NftMinted(_) => "nft_minted",
            Self::TreasuryWithdrawn(_) => "treasury_withdrawn",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
