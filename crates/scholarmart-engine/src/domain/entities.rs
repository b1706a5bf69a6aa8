//! # Core Domain Entities
//!
//! The four persisted record shapes of the marketplace ledger.
//!
//! Field order in these structs is the persisted layout and is append-only:
//! new fields go at the end so existing serialized records keep deserializing.

use crate::domain::value_objects::{Address, Identity, TokenRef};
use serde::{Deserialize, Serialize};

// =============================================================================
// PLATFORM
// =============================================================================

/// One marketplace platform, keyed by its administrator identity.
///
/// Created once by Initialize and never deleted. The only mutation after
/// creation is the `nft_counter` increment performed by MintNft.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// The administrator identity. Sole authority for Withdraw.
    pub admin: Identity,
    /// Listing fee in basis points (10_000 bps = 100%). At most 800.
    pub listing_fee_bps: u16,
    /// Display name, 1-20 characters.
    pub name: String,
    /// Count of collectibles minted under this platform. Starts at 0.
    pub nft_counter: u64,
}

// =============================================================================
// TREASURY
// =============================================================================

/// The fee-escrow record associated with a platform.
///
/// Carries no business fields; its balance lives in the ledger's value
/// accounts at the treasury's derived address. The record itself exists so
/// that re-initialization collides instead of silently reusing the account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treasury {}

// =============================================================================
// PAPER ENTRY
// =============================================================================

/// One listed paper. Created by CreatePaper, immutable thereafter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperEntry {
    /// The listing researcher. Receives the purchase price on PayPass.
    pub researcher: Identity,
    /// Title, 1-100 characters.
    pub title: String,
    /// Abstract or description, 1-1000 characters.
    pub description: String,
    /// Content locator (e.g. an encrypted document link), 1-200 characters.
    pub uri: String,
    /// Access price in smallest native units. Zero iff open access.
    pub price: u64,
    /// Open-access flag. Open papers cost nothing to read.
    pub is_open_access: bool,
    /// Listing time, unix seconds.
    pub created_at: i64,
}

// =============================================================================
// PAPER ACCESS PASS
// =============================================================================

/// Proof that `owner` purchased (or was granted) access to a paper.
///
/// At most one pass exists per (owner, paper) pair; the derived address is the
/// uniqueness constraint. `mint` transitions from absent to present exactly
/// once, when the owner upgrades the pass into a collectible.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperAccessPass {
    /// The collectible linked to this pass, absent until MintNft.
    pub mint: Option<TokenRef>,
    /// Address of the paper entry this pass grants access to.
    pub paper_entry: Address,
    /// The purchasing identity.
    pub owner: Identity,
    /// Value paid at purchase time (0 for open-access papers).
    pub price: u64,
    /// Purchase time, unix seconds.
    pub purchased_at: i64,
}

// =============================================================================
// RECORD
// =============================================================================

/// The kind of a stored record, used in diagnostics and kind checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    /// A [`Platform`] record.
    Platform,
    /// A [`Treasury`] record.
    Treasury,
    /// A [`PaperEntry`] record.
    PaperEntry,
    /// A [`PaperAccessPass`] record.
    PaperAccessPass,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Platform => "platform",
            Self::Treasury => "treasury",
            Self::PaperEntry => "paper entry",
            Self::PaperAccessPass => "paper access pass",
        };
        f.write_str(name)
    }
}

/// A typed record as stored by the ledger runtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Record {
    /// A platform record.
    Platform(Platform),
    /// A treasury record.
    Treasury(Treasury),
    /// A paper entry record.
    PaperEntry(PaperEntry),
    /// A paper access pass record.
    PaperAccessPass(PaperAccessPass),
}

impl Record {
    /// Returns the kind tag of this record.
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Platform(_) => RecordKind::Platform,
            Self::Treasury(_) => RecordKind::Treasury,
            Self::PaperEntry(_) => RecordKind::PaperEntry,
            Self::PaperAccessPass(_) => RecordKind::PaperAccessPass,
        }
    }

    /// Borrows the platform payload, if this is a platform record.
    #[must_use]
    pub fn as_platform(&self) -> Option<&Platform> {
        match self {
            Self::Platform(platform) => Some(platform),
            _ => None,
        }
    }

    /// Borrows the paper entry payload, if this is a paper entry record.
    #[must_use]
    pub fn as_paper_entry(&self) -> Option<&PaperEntry> {
        match self {
            Self::PaperEntry(entry) => Some(entry),
            _ => None,
        }
    }

    /// Borrows the access pass payload, if this is an access pass record.
    #[must_use]
    pub fn as_paper_access_pass(&self) -> Option<&PaperAccessPass> {
        match self {
            Self::PaperAccessPass(pass) => Some(pass),
            _ => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
