//! # Driving Ports (Inbound)
//!
//! The operation surface of the marketplace engine: five state transitions,
//! each submitted with the authenticated caller identity, explicit account
//! references, and arguments. The host runtime has already verified the
//! caller's signature by the time a handler runs.

use crate::domain::value_objects::{Address, Identity, TokenRef};
use crate::errors::EngineError;

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Arguments to CreatePaper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatePaperArgs {
    /// Title, 1-100 characters.
    pub title: String,
    /// Description, 1-1000 characters.
    pub description: String,
    /// Content locator, 1-200 characters.
    pub uri: String,
    /// Open-access flag; open papers must be free.
    pub is_open_access: bool,
    /// Access price in smallest native units.
    pub price: u64,
}

/// Arguments to MintNft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintNftArgs {
    /// Base display name; the numbered suffix is appended by the engine.
    pub name: Option<String>,
    /// Short symbol for the collectible.
    pub symbol: Option<String>,
    /// Metadata locator.
    pub uri: String,
}

// =============================================================================
// RECEIPTS
// =============================================================================

/// Result of a successful Initialize.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitializeReceipt {
    /// Derived address of the new platform.
    pub platform: Address,
    /// Derived address of the new treasury.
    pub treasury: Address,
}

/// Result of a successful CreatePaper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatePaperReceipt {
    /// Address of the new paper entry.
    pub paper_entry: Address,
    /// Listing fee escrowed into the treasury (0 for open access).
    pub listing_fee: u64,
}

/// Result of a successful PayPass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayPassReceipt {
    /// Derived address of the new pass.
    pub paper_access_pass: Address,
    /// Value paid to the researcher (0 for open access).
    pub price_paid: u64,
}

/// Result of a successful MintNft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintNftReceipt {
    /// The issued token.
    pub mint: TokenRef,
    /// Sequence number assigned to the collectible.
    pub sequence: u64,
    /// Full display name, numbered suffix included.
    pub name: String,
}

/// Result of a successful Withdraw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WithdrawReceipt {
    /// Amount moved to the admin.
    pub amount: u64,
    /// Treasury balance after the withdrawal.
    pub treasury_remaining: u64,
}

// =============================================================================
// MARKETPLACE API
// =============================================================================

/// The five state transitions of the marketplace ledger.
///
/// Every method is atomic: either all checks pass and all effects commit, or
/// the specific [`EngineError`] surfaces and nothing changed.
pub trait MarketplaceApi {
    /// Creates the caller's platform and its treasury at derived addresses.
    fn initialize(
        &self,
        caller: Identity,
        name: &str,
        listing_fee_bps: u16,
    ) -> Result<InitializeReceipt, EngineError>;

    /// Lists a paper under `platform`, escrowing the listing fee for paid
    /// papers. `paper_entry` is a fresh caller-supplied record address.
    fn create_paper(
        &self,
        caller: Identity,
        platform: Address,
        paper_entry: Address,
        args: CreatePaperArgs,
    ) -> Result<CreatePaperReceipt, EngineError>;

    /// Purchases an access pass for `paper_entry`. For paid papers the price
    /// moves directly from the caller to `researcher`, whose identity must
    /// match the entry's author. `purchased_at` overrides the clock stamp.
    fn pay_pass(
        &self,
        caller: Identity,
        paper_entry: Address,
        researcher: Identity,
        purchased_at: Option<i64>,
    ) -> Result<PayPassReceipt, EngineError>;

    /// Upgrades the caller's pass for `paper_entry` into a numbered
    /// collectible issued under `platform`.
    fn mint_nft(
        &self,
        caller: Identity,
        platform: Address,
        paper_entry: Address,
        args: MintNftArgs,
    ) -> Result<MintNftReceipt, EngineError>;

    /// Moves `amount` from the caller's platform treasury to the caller.
    fn withdraw(&self, caller: Identity, amount: u64) -> Result<WithdrawReceipt, EngineError>;
}
