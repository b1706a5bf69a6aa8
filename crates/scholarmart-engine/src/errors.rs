//! # Error Types
//!
//! Categorical error taxonomies for the engine and its collaborators. Every
//! failure surfaces a specific kind; callers match on identity, never on a
//! generic failure flag. Handlers abort on the first error with zero effects.

use crate::domain::entities::RecordKind;
use crate::domain::value_objects::Address;
use thiserror::Error;

// =============================================================================
// ENGINE ERRORS
// =============================================================================

/// Errors surfaced by the five operation handlers and the pure validators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Platform name is empty or longer than 20 characters.
    #[error("Invalid name length")]
    InvalidNameLength,

    /// Listing fee exceeds the 800 bps ceiling.
    #[error("Invalid listing fee")]
    InvalidListingFee,

    /// Paper title is empty.
    #[error("Title is empty")]
    EmptyTitle,

    /// Paper description is empty.
    #[error("Description is empty")]
    EmptyDescription,

    /// Paper URI is empty.
    #[error("Uri is empty")]
    EmptyUri,

    /// Open-access/price invariant violated.
    #[error("Invalid price")]
    InvalidPrice,

    /// Paper title exceeds 100 characters.
    #[error("Title is too long")]
    TitleTooLong,

    /// Paper description exceeds 1000 characters.
    #[error("Description is too long")]
    DescriptionTooLong,

    /// Paper URI exceeds 200 characters.
    #[error("Uri is too long or null")]
    UriTooLongOrNull,

    /// Caller cannot cover the listing fee or the purchase price.
    #[error("Insufficient balance for listing")]
    InsufficientBalanceForListing,

    /// The supplied researcher account is not the author of the paper.
    #[error("The provided researcher is not the author of the paper")]
    PayPassInvalidResearcher,

    /// Signer is not the owner of the paper access pass.
    #[error("Signer is not the owner of the paper access pass")]
    InvalidOwnerForCreateNft,

    /// The pass already carries a minted collectible.
    #[error("Paper access pass already has a minted NFT")]
    NftAlreadyMintedToPaperAccessPass,

    /// A fee computation overflowed instead of wrapping.
    #[error("The arithmetic operation resulted in an overflow.")]
    ArithmeticOverflow,

    /// Withdrawal amount exceeds the treasury balance.
    #[error("Insufficient balance for withdraw")]
    InsufficientBalanceForWithdraw,

    /// Withdrawal amount or resulting treasury balance is below the reserve.
    #[error("Withdrawal amount or resulting treasury balance would be below 50 unit minimum")]
    WithdrawalBelowMinimumThreshold,

    /// Creation collided with an existing record at the derived address.
    #[error("record already exists at {0}")]
    RecordAlreadyExists(Address),

    /// No record exists at the referenced address.
    #[error("record not found at {0}")]
    RecordNotFound(Address),

    /// The record at the referenced address has an unexpected shape.
    #[error("record at {address} is not a {expected}")]
    RecordKindMismatch {
        /// The referenced address.
        address: Address,
        /// The record kind the operation required.
        expected: RecordKind,
    },

    /// The authenticated caller does not hold the required role.
    #[error("caller does not hold the {0} role")]
    Unauthorized(&'static str),

    /// The token-issuance collaborator refused to issue.
    #[error("token issuance failed: {0}")]
    TokenIssuance(#[from] TokenError),
}

// =============================================================================
// LEDGER ERRORS
// =============================================================================

/// Errors from the host ledger runtime behind [`crate::ports::outbound::LedgerStore`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Creation attempted at an occupied address.
    #[error("record already exists at {0}")]
    RecordAlreadyExists(Address),

    /// Read or write of a non-existent record.
    #[error("record not found at {0}")]
    RecordNotFound(Address),

    /// Transfer source cannot cover the amount.
    #[error("insufficient funds: required {required}, available {available}")]
    InsufficientFunds {
        /// Amount the transfer needed.
        required: u64,
        /// Amount actually available.
        available: u64,
    },

    /// Crediting the destination would overflow its balance.
    #[error("balance overflow")]
    BalanceOverflow,
}

// =============================================================================
// TOKEN ERRORS
// =============================================================================

/// Errors from the token-issuance collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// A token with the same derived reference was already issued.
    #[error("token already issued")]
    AlreadyIssued,
}

// =============================================================================
// TESTS
// =============================================================================
