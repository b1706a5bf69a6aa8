//! # Domain Services
//!
//! Pure business logic for the marketplace engine: input validation, fee and
//! withdrawal arithmetic, derived record addressing, and collectible numbering.
//! These functions are deterministic and have no side effects.

use crate::domain::value_objects::{Address, Identity};
use crate::errors::EngineError;
use sha2::{Digest, Sha256};

// =============================================================================
// PROTOCOL CONSTANTS
// =============================================================================

/// Smallest native units per display unit.
pub const UNIT: u64 = 1_000_000_000;

/// Ceiling on the platform listing fee: 800 bps = 8%.
pub const MAX_LISTING_FEE_BPS: u16 = 800;

/// Basis-point denominator: 10_000 bps = 100%.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Minimum withdrawal amount, and the reserve a withdrawal must leave behind.
pub const MIN_WITHDRAWAL: u64 = 50 * UNIT;

/// Platform name length ceiling in characters.
pub const MAX_PLATFORM_NAME_LEN: usize = 20;

/// Paper title length ceiling in characters.
pub const MAX_TITLE_LEN: usize = 100;

/// Paper description length ceiling in characters.
pub const MAX_DESCRIPTION_LEN: usize = 1_000;

/// Paper URI length ceiling in characters.
pub const MAX_URI_LEN: usize = 200;

// =============================================================================
// VALIDATION
// =============================================================================

/// Validates a platform display name: 1-20 characters.
pub fn validate_platform_name(name: &str) -> Result<(), EngineError> {
    let len = name.chars().count();
    if len == 0 || len > MAX_PLATFORM_NAME_LEN {
        return Err(EngineError::InvalidNameLength);
    }
    Ok(())
}

/// Validates the listing fee: at most [`MAX_LISTING_FEE_BPS`].
pub fn validate_listing_fee(listing_fee_bps: u16) -> Result<(), EngineError> {
    if listing_fee_bps > MAX_LISTING_FEE_BPS {
        return Err(EngineError::InvalidListingFee);
    }
    Ok(())
}

/// Validates the textual fields of a paper listing.
///
/// Each field must be non-empty and within its bound: title 100, description
/// 1000, uri 200 characters.
pub fn validate_paper_fields(title: &str, description: &str, uri: &str) -> Result<(), EngineError> {
    if title.is_empty() {
        return Err(EngineError::EmptyTitle);
    }
    if description.is_empty() {
        return Err(EngineError::EmptyDescription);
    }
    if uri.is_empty() {
        return Err(EngineError::EmptyUri);
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(EngineError::TitleTooLong);
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(EngineError::DescriptionTooLong);
    }
    if uri.chars().count() > MAX_URI_LEN {
        return Err(EngineError::UriTooLongOrNull);
    }
    Ok(())
}

/// Enforces the open-access price invariant.
///
/// Open-access papers must be free; paid papers must carry a non-zero price.
pub fn validate_price(is_open_access: bool, price: u64) -> Result<(), EngineError> {
    let valid = if is_open_access { price == 0 } else { price > 0 };
    if valid {
        Ok(())
    } else {
        Err(EngineError::InvalidPrice)
    }
}

// =============================================================================
// FEE & WITHDRAWAL ARITHMETIC
// =============================================================================

/// Computes the listing fee: `floor(price * fee_bps / 10_000)`.
///
/// The multiplication runs in u128 so it can never wrap; a quotient that does
/// not fit back into u64 fails closed with `ArithmeticOverflow` instead of
/// truncating.
pub fn compute_listing_fee(price: u64, fee_bps: u16) -> Result<u64, EngineError> {
    let wide = u128::from(price) * u128::from(fee_bps) / u128::from(BPS_DENOMINATOR);
    u64::try_from(wide).map_err(|_| EngineError::ArithmeticOverflow)
}

/// Checks a treasury withdrawal against the balance and the protected reserve.
///
/// Two distinct failure modes: the amount exceeds the balance outright, or the
/// amount is coverable but is itself below [`MIN_WITHDRAWAL`] or would leave
/// the treasury below it.
pub fn check_withdrawal(treasury_balance: u64, amount: u64) -> Result<(), EngineError> {
    if amount > treasury_balance {
        return Err(EngineError::InsufficientBalanceForWithdraw);
    }
    if amount < MIN_WITHDRAWAL || treasury_balance - amount < MIN_WITHDRAWAL {
        return Err(EngineError::WithdrawalBelowMinimumThreshold);
    }
    Ok(())
}

// =============================================================================
// DERIVED ADDRESSING
// =============================================================================

/// Tags for the derived record address families.
pub mod tags {
    /// Platform singleton, keyed by admin.
    pub const PLATFORM: &str = "platform";
    /// Treasury, keyed by platform address and admin.
    pub const TREASURY: &str = "treasury";
    /// Access pass, keyed by owner and paper entry.
    pub const PAPER_ACCESS_PASS: &str = "paper_access_pass";
}

/// Derives a record address from a tag and a tuple of 32-byte references.
///
/// SHA-256 over the tag bytes followed by each reference in order. The result
/// is deterministic and collision-resistant, so it doubles as a uniqueness
/// constraint: creation at an already-occupied derived address fails.
#[must_use]
pub fn derive_record_address(tag: &str, refs: &[&[u8; 32]]) -> Address {
    let mut hasher = Sha256::new();
    hasher.update(tag.as_bytes());
    for reference in refs {
        hasher.update(reference.as_slice());
    }
    Address::new(hasher.finalize().into())
}

/// Address of the platform singleton for `admin`.
#[must_use]
pub fn platform_address(admin: &Identity) -> Address {
    derive_record_address(tags::PLATFORM, &[admin.as_bytes()])
}

/// Address of the treasury belonging to `platform` under `admin`.
#[must_use]
pub fn treasury_address(platform: &Address, admin: &Identity) -> Address {
    derive_record_address(tags::TREASURY, &[platform.as_bytes(), admin.as_bytes()])
}

/// Address of the access pass for the (owner, paper entry) pair.
///
/// This address is the uniqueness constraint: at most one pass per pair.
#[must_use]
pub fn paper_access_pass_address(owner: &Identity, paper_entry: &Address) -> Address {
    derive_record_address(
        tags::PAPER_ACCESS_PASS,
        &[owner.as_bytes(), paper_entry.as_bytes()],
    )
}

// =============================================================================
// COLLECTIBLE NUMBERING
// =============================================================================

/// Formats a collectible sequence number for display.
///
/// Zero-padded to four digits below 1000 (`#0001`), plain digits from 1000 up.
#[must_use]
pub fn format_token_number(sequence: u64) -> String {
    if sequence < 1_000 {
        format!("#{sequence:04}")
    } else {
        format!("#{sequence}")
    }
}

/// Composes the display name of a minted collectible.
///
/// The numbered suffix always appears; a base name, when given, precedes it
/// (`"Glacier Cores #0001"`).
#[must_use]
pub fn compose_token_name(base: Option<&str>, sequence: u64) -> String {
    let number = format_token_number(sequence);
    match base {
        Some(base) if !base.is_empty() => format!("{base} {number}"),
        _ => number,
    }
}

// =============================================================================
// TESTS
// =============================================================================
