//! # Domain Invariants
//!
//! Record-level invariants that must hold across every committed transition.
//! The service checks these in debug builds after each mutation; the test
//! suite asserts them directly.

use crate::domain::entities::{PaperAccessPass, PaperEntry, Platform};

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// Open-access papers are free; paid papers carry a non-zero price.
#[must_use]
pub fn check_paper_price_invariant(entry: &PaperEntry) -> bool {
    if entry.is_open_access {
        entry.price == 0
    } else {
        entry.price > 0
    }
}

/// A pass's `mint` goes absent -> present exactly once and never reverts,
/// and the rest of the pass never changes after creation.
#[must_use]
pub fn check_pass_mint_transition(before: &PaperAccessPass, after: &PaperAccessPass) -> bool {
    let mint_ok = match (&before.mint, &after.mint) {
        (None, _) => true,
        (Some(prev), Some(next)) => prev == next,
        (Some(_), None) => false,
    };
    mint_ok
        && before.paper_entry == after.paper_entry
        && before.owner == after.owner
        && before.price == after.price
        && before.purchased_at == after.purchased_at
}

/// The collectible counter only ever moves forward, and nothing else on the
/// platform record moves at all.
#[must_use]
pub fn check_platform_counter_transition(before: &Platform, after: &Platform) -> bool {
    after.nft_counter >= before.nft_counter
        && before.admin == after.admin
        && before.name == after.name
        && before.listing_fee_bps == after.listing_fee_bps
}

// =============================================================================
// TESTS
// =============================================================================
