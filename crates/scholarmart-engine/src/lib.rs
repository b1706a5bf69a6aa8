//! # ScholarMart Engine - Marketplace State Machine
//!
//! ## Purpose
//!
//! State-transition engine for a permissioned research-paper marketplace:
//! researchers list papers for paid or open access, buyers purchase access
//! passes, passes upgrade into uniquely-numbered collectibles, and platform
//! operators withdraw accumulated listing fees. The engine validates and
//! commits the five transitions (Initialize, CreatePaper, PayPass, MintNft,
//! Withdraw) against a shared account ledger reached through outbound ports.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement |
//! |-----------|-------------|
//! | One platform/treasury per admin | derived-address collision in `service::initialize` |
//! | Open access implies zero price | `domain::services::validate_price` |
//! | Listing fee is `floor(price*bps/10000)`, overflow-checked | `domain::services::compute_listing_fee` |
//! | At most one pass per (owner, paper) | derived-address collision in `service::pay_pass` |
//! | `mint` set at most once, never reverted | `service::mint_nft` + `domain::invariants` |
//! | Treasury keeps a 50-unit reserve | `domain::services::check_withdrawal` |
//! | Every mutation has exactly one authorized caller role | `authorization` |
//!
//! ## Architecture
//!
//! Hexagonal: `domain` holds pure entities and services, `ports` the inbound
//! operation surface and outbound collaborator traits, `adapters` in-memory
//! reference implementations, `service` the operation handlers. Each
//! operation is a complete synchronous computation; concurrency is the host's
//! concern, and the host serializes invocations with overlapping write sets.
//!
//! ## Usage Example
//!
//! ```
//! use scholarmart_engine::prelude::*;
//! use std::sync::Arc;
//!
//! let ledger = Arc::new(InMemoryLedger::new());
//! let service = MarketplaceService::new(
//!     ledger.clone(),
//!     Arc::new(InMemoryTokenIssuer::new()),
//!     Arc::new(RecordingEventSink::new()),
//!     Arc::new(SystemClock),
//! );
//!
//! let admin = Identity::new([1u8; 32]);
//! let receipt = service.initialize(admin, "lab", 250).unwrap();
//! assert_eq!(ledger.balance_of(receipt.treasury), 0);
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod authorization;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{
        PaperAccessPass, PaperEntry, Platform, Record, RecordKind, Treasury,
    };

    // Value objects
    pub use crate::domain::value_objects::{Address, Identity, TokenRef};

    // Domain services
    pub use crate::domain::services::{
        check_withdrawal, compose_token_name, compute_listing_fee, derive_record_address,
        format_token_number, paper_access_pass_address, platform_address, treasury_address,
        MAX_LISTING_FEE_BPS, MIN_WITHDRAWAL, UNIT,
    };

    // Invariants
    pub use crate::domain::invariants::{
        check_paper_price_invariant, check_pass_mint_transition,
        check_platform_counter_transition,
    };

    // Ports
    pub use crate::ports::inbound::{
        CreatePaperArgs, CreatePaperReceipt, InitializeReceipt, MarketplaceApi, MintNftArgs,
        MintNftReceipt, PayPassReceipt, WithdrawReceipt,
    };
    pub use crate::ports::outbound::{Clock, EventSink, LedgerStore, TokenIssuer, TokenSpec};

    // Events
    pub use crate::events::{
        MarketplaceEvent, NftMinted, PaperAccessPassCreated, PaperCreated, PlatformInitialized,
        TreasuryWithdrawn,
    };

    // Errors
    pub use crate::errors::{EngineError, LedgerError, TokenError};

    // Adapters
    pub use crate::adapters::{
        FixedClock, InMemoryLedger, InMemoryTokenIssuer, RecordingEventSink, SystemClock,
        TracingEventSink,
    };

    // Service
    pub use crate::service::{MarketplaceService, ServiceStats};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
