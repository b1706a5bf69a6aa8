//! Cross-module integration flows for the marketplace engine.

pub mod adversarial;
pub mod marketplace_flows;

use rand::RngCore;
use scholarmart_engine::prelude::*;
use std::sync::Arc;

/// A fully wired engine over in-memory adapters, plus handles to the
/// collaborators for assertions.
pub struct TestBench {
    /// The ledger behind the service.
    pub ledger: Arc<InMemoryLedger>,
    /// The token issuer behind the service.
    pub tokens: Arc<InMemoryTokenIssuer>,
    /// The event recorder behind the service.
    pub events: Arc<RecordingEventSink>,
    /// The engine under test.
    pub service:
        MarketplaceService<InMemoryLedger, InMemoryTokenIssuer, RecordingEventSink, FixedClock>,
}

impl TestBench {
    /// Wires a fresh engine with the clock pinned to a fixed instant.
    pub fn new() -> Self {
        let ledger = Arc::new(InMemoryLedger::new());
        let tokens = Arc::new(InMemoryTokenIssuer::new());
        let events = Arc::new(RecordingEventSink::new());
        let service = MarketplaceService::new(
            ledger.clone(),
            tokens.clone(),
            events.clone(),
            Arc::new(FixedClock(1_700_000_000)),
        );
        Self {
            ledger,
            tokens,
            events,
            service,
        }
    }

    /// Balance of a wallet account.
    pub fn wallet_balance(&self, identity: Identity) -> u64 {
        self.ledger.balance_of(Address::from(identity))
    }
}

impl Default for TestBench {
    fn default() -> Self {
        Self::new()
    }
}

/// A random identity.
pub fn random_identity() -> Identity {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    Identity::new(bytes)
}

/// A fresh record address for a paper entry.
pub fn fresh_address() -> Address {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    Address::new(bytes)
}

/// Listing arguments for a paid paper.
pub fn paid_paper(price: u64) -> CreatePaperArgs {
    CreatePaperArgs {
        title: "Spin Networks Under Load".into(),
        description: "An empirical study of spin-network relaxation.".into(),
        uri: "ipfs://QmPaper".into(),
        is_open_access: false,
        price,
    }
}

/// Listing arguments for an open-access paper.
pub fn open_paper() -> CreatePaperArgs {
    CreatePaperArgs {
        is_open_access: true,
        price: 0,
        ..paid_paper(1)
    }
}
