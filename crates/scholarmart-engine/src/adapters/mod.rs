//! # Adapters
//!
//! Reference implementations of the outbound ports: an in-memory ledger, an
//! in-memory token issuer, event sinks, and clocks. Production deployments
//! replace the ledger and issuer with adapters speaking to the real host
//! runtime; the semantics modeled here are the contract those must meet.

pub mod clock;
pub mod event_recorder;
pub mod memory_ledger;
pub mod token_mint;

pub use clock::{FixedClock, SystemClock};
pub use event_recorder::{RecordingEventSink, TracingEventSink};
pub use memory_ledger::InMemoryLedger;
pub use token_mint::{InMemoryTokenIssuer, IssuedToken};
