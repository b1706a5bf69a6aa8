//! # ScholarMart Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Full marketplace flows against in-memory adapters
//!     ├── marketplace_flows.rs   # happy paths and the end-to-end scenario
//!     └── adversarial.rs         # replays, impostors, drained wallets
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p scholarmart-tests
//!
//! # By category
//! cargo test -p scholarmart-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;
