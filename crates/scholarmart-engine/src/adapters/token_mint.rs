//! # In-Memory Token Issuer
//!
//! Reference [`TokenIssuer`] that derives token references deterministically
//! and remembers the metadata it issued. Stands in for the production
//! token-issuance subsystem in tests and local runs.

use crate::domain::value_objects::{Identity, TokenRef};
use crate::errors::TokenError;
use crate::ports::outbound::{TokenIssuer, TokenSpec};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::RwLock;

/// Metadata recorded for an issued collectible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssuedToken {
    /// The receiving owner.
    pub owner: Identity,
    /// Full display name, numbered suffix included.
    pub name: String,
    /// Short symbol.
    pub symbol: String,
    /// Metadata locator.
    pub uri: String,
    /// Sequence number under the issuing platform.
    pub sequence: u64,
}

/// In-memory token issuer for tests and local runs.
#[derive(Debug, Default)]
pub struct InMemoryTokenIssuer {
    issued: RwLock<HashMap<TokenRef, IssuedToken>>,
}

impl InMemoryTokenIssuer {
    /// Creates a new issuer with no tokens.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an issued token's metadata.
    #[must_use]
    pub fn metadata(&self, token: &TokenRef) -> Option<IssuedToken> {
        self.issued.read().unwrap().get(token).cloned()
    }

    /// Number of tokens issued so far.
    #[must_use]
    pub fn issued_count(&self) -> usize {
        self.issued.read().unwrap().len()
    }

    fn derive_ref(owner: &Identity, spec: &TokenSpec) -> TokenRef {
        let mut hasher = Sha256::new();
        hasher.update(b"token");
        hasher.update(owner.as_bytes());
        hasher.update(spec.sequence.to_be_bytes());
        hasher.update(spec.uri.as_bytes());
        TokenRef::new(hasher.finalize().into())
    }
}

impl TokenIssuer for InMemoryTokenIssuer {
    fn issue_unique_token(&self, owner: Identity, spec: TokenSpec) -> Result<TokenRef, TokenError> {
        let token = Self::derive_ref(&owner, &spec);
        let mut issued = self.issued.write().unwrap();
        if issued.contains_key(&token) {
            return Err(TokenError::AlreadyIssued);
        }
        issued.insert(
            token,
            IssuedToken {
                owner,
                name: spec.name,
                symbol: spec.symbol,
                uri: spec.uri,
                sequence: spec.sequence,
            },
        );
        Ok(token)
    }
}

// =============================================================================
// TESTS
// =============================================================================
