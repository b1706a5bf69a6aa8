//! # Authorization
//!
//! Caller-vs-record role checks, run by the service before any handler touches
//! business state. Every mutating operation names exactly one authorized role;
//! a caller that does not hold it is rejected before the handler reads
//! anything beyond what the check itself needed.

use crate::domain::entities::{PaperAccessPass, PaperEntry, Platform};
use crate::domain::value_objects::Identity;
use crate::errors::EngineError;

/// Requires the caller to be the platform administrator.
pub fn require_platform_admin(platform: &Platform, caller: &Identity) -> Result<(), EngineError> {
    if platform.admin == *caller {
        Ok(())
    } else {
        Err(EngineError::Unauthorized("platform admin"))
    }
}

/// Requires the caller to be the owner of the access pass.
pub fn require_pass_owner(pass: &PaperAccessPass, caller: &Identity) -> Result<(), EngineError> {
    if pass.owner == *caller {
        Ok(())
    } else {
        Err(EngineError::InvalidOwnerForCreateNft)
    }
}

/// Requires the supplied researcher account to be the paper's author.
///
/// This is an account-reference check rather than a signer check: PayPass
/// names the payee explicitly, and the named account must be the researcher
/// who listed the paper.
pub fn require_matching_researcher(
    entry: &PaperEntry,
    researcher: &Identity,
) -> Result<(), EngineError> {
    if entry.researcher == *researcher {
        Ok(())
    } else {
        Err(EngineError::PayPassInvalidResearcher)
    }
}

// =============================================================================
// TESTS
// =============================================================================
