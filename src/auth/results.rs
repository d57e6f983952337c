//! Credential result types
//!
//! Defines result structures returned by credential operations.

/// Result of checking a secret against a stored hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationOutcome {
    pub matched: bool,
    /// false when the stored hash could not be parsed
    pub hash_well_formed: bool,
}

impl VerificationOutcome {
    pub(crate) fn matched(matched: bool) -> Self {
        Self {
            matched,
            hash_well_formed: true,
        }
    }

    pub(crate) fn unreadable_hash() -> Self {
        Self {
            matched: false,
            hash_well_formed: false,
        }
    }
}
