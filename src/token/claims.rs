//! Token claims
//!
//! The caller's claims travel alongside the registered `iat` and `exp`
//! claims in a single flat JSON payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-supplied claims payload
pub type Claims = Map<String, Value>;

/// Claim keys the codec writes itself
pub const RESERVED_CLAIMS: [&str; 2] = ["iat", "exp"];

/// Wire payload: registered claims plus the caller's claims, flattened
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Envelope {
    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    #[serde(flatten)]
    pub claims: Claims,
}

/// Unverified view of a token
#[derive(Debug, Clone, PartialEq)]
pub struct TokenInfo {
    pub claims: Claims,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl TokenInfo {
    pub(crate) fn from_envelope(envelope: Envelope) -> Option<Self> {
        Some(Self {
            issued_at: DateTime::from_timestamp(envelope.iat, 0)?,
            expires_at: DateTime::from_timestamp(envelope.exp, 0)?,
            claims: envelope.claims,
        })
    }

    /// Expiry check against the local clock
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Remaining lifetime in seconds, zero once expired
    pub fn remaining_ttl(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds().max(0)
    }
}

/// Returns the first reserved key the caller tried to set, if any.
pub(crate) fn reserved_key(claims: &Claims) -> Option<&'static str> {
    RESERVED_CLAIMS
        .into_iter()
        .find(|key| claims.contains_key(*key))
}
