//! Credential hashing and verification
//!
//! bcrypt runs on the blocking thread pool so callers can await it from
//! request handlers without stalling the runtime.

use super::results::VerificationOutcome;
use super::validator::validate_secret;
use crate::config::AuthConfig;
use crate::error::CredentialError;
use log::{debug, warn};

/// Hashes secrets and verifies candidates against stored hashes.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    cost: u32,
}

impl CredentialVerifier {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            cost: config.bcrypt_cost,
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Derive a salted hash of `secret`.
    ///
    /// Every call embeds a fresh random salt, so hashing the same secret twice
    /// yields two different strings that both verify.
    pub async fn hash(&self, secret: &str) -> Result<String, CredentialError> {
        validate_secret(secret)?;

        let secret = secret.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || {
            bcrypt::hash(secret, cost).map_err(|e| CredentialError::Hashing(e.to_string()))
        })
        .await
        .map_err(|e| CredentialError::Hashing(format!("task join error: {}", e)))?
    }

    /// Check `secret` against a stored hash.
    ///
    /// Returns false for a non-match and for any hash that cannot be parsed.
    pub async fn verify(&self, secret: &str, hash: &str) -> bool {
        self.verify_detailed(secret, hash).await.matched
    }

    /// Same check as `verify`, also reporting whether the stored hash was readable.
    pub async fn verify_detailed(&self, secret: &str, hash: &str) -> VerificationOutcome {
        let secret = secret.to_string();
        let hash = hash.to_string();

        let joined = tokio::task::spawn_blocking(move || bcrypt::verify(secret, &hash)).await;

        match joined {
            Ok(Ok(matched)) => VerificationOutcome::matched(matched),
            Ok(Err(e)) => {
                debug!("Stored credential hash could not be parsed: {}", e);
                VerificationOutcome::unreadable_hash()
            }
            Err(e) => {
                warn!("Credential verification task failed: {}", e);
                VerificationOutcome::matched(false)
            }
        }
    }
}
