//! Token signing and verification
//!
//! Tokens are HS256 JWTs. Verification checks the signature before expiry,
//! with no clock leeway.

use super::claims::{Claims, Envelope, RESERVED_CLAIMS, TokenInfo, reserved_key};
use crate::config::TokenConfig;
use crate::error::TokenError;
use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, decode_header, encode,
};
use log::debug;
use std::time::Duration;

/// Signs and verifies bearer tokens.
///
/// The associated functions take the secret explicitly; the methods use the
/// secret and lifetime captured from `TokenConfig`.
#[derive(Clone)]
pub struct TokenCodec {
    secret: String,
    ttl: Duration,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenCodec {
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            ttl: config.ttl(),
        }
    }

    /// Default lifetime of issued tokens
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Sign `claims` with the configured secret and lifetime.
    pub fn issue(&self, claims: &Claims) -> Result<String, TokenError> {
        Self::sign(claims, &self.secret, self.ttl)
    }

    /// Verify `token` against the configured secret.
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        Self::verify(token, &self.secret)
    }

    /// Sign `claims` into a token that expires `ttl` from now.
    ///
    /// # Errors
    /// `TokenError::Signing` if the secret is empty, the claims use a reserved
    /// key (`iat`, `exp`), or the payload cannot be encoded.
    pub fn sign(claims: &Claims, secret: &str, ttl: Duration) -> Result<String, TokenError> {
        Self::sign_issued_at(claims, secret, ttl, Utc::now())
    }

    pub(crate) fn sign_issued_at(
        claims: &Claims,
        secret: &str,
        ttl: Duration,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::Signing("signing secret is empty".into()));
        }

        if let Some(key) = reserved_key(claims) {
            return Err(TokenError::Signing(format!(
                "claim '{}' is set by the codec",
                key
            )));
        }

        let expires_at = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| issued_at.checked_add_signed(ttl))
            .ok_or_else(|| TokenError::Signing(format!("ttl {:?} is out of range", ttl)))?;

        let envelope = Envelope {
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            claims: claims.clone(),
        };

        let header = Header::new(Algorithm::HS256);
        let key = EncodingKey::from_secret(secret.as_bytes());

        encode(&header, &envelope, &key).map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify `token` and return the caller's claims.
    ///
    /// # Errors
    /// - `TokenError::Malformed` if the token cannot be parsed
    /// - `TokenError::InvalidSignature` if it was not signed with `secret`
    /// - `TokenError::Expired` if the signature is good but `exp` has passed
    pub fn verify(token: &str, secret: &str) -> Result<Claims, TokenError> {
        decode_header(token)
            .map_err(|e| TokenError::Malformed(format!("invalid header: {}", e)))?;

        if insecure_decode::<Envelope>(token).is_none() {
            return Err(TokenError::Malformed("unreadable payload".into()));
        }

        if secret.is_empty() {
            debug!("Rejecting token: verification secret is empty");
            return Err(TokenError::InvalidSignature);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_nbf = false;
        validation.validate_aud = false;

        let key = DecodingKey::from_secret(secret.as_bytes());
        let data = decode::<Envelope>(token, &key, &validation).map_err(|e| {
            debug!("Rejecting token: {}", e);
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenError::InvalidSignature
                }
                _ => TokenError::Malformed(e.to_string()),
            }
        })?;

        // `exp` is the first second at which the token is no longer valid
        if data.claims.exp <= Utc::now().timestamp() {
            debug!("Rejecting token: expired at {}", data.claims.exp);
            return Err(TokenError::Expired);
        }

        Ok(data.claims.claims)
    }

    /// Read the claims of `token` without checking signature or expiry.
    ///
    /// Not for trust decisions. Returns `None` if the token cannot be parsed.
    pub fn decode(token: &str) -> Option<Claims> {
        let mut claims = insecure_decode::<Claims>(token)?;
        for key in RESERVED_CLAIMS {
            claims.remove(key);
        }
        Some(claims)
    }

    /// Unverified claims plus issue and expiry times.
    pub fn inspect(token: &str) -> Option<TokenInfo> {
        insecure_decode::<Envelope>(token).and_then(TokenInfo::from_envelope)
    }
}

fn insecure_decode<T: serde::de::DeserializeOwned>(token: &str) -> Option<T> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    decode::<T>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .ok()
}
