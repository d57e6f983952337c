//! Error types
//!
//! Defines domain-specific error types for each component of the toolkit.

use thiserror::Error;

/// Credential hashing errors.
///
/// Verification never produces one of these: a secret that cannot be
/// verified is reported as a non-match.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("secret must not be empty")]
    EmptySecret,

    #[error("secret is {len} bytes, maximum is {max}")]
    SecretTooLong { len: usize, max: usize },

    #[error("malformed secret: {0}")]
    MalformedSecret(String),

    #[error("hashing failed: {0}")]
    Hashing(String),
}

/// Token codec errors
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token signing failed: {0}")]
    Signing(String),

    #[error("token expired")]
    Expired,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("malformed token: {0}")]
    Malformed(String),
}

/// Image transformer errors
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("failed to encode image: {0}")]
    Encode(String),

    #[error("invalid target size {width}x{height}")]
    InvalidTarget { width: u32, height: u32 },

    #[error("image task failed: {0}")]
    Task(String),
}

/// General error that encompasses all component errors
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("credential error: {0}")]
    Credential(#[from] CredentialError),

    #[error("token error: {0}")]
    Token(#[from] TokenError),

    #[error("image error: {0}")]
    Image(#[from] ImageError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type MediaResult<T> = std::result::Result<T, MediaError>;
