//! Error handlers
//!
//! Translates component errors into what the route layer hands back to clients.

use crate::error::types::{CredentialError, ImageError, MediaError, TokenError};
use log::{error, warn};

/// Log an error at a level matching who caused it.
pub fn handle_error(err: &MediaError) {
    if error_to_http_status(err) >= 500 {
        error!("Media toolkit error: {}", err);
    } else {
        warn!("Rejected request: {}", err);
    }
}

/// Convert error to HTTP status code
pub fn error_to_http_status(err: &MediaError) -> u16 {
    match err {
        MediaError::Credential(CredentialError::Hashing(_)) => 500,
        MediaError::Credential(_) => 400,
        MediaError::Token(TokenError::Signing(_)) => 500,
        MediaError::Token(_) => 401,
        MediaError::Image(ImageError::Decode(_)) => 415,
        MediaError::Image(ImageError::Encode(_)) => 422,
        MediaError::Image(ImageError::InvalidTarget { .. }) => 400,
        MediaError::Image(ImageError::Task(_)) => 500,
        MediaError::Config(_) => 500,
    }
}

/// Stable error code for clients
pub fn error_code(err: &MediaError) -> &'static str {
    match err {
        MediaError::Credential(CredentialError::EmptySecret) => "EMPTY_SECRET",
        MediaError::Credential(CredentialError::SecretTooLong { .. }) => "SECRET_TOO_LONG",
        MediaError::Credential(CredentialError::MalformedSecret(_)) => "MALFORMED_SECRET",
        MediaError::Credential(CredentialError::Hashing(_)) => "HASHING_FAILED",
        MediaError::Token(TokenError::Signing(_)) => "TOKEN_SIGNING_FAILED",
        MediaError::Token(TokenError::Expired) => "TOKEN_EXPIRED",
        MediaError::Token(TokenError::InvalidSignature) => "INVALID_SIGNATURE",
        MediaError::Token(TokenError::Malformed(_)) => "MALFORMED_TOKEN",
        MediaError::Image(ImageError::Decode(_)) => "IMAGE_DECODE_FAILED",
        MediaError::Image(ImageError::Encode(_)) => "IMAGE_ENCODE_FAILED",
        MediaError::Image(ImageError::InvalidTarget { .. }) => "INVALID_TARGET_SIZE",
        MediaError::Image(ImageError::Task(_)) => "IMAGE_TASK_FAILED",
        MediaError::Config(_) => "CONFIG_ERROR",
    }
}
