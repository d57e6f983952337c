//! Credential verification
//!
//! Salted one-way hashing of secrets and verification of candidates against
//! stored hashes.

pub mod credentials;
pub mod results;
pub mod validator;

pub use credentials::CredentialVerifier;
pub use results::VerificationOutcome;
pub use validator::{MAX_SECRET_BYTES, validate_secret};
