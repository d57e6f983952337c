//! Secret validator
//!
//! Input checks applied to a secret before it is hashed.

use crate::error::CredentialError;

/// bcrypt only reads the first 72 bytes of its input
pub const MAX_SECRET_BYTES: usize = 72;

/// Rejects secrets bcrypt would hash incorrectly.
pub fn validate_secret(secret: &str) -> Result<(), CredentialError> {
    if secret.is_empty() {
        return Err(CredentialError::EmptySecret);
    }

    if secret.len() > MAX_SECRET_BYTES {
        return Err(CredentialError::SecretTooLong {
            len: secret.len(),
            max: MAX_SECRET_BYTES,
        });
    }

    if secret.contains('\0') {
        return Err(CredentialError::MalformedSecret(
            "secret contains a NUL byte".into(),
        ));
    }

    Ok(())
}
