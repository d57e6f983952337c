//! Bearer token codec
//!
//! Signs JSON claims into HS256 JWTs with an expiry, verifies them against a
//! secret, and decodes them without verification for inspection.

pub mod claims;
pub mod codec;

pub use claims::{Claims, TokenInfo};
pub use codec::TokenCodec;
