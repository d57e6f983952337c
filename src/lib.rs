//! mediakit - leaf utilities for a personal media library
//!
//! Credential hashing, signed bearer tokens, and image resizing for the
//! catalog and gallery routes.

pub mod auth;
pub mod config;
pub mod error;
pub mod imaging;
pub mod services;
pub mod token;
pub mod utils;

pub use auth::CredentialVerifier;
pub use config::MediaConfig;
pub use error::{MediaError, MediaResult};
pub use imaging::{ImageTransformer, ResizeRequest, TransformResult};
pub use services::MediaServices;
pub use token::{Claims, TokenCodec};
