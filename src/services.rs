//! Component bundle
//!
//! Builds every component from one `MediaConfig` so a host process can
//! construct them once at startup and share them across requests.

use crate::auth::CredentialVerifier;
use crate::config::MediaConfig;
use crate::error::MediaResult;
use crate::imaging::ImageTransformer;
use crate::token::TokenCodec;
use log::info;

/// The three leaf components, configured and ready to use
#[derive(Debug, Clone)]
pub struct MediaServices {
    pub credentials: CredentialVerifier,
    pub tokens: TokenCodec,
    pub images: ImageTransformer,
}

impl MediaServices {
    /// Validate `config` and construct every component from it.
    pub fn new(config: &MediaConfig) -> MediaResult<Self> {
        config.validate()?;

        info!(
            "Media services ready (bcrypt cost {}, token ttl {}s, default size {}x{})",
            config.auth.bcrypt_cost,
            config.token.ttl_secs,
            config.image.default_width,
            config.image.default_height
        );

        Ok(Self {
            credentials: CredentialVerifier::new(&config.auth),
            tokens: TokenCodec::new(&config.token),
            images: ImageTransformer::new(&config.image),
        })
    }

    /// Load configuration from config.toml and the environment, then construct.
    pub fn from_env() -> MediaResult<Self> {
        let config = MediaConfig::load()?;
        Self::new(&config)
    }
}
