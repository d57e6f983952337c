//! Configuration management for mediakit
//!
//! All tunables and secrets are loaded once into a `MediaConfig` and handed to
//! each component at construction. Components never read the environment.

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::time::Duration;

/// Lowest bcrypt cost the hashing library accepts
pub const MIN_BCRYPT_COST: u32 = 4;
/// Highest bcrypt cost the hashing library accepts
pub const MAX_BCRYPT_COST: u32 = 31;

/// Complete toolkit configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct MediaConfig {
    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub token: TokenConfig,

    #[serde(default)]
    pub image: ImageConfig,
}

/// Credential hashing settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AuthConfig {
    /// bcrypt work factor
    /// Environment: MEDIAKIT_AUTH__BCRYPT_COST
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

/// Token signing settings
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// HMAC signing secret
    /// Environment: MEDIAKIT_TOKEN__SECRET
    pub secret: String,

    /// Lifetime of issued tokens in seconds
    pub ttl_secs: u64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            ttl_secs: 24 * 60 * 60,
        }
    }
}

// Keeps the secret out of debug logs.
impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}

/// Default resize request and decoder limits
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ImageConfig {
    pub default_width: u32,
    pub default_height: u32,
    pub default_quality: u8,
    pub strip_exif: bool,
    pub add_border: bool,

    /// Sources with more pixels than this are refused before decoding
    pub max_source_pixels: u64,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            default_width: 800,
            default_height: 600,
            default_quality: 80,
            strip_exif: true,
            add_border: false,
            max_source_pixels: 100_000_000,
        }
    }
}

impl MediaConfig {
    /// Load configuration from config.toml (optional) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("MEDIAKIT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: MediaConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from an in-memory TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        let config: MediaConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.auth.bcrypt_cost) {
            return Err(config::ConfigError::Message(format!(
                "auth.bcrypt_cost must be between {} and {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST
            )));
        }

        if self.token.secret.is_empty() {
            return Err(config::ConfigError::Message(
                "token.secret cannot be empty".into(),
            ));
        }

        if self.token.ttl_secs == 0 {
            return Err(config::ConfigError::Message(
                "token.ttl_secs must be greater than 0".into(),
            ));
        }

        if self.image.default_width == 0 || self.image.default_height == 0 {
            return Err(config::ConfigError::Message(
                "image default dimensions must be greater than 0".into(),
            ));
        }

        if !(1..=100).contains(&self.image.default_quality) {
            return Err(config::ConfigError::Message(
                "image.default_quality must be between 1 and 100".into(),
            ));
        }

        if self.image.max_source_pixels == 0 {
            return Err(config::ConfigError::Message(
                "image.max_source_pixels must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

impl TokenConfig {
    /// Get token lifetime as Duration
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}
