//! Logging utilities
//!
//! Provides logging setup and configuration.

/// Setup logging for the host process (env_logger picks up RUST_LOG).
///
/// Safe to call more than once; later calls are no-ops.
pub fn setup_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
