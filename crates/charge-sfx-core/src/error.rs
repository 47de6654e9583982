//! Error types for the charge-sfx controller.

use thiserror::Error;

/// The error type for charge-sfx construction and wiring.
///
/// The per-tick path is infallible by construction; errors only arise while
/// assembling a controller (configuration validation) or while resolving its
/// mandatory weapon-state dependency in a host engine.
#[derive(Error, Debug)]
pub enum ChargeSfxError {
    /// The weapon-state provider is absent where one is required.
    #[error("weapon state provider is missing: {0}")]
    MissingWeaponState(String),

    /// Configuration failed validation at construction time.
    #[error("invalid charge sfx configuration: {0}")]
    InvalidConfig(String),
}

impl ChargeSfxError {
    /// Creates a missing weapon-state error with context about the host.
    pub fn missing_weapon_state(context: impl Into<String>) -> Self {
        ChargeSfxError::MissingWeaponState(context.into())
    }

    /// Creates a configuration validation error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        ChargeSfxError::InvalidConfig(reason.into())
    }
}

/// Type alias for Result using ChargeSfxError
pub type Result<T> = std::result::Result<T, ChargeSfxError>;
