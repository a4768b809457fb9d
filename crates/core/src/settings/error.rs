//! Settings error types

use crate::traits::StoreError;

/// Errors from settings codec and persistence operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsError {
    /// Blob too short, or a field holds an undeclared tag value
    Malformed,
    /// Blob format version does not match [`super::SETTINGS_VERSION`]
    UnsupportedVersion,
    /// Backend storage operation failed
    Store(StoreError),
}

impl From<StoreError> for SettingsError {
    fn from(err: StoreError) -> Self {
        SettingsError::Store(err)
    }
}

impl core::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SettingsError::Malformed => write!(f, "malformed settings blob"),
            SettingsError::UnsupportedVersion => write!(f, "unsupported settings version"),
            SettingsError::Store(err) => write!(f, "storage error: {}", err),
        }
    }
}
