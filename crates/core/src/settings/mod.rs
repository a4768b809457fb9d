//! Settings record, binary codec, and controller
//!
//! This module holds the device's runtime-tunable configuration: the
//! persisted [`SettingsRecord`], the fixed-layout codec used to move it
//! to and from durable storage, and the [`SettingsController`] that owns
//! the in-memory record and tracks unsaved changes. Platform-specific
//! storage (flash drivers, block framing) lives in the firmware crate.

pub mod codec;
pub mod controller;
pub mod error;
pub mod record;
pub mod types;

pub use codec::{decode, encode, RECORD_SIZE};
pub use controller::{SettingsController, SETTINGS_BLOB_KEY};
pub use error::SettingsError;
pub use record::{
    HealthGoals, HealthMonitoring, SettingsRecord, ThemeRecord, WatchFaceVariant,
    SETTINGS_VERSION,
};
pub use types::{
    BrightnessLevel, ChimesOption, ClockFace, ClockType, Color, GaugeStyle, Notification,
    WakeUpMode, WakeUpModes, WeatherStatus, WATCH_FACE_COUNT,
};
