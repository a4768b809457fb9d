#![cfg_attr(not(test), no_std)]

//! tidewatch_firmware - Platform layer for the tidewatch settings core
//!
//! This crate provides the device-facing half of the configuration
//! system: the flash abstraction, the block-framed blob store that
//! implements `tidewatch_core`'s storage contract, and the logging
//! facade used by platform code.
//!
//! # Modules
//!
//! - [`platform`]: Error taxonomy and the `FlashInterface` trait
//! - [`storage`]: `FlashBlobStore`, flash block framing with CRC32

// Platform abstraction layer
pub mod platform;

// Flash-backed blob storage
pub mod storage;

// Note: Logging macros (log_info!, log_warn!, log_error!, log_debug!)
// are exported at crate root via #[macro_export] in `logging`
pub mod logging;
