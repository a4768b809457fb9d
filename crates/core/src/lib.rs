//! tidewatch_core - Pure no_std settings logic for the tidewatch firmware
//!
//! This crate contains the platform-agnostic configuration core: the
//! persisted settings record, its binary codec, the controller that owns
//! it, and the change-detection wrapper used by the display refresh loop.
//! It can be tested on host without any feature flags or HAL dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Durable storage injected via [`traits::BlobStore`]
//!
//! # Modules
//!
//! - [`settings`]: Settings record, binary codec, and controller
//! - [`traits`]: Storage trait abstraction (BlobStore)
//! - [`utility`]: DirtyValue change-detection wrapper

#![no_std]

pub mod settings;
pub mod traits;
pub mod utility;
