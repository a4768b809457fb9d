//! Core traits for platform-agnostic storage access.
//!
//! Trait definitions here are pure and have no feature gates; the flash
//! implementation lives in the firmware crate and a mock is always
//! available for host testing.

pub mod store;

pub use store::{BlobStore, MockStore, StoreError};
