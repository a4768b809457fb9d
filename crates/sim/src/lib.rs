//! tidewatch_sim - Simulated hardware for host-side testing
//!
//! Provides an in-memory flash device implementing the firmware crate's
//! `FlashInterface`, with fault injection for exercising storage failure
//! paths. The `tests/` directory drives the full settings stack
//! (controller, flash blob store, simulated flash) against it.

pub mod flash;

pub use flash::MemoryFlash;
