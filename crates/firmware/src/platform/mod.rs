//! Platform abstraction layer
//!
//! Defines the error taxonomy and hardware traits that platform
//! implementations (on-device flash, simulated flash) must provide.

pub mod error;
pub mod traits;

pub use error::{FlashError, PlatformError, Result};
pub use traits::FlashInterface;
