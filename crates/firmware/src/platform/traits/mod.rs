//! Platform hardware traits.

pub mod flash;

pub use flash::FlashInterface;
