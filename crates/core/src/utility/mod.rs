//! Small shared utilities.

pub mod dirty_value;

pub use dirty_value::DirtyValue;
