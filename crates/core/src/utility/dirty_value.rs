//! Change-detection value wrapper
//!
//! A polling refresh loop reads dozens of quantities each tick (battery
//! percentage, step count, heart rate) and must only repaint the widgets
//! whose backing value actually changed. [`DirtyValue`] wraps one such
//! quantity: assignment compares against the previous value and raises an
//! updated flag on a real change, which the consumer clears once it has
//! acted on it.
//!
//! Single-threaded, single-consumer by design. Two independent consumers
//! of the same quantity need two wrapper instances; this is not a
//! broadcast primitive.

/// Value wrapper that remembers whether it changed since last observed
///
/// # Example
///
/// ```
/// use tidewatch_core::utility::DirtyValue;
///
/// let mut steps = DirtyValue::new(0u32);
/// steps.set(1200);
/// assert!(steps.is_updated());
///
/// // Refresh loop acts on the change, then clears the flag.
/// assert!(steps.take_updated());
/// assert!(!steps.is_updated());
///
/// steps.set(1200); // unchanged, no repaint needed
/// assert!(!steps.is_updated());
/// ```
#[derive(Debug, Default)]
pub struct DirtyValue<T> {
    value: T,
    updated: bool,
}

impl<T: PartialEq> DirtyValue<T> {
    /// Wrap an initial value with the updated flag clear
    pub fn new(value: T) -> Self {
        Self {
            value,
            updated: false,
        }
    }

    /// Overwrite the value; raises the updated flag iff it changed
    pub fn set(&mut self, value: T) {
        if value != self.value {
            self.updated = true;
        }
        self.value = value;
    }

    /// Current value, without touching the flag
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Peek at the updated flag without clearing it
    pub fn is_updated(&self) -> bool {
        self.updated
    }

    /// Read and clear the updated flag
    ///
    /// The refresh loop calls this once per cycle so the same change is
    /// not processed twice.
    pub fn take_updated(&mut self) -> bool {
        core::mem::replace(&mut self.updated, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_value_starts_clean() {
        let value = DirtyValue::new(42u8);
        assert_eq!(*value.get(), 42);
        assert!(!value.is_updated());
    }

    #[test]
    fn setting_same_value_stays_clean() {
        let mut value = DirtyValue::new(42u8);
        value.set(42);
        value.set(42);
        assert!(!value.is_updated());
    }

    #[test]
    fn setting_different_value_marks_updated() {
        let mut value = DirtyValue::new(1u8);
        value.set(2);
        assert!(value.is_updated());
        assert_eq!(*value.get(), 2);
    }

    #[test]
    fn flag_sticks_until_cleared() {
        let mut value = DirtyValue::new(1u8);
        value.set(2);
        value.set(2); // no further change
        assert!(value.is_updated());
        assert!(value.is_updated()); // peek does not clear

        assert!(value.take_updated());
        assert!(!value.is_updated());
        assert!(!value.take_updated());
    }

    #[test]
    fn change_after_clear_is_detected_again() {
        let mut value = DirtyValue::new(false);
        value.set(true);
        assert!(value.take_updated());
        value.set(false);
        assert!(value.is_updated());
    }
}
