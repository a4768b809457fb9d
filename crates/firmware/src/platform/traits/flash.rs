//! Flash interface trait
//!
//! Defines the flash storage interface that platform implementations
//! must provide. Flash holds the persisted settings blob.

use crate::platform::Result;

/// Flash interface trait
///
/// # Flash Characteristics
///
/// - Flash is organized in blocks (typically 4 KB)
/// - Erase operations set all bytes to 0xFF
/// - Write operations can only change bits from 1 to 0 (erase first)
/// - Flash operations are blocking and can take 100ms+; callers save at
///   controlled checkpoints, not on every mutation
///
/// # Safety Invariants
///
/// - Only one owner per flash instance (no concurrent access)
/// - Implementations must refuse addresses inside the firmware region
///
/// # Memory Layout
///
/// ```text
/// [Firmware]         0x000000 - 0x040000 (256 KB) - DO NOT WRITE
/// [Settings Block]   0x040000 - 0x041000 (4 KB)
/// ```
pub trait FlashInterface {
    /// Read `buf.len()` bytes starting at `address`
    ///
    /// # Errors
    ///
    /// `FlashError::InvalidAddress` if the range is out of bounds,
    /// `FlashError::ReadFailed` if the device read fails.
    fn read(&mut self, address: u32, buf: &mut [u8]) -> Result<()>;

    /// Write `data` starting at `address`
    ///
    /// The target region must have been erased first.
    ///
    /// # Errors
    ///
    /// `FlashError::InvalidAddress` if the range is out of bounds or in
    /// the firmware region, `FlashError::WriteFailed` if the device
    /// write fails.
    fn write(&mut self, address: u32, data: &[u8]) -> Result<()>;

    /// Erase `size` bytes starting at `address`, setting them to 0xFF
    ///
    /// Both `address` and `size` must be aligned to
    /// [`block_size`](FlashInterface::block_size).
    ///
    /// # Errors
    ///
    /// `FlashError::InvalidAddress` on misalignment or a protected
    /// range, `FlashError::EraseFailed` if the device erase fails.
    fn erase(&mut self, address: u32, size: u32) -> Result<()>;

    /// Minimum erasable unit size in bytes
    fn block_size(&self) -> u32;

    /// Total flash capacity in bytes
    fn capacity(&self) -> u32;
}
