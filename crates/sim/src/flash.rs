//! Simulated flash device
//!
//! Byte-array flash with the same observable behavior as the real part:
//! erase fills a block-aligned region with 0xFF, reads and writes are
//! bounds-checked, and either operation can be forced to fail for
//! fault-path tests.

use tidewatch_firmware::platform::error::FlashError;
use tidewatch_firmware::platform::{FlashInterface, Result};

/// Default erase block size (matches the on-device flash)
const DEFAULT_BLOCK_SIZE: u32 = 4096;

/// In-memory [`FlashInterface`] implementation
#[derive(Clone)]
pub struct MemoryFlash {
    data: Vec<u8>,
    block_size: u32,
    erases: usize,
    writes: usize,

    /// Force every read to fail
    pub fail_reads: bool,
    /// Force every write and erase to fail
    pub fail_writes: bool,
}

impl MemoryFlash {
    /// Create a flash image of `capacity` bytes, fully erased (0xFF)
    pub fn new(capacity: u32) -> Self {
        Self {
            data: vec![0xFF; capacity as usize],
            block_size: DEFAULT_BLOCK_SIZE,
            erases: 0,
            writes: 0,
            fail_reads: false,
            fail_writes: false,
        }
    }

    /// Number of erase operations performed
    pub fn erase_count(&self) -> usize {
        self.erases
    }

    /// Number of write operations performed
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Raw flash contents, for corruption tests
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn check_range(&self, address: u32, len: usize) -> Result<()> {
        let end = (address as usize).checked_add(len);
        if end.map_or(true, |end| end > self.data.len()) {
            return Err(FlashError::InvalidAddress.into());
        }
        Ok(())
    }
}

impl FlashInterface for MemoryFlash {
    fn read(&mut self, address: u32, buf: &mut [u8]) -> Result<()> {
        if self.fail_reads {
            return Err(FlashError::ReadFailed.into());
        }
        self.check_range(address, buf.len())?;
        let start = address as usize;
        buf.copy_from_slice(&self.data[start..start + buf.len()]);
        Ok(())
    }

    fn write(&mut self, address: u32, data: &[u8]) -> Result<()> {
        if self.fail_writes {
            return Err(FlashError::WriteFailed.into());
        }
        self.check_range(address, data.len())?;
        let start = address as usize;
        self.data[start..start + data.len()].copy_from_slice(data);
        self.writes += 1;
        Ok(())
    }

    fn erase(&mut self, address: u32, size: u32) -> Result<()> {
        if self.fail_writes {
            return Err(FlashError::EraseFailed.into());
        }
        if address % self.block_size != 0 || size % self.block_size != 0 {
            return Err(FlashError::InvalidAddress.into());
        }
        self.check_range(address, size as usize)?;
        let start = address as usize;
        self.data[start..start + size as usize].fill(0xFF);
        self.erases += 1;
        Ok(())
    }

    fn block_size(&self) -> u32 {
        self.block_size
    }

    fn capacity(&self) -> u32 {
        self.data.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_flash_is_erased() {
        let mut flash = MemoryFlash::new(8192);
        let mut buf = [0u8; 16];
        flash.read(4096, &mut buf).unwrap();
        assert_eq!(buf, [0xFF; 16]);
    }

    #[test]
    fn write_and_read_back() {
        let mut flash = MemoryFlash::new(8192);
        flash.write(0, &[1, 2, 3]).unwrap();
        let mut buf = [0u8; 3];
        flash.read(0, &mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3]);
        assert_eq!(flash.write_count(), 1);
    }

    #[test]
    fn erase_restores_erased_state() {
        let mut flash = MemoryFlash::new(8192);
        flash.write(4096, &[0u8; 8]).unwrap();
        flash.erase(4096, 4096).unwrap();
        let mut buf = [0u8; 8];
        flash.read(4096, &mut buf).unwrap();
        assert_eq!(buf, [0xFF; 8]);
        assert_eq!(flash.erase_count(), 1);
    }

    #[test]
    fn unaligned_erase_rejected() {
        let mut flash = MemoryFlash::new(8192);
        assert!(flash.erase(100, 4096).is_err());
        assert!(flash.erase(0, 100).is_err());
    }

    #[test]
    fn out_of_bounds_access_rejected() {
        let mut flash = MemoryFlash::new(4096);
        let mut buf = [0u8; 8];
        assert!(flash.read(4092, &mut buf).is_err());
        assert!(flash.write(4095, &[0, 0]).is_err());
    }

    #[test]
    fn fault_injection() {
        let mut flash = MemoryFlash::new(4096);
        flash.fail_writes = true;
        assert!(flash.write(0, &[1]).is_err());
        assert!(flash.erase(0, 4096).is_err());

        flash.fail_writes = false;
        flash.fail_reads = true;
        let mut buf = [0u8; 1];
        assert!(flash.read(0, &mut buf).is_err());
    }
}
