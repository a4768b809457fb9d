//! Durable blob storage abstraction
//!
//! The settings controller depends only on this narrow contract: read a
//! named blob into a caller buffer, write a named blob from a buffer,
//! report success or failure. Both calls are synchronous and run to
//! completion; the backend's own scheduling (flash erase latency) is not
//! this crate's concern.
//!
//! Implementations:
//! - `FlashBlobStore` (in the firmware crate) for on-device flash
//! - [`MockStore`] for host testing

/// Errors from blob store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Key is not mapped to any storage region
    UnknownKey,
    /// No blob has been stored under this key
    NotFound,
    /// Stored data failed framing or checksum validation
    Corrupted,
    /// Underlying device read failed
    ReadFailed,
    /// Underlying device write failed
    WriteFailed,
    /// Blob does not fit the destination buffer or storage region
    TooLarge,
}

impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StoreError::UnknownKey => write!(f, "unknown blob key"),
            StoreError::NotFound => write!(f, "blob not found"),
            StoreError::Corrupted => write!(f, "blob failed validation"),
            StoreError::ReadFailed => write!(f, "device read failed"),
            StoreError::WriteFailed => write!(f, "device write failed"),
            StoreError::TooLarge => write!(f, "blob too large"),
        }
    }
}

/// Named-blob storage device
///
/// # Example
///
/// ```
/// use tidewatch_core::traits::{BlobStore, MockStore};
///
/// let mut store = MockStore::new();
/// store.write("settings", &[1, 2, 3]).unwrap();
///
/// let mut buf = [0u8; 8];
/// let n = store.read("settings", &mut buf).unwrap();
/// assert_eq!(&buf[..n], &[1, 2, 3]);
/// ```
pub trait BlobStore {
    /// Read the blob stored under `key` into `buf`
    ///
    /// Returns the number of bytes read. The blob must fit `buf`.
    fn read(&mut self, key: &str, buf: &mut [u8]) -> Result<usize, StoreError>;

    /// Write `data` as the blob stored under `key`
    ///
    /// Replaces any previous blob atomically from the caller's
    /// perspective; partial-write recovery is the implementation's
    /// responsibility.
    fn write(&mut self, key: &str, data: &[u8]) -> Result<(), StoreError>;
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Capacity of the mock store's single slot
const MOCK_CAPACITY: usize = 128;

/// Single-slot in-memory store with fault injection
///
/// Holds one blob regardless of key and counts writes, which is enough
/// to test controller save/load behavior without a device.
#[derive(Debug)]
pub struct MockStore {
    data: [u8; MOCK_CAPACITY],
    len: usize,
    present: bool,
    writes: usize,
    /// Force every read to fail
    pub fail_reads: bool,
    /// Force every write to fail
    pub fail_writes: bool,
}

impl Default for MockStore {
    fn default() -> Self {
        Self {
            data: [0; MOCK_CAPACITY],
            len: 0,
            present: false,
            writes: 0,
            fail_reads: false,
            fail_writes: false,
        }
    }
}

impl MockStore {
    /// Create an empty mock store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful writes observed
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Most recently written blob, if any
    pub fn last_write(&self) -> Option<&[u8]> {
        self.present.then(|| &self.data[..self.len])
    }

    /// Drop the stored blob, simulating an empty device
    pub fn clear(&mut self) {
        self.present = false;
        self.len = 0;
    }
}

impl BlobStore for MockStore {
    fn read(&mut self, _key: &str, buf: &mut [u8]) -> Result<usize, StoreError> {
        if self.fail_reads {
            return Err(StoreError::ReadFailed);
        }
        if !self.present {
            return Err(StoreError::NotFound);
        }
        if self.len > buf.len() {
            return Err(StoreError::TooLarge);
        }
        buf[..self.len].copy_from_slice(&self.data[..self.len]);
        Ok(self.len)
    }

    fn write(&mut self, _key: &str, data: &[u8]) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::WriteFailed);
        }
        if data.len() > MOCK_CAPACITY {
            return Err(StoreError::TooLarge);
        }
        self.data[..data.len()].copy_from_slice(data);
        self.len = data.len();
        self.present = true;
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_store_empty_reads_not_found() {
        let mut store = MockStore::new();
        let mut buf = [0u8; 4];
        assert_eq!(store.read("settings", &mut buf), Err(StoreError::NotFound));
    }

    #[test]
    fn mock_store_round_trip() {
        let mut store = MockStore::new();
        store.write("settings", &[7, 8, 9]).unwrap();

        let mut buf = [0u8; 16];
        let n = store.read("settings", &mut buf).unwrap();
        assert_eq!(&buf[..n], &[7, 8, 9]);
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn mock_store_fault_injection() {
        let mut store = MockStore::new();
        store.fail_writes = true;
        assert_eq!(store.write("settings", &[1]), Err(StoreError::WriteFailed));

        store.fail_writes = false;
        store.write("settings", &[1]).unwrap();
        store.fail_reads = true;
        let mut buf = [0u8; 4];
        assert_eq!(store.read("settings", &mut buf), Err(StoreError::ReadFailed));
    }

    #[test]
    fn mock_store_rejects_undersized_buffer() {
        let mut store = MockStore::new();
        store.write("settings", &[1, 2, 3, 4]).unwrap();
        let mut buf = [0u8; 2];
        assert_eq!(store.read("settings", &mut buf), Err(StoreError::TooLarge));
    }
}
