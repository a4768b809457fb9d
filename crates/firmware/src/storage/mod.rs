//! Flash-backed blob storage
//!
//! Implements `tidewatch_core`'s [`BlobStore`] contract on top of a
//! [`FlashInterface`]. Each named blob owns one flash block and is
//! framed so a load can tell a valid blob from erased or torn flash:
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │ Magic: [u8; 4] = b"TDWS"                      │  Offset: 0
//! ├───────────────────────────────────────────────┤
//! │ Payload length: u32                           │  Offset: 4
//! ├───────────────────────────────────────────────┤
//! │ Payload (opaque blob)                         │  Offset: 8
//! ├───────────────────────────────────────────────┤
//! │ CRC32 over header + payload                   │  Offset: 8 + len
//! └───────────────────────────────────────────────┘
//! ```
//!
//! The payload is opaque here; its own versioning is the settings
//! codec's concern. A failed validation surfaces as a read error and the
//! settings controller degrades to defaults.

use crate::platform::traits::FlashInterface;
use heapless::Vec;
use tidewatch_core::traits::{BlobStore, StoreError};

/// Base address of the settings flash block
pub const SETTINGS_BLOCK_BASE: u32 = 0x040000;

/// Size of one storage block (one flash erase unit)
pub const BLOCK_SIZE: usize = 4096;

/// Frame magic ("TDWS")
pub const BLOB_MAGIC: [u8; 4] = *b"TDWS";

/// Frame header size (magic + payload length)
const HEADER_SIZE: usize = 8;

/// CRC32 trailer size
const CRC_SIZE: usize = 4;

/// Largest payload one block can hold
pub const MAX_PAYLOAD: usize = BLOCK_SIZE - HEADER_SIZE - CRC_SIZE;

const CRC32: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);

/// Flash block assigned to a blob key
fn block_base_for(key: &str) -> Option<u32> {
    match key {
        tidewatch_core::settings::SETTINGS_BLOB_KEY => Some(SETTINGS_BLOCK_BASE),
        _ => None,
    }
}

/// Block-framed blob store over raw flash
///
/// Owns the flash device; the settings controller owns this store. A
/// write erases the blob's block and rewrites the whole frame, so from
/// the caller's perspective the blob is replaced wholesale or not at
/// all (a torn write fails the CRC on the next load).
pub struct FlashBlobStore<F: FlashInterface> {
    flash: F,
}

impl<F: FlashInterface> FlashBlobStore<F> {
    /// Wrap a flash device
    pub fn new(flash: F) -> Self {
        Self { flash }
    }

    /// Borrow the underlying flash device
    pub fn flash(&self) -> &F {
        &self.flash
    }

    /// Mutably borrow the underlying flash device
    pub fn flash_mut(&mut self) -> &mut F {
        &mut self.flash
    }
}

impl<F: FlashInterface> BlobStore for FlashBlobStore<F> {
    fn read(&mut self, key: &str, buf: &mut [u8]) -> Result<usize, StoreError> {
        let base = block_base_for(key).ok_or(StoreError::UnknownKey)?;

        let mut block = [0u8; BLOCK_SIZE];
        self.flash
            .read(base, &mut block)
            .map_err(|_| StoreError::ReadFailed)?;

        if block[0..4] != BLOB_MAGIC {
            // Erased or never-written block; not an error worth shouting about.
            crate::log_debug!("no blob found under '{}'", key);
            return Err(StoreError::NotFound);
        }

        let len = u32::from_le_bytes([block[4], block[5], block[6], block[7]]) as usize;
        if len > MAX_PAYLOAD {
            crate::log_warn!("blob '{}' has invalid length {}", key, len);
            return Err(StoreError::Corrupted);
        }

        let stored_crc = u32::from_le_bytes([
            block[HEADER_SIZE + len],
            block[HEADER_SIZE + len + 1],
            block[HEADER_SIZE + len + 2],
            block[HEADER_SIZE + len + 3],
        ]);
        let calculated_crc = CRC32.checksum(&block[0..HEADER_SIZE + len]);
        if stored_crc != calculated_crc {
            crate::log_warn!("blob '{}' failed CRC validation", key);
            return Err(StoreError::Corrupted);
        }

        if len > buf.len() {
            return Err(StoreError::TooLarge);
        }
        buf[..len].copy_from_slice(&block[HEADER_SIZE..HEADER_SIZE + len]);
        Ok(len)
    }

    fn write(&mut self, key: &str, data: &[u8]) -> Result<(), StoreError> {
        let base = block_base_for(key).ok_or(StoreError::UnknownKey)?;
        if data.len() > MAX_PAYLOAD {
            return Err(StoreError::TooLarge);
        }

        let mut frame: Vec<u8, BLOCK_SIZE> = Vec::new();
        frame.extend_from_slice(&BLOB_MAGIC).ok();
        frame
            .extend_from_slice(&(data.len() as u32).to_le_bytes())
            .ok();
        frame.extend_from_slice(data).ok();

        let crc = CRC32.checksum(&frame);
        frame.extend_from_slice(&crc.to_le_bytes()).ok();

        self.flash
            .erase(base, BLOCK_SIZE as u32)
            .map_err(|_| StoreError::WriteFailed)?;
        self.flash
            .write(base, &frame)
            .map_err(|_| StoreError::WriteFailed)?;

        crate::log_info!("saved blob '{}' ({} bytes)", key, data.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::error::FlashError;
    use crate::platform::Result;
    use tidewatch_core::settings::SETTINGS_BLOB_KEY;

    /// Minimal in-memory flash for exercising the framing logic.
    struct TestFlash {
        data: std::vec::Vec<u8>,
    }

    impl TestFlash {
        fn new() -> Self {
            Self {
                data: std::vec![0xFF; 0x050000],
            }
        }
    }

    impl FlashInterface for TestFlash {
        fn read(&mut self, address: u32, buf: &mut [u8]) -> Result<()> {
            let start = address as usize;
            let end = start + buf.len();
            if end > self.data.len() {
                return Err(FlashError::InvalidAddress.into());
            }
            buf.copy_from_slice(&self.data[start..end]);
            Ok(())
        }

        fn write(&mut self, address: u32, data: &[u8]) -> Result<()> {
            let start = address as usize;
            let end = start + data.len();
            if end > self.data.len() {
                return Err(FlashError::InvalidAddress.into());
            }
            self.data[start..end].copy_from_slice(data);
            Ok(())
        }

        fn erase(&mut self, address: u32, size: u32) -> Result<()> {
            let start = address as usize;
            let end = start + size as usize;
            if end > self.data.len() || address % self.block_size() != 0 {
                return Err(FlashError::InvalidAddress.into());
            }
            self.data[start..end].fill(0xFF);
            Ok(())
        }

        fn block_size(&self) -> u32 {
            BLOCK_SIZE as u32
        }

        fn capacity(&self) -> u32 {
            self.data.len() as u32
        }
    }

    #[test]
    fn erased_flash_reads_not_found() {
        let mut store = FlashBlobStore::new(TestFlash::new());
        let mut buf = [0u8; 64];
        assert_eq!(
            store.read(SETTINGS_BLOB_KEY, &mut buf),
            Err(StoreError::NotFound)
        );
    }

    #[test]
    fn write_then_read_round_trip() {
        let mut store = FlashBlobStore::new(TestFlash::new());
        let payload = [0xAB; 44];
        store.write(SETTINGS_BLOB_KEY, &payload).unwrap();

        let mut buf = [0u8; 64];
        let n = store.read(SETTINGS_BLOB_KEY, &mut buf).unwrap();
        assert_eq!(&buf[..n], &payload);
    }

    #[test]
    fn rewrite_replaces_previous_blob() {
        let mut store = FlashBlobStore::new(TestFlash::new());
        store.write(SETTINGS_BLOB_KEY, &[1, 2, 3, 4]).unwrap();
        store.write(SETTINGS_BLOB_KEY, &[9, 9]).unwrap();

        let mut buf = [0u8; 16];
        let n = store.read(SETTINGS_BLOB_KEY, &mut buf).unwrap();
        assert_eq!(&buf[..n], &[9, 9]);
    }

    #[test]
    fn corrupted_payload_fails_crc() {
        let mut store = FlashBlobStore::new(TestFlash::new());
        store.write(SETTINGS_BLOB_KEY, &[5; 16]).unwrap();

        // Flip one payload byte behind the store's back.
        let offset = SETTINGS_BLOCK_BASE as usize + HEADER_SIZE + 3;
        store.flash_mut().data[offset] ^= 0xFF;

        let mut buf = [0u8; 32];
        assert_eq!(
            store.read(SETTINGS_BLOB_KEY, &mut buf),
            Err(StoreError::Corrupted)
        );
    }

    #[test]
    fn implausible_length_is_corrupted() {
        let mut store = FlashBlobStore::new(TestFlash::new());
        store.write(SETTINGS_BLOB_KEY, &[5; 16]).unwrap();

        let offset = SETTINGS_BLOCK_BASE as usize + 4;
        store.flash_mut().data[offset..offset + 4]
            .copy_from_slice(&(BLOCK_SIZE as u32).to_le_bytes());

        let mut buf = [0u8; 32];
        assert_eq!(
            store.read(SETTINGS_BLOB_KEY, &mut buf),
            Err(StoreError::Corrupted)
        );
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut store = FlashBlobStore::new(TestFlash::new());
        assert_eq!(
            store.write("missions", &[1]),
            Err(StoreError::UnknownKey)
        );
        let mut buf = [0u8; 8];
        assert_eq!(store.read("missions", &mut buf), Err(StoreError::UnknownKey));
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let mut store = FlashBlobStore::new(TestFlash::new());
        let payload = std::vec![0u8; MAX_PAYLOAD + 1];
        assert_eq!(
            store.write(SETTINGS_BLOB_KEY, &payload),
            Err(StoreError::TooLarge)
        );
    }

    #[test]
    fn undersized_destination_is_rejected() {
        let mut store = FlashBlobStore::new(TestFlash::new());
        store.write(SETTINGS_BLOB_KEY, &[7; 16]).unwrap();
        let mut buf = [0u8; 8];
        assert_eq!(
            store.read(SETTINGS_BLOB_KEY, &mut buf),
            Err(StoreError::TooLarge)
        );
    }
}
