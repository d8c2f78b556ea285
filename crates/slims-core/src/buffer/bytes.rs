use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};

/// Storage width of an integer field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteWidth {
    /// Single unsigned byte
    U8,
    /// Little-endian signed 32-bit integer
    #[default]
    I32,
}

impl ByteWidth {
    pub const fn size(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::I32 => 4,
        }
    }
}

/// A save file loaded fully into memory.
///
/// The length is fixed once loaded. Accessors never fail: reads outside the
/// buffer return `0`/`false` and writes outside the buffer are dropped, so a
/// schema bound to the wrong game degrades to empty fields instead of
/// corrupting anything.
#[derive(Debug, Clone)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
    path: PathBuf,
    modified: bool,
}

impl ByteBuffer {
    /// Read the whole file at `path` into memory
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| Error::load(path, e))?;
        info!("Loaded {} ({} bytes)", path.display(), bytes.len());

        Ok(Self::from_bytes(bytes, path))
    }

    /// Wrap bytes that are already in memory; `path` is where `save` writes
    pub fn from_bytes<P: Into<PathBuf>>(bytes: Vec<u8>, path: P) -> Self {
        Self {
            bytes,
            path: path.into(),
            modified: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Returns the byte range `[offset, offset + size)` if it lies inside the buffer
    fn span(&self, offset: usize, size: usize) -> Option<std::ops::Range<usize>> {
        let end = offset.checked_add(size)?;
        (end <= self.bytes.len()).then_some(offset..end)
    }

    pub fn read_u8(&self, offset: usize) -> u8 {
        self.bytes.get(offset).copied().unwrap_or(0)
    }

    pub fn read_i32(&self, offset: usize) -> i32 {
        match self.span(offset, 4) {
            Some(range) => {
                let b = &self.bytes[range];
                i32::from_le_bytes([b[0], b[1], b[2], b[3]])
            }
            None => 0,
        }
    }

    pub fn read_bit(&self, offset: usize, bit: u8) -> bool {
        if bit > 7 {
            return false;
        }
        match self.bytes.get(offset) {
            Some(byte) => (byte >> bit) & 1 == 1,
            None => false,
        }
    }

    /// Read an integer of the given width
    pub fn read(&self, offset: usize, width: ByteWidth) -> i32 {
        match width {
            ByteWidth::U8 => i32::from(self.read_u8(offset)),
            ByteWidth::I32 => self.read_i32(offset),
        }
    }

    pub fn write_u8(&mut self, offset: usize, value: u8) {
        match self.bytes.get_mut(offset) {
            Some(byte) => {
                *byte = value;
                self.modified = true;
            }
            None => self.dropped_write(offset, 1),
        }
    }

    pub fn write_i32(&mut self, offset: usize, value: i32) {
        match self.span(offset, 4) {
            Some(range) => {
                self.bytes[range].copy_from_slice(&value.to_le_bytes());
                self.modified = true;
            }
            None => self.dropped_write(offset, 4),
        }
    }

    /// Set or clear a single bit, leaving the rest of the byte untouched
    pub fn write_bit(&mut self, offset: usize, bit: u8, value: bool) {
        if bit > 7 {
            debug!("Ignoring write to invalid bit index {} at {:#x}", bit, offset);
            return;
        }
        match self.bytes.get_mut(offset) {
            Some(byte) => {
                if value {
                    *byte |= 1 << bit;
                } else {
                    *byte &= !(1 << bit);
                }
                self.modified = true;
            }
            None => self.dropped_write(offset, 1),
        }
    }

    /// Write an integer of the given width. `U8` writes saturate into `0..=255`.
    pub fn write(&mut self, offset: usize, width: ByteWidth, value: i32) {
        match width {
            ByteWidth::U8 => self.write_u8(offset, value.clamp(0, 255) as u8),
            ByteWidth::I32 => self.write_i32(offset, value),
        }
    }

    fn dropped_write(&self, offset: usize, size: usize) {
        debug!(
            "Dropped out-of-bounds write of {} byte(s) at {:#x} (buffer is {} bytes)",
            size,
            offset,
            self.bytes.len()
        );
    }

    /// Persist the buffer to its source path.
    ///
    /// On failure the buffer is left as is and stays marked modified.
    pub fn save(&mut self) -> Result<()> {
        fs::write(&self.path, &self.bytes).map_err(|source| Error::Save {
            path: self.path.clone(),
            source,
        })?;
        self.modified = false;
        info!("Saved {} ({} bytes)", self.path.display(), self.bytes.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(bytes: Vec<u8>) -> ByteBuffer {
        ByteBuffer::from_bytes(bytes, "test.bin")
    }

    #[test]
    fn test_read_i32_little_endian() {
        let buf = buffer(vec![0x78, 0x56, 0x34, 0x12, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(buf.read_i32(0), 0x12345678);
        assert_eq!(buf.read_i32(4), -1);
    }

    #[test]
    fn test_out_of_bounds_reads_return_sentinels() {
        let buf = buffer(vec![1, 2, 3, 4, 5]);
        assert_eq!(buf.read_u8(5), 0);
        assert_eq!(buf.read_i32(2), 0);
        assert_eq!(buf.read_i32(usize::MAX), 0);
        assert!(!buf.read_bit(10, 0));
        assert!(!buf.read_bit(0, 8));
    }

    #[test]
    fn test_out_of_bounds_writes_are_dropped() {
        let mut buf = buffer(vec![0xAA; 6]);
        buf.write_u8(6, 1);
        buf.write_i32(3, 7);
        buf.write_i32(usize::MAX - 1, 7);
        buf.write_bit(6, 0, true);
        buf.write_bit(0, 9, false);

        assert_eq!(buf.as_bytes(), &[0xAA; 6]);
        assert!(!buf.is_modified());
    }

    #[test]
    fn test_write_sets_modified() {
        let mut buf = buffer(vec![0; 8]);
        buf.write_i32(4, 999_999);
        assert!(buf.is_modified());
        assert_eq!(buf.read_i32(4), 999_999);
    }

    #[test]
    fn test_write_bit_isolated() {
        let mut buf = buffer(vec![0b1010_0101]);
        buf.write_bit(0, 1, true);
        assert_eq!(buf.read_u8(0), 0b1010_0111);
        buf.write_bit(0, 7, false);
        assert_eq!(buf.read_u8(0), 0b0010_0111);
        buf.write_bit(0, 0, false);
        assert_eq!(buf.read_u8(0), 0b0010_0110);
    }

    #[test]
    fn test_u8_width_saturates() {
        let mut buf = buffer(vec![0; 4]);
        buf.write(1, ByteWidth::U8, 300);
        assert_eq!(buf.read(1, ByteWidth::U8), 255);
        buf.write(1, ByteWidth::U8, -5);
        assert_eq!(buf.read(1, ByteWidth::U8), 0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ByteBuffer::load(dir.path().join("missing.bin")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.bin");
        std::fs::write(&path, [9u8, 8, 7, 6, 5, 4, 3, 2, 1]).unwrap();

        let mut buf = ByteBuffer::load(&path).unwrap();
        buf.save().unwrap();

        let reloaded = ByteBuffer::load(&path).unwrap();
        assert_eq!(reloaded.as_bytes(), buf.as_bytes());
        assert!(!reloaded.is_modified());
    }

    #[test]
    fn test_failed_save_keeps_modified() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for writing as a file
        let mut buf = ByteBuffer::from_bytes(vec![0; 8], dir.path());
        buf.write_u8(0, 1);

        let err = buf.save().unwrap_err();
        assert!(matches!(err, Error::Save { .. }));
        assert!(buf.is_modified());
        assert_eq!(buf.read_u8(0), 1);
    }
}
