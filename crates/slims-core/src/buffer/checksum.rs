//! Trailing CRC32 checksum handling.
//!
//! Save files of at least [`MIN_CHECKSUM_LEN`] bytes carry a little-endian
//! CRC32 in their last four bytes. The digest covers every other byte of the
//! file in order.

use serde::Serialize;
use tracing::{debug, warn};

use super::ByteBuffer;

/// Reflected CRC-32/ISO-HDLC polynomial
pub const CRC32_POLYNOMIAL: u32 = 0xEDB8_8320;
pub const CRC32_SEED: u32 = 0xFFFF_FFFF;

/// Size of the checksum field in bytes
pub const CHECKSUM_SIZE: usize = 4;

/// Buffers shorter than this carry no checksum
pub const MIN_CHECKSUM_LEN: usize = 8;

/// Offset of the checksum field, if the buffer is long enough to carry one
pub fn detect_location(buffer: &ByteBuffer) -> Option<usize> {
    let len = buffer.len();
    (len >= MIN_CHECKSUM_LEN).then(|| len - CHECKSUM_SIZE)
}

/// Bit-serial CRC32 over `bytes`, skipping the four bytes at `exclude_offset`
pub fn compute(bytes: &[u8], exclude_offset: usize) -> u32 {
    let excluded = exclude_offset..exclude_offset.saturating_add(CHECKSUM_SIZE);
    let mut crc = CRC32_SEED;

    for (i, &byte) in bytes.iter().enumerate() {
        if excluded.contains(&i) {
            continue;
        }

        crc ^= u32::from(byte);
        for _ in 0..8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ CRC32_POLYNOMIAL;
            } else {
                crc >>= 1;
            }
        }
    }

    !crc
}

/// Where a buffer's checksum lives and whether it currently matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecksumDescriptor {
    pub offset: Option<usize>,
    pub stored_value: u32,
    pub is_valid: bool,
}

impl ChecksumDescriptor {
    /// Locate the checksum field and validate it against the buffer
    pub fn detect(buffer: &ByteBuffer) -> Self {
        let offset = detect_location(buffer);
        let stored_value = offset.map(|o| buffer.read_i32(o) as u32).unwrap_or(0);

        let mut descriptor = Self {
            offset,
            stored_value,
            is_valid: true,
        };
        descriptor.is_valid = descriptor.validate(buffer);

        match offset {
            Some(o) if descriptor.is_valid => {
                debug!("Checksum at {:#x} is valid ({:#010x})", o, stored_value)
            }
            Some(o) => warn!(
                "Checksum mismatch at {:#x}: stored {:#010x}, computed {:#010x}",
                o,
                stored_value,
                compute(buffer.as_bytes(), o)
            ),
            None => debug!("Buffer too short to carry a checksum"),
        }

        descriptor
    }

    /// Digest of the buffer as it is now, if a checksum field exists
    pub fn computed(&self, buffer: &ByteBuffer) -> Option<u32> {
        self.offset.map(|o| compute(buffer.as_bytes(), o))
    }

    /// Compare the stored value against a fresh digest.
    ///
    /// A buffer without a checksum field is always valid.
    pub fn validate(&self, buffer: &ByteBuffer) -> bool {
        match self.computed(buffer) {
            Some(computed) => computed == self.stored_value,
            None => true,
        }
    }

    /// Recompute the digest and write it into the checksum field.
    ///
    /// Returns the value now stored (0 if the buffer has no checksum field).
    pub fn recalculate(&mut self, buffer: &mut ByteBuffer) -> u32 {
        let Some(offset) = self.offset else {
            return 0;
        };

        let value = compute(buffer.as_bytes(), offset);
        buffer.write_i32(offset, value as i32);
        self.stored_value = value;
        self.is_valid = true;
        debug!("Recalculated checksum at {:#x}: {:#010x}", offset, value);

        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_with_valid_checksum(len: usize) -> ByteBuffer {
        let mut buf = ByteBuffer::from_bytes(vec![0; len], "test.bin");
        let mut descriptor = ChecksumDescriptor::detect(&buf);
        descriptor.recalculate(&mut buf);
        buf
    }

    #[test]
    fn test_compute_matches_standard_crc32() {
        // CRC-32/ISO-HDLC check value, with the excluded span past the end
        let bytes = b"123456789";
        assert_eq!(compute(bytes, bytes.len()), 0xCBF4_3926);
    }

    #[test]
    fn test_compute_skips_checksum_field() {
        let mut data = b"123456789".to_vec();
        data.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(compute(&data, 9), 0xCBF4_3926);
    }

    #[test]
    fn test_compute_unaffected_by_stored_value() {
        let mut data = vec![0x5A; 64];
        let before = compute(&data, 60);
        data[60..64].copy_from_slice(&[1, 2, 3, 4]);
        assert_eq!(compute(&data, 60), before);
        data[60..64].copy_from_slice(&[0xFF; 4]);
        assert_eq!(compute(&data, 60), before);
    }

    #[test]
    fn test_detect_location() {
        let short = ByteBuffer::from_bytes(vec![0; 7], "a.bin");
        assert_eq!(detect_location(&short), None);

        let exact = ByteBuffer::from_bytes(vec![0; 8], "b.bin");
        assert_eq!(detect_location(&exact), Some(4));

        let long = ByteBuffer::from_bytes(vec![0; 700_000], "c.bin");
        assert_eq!(detect_location(&long), Some(699_996));
    }

    #[test]
    fn test_short_buffer_trivially_valid() {
        let mut buf = ByteBuffer::from_bytes(vec![1, 2, 3], "short.bin");
        let mut descriptor = ChecksumDescriptor::detect(&buf);
        assert!(descriptor.is_valid);
        assert_eq!(descriptor.recalculate(&mut buf), 0);
        assert_eq!(buf.as_bytes(), &[1, 2, 3]);
        assert!(!buf.is_modified());
    }

    #[test]
    fn test_zero_payload_with_correct_checksum_validates() {
        let buf = buffer_with_valid_checksum(700_000);
        let descriptor = ChecksumDescriptor::detect(&buf);
        assert!(descriptor.is_valid);
        assert_eq!(descriptor.offset, Some(699_996));
    }

    #[test]
    fn test_flip_byte_then_recalculate() {
        let mut buf = buffer_with_valid_checksum(700_000);
        let mut descriptor = ChecksumDescriptor::detect(&buf);
        let original = descriptor.stored_value;

        buf.write_u8(1234, 0x01);
        assert!(!descriptor.validate(&buf));

        descriptor.recalculate(&mut buf);
        assert!(descriptor.validate(&buf));
        assert!(descriptor.is_valid);
        assert_ne!(descriptor.stored_value, original);
        assert_eq!(buf.read_i32(699_996) as u32, descriptor.stored_value);
    }

    #[test]
    fn test_mutation_after_recalculate_invalidates() {
        let mut buf = ByteBuffer::from_bytes((0..=255u8).cycle().take(4096).collect(), "x.bin");
        let mut descriptor = ChecksumDescriptor::detect(&buf);
        descriptor.recalculate(&mut buf);

        for offset in [0usize, 1, 2047, 4091] {
            let mut copy = buf.clone();
            copy.write_u8(offset, copy.read_u8(offset) ^ 0x80);
            assert!(!descriptor.validate(&copy), "offset {offset}");
        }
    }

    #[test]
    fn test_corrupt_stored_value_detected() {
        let mut buf = buffer_with_valid_checksum(64);
        buf.write_i32(60, 0x1234_5678);
        let descriptor = ChecksumDescriptor::detect(&buf);
        assert!(!descriptor.is_valid);
        assert_eq!(descriptor.stored_value, 0x1234_5678);
    }
}
