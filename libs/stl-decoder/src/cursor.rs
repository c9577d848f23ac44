//! # Byte Cursor
//!
//! Forward-only little-endian reader over a borrowed byte buffer.
//! Tracks the byte offset as it advances.

use glam::Vec3;

use crate::error::{DecodeResult, MalformedMeshError};

// =============================================================================
// CURSOR
// =============================================================================

/// Little-endian cursor with offset tracking.
///
/// Every read is bounds-checked; running past the end yields
/// [`MalformedMeshError::UnexpectedEnd`] instead of panicking.
pub(crate) struct ByteCursor<'a> {
    /// Source bytes.
    bytes: &'a [u8],
    /// Current byte offset.
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at `offset`.
    pub(crate) fn at(bytes: &'a [u8], offset: usize) -> Self {
        Self { bytes, offset }
    }

    /// Current byte offset.
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// Consume `len` bytes and return them.
    fn take(&mut self, len: usize) -> DecodeResult<&'a [u8]> {
        let end = self
            .offset
            .checked_add(len)
            .filter(|end| *end <= self.bytes.len())
            .ok_or(MalformedMeshError::UnexpectedEnd {
                offset: self.offset,
            })?;
        let slice = &self.bytes[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    /// Skip `len` bytes without interpreting them.
    pub(crate) fn skip(&mut self, len: usize) -> DecodeResult<()> {
        self.take(len).map(|_| ())
    }

    /// Read a little-endian `u32`.
    pub(crate) fn read_u32_le(&mut self) -> DecodeResult<u32> {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(self.take(4)?);
        Ok(u32::from_le_bytes(raw))
    }

    /// Read a little-endian IEEE-754 `f32`, preserving its bit pattern.
    pub(crate) fn read_f32_le(&mut self) -> DecodeResult<f32> {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(self.take(4)?);
        Ok(f32::from_le_bytes(raw))
    }

    /// Read three consecutive floats as a point.
    pub(crate) fn read_vec3(&mut self) -> DecodeResult<Vec3> {
        let x = self.read_f32_le()?;
        let y = self.read_f32_le()?;
        let z = self.read_f32_le()?;
        Ok(Vec3::new(x, y, z))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_values() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&7u32.to_le_bytes());
        bytes.extend_from_slice(&1.5f32.to_le_bytes());

        let mut cursor = ByteCursor::at(&bytes, 0);
        assert_eq!(cursor.read_u32_le(), Ok(7));
        assert_eq!(cursor.read_f32_le(), Ok(1.5));
        assert_eq!(cursor.offset(), 8);
    }

    #[test]
    fn skip_advances_offset() {
        let bytes = [0u8; 10];
        let mut cursor = ByteCursor::at(&bytes, 2);
        cursor.skip(5).unwrap();
        assert_eq!(cursor.offset(), 7);
    }

    #[test]
    fn read_past_end_is_an_error() {
        let bytes = [0u8; 3];
        let mut cursor = ByteCursor::at(&bytes, 0);
        assert_eq!(
            cursor.read_u32_le(),
            Err(MalformedMeshError::UnexpectedEnd { offset: 0 })
        );
        // A failed read does not move the cursor
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn preserves_nan_bit_pattern() {
        let nan = f32::from_bits(0x7fc0_1234);
        let bytes = nan.to_le_bytes();
        let mut cursor = ByteCursor::at(&bytes, 0);
        assert_eq!(cursor.read_f32_le().unwrap().to_bits(), 0x7fc0_1234);
    }
}
