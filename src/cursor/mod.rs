pub mod error;

use crate::cursor::error::{CursorError, CursorResult};
use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Positional little-endian reader over an immutable byte slice.
///
/// The position may be moved past the end of the buffer; any read from there
/// fails with [`CursorError::UnexpectedEnd`].
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    pub fn is_eof(&self) -> bool {
        self.remaining() == 0
    }

    pub fn seek(&mut self, position: usize) {
        self.position = position;
    }

    /// Moves the position by `delta` bytes, clamping at zero.
    pub fn seek_relative(&mut self, delta: i64) {
        self.position = if delta < 0 {
            self.position.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            self.position.saturating_add(delta as usize)
        };
    }

    pub fn read_bytes(&mut self, count: usize) -> CursorResult<&'a [u8]> {
        let available = self.remaining();
        if count > available {
            return Err(CursorError::UnexpectedEnd {
                position: self.position,
                needed: count,
                available,
            });
        }

        let start = self.position;
        self.position += count;
        Ok(&self.data[start..start + count])
    }

    pub fn read_u8(&mut self) -> CursorResult<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> CursorResult<u16> {
        Ok(LittleEndian::read_u16(self.read_bytes(2)?))
    }

    pub fn read_u32(&mut self) -> CursorResult<u32> {
        Ok(LittleEndian::read_u32(self.read_bytes(4)?))
    }

    pub fn read_i32(&mut self) -> CursorResult<i32> {
        Ok(LittleEndian::read_i32(self.read_bytes(4)?))
    }

    pub fn read_f32(&mut self) -> CursorResult<f32> {
        Ok(LittleEndian::read_f32(self.read_bytes(4)?))
    }

    pub fn read_f64(&mut self) -> CursorResult<f64> {
        Ok(LittleEndian::read_f64(self.read_bytes(8)?))
    }

    /// MPEG frame headers are the only big-endian field we read.
    pub fn read_u32_be(&mut self) -> CursorResult<u32> {
        Ok(BigEndian::read_u32(self.read_bytes(4)?))
    }

    /// Reads a 64-bit offset stored as two little-endian `u32` halves (low, high).
    pub fn read_offset(&mut self) -> CursorResult<u64> {
        let low = self.read_u32()? as u64;
        let high = self.read_u32()? as u64;
        Ok(low | (high << 32))
    }

    pub fn read_u16_units(&mut self, count: usize) -> CursorResult<Vec<u16>> {
        let bytes = self.read_bytes(count * 2)?;
        let mut units = vec![0u16; count];
        LittleEndian::read_u16_into(bytes, &mut units);
        Ok(units)
    }
}

/// Little-endian writer that grows its backing buffer on demand.
#[derive(Debug, Clone, Default)]
pub struct ByteBuilder {
    data: Vec<u8>,
    position: usize,
}

impl ByteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn seek(&mut self, position: usize) {
        self.position = position;
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        let end = self.position + bytes.len();
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[self.position..end].copy_from_slice(bytes);
        self.position = end;
    }

    pub fn write_u8(&mut self, value: u8) {
        self.write_bytes(&[value]);
    }

    pub fn write_u16(&mut self, value: u16) {
        let mut buf = [0u8; 2];
        LittleEndian::write_u16(&mut buf, value);
        self.write_bytes(&buf);
    }

    pub fn write_u32(&mut self, value: u32) {
        let mut buf = [0u8; 4];
        LittleEndian::write_u32(&mut buf, value);
        self.write_bytes(&buf);
    }

    pub fn write_i32(&mut self, value: i32) {
        let mut buf = [0u8; 4];
        LittleEndian::write_i32(&mut buf, value);
        self.write_bytes(&buf);
    }

    pub fn write_f32(&mut self, value: f32) {
        let mut buf = [0u8; 4];
        LittleEndian::write_f32(&mut buf, value);
        self.write_bytes(&buf);
    }

    pub fn write_f64(&mut self, value: f64) {
        let mut buf = [0u8; 8];
        LittleEndian::write_f64(&mut buf, value);
        self.write_bytes(&buf);
    }

    /// Inverse of [`ByteReader::read_offset`].
    pub fn write_offset(&mut self, value: u64) {
        self.write_u32((value & 0xFFFF_FFFF) as u32);
        self.write_u32((value >> 32) as u32);
    }

    pub fn write_u16_units(&mut self, units: &[u16]) {
        let mut buf = vec![0u8; units.len() * 2];
        LittleEndian::write_u16_into(units, &mut buf);
        self.write_bytes(&buf);
    }
}
