//! MSB-first bit view over a record payload.
//!
//! Calypso records are dense EN1545 bit strings: bit 0 is the most
//! significant bit of byte 0. Every access is bounds-checked and reports
//! `Error::BitRange` instead of reading past the buffer.

use crate::{Error, Result};

/// Read-only bit view over a byte buffer.
#[derive(Debug, Clone, Copy)]
pub struct BitView<'a> {
    bytes: &'a [u8],
}

impl<'a> BitView<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// `8 * len`
    pub fn bit_count(&self) -> usize {
        self.bytes.len() * 8
    }

    fn range_error(&self, start: usize, end: usize) -> Error {
        Error::BitRange {
            start,
            end,
            available: self.bit_count(),
        }
    }

    /// Read bits `start..=end` as an unsigned integer.
    pub fn slice_to_uint(&self, start: usize, end: usize) -> Result<u64> {
        if start > end || end >= self.bit_count() || end - start >= 64 {
            return Err(self.range_error(start, end));
        }

        let mut value: u64 = 0;
        let mut pos = start;
        while pos <= end {
            let byte = self.bytes[pos / 8];
            let bit_in_byte = pos % 8;
            // Take as many bits as remain in this byte, up to `end`.
            let take = (8 - bit_in_byte).min(end - pos + 1);
            let shift = 8 - bit_in_byte - take;
            let mask = ((1u16 << take) - 1) as u8;
            let chunk = (byte >> shift) & mask;
            value = (value << take) | chunk as u64;
            pos += take;
        }
        Ok(value)
    }

    /// Read `width` bits starting at `offset`. A zero width reads nothing and
    /// yields 0.
    pub fn read(&self, offset: usize, width: usize) -> Result<u64> {
        if width == 0 {
            return Ok(0);
        }
        let end = offset
            .checked_add(width - 1)
            .ok_or_else(|| self.range_error(offset, usize::MAX))?;
        self.slice_to_uint(offset, end)
    }

    pub fn bit(&self, index: usize) -> Result<bool> {
        Ok(self.slice_to_uint(index, index)? == 1)
    }

    /// Render bits `start..=end` as a '0'/'1' string, clamped to the buffer.
    pub fn to_bit_string(&self, start: usize, end: usize) -> String {
        let end = end.min(self.bit_count().saturating_sub(1));
        (start..=end)
            .map(|i| match self.bit(i) {
                Ok(true) => '1',
                _ => '0',
            })
            .collect()
    }
}

impl<'a> From<&'a [u8]> for BitView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}
