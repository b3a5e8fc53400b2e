//! Sequential extraction of unsigned fields from a [`BitSlice`].
//!
//! Fields are always interpreted most-significant-bit first, whatever byte
//! order the underlying container carries.
//!
//! Two read styles are offered. [`BitReader::peek_u64`] decodes at the
//! cursor and leaves it where it is. [`BitReader::read_u64`] decodes and
//! then moves the cursor past the field.
//!
//! ```rust
//! use bit_slice::{BitReader, BitSlice, ByteOrder};
//!
//! let bits = BitSlice::from_bytes(&[0b1010_0110], ByteOrder::BigEndian);
//! let mut reader = BitReader::new(bits);
//!
//! assert_eq!(reader.peek_u64(4).unwrap(), 0b1010);
//! assert_eq!(reader.peek_u64(4).unwrap(), 0b1010);
//! assert_eq!(reader.read_u64(4).unwrap(), 0b1010);
//! assert_eq!(reader.read_u64(4).unwrap(), 0b0110);
//! assert!(reader.is_exhausted());
//! ```

use crate::error::check_width;
use crate::{BitSlice, BitSliceError, Result};

#[derive(Clone, Debug)]
pub struct BitReader {
    slice: BitSlice,
    position: usize,
}

impl BitReader {
    pub fn new(slice: BitSlice) -> Self {
        Self { slice, position: 0 }
    }

    /// Index of the next bit to be consumed.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.slice.len() - self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    pub fn get_ref(&self) -> &BitSlice {
        &self.slice
    }

    pub fn into_inner(self) -> BitSlice {
        self.slice
    }

    /// Moves the cursor to `position`, which may equal the length.
    pub fn seek(&mut self, position: usize) -> Result<()> {
        if position > self.slice.len() {
            return Err(BitSliceError::OutOfBounds {
                position,
                width: 0,
                len: self.slice.len(),
            });
        }
        self.position = position;
        Ok(())
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.check_bounds(n)?;
        self.position += n;
        Ok(())
    }

    /// Decodes `width` bits at the cursor without moving it.
    ///
    /// # Errors
    ///
    /// [`BitSliceError::FieldTooWide`] for `width > 64`,
    /// [`BitSliceError::OutOfBounds`] when fewer than `width` bits remain.
    pub fn peek_u64(&self, width: usize) -> Result<u64> {
        check_width(width)?;
        self.check_bounds(width)?;
        let field = &self.slice.as_bools()[self.position..self.position + width];
        Ok(field
            .iter()
            .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit)))
    }

    /// Decodes `width` bits at the cursor and advances past them.
    pub fn read_u64(&mut self, width: usize) -> Result<u64> {
        let value = self.peek_u64(width)?;
        self.position += width;
        Ok(value)
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u64(1)? == 1)
    }

    fn check_bounds(&self, width: usize) -> Result<()> {
        if width > self.remaining() {
            log::debug!(
                "{}-bit field at {} overruns {} bits",
                width,
                self.position,
                self.slice.len()
            );
            return Err(BitSliceError::OutOfBounds {
                position: self.position,
                width,
                len: self.slice.len(),
            });
        }
        Ok(())
    }
}

impl From<BitSlice> for BitReader {
    fn from(slice: BitSlice) -> Self {
        Self::new(slice)
    }
}
