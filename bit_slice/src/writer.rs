//! Accumulates unsigned fields into a [`BitSlice`].
//!
//! The packed container always uses [`ByteOrder::BigEndian`]. The writer's
//! own byte order only decides where a finished field lands: big-endian
//! writers append it, little-endian writers follow their
//! [`LittleEndianWrites`] policy.
//!
//! ```rust
//! use bit_slice::{BitWriter, ByteOrder};
//!
//! let mut writer = BitWriter::new(ByteOrder::LittleEndian);
//! writer.write_u64(0b11, 2).unwrap();
//! writer.write_u64(0b01, 2).unwrap();
//! assert_eq!(writer.as_slice().to_string(), "0111");
//! ```

use crate::error::check_width;
use crate::{BitSlice, ByteOrder, Result};

use alloc::vec::Vec;

/// What a little-endian writer does with a finished field.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LittleEndianWrites {
    /// Insert the field in front of everything written so far. Each write
    /// copies the accumulated bits, so `n` writes cost O(n²).
    #[default]
    Prepend,
    /// Drop the field; the container is left unchanged.
    Discard,
}

#[derive(Clone, Debug)]
pub struct BitWriter {
    slice: BitSlice,
    order: ByteOrder,
    policy: LittleEndianWrites,
}

impl BitWriter {
    pub fn new(order: ByteOrder) -> Self {
        Self::with_policy(order, LittleEndianWrites::default())
    }

    pub fn with_policy(order: ByteOrder, policy: LittleEndianWrites) -> Self {
        Self {
            slice: BitSlice::new(ByteOrder::BigEndian),
            order,
            policy,
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    pub fn policy(&self) -> LittleEndianWrites {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.slice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    pub fn as_slice(&self) -> &BitSlice {
        &self.slice
    }

    pub fn finish(self) -> BitSlice {
        self.slice
    }

    /// Writes the low `width` bits of `value`, most-significant bit first.
    ///
    /// Bits of `value` above `width` are ignored.
    ///
    /// # Errors
    ///
    /// [`BitSliceError::FieldTooWide`](crate::BitSliceError::FieldTooWide)
    /// for `width > 64`; nothing is written in that case.
    pub fn write_u64(&mut self, value: u64, width: usize) -> Result<()> {
        check_width(width)?;
        let field: Vec<bool> = (0..width).rev().map(|i| (value >> i) & 1 == 1).collect();
        self.commit(&field);
        Ok(())
    }

    pub fn write_bool(&mut self, bit: bool) {
        self.commit(&[bit]);
    }

    /// Writes the raw bits of `bits`, ignoring its byte order.
    pub fn write_slice(&mut self, bits: &BitSlice) {
        self.commit(bits.as_bools());
    }

    fn commit(&mut self, field: &[bool]) {
        match (self.order, self.policy) {
            (ByteOrder::BigEndian, _) => self.slice.append(field),
            (ByteOrder::LittleEndian, LittleEndianWrites::Prepend) => self.slice.prepend(field),
            (ByteOrder::LittleEndian, LittleEndianWrites::Discard) => {
                log::warn!("discarding {}-bit little-endian field", field.len());
            }
        }
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new(ByteOrder::BigEndian)
    }
}
