//! The bit container itself.
//!
//! A [`BitSlice`] is an ordered run of bits together with the [`ByteOrder`]
//! used whenever it is converted to or from bytes. Every combining operator
//! returns a fresh value; the receiver is never touched.
//!
//! # Examples
//!
//! ```rust
//! use bit_slice::{BitSlice, ByteOrder};
//!
//! let first = BitSlice::from_bools(
//!     vec![true, false, true, false],
//!     ByteOrder::LittleEndian,
//! );
//! let mask = BitSlice::from_bools(
//!     vec![true, true, true, true, false, false, false, false],
//!     ByteOrder::BigEndian,
//! );
//!
//! // `or` keeps the shorter length, `and` keeps the longer one.
//! assert_eq!(first.or(&mask).len(), 4);
//! assert_eq!(first.and(&mask).len(), 8);
//! assert_eq!(first.and(&mask).byte_order(), ByteOrder::LittleEndian);
//! ```

use core::fmt;
use core::ops::{BitAnd, BitOr, Index, Not, Shl, Shr};

use alloc::vec;
use alloc::vec::Vec;

use crate::ByteOrder;

#[cfg(feature = "std")]
use crate::{BitSliceError, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitSlice {
    bits: Vec<bool>,
    order: ByteOrder,
}

fn decode(bytes: &[u8], order: ByteOrder) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        bits.extend((0..8).map(|offset| byte & order.mask(offset) != 0));
    }
    bits
}

impl BitSlice {
    /// Creates an empty container.
    pub fn new(order: ByteOrder) -> Self {
        Self {
            bits: Vec::new(),
            order,
        }
    }

    /// Stores `bits` as given. Any length is accepted.
    pub fn from_bools(bits: Vec<bool>, order: ByteOrder) -> Self {
        Self { bits, order }
    }

    /// Decodes every byte of `bytes`; the result holds `8 * bytes.len()` bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_slice::{BitSlice, ByteOrder};
    ///
    /// let le = BitSlice::from_bytes(&[0x01], ByteOrder::LittleEndian);
    /// let be = BitSlice::from_bytes(&[0x01], ByteOrder::BigEndian);
    /// assert_eq!(le.get(0), Some(true));
    /// assert_eq!(be.get(7), Some(true));
    /// ```
    pub fn from_bytes(bytes: &[u8], order: ByteOrder) -> Self {
        Self {
            bits: decode(bytes, order),
            order,
        }
    }

    /// Reads exactly `byte_count` bytes from `reader` and decodes them.
    ///
    /// Memory grows with the bytes actually received, not with the declared
    /// count.
    ///
    /// Fails with [`BitSliceError::SourceExhausted`] when the source ends
    /// early. Other read failures come back as [`BitSliceError::Io`].
    #[cfg(feature = "std")]
    pub fn from_reader<R: std::io::Read>(
        mut reader: R,
        order: ByteOrder,
        byte_count: usize,
    ) -> Result<Self> {
        use std::io::Read;

        let mut buf = Vec::new();
        reader.by_ref().take(byte_count as u64).read_to_end(&mut buf)?;
        if buf.len() < byte_count {
            return Err(BitSliceError::SourceExhausted {
                expected: byte_count,
                read: buf.len(),
            });
        }
        log::trace!("decoded {} bytes as {}", byte_count, order);
        Ok(Self::from_bytes(&buf, order))
    }

    /// Drains `reader` and decodes everything it produced.
    ///
    /// This variant only knows least-significant-bit-first decoding, so the
    /// result is always [`ByteOrder::LittleEndian`].
    #[cfg(feature = "std")]
    pub fn from_reader_to_end<R: std::io::Read>(mut reader: R) -> Result<Self> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        log::trace!("decoded {} bytes to end of source", buf.len());
        Ok(Self::from_bytes(&buf, ByteOrder::LittleEndian))
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of bytes [`to_bytes`](Self::to_bytes) produces.
    pub fn len_bytes(&self) -> usize {
        self.bits.len().div_ceil(8)
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Same bits under a different byte order.
    pub fn with_byte_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    pub fn as_bools(&self) -> &[bool] {
        &self.bits
    }

    pub fn into_bools(self) -> Vec<bool> {
        self.bits
    }

    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Packs the bits into bytes. A partial trailing group is padded with
    /// unset bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_slice::{BitSlice, ByteOrder};
    ///
    /// let mut bits = vec![false; 8];
    /// bits[0] = true;
    /// let le = BitSlice::from_bools(bits.clone(), ByteOrder::LittleEndian);
    /// let be = BitSlice::from_bools(bits, ByteOrder::BigEndian);
    /// assert_eq!(le.to_bytes(), vec![0x01]);
    /// assert_eq!(be.to_bytes(), vec![0x80]);
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut packed = vec![0u8; self.len_bytes()];
        for (i, &bit) in self.bits.iter().enumerate() {
            if bit {
                packed[i / 8] |= self.order.mask(i % 8);
            }
        }
        packed
    }

    /// Writes the packed bytes to `writer` in a single `write_all`.
    #[cfg(feature = "std")]
    pub fn to_buffer<W: std::io::Write>(&self, mut writer: W) -> Result<()> {
        let packed = self.to_bytes();
        writer.write_all(&packed)?;
        log::trace!("encoded {} bytes as {}", packed.len(), self.order);
        Ok(())
    }

    /// Moves every bit `n` places towards index 0; the tail fills with
    /// `false`. A negative `n` shifts right instead.
    ///
    /// "Left" means towards index 0, so `shift_left(k).shift_right(k)`
    /// clears the first `k` bits and `shift_right(k).shift_left(k)` clears
    /// the last `k`.
    pub fn shift_left(&self, n: isize) -> Self {
        if n < 0 {
            self.shr_by(n.unsigned_abs())
        } else {
            self.shl_by(n as usize)
        }
    }

    /// Moves every bit `n` places away from index 0; the head fills with
    /// `false`. A negative `n` shifts left instead.
    pub fn shift_right(&self, n: isize) -> Self {
        if n < 0 {
            self.shl_by(n.unsigned_abs())
        } else {
            self.shr_by(n as usize)
        }
    }

    fn shl_by(&self, n: usize) -> Self {
        let len = self.len();
        let mut bits = vec![false; len];
        if n < len {
            bits[..len - n].copy_from_slice(&self.bits[n..]);
        }
        Self::from_bools(bits, self.order)
    }

    fn shr_by(&self, n: usize) -> Self {
        let len = self.len();
        let mut bits = vec![false; len];
        if n < len {
            bits[n..].copy_from_slice(&self.bits[..len - n]);
        }
        Self::from_bools(bits, self.order)
    }

    /// Every bit negated.
    pub fn inverse(&self) -> Self {
        Self::from_bools(self.bits.iter().map(|b| !b).collect(), self.order)
    }

    /// Bitwise OR over the overlapping prefix. The result is as long as the
    /// shorter operand and carries the receiver's byte order.
    pub fn or(&self, other: &BitSlice) -> Self {
        let bits = self
            .bits
            .iter()
            .zip(other.bits.iter())
            .map(|(&a, &b)| a || b)
            .collect();
        Self::from_bools(bits, self.order)
    }

    /// Bitwise AND over the overlapping prefix. The result is as long as the
    /// longer operand; positions past the shorter one stay `false`.
    pub fn and(&self, other: &BitSlice) -> Self {
        let mut bits = vec![false; self.len().max(other.len())];
        for (out, (&a, &b)) in bits.iter_mut().zip(self.bits.iter().zip(other.bits.iter())) {
            *out = a && b;
        }
        Self::from_bools(bits, self.order)
    }

    pub(crate) fn append(&mut self, bits: &[bool]) {
        self.bits.extend_from_slice(bits);
    }

    /// Copies the whole sequence, so a run of `n` prepends is quadratic.
    pub(crate) fn prepend(&mut self, bits: &[bool]) {
        let mut joined = bits.to_vec();
        joined.append(&mut self.bits);
        self.bits = joined;
    }
}

impl From<Vec<bool>> for BitSlice {
    fn from(bits: Vec<bool>) -> Self {
        Self::from_bools(bits, ByteOrder::BigEndian)
    }
}

impl FromIterator<bool> for BitSlice {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::from_bools(iter.into_iter().collect(), ByteOrder::BigEndian)
    }
}

impl Index<usize> for BitSlice {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.bits[index]
    }
}

impl fmt::Display for BitSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl Not for &BitSlice {
    type Output = BitSlice;

    fn not(self) -> BitSlice {
        self.inverse()
    }
}

impl Not for BitSlice {
    type Output = BitSlice;

    fn not(self) -> BitSlice {
        self.inverse()
    }
}

impl Shl<usize> for &BitSlice {
    type Output = BitSlice;

    fn shl(self, n: usize) -> BitSlice {
        self.shl_by(n)
    }
}

impl Shr<usize> for &BitSlice {
    type Output = BitSlice;

    fn shr(self, n: usize) -> BitSlice {
        self.shr_by(n)
    }
}

impl BitOr for &BitSlice {
    type Output = BitSlice;

    fn bitor(self, rhs: &BitSlice) -> BitSlice {
        self.or(rhs)
    }
}

impl BitAnd for &BitSlice {
    type Output = BitSlice;

    fn bitand(self, rhs: &BitSlice) -> BitSlice {
        self.and(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn decode_little_endian() {
        let bs = BitSlice::from_bytes(&[0b0000_0101, 0x80], ByteOrder::LittleEndian);
        assert_eq!(bs.len(), 16);
        assert_eq!(bs.as_bools()[..8], bits("10100000")[..]);
        assert_eq!(bs.get(15), Some(true));
    }

    #[test]
    fn decode_big_endian() {
        let bs = BitSlice::from_bytes(&[0b0000_0101, 0x80], ByteOrder::BigEndian);
        assert_eq!(bs.as_bools()[..8], bits("00000101")[..]);
        assert_eq!(bs.get(8), Some(true));
        assert_eq!(bs.get(15), Some(false));
    }

    #[test]
    fn partial_byte_is_padded() {
        let le = BitSlice::from_bools(bits("111"), ByteOrder::LittleEndian);
        let be = BitSlice::from_bools(bits("111"), ByteOrder::BigEndian);
        assert_eq!(le.len_bytes(), 1);
        assert_eq!(le.to_bytes(), vec![0b0000_0111]);
        assert_eq!(be.to_bytes(), vec![0b1110_0000]);
    }

    #[test]
    fn empty_container() {
        let bs = BitSlice::new(ByteOrder::LittleEndian);
        assert!(bs.is_empty());
        assert_eq!(bs.len_bytes(), 0);
        assert!(bs.to_bytes().is_empty());
        assert_eq!(bs.shift_left(3).len(), 0);
    }

    #[test]
    fn shifts() {
        let bs = BitSlice::from_bools(bits("11010011"), ByteOrder::BigEndian);
        assert_eq!(bs.shift_left(2).to_string(), "01001100");
        assert_eq!(bs.shift_right(2).to_string(), "00110100");
        assert_eq!(bs.shift_left(-2), bs.shift_right(2));
        assert_eq!(bs.shift_right(-2), bs.shift_left(2));
        assert_eq!(bs.shift_left(0), bs);
        assert_eq!(&bs << 2, bs.shift_left(2));
        assert_eq!(&bs >> 2, bs.shift_right(2));
    }

    #[test]
    fn shift_composition_clears_head_or_tail() {
        let bs = BitSlice::from_bools(bits("1111"), ByteOrder::BigEndian);
        assert_eq!(bs.shift_left(1).shift_right(1).to_string(), "0111");
        assert_eq!(bs.shift_right(1).shift_left(1).to_string(), "1110");
    }

    #[test]
    fn oversized_shift_clears() {
        let bs = BitSlice::from_bools(bits("1111"), ByteOrder::LittleEndian);
        assert_eq!(bs.shift_left(4).to_string(), "0000");
        assert_eq!(bs.shift_right(100).to_string(), "0000");
        assert_eq!(bs.shift_left(isize::MIN).count_ones(), 0);
    }

    #[test]
    fn inverse_keeps_order() {
        let bs = BitSlice::from_bools(bits("1010"), ByteOrder::LittleEndian);
        let inv = bs.inverse();
        assert_eq!(inv.to_string(), "0101");
        assert_eq!(inv.byte_order(), ByteOrder::LittleEndian);
        assert_eq!(!&inv, bs);
    }

    #[test]
    fn or_and_lengths() {
        let a = BitSlice::from_bools(bits("1010"), ByteOrder::LittleEndian);
        let b = BitSlice::from_bools(bits("11110000"), ByteOrder::BigEndian);

        let or = a.or(&b);
        assert_eq!(or.to_string(), "1111");
        assert_eq!(or.byte_order(), ByteOrder::LittleEndian);

        let and = a.and(&b);
        assert_eq!(and.to_string(), "10100000");
        assert_eq!(and.byte_order(), ByteOrder::LittleEndian);

        let reversed = b.and(&a);
        assert_eq!(reversed.to_string(), "10100000");
        assert_eq!(reversed.byte_order(), ByteOrder::BigEndian);
        assert_eq!(b.or(&a).len(), 4);
    }

    #[test]
    fn operands_are_untouched() {
        let a = BitSlice::from_bools(bits("1000"), ByteOrder::BigEndian);
        let b = BitSlice::from_bools(bits("0110"), ByteOrder::BigEndian);
        let _ = &a | &b;
        let _ = &a & &b;
        let _ = a.inverse();
        assert_eq!(a.to_string(), "1000");
        assert_eq!(b.to_string(), "0110");
    }

    #[test]
    fn collect_and_index() {
        let bs: BitSlice = [true, false, true].into_iter().collect();
        assert_eq!(bs.byte_order(), ByteOrder::BigEndian);
        assert!(bs[0]);
        assert!(!bs[1]);
        assert_eq!(bs.count_ones(), 2);
        assert_eq!(bs.get(3), None);
        let relabeled = bs.with_byte_order(ByteOrder::LittleEndian);
        assert_eq!(relabeled.to_bytes(), vec![0b0000_0101]);
    }

    #[cfg(feature = "std")]
    #[test]
    fn reader_roundtrip() -> Result<()> {
        let bytes = [0xDE, 0xAD, 0xBE, 0xEF];
        let bs = BitSlice::from_reader(&bytes[..], ByteOrder::BigEndian, 4)?;
        let mut out = Vec::new();
        bs.to_buffer(&mut out)?;
        assert_eq!(out, bytes);
        Ok(())
    }

    #[cfg(feature = "std")]
    #[test]
    fn reader_reads_only_declared_count() -> Result<()> {
        let mut cursor = std::io::Cursor::new(vec![1u8, 2, 3]);
        let bs = BitSlice::from_reader(&mut cursor, ByteOrder::LittleEndian, 2)?;
        assert_eq!(bs.len(), 16);
        assert_eq!(cursor.position(), 2);
        Ok(())
    }

    #[cfg(feature = "std")]
    #[test]
    fn short_source() {
        let result = BitSlice::from_reader(&[0xFFu8][..], ByteOrder::BigEndian, 3);
        assert!(matches!(
            result,
            Err(BitSliceError::SourceExhausted {
                expected: 3,
                read: 1
            })
        ));
    }

    #[cfg(feature = "std")]
    #[test]
    fn huge_declared_count_is_exhaustion() {
        let declared = usize::MAX / 4;
        let result = BitSlice::from_reader(&[0xAAu8][..], ByteOrder::BigEndian, declared);
        assert!(matches!(
            result,
            Err(BitSliceError::SourceExhausted { expected, read: 1 }) if expected == declared
        ));
    }

    #[cfg(feature = "std")]
    #[test]
    fn interrupted_read_is_retried() -> Result<()> {
        use std::io::Read;

        struct Flaky {
            interrupted: bool,
            data: &'static [u8],
        }

        impl Read for Flaky {
            fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
                if !self.interrupted {
                    self.interrupted = true;
                    return Err(std::io::ErrorKind::Interrupted.into());
                }
                self.data.read(buf)
            }
        }

        let source = Flaky {
            interrupted: false,
            data: &[0x12, 0x34],
        };
        let bs = BitSlice::from_reader(source, ByteOrder::BigEndian, 2)?;
        assert_eq!(bs.to_bytes(), vec![0x12, 0x34]);
        Ok(())
    }

    #[cfg(feature = "std")]
    #[test]
    fn read_to_end_is_little_endian() -> Result<()> {
        let bs = BitSlice::from_reader_to_end(&[0x01u8, 0x02, 0x03][..])?;
        assert_eq!(bs.len(), 24);
        assert_eq!(bs.byte_order(), ByteOrder::LittleEndian);
        assert_eq!(bs.get(0), Some(true));
        assert_eq!(bs.to_bytes(), vec![0x01, 0x02, 0x03]);
        Ok(())
    }
}
