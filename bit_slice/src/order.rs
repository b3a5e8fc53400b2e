use core::fmt;

/// Bit numbering used when bits are mapped onto byte boundaries.
///
/// `LittleEndian` puts bit 0 of each byte group in the least-significant
/// position, `BigEndian` puts it in the most-significant position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    LittleEndian,
    #[default]
    BigEndian,
}

impl ByteOrder {
    #[inline]
    pub fn is_big_endian(self) -> bool {
        self == ByteOrder::BigEndian
    }

    #[inline]
    pub fn is_little_endian(self) -> bool {
        self == ByteOrder::LittleEndian
    }

    /// Mask selecting bit `offset` (0..8) of a byte group.
    #[inline]
    pub(crate) fn mask(self, offset: usize) -> u8 {
        debug_assert!(offset < 8);
        match self {
            ByteOrder::LittleEndian => 1 << offset,
            ByteOrder::BigEndian => 0x80 >> offset,
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::LittleEndian => f.write_str("little-endian"),
            ByteOrder::BigEndian => f.write_str("big-endian"),
        }
    }
}
