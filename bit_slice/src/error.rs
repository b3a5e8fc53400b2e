#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug)]
pub enum BitSliceError {
    #[cfg_attr(
        feature = "std",
        error("byte source exhausted: expected {expected} bytes, read {read}")
    )]
    SourceExhausted { expected: usize, read: usize },

    #[cfg(feature = "std")]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg_attr(
        feature = "std",
        error("field width {width} exceeds the maximum of {max} bits")
    )]
    FieldTooWide { width: usize, max: usize },

    #[cfg_attr(
        feature = "std",
        error("field of {width} bits at position {position} overruns length {len}")
    )]
    OutOfBounds {
        position: usize,
        width: usize,
        len: usize,
    },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitSliceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitSliceError::SourceExhausted { expected, read } => write!(
                f,
                "byte source exhausted: expected {} bytes, read {}",
                expected, read
            ),
            BitSliceError::FieldTooWide { width, max } => write!(
                f,
                "field width {} exceeds the maximum of {} bits",
                width, max
            ),
            BitSliceError::OutOfBounds {
                position,
                width,
                len,
            } => write!(
                f,
                "field of {} bits at position {} overruns length {}",
                width, position, len
            ),
        }
    }
}

pub type Result<T> = core::result::Result<T, BitSliceError>;

/// Widest field that fits the `u64` carried by readers and writers.
pub(crate) const MAX_FIELD_WIDTH: usize = 64;

#[inline]
pub(crate) fn check_width(width: usize) -> Result<()> {
    if width > MAX_FIELD_WIDTH {
        log::debug!("rejecting {}-bit field", width);
        return Err(BitSliceError::FieldTooWide {
            width,
            max: MAX_FIELD_WIDTH,
        });
    }
    Ok(())
}
