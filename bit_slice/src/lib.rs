//! # bit_slice
//!
//! A bit-addressable sequence container with configurable byte order, plus
//! sequential field readers and writers for sub-byte-aligned formats.
//!
//! ```rust
//! use bit_slice::{BitSlice, ByteOrder};
//!
//! let bits = BitSlice::from_bytes(&[0x80], ByteOrder::BigEndian);
//! assert_eq!(bits.len(), 8);
//! assert_eq!(bits.get(0), Some(true));
//! assert_eq!(bits.to_bytes(), vec![0x80]);
//! ```
//!
//! ## Packing fields
//!
//! ```rust
//! use bit_slice::{BitReader, BitWriter, ByteOrder};
//!
//! let mut writer = BitWriter::new(ByteOrder::BigEndian);
//! writer.write_u64(0b101, 3).unwrap();
//! writer.write_u64(0x1F, 5).unwrap();
//! let packed = writer.finish();
//! assert_eq!(packed.to_bytes(), vec![0b1011_1111]);
//!
//! let mut reader = BitReader::new(packed);
//! assert_eq!(reader.read_u64(3).unwrap(), 0b101);
//! assert_eq!(reader.read_u64(5).unwrap(), 0x1F);
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub use error::{BitSliceError, Result};

mod order;
pub use order::ByteOrder;

pub mod slice;
pub use slice::BitSlice;

pub mod reader;
pub use reader::BitReader;

pub mod writer;
pub use writer::{BitWriter, LittleEndianWrites};
