//! Fixed-layout binary codec.
//!
//! A schema is an ordered list of fields. Each field is either a fixed-width
//! scalar (`u8`..`u64`, `i8`..`i64`, `f32`, `f64`, `bool`, or a
//! [`wire_enum!`] type) or a [`Composite`] that encodes and decodes itself.
//! The wire format is the concatenation of every field in declaration order:
//! big endian, no padding, no length prefixes, no tags.
//!
//! ```
//! use flatwire::prelude::*;
//!
//! #[derive(Composite, Default)]
//! struct SubSystem {
//!     sub_id: u16,
//!     temperature: f32,
//! }
//!
//! #[derive(Composite, Default)]
//! struct Record {
//!     id: u32,
//!     sub: SubSystem,
//! }
//!
//! let record = Record { id: 0xDEADBEEF, sub: SubSystem { sub_id: 101, temperature: 35.7 } };
//! let mut buf = [0u8; 64];
//! let written = record.encode(&mut buf).unwrap();
//! assert_eq!(written, record.packed_size());
//! assert_eq!(&buf[..6], &[0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x65]);
//!
//! let (decoded, consumed) = flatwire::decode_value::<Record>(&buf[..written]).unwrap();
//! assert_eq!(consumed, 10);
//! assert_eq!(decoded.sub.sub_id, 101);
//! ```
#![cfg_attr(not(test), no_std)]

extern crate self as flatwire;

mod fmt;

mod codec;
mod cursor;
mod endian;
mod enums;
mod fields;
mod primitives;

pub use codec::{is_composite, Composite, Error, Field, FieldKind, FixedSize, WireOrder};
pub use cursor::{ReadCursor, WriteCursor};
pub use fields::{decode_fields, decode_value, encode_fields, encode_to_vec, packed_size};
pub use flatwire_macros::Composite;
pub use fmt::Bytes;

/// Everything a schema author needs.
pub mod prelude {
    pub use super::{
        decode_fields, encode_fields, packed_size, wire_enum, Composite, Error, Field, ReadCursor, WriteCursor,
    };
}
