//! Opinionated fixed-layout codec
//!
//! Assumes big endian (network order) for all multi-byte types. Fields are
//! packed back to back with no padding, no length prefix and no tags.

use core::fmt::{Display, Formatter};

use crate::cursor::{ReadCursor, WriteCursor};

/// Conversion between the native representation of a scalar and wire order.
///
/// Both directions are the same self-inverse transform: applying it twice
/// gives back the original value, bit for bit.
pub trait WireOrder: Copy {
    /// Native to wire order.
    fn to_wire(self) -> Self;

    /// Wire to native order.
    fn from_wire(self) -> Self;
}

/// A fixed-width scalar that is copied to and from the wire as raw bytes.
///
/// `write_fixed` and `read_fixed` do no bounds checking of their own; the
/// cursor checks the remaining space once per field before calling them.
pub trait FixedSize: WireOrder {
    const SIZE: usize;

    /// Copy the in-memory bytes of `self` into the first `SIZE` bytes of `dest`.
    fn write_fixed(self, dest: &mut [u8]);

    /// Copy the first `SIZE` bytes of `src` into a value.
    fn read_fixed(src: &[u8]) -> Self;
}

/// A value that owns an ordered list of fields and knows how to put them on
/// the wire itself.
///
/// Any type implementing this can be nested inside another schema; it is then
/// encoded inline at exactly `packed_size()` bytes, with no boundary markers.
pub trait Composite {
    /// Encode into `dest`, returning the number of bytes written.
    fn encode(&self, dest: &mut [u8]) -> Result<usize, Error>;

    /// Decode from `src` in place, returning the number of bytes consumed.
    ///
    /// On failure, the fields before the failing one are already populated.
    fn decode(&mut self, src: &[u8]) -> Result<usize, Error>;

    /// Exact number of bytes a successful `encode` produces.
    fn packed_size(&self) -> usize;
}

/// How the traversal engine treats a field.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Fixed-width scalar, byte order normalized on the way through.
    Primitive,
    /// Nested value that encodes and decodes itself.
    Composite,
    /// Fixed run of fields inlined through the enclosing cursor, like a
    /// flattened list. There is no delegation, so a failure is reported after
    /// the last element that fit.
    Sequence,
}

/// One slot in a field list.
///
/// Scalars implement this directly; every [`Composite`] gets it through a
/// blanket impl. The trait is object safe so heterogeneous field lists can be
/// written as `&[&dyn Field]`.
pub trait Field {
    fn kind(&self) -> FieldKind;

    /// Intrinsic wire size in bytes.
    fn size(&self) -> usize;

    fn write_to(&self, cursor: &mut WriteCursor<'_>) -> Result<(), Error>;

    fn read_from(&mut self, cursor: &mut ReadCursor<'_>) -> Result<(), Error>;
}

impl<T: Composite> Field for T {
    fn kind(&self) -> FieldKind {
        FieldKind::Composite
    }

    fn size(&self) -> usize {
        self.packed_size()
    }

    fn write_to(&self, cursor: &mut WriteCursor<'_>) -> Result<(), Error> {
        cursor.write_composite(self)
    }

    fn read_from(&mut self, cursor: &mut ReadCursor<'_>) -> Result<(), Error> {
        cursor.read_composite(self)
    }
}

/// Returns true if the field encodes and decodes itself.
///
/// Only [`Composite`] implementors qualify. Scalars and arrays do not.
pub fn is_composite<F: Field + ?Sized>(field: &F) -> bool {
    field.kind() == FieldKind::Composite
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The buffer ended before every field was processed.
    ///
    /// `consumed` counts the bytes of the fields fully handled before the
    /// failing one. Overflow on encode, underrun on decode and a failing
    /// nested field all end up here.
    InsufficientSpace { consumed: usize },
}

impl Error {
    /// Bytes written or read before the failure.
    pub fn consumed(&self) -> usize {
        match self {
            Error::InsufficientSpace { consumed } => *consumed,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InsufficientSpace { consumed } => {
                write!(f, "insufficient space after {} bytes", consumed)
            }
        }
    }
}

impl core::error::Error for Error {}
