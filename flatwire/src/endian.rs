//! Byte order normalization.
//!
//! The wire is always big endian. On a little endian host every multi-byte
//! scalar is byte-reversed; on a big endian host the transform is the
//! identity. Either way the bytes that end up on the wire are the same.

use crate::codec::WireOrder;

macro_rules! integer {
    ($($ty:ty),*) => {
        $(
            impl WireOrder for $ty {
                #[inline(always)]
                fn to_wire(self) -> Self {
                    self.to_be()
                }

                #[inline(always)]
                fn from_wire(self) -> Self {
                    <$ty>::from_be(self)
                }
            }
        )*
    };
}

integer!(u8, u16, u32, u64, i8, i16, i32, i64);

// Floats go through their bit pattern so NaN payloads and signed zeros are
// carried untouched.
macro_rules! float {
    ($($ty:ty),*) => {
        $(
            impl WireOrder for $ty {
                #[inline(always)]
                fn to_wire(self) -> Self {
                    <$ty>::from_bits(self.to_bits().to_be())
                }

                #[inline(always)]
                fn from_wire(self) -> Self {
                    <$ty>::from_bits(self.to_bits().to_be())
                }
            }
        )*
    };
}

float!(f32, f64);

impl WireOrder for bool {
    #[inline(always)]
    fn to_wire(self) -> Self {
        self
    }

    #[inline(always)]
    fn from_wire(self) -> Self {
        self
    }
}
