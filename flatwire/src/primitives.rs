use core::mem;

use crate::codec::{Error, Field, FieldKind, FixedSize};
use crate::cursor::{ReadCursor, WriteCursor};

//
// Implementations for primitives
//
macro_rules! primitive {
    ($($ty:ty),*) => {
        $(
            impl FixedSize for $ty {
                const SIZE: usize = mem::size_of::<Self>();

                #[inline(always)]
                fn write_fixed(self, dest: &mut [u8]) {
                    dest[..Self::SIZE].copy_from_slice(&self.to_ne_bytes());
                }

                #[inline(always)]
                fn read_fixed(src: &[u8]) -> Self {
                    let mut raw = [0u8; mem::size_of::<$ty>()];
                    raw.copy_from_slice(&src[..Self::SIZE]);
                    <$ty>::from_ne_bytes(raw)
                }
            }

            impl Field for $ty {
                fn kind(&self) -> FieldKind {
                    FieldKind::Primitive
                }

                fn size(&self) -> usize {
                    <Self as FixedSize>::SIZE
                }

                fn write_to(&self, cursor: &mut WriteCursor<'_>) -> Result<(), Error> {
                    cursor.write(*self)
                }

                fn read_from(&mut self, cursor: &mut ReadCursor<'_>) -> Result<(), Error> {
                    *self = cursor.read()?;
                    Ok(())
                }
            }
        )*
    };
}

primitive!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl FixedSize for bool {
    const SIZE: usize = 1;

    fn write_fixed(self, dest: &mut [u8]) {
        dest[0] = self as u8;
    }

    fn read_fixed(src: &[u8]) -> Self {
        src[0] != 0x00
    }
}

impl Field for bool {
    fn kind(&self) -> FieldKind {
        FieldKind::Primitive
    }

    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_to(&self, cursor: &mut WriteCursor<'_>) -> Result<(), Error> {
        cursor.write(*self)
    }

    fn read_from(&mut self, cursor: &mut ReadCursor<'_>) -> Result<(), Error> {
        *self = cursor.read()?;
        Ok(())
    }
}

/// Arrays are laid out as `N` consecutive fields, without a length prefix.
///
/// Elements go through the enclosing cursor one by one, so a failure is
/// reported after the last element that fit. An empty array writes nothing
/// and never fails, even at the end of the buffer.
impl<T: Field, const N: usize> Field for [T; N] {
    fn kind(&self) -> FieldKind {
        FieldKind::Sequence
    }

    fn size(&self) -> usize {
        self.iter().map(Field::size).sum()
    }

    fn write_to(&self, cursor: &mut WriteCursor<'_>) -> Result<(), Error> {
        for item in self.iter() {
            cursor.write_field(item)?;
        }
        Ok(())
    }

    fn read_from(&mut self, cursor: &mut ReadCursor<'_>) -> Result<(), Error> {
        for item in self.iter_mut() {
            cursor.read_field(item)?;
        }
        Ok(())
    }
}
