//! Module for cursors over a byte slice.
//!
//! Every field goes through one of these cursors. They check the remaining
//! space exactly once per field, advance only after a field is fully handled,
//! and report a failure at the position where they stopped.

use crate::codec::{Composite, Error, Field, FixedSize};

/// Tracks the write position in a caller-owned buffer.
pub struct WriteCursor<'d> {
    pos: usize,
    data: &'d mut [u8],
}

impl<'d> WriteCursor<'d> {
    /// Creates a new write cursor at the beginning of the data.
    pub fn new(data: &'d mut [u8]) -> Self {
        Self { pos: 0, data }
    }

    /// Write a scalar in wire order.
    pub fn write<P: FixedSize>(&mut self, value: P) -> Result<(), Error> {
        if self.available() < P::SIZE {
            debug!(
                "[flatwire] buffer overflow at offset {}: need {}, have {}",
                self.pos,
                P::SIZE,
                self.available()
            );
            Err(self.error())
        } else {
            trace!("[flatwire] write offset {} size {}", self.pos, P::SIZE);
            value.to_wire().write_fixed(&mut self.data[self.pos..]);
            self.pos += P::SIZE;
            Ok(())
        }
    }

    /// Hand the rest of the buffer to a nested value and advance by what it reports.
    ///
    /// At least one byte must remain before delegating. A failure inside the
    /// nested value is reported at the position where it started.
    pub fn write_composite<C: Composite + ?Sized>(&mut self, value: &C) -> Result<(), Error> {
        if self.available() == 0 {
            debug!("[flatwire] buffer exhausted before nested field at offset {}", self.pos);
            return Err(self.error());
        }
        trace!("[flatwire] >>> enter nested (encode) at offset {}", self.pos);
        match value.encode(&mut self.data[self.pos..]) {
            Ok(written) => {
                self.commit(written)?;
                trace!("[flatwire] <<< exit nested (encode), {} bytes", written);
                Ok(())
            }
            Err(e) => {
                debug!(
                    "[flatwire] nested field at offset {} failed after {} bytes",
                    self.pos,
                    e.consumed()
                );
                Err(self.error())
            }
        }
    }

    /// Write any field, dispatching on its kind.
    pub fn write_field<F: Field + ?Sized>(&mut self, field: &F) -> Result<(), Error> {
        field.write_to(self)
    }

    /// Advance past `len` bytes a nested value reported as written.
    fn commit(&mut self, len: usize) -> Result<(), Error> {
        if self.available() < len {
            Err(self.error())
        } else {
            self.pos += len;
            Ok(())
        }
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn available(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    fn error(&self) -> Error {
        Error::InsufficientSpace { consumed: self.pos }
    }
}

#[derive(Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug)]
pub struct ReadCursor<'d> {
    pos: usize,
    data: &'d [u8],
}

impl<'d> ReadCursor<'d> {
    pub fn new(data: &'d [u8]) -> Self {
        Self { pos: 0, data }
    }

    /// Read a scalar from wire order.
    pub fn read<P: FixedSize>(&mut self) -> Result<P, Error> {
        if self.available() < P::SIZE {
            debug!(
                "[flatwire] buffer underrun at offset {}: need {}, have {}",
                self.pos,
                P::SIZE,
                self.available()
            );
            Err(self.error())
        } else {
            trace!("[flatwire] read offset {} size {}", self.pos, P::SIZE);
            let value = P::read_fixed(&self.data[self.pos..]).from_wire();
            self.pos += P::SIZE;
            Ok(value)
        }
    }

    /// Let a nested value decode itself from the rest of the buffer.
    ///
    /// Mirrors [`WriteCursor::write_composite`].
    pub fn read_composite<C: Composite + ?Sized>(&mut self, value: &mut C) -> Result<(), Error> {
        if self.available() == 0 {
            debug!("[flatwire] buffer exhausted before nested field at offset {}", self.pos);
            return Err(self.error());
        }
        trace!("[flatwire] >>> enter nested (decode) at offset {}", self.pos);
        match value.decode(&self.data[self.pos..]) {
            Ok(read) => {
                if self.available() < read {
                    return Err(self.error());
                }
                self.pos += read;
                trace!("[flatwire] <<< exit nested (decode), {} bytes", read);
                Ok(())
            }
            Err(e) => {
                debug!(
                    "[flatwire] nested field at offset {} failed after {} bytes",
                    self.pos,
                    e.consumed()
                );
                Err(self.error())
            }
        }
    }

    /// Read any field in place, dispatching on its kind.
    pub fn read_field<F: Field + ?Sized>(&mut self, field: &mut F) -> Result<(), Error> {
        field.read_from(self)
    }

    pub fn available(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn len(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    fn error(&self) -> Error {
        Error::InsufficientSpace { consumed: self.pos }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        a: u16,
        b: f32,
    }

    impl Composite for Pair {
        fn encode(&self, dest: &mut [u8]) -> Result<usize, Error> {
            let mut cursor = WriteCursor::new(dest);
            cursor.write(self.a)?;
            cursor.write(self.b)?;
            Ok(cursor.len())
        }

        fn decode(&mut self, src: &[u8]) -> Result<usize, Error> {
            let mut cursor = ReadCursor::new(src);
            self.a = cursor.read()?;
            self.b = cursor.read()?;
            Ok(cursor.len())
        }

        fn packed_size(&self) -> usize {
            6
        }
    }

    #[test]
    fn test_write_advances_by_width() {
        let mut buf = [0u8; 7];
        let mut cursor = WriteCursor::new(&mut buf);
        cursor.write(0xAAu8).unwrap();
        assert_eq!(cursor.len(), 1);
        cursor.write(0x0102u16).unwrap();
        assert_eq!(cursor.len(), 3);
        cursor.write(0x03040506u32).unwrap();
        assert_eq!(cursor.len(), 7);
        assert_eq!(cursor.available(), 0);
        assert_eq!(buf, [0xAA, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_write_overflow_freezes_cursor() {
        let mut buf = [0u8; 5];
        let mut cursor = WriteCursor::new(&mut buf);
        cursor.write(1u16).unwrap();
        assert_eq!(cursor.write(2u32), Err(Error::InsufficientSpace { consumed: 2 }));
        assert_eq!(cursor.len(), 2);
        // A smaller field still fits; the engine is what stops after a failure.
        cursor.write(3u8).unwrap();
        assert_eq!(cursor.len(), 3);
    }

    #[test]
    fn test_read_underrun() {
        let buf = [0x00, 0x2A, 0xFF];
        let mut cursor = ReadCursor::new(&buf);
        assert_eq!(cursor.read::<u16>(), Ok(42));
        assert_eq!(cursor.read::<u16>(), Err(Error::InsufficientSpace { consumed: 2 }));
        assert_eq!(cursor.len(), 2);
        assert_eq!(cursor.available(), 1);
    }

    #[test]
    fn test_composite_round_trip() {
        let pair = Pair { a: 101, b: 35.7 };
        let mut buf = [0u8; 8];
        let mut cursor = WriteCursor::new(&mut buf);
        cursor.write(0x7Fu8).unwrap();
        cursor.write_composite(&pair).unwrap();
        assert_eq!(cursor.len(), 7);

        let mut decoded = Pair { a: 0, b: 0.0 };
        let mut cursor = ReadCursor::new(&buf);
        assert_eq!(cursor.read::<u8>(), Ok(0x7F));
        cursor.read_composite(&mut decoded).unwrap();
        assert_eq!(cursor.len(), 7);
        assert_eq!(decoded.a, 101);
        assert_eq!(decoded.b.to_bits(), 35.7f32.to_bits());
    }

    #[test]
    fn test_composite_needs_one_byte() {
        let pair = Pair { a: 1, b: 1.0 };
        let mut buf = [0u8; 2];
        let mut cursor = WriteCursor::new(&mut buf);
        cursor.write(0u16).unwrap();
        assert_eq!(
            cursor.write_composite(&pair),
            Err(Error::InsufficientSpace { consumed: 2 })
        );
    }

    #[test]
    fn test_nested_failure_reported_at_parent_position() {
        let pair = Pair { a: 1, b: 1.0 };
        let mut buf = [0u8; 6];
        let mut cursor = WriteCursor::new(&mut buf);
        cursor.write(0u8).unwrap();
        // The pair gets five bytes, writes its u16, then runs out.
        assert_eq!(
            cursor.write_composite(&pair),
            Err(Error::InsufficientSpace { consumed: 1 })
        );
        assert_eq!(cursor.len(), 1);

        let mut decoded = Pair { a: 0, b: 0.0 };
        let mut cursor = ReadCursor::new(&[0x00, 0x00, 0x09, 0x01]);
        cursor.read::<u8>().unwrap();
        assert_eq!(
            cursor.read_composite(&mut decoded),
            Err(Error::InsufficientSpace { consumed: 1 })
        );
        // Fields before the failing one stay populated.
        assert_eq!(decoded.a, 9);
    }
}
