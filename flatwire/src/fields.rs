//! Field list traversal.
//!
//! A field list is an ordered slice of fields, mixed primitive and composite.
//! Its order is the wire order. Encode and decode walk it front to back with
//! one shared cursor and stop at the first field that does not fit; the
//! error carries the number of bytes handled up to that point.

use heapless::Vec;

use crate::codec::{Composite, Error, Field};
use crate::cursor::{ReadCursor, WriteCursor};

/// Encode `fields` back to back into `dest`, returning the bytes written.
pub fn encode_fields(dest: &mut [u8], fields: &[&dyn Field]) -> Result<usize, Error> {
    let mut cursor = WriteCursor::new(dest);
    for (index, field) in fields.iter().enumerate() {
        trace!(
            "[flatwire] [encode] field {} offset {} kind {:?}",
            index,
            cursor.len(),
            field.kind()
        );
        cursor.write_field(*field)?;
    }
    Ok(cursor.len())
}

/// Decode `fields` in place from `src`, returning the bytes consumed.
///
/// Fields before a failing one keep their decoded values.
pub fn decode_fields(src: &[u8], fields: &mut [&mut dyn Field]) -> Result<usize, Error> {
    let mut cursor = ReadCursor::new(src);
    for (index, field) in fields.iter_mut().enumerate() {
        trace!(
            "[flatwire] [decode] field {} offset {} kind {:?}",
            index,
            cursor.len(),
            field.kind()
        );
        cursor.read_field(&mut **field)?;
    }
    Ok(cursor.len())
}

/// Exact wire size of `fields`: the sum of each field's intrinsic size.
pub fn packed_size(fields: &[&dyn Field]) -> usize {
    fields.iter().map(|field| field.size()).sum()
}

/// Encode a composite into a frame of at most `N` bytes.
pub fn encode_to_vec<const N: usize, C: Composite + ?Sized>(value: &C) -> Result<Vec<u8, N>, Error> {
    let mut frame: Vec<u8, N> = Vec::new();
    frame
        .resize_default(N)
        .map_err(|_| Error::InsufficientSpace { consumed: 0 })?;
    let written = value.encode(&mut frame)?;
    frame.truncate(written);
    debug!("[flatwire] encoded frame {:?}", crate::fmt::Bytes(&frame));
    Ok(frame)
}

/// Decode a fresh value from `src`, returning it with the bytes consumed.
pub fn decode_value<C: Composite + Default>(src: &[u8]) -> Result<(C, usize), Error> {
    let mut value = C::default();
    let consumed = value.decode(src)?;
    Ok((value, consumed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::FieldKind;

    struct Sub {
        sub_id: u16,
        temperature: f32,
    }

    impl Composite for Sub {
        fn encode(&self, dest: &mut [u8]) -> Result<usize, Error> {
            encode_fields(dest, &[&self.sub_id, &self.temperature])
        }

        fn decode(&mut self, src: &[u8]) -> Result<usize, Error> {
            decode_fields(src, &mut [&mut self.sub_id, &mut self.temperature])
        }

        fn packed_size(&self) -> usize {
            packed_size(&[&self.sub_id, &self.temperature])
        }
    }

    #[test]
    fn test_packed_size_ignores_alignment() {
        let sub = Sub { sub_id: 1, temperature: 2.0 };
        assert_eq!(sub.packed_size(), 6);
        assert_eq!(packed_size(&[&0u8, &sub, &0u64, &true]), 16);
        assert_eq!(packed_size(&[]), 0);
    }

    #[test]
    fn test_mixed_list_round_trip() {
        let id = 0xDEADBEEFu32;
        let sub = Sub { sub_id: 101, temperature: 35.7 };
        let flag = true;

        let mut buf = [0u8; 64];
        let written = encode_fields(&mut buf, &[&id, &sub, &flag]).unwrap();
        assert_eq!(written, 11);
        assert_eq!(&buf[..7], &[0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x65, 0x42]);
        assert_eq!(buf[10], 0x01);

        let mut id2 = 0u32;
        let mut sub2 = Sub { sub_id: 0, temperature: 0.0 };
        let mut flag2 = false;
        let consumed = decode_fields(&buf[..written], &mut [&mut id2, &mut sub2, &mut flag2]).unwrap();
        assert_eq!(consumed, 11);
        assert_eq!(id2, id);
        assert_eq!(sub2.sub_id, 101);
        assert!((sub2.temperature - 35.7).abs() < 0.001);
        assert!(flag2);
    }

    #[test]
    fn test_encode_stops_at_first_failure() {
        let mut buf = [0u8; 5];
        let err = encode_fields(&mut buf, &[&1u16, &2u32, &3u8]).unwrap_err();
        // The trailing u8 would fit, but the engine never gets there.
        assert_eq!(err, Error::InsufficientSpace { consumed: 2 });
        assert_eq!(buf, [0, 1, 0, 0, 0]);
    }

    #[test]
    fn test_decode_underrun_keeps_earlier_fields() {
        let buf = [0x12, 0x34, 0x56];
        let mut a = 0u16;
        let mut b = 0u16;
        let err = decode_fields(&buf, &mut [&mut a, &mut b]).unwrap_err();
        assert_eq!(err.consumed(), 2);
        assert_eq!(a, 0x1234);
        assert_eq!(b, 0);
    }

    #[test]
    fn test_nested_failure_freezes_at_composite_start() {
        let sub = Sub { sub_id: 7, temperature: 1.5 };
        let mut buf = [0u8; 6];
        // u8 + u16 of the sub fit, the f32 does not.
        let err = encode_fields(&mut buf, &[&9u8, &sub]).unwrap_err();
        assert_eq!(err.consumed(), 1);

        // Nothing left at all for the nested field.
        let mut buf = [0u8; 4];
        let err = encode_fields(&mut buf, &[&9u32, &sub]).unwrap_err();
        assert_eq!(err.consumed(), 4);
    }

    #[test]
    fn test_field_kinds() {
        let sub = Sub { sub_id: 0, temperature: 0.0 };
        assert_eq!(Field::kind(&sub), FieldKind::Composite);
        assert_eq!(Field::kind(&0.0f64), FieldKind::Primitive);
        assert!(crate::is_composite(&sub));
        assert!(!crate::is_composite(&0u8));
    }

    #[test]
    fn test_encode_to_vec() {
        let sub = Sub { sub_id: 0x0102, temperature: 0.0 };
        let frame = encode_to_vec::<16, _>(&sub).unwrap();
        assert_eq!(frame.as_slice(), &[0x01, 0x02, 0, 0, 0, 0]);

        let err = encode_to_vec::<4, _>(&sub).unwrap_err();
        assert_eq!(err.consumed(), 2);
    }
}
