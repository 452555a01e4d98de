//! Binary encoder: symmetric to `src/decode.rs`.

use crate::endian::Endian;
use crate::error::NBTResult;
use crate::io::Writer;
use crate::tag::{Compound, List, Tag, TagKind};

/// Encodes a full document: root tag id, name, payload, terminator.
pub(crate) fn encode_root(name: &str, root: &Compound, endian: Endian) -> NBTResult<Vec<u8>> {
    let mut writer = Writer::new(endian);
    writer.write_u8(TagKind::Compound.id())?;
    writer.write_string(name)?;
    write_compound(&mut writer, root)?;
    Ok(writer.into_vec())
}

fn write_compound(writer: &mut Writer, compound: &Compound) -> NBTResult<()> {
    for (name, tag) in compound.iter() {
        writer.write_u8(tag.kind().id())?;
        writer.write_string(name)?;
        write_payload(writer, tag)?;
    }
    writer.write_u8(0)
}

fn write_list(writer: &mut Writer, list: &List) -> NBTResult<()> {
    writer.write_u8(list.element_kind().id())?;
    writer.write_array_len(list.len())?;
    for elem in list.iter() {
        write_payload(writer, elem)?;
    }
    Ok(())
}

fn write_payload(writer: &mut Writer, tag: &Tag) -> NBTResult<()> {
    match tag {
        Tag::Byte(v) => writer.write_i8(*v),
        Tag::Short(v) => writer.write_i16(*v),
        Tag::Int(v) => writer.write_i32(*v),
        Tag::Long(v) => writer.write_i64(*v),
        Tag::Float(v) => writer.write_f32(*v),
        Tag::Double(v) => writer.write_f64(*v),
        Tag::ByteArray(v) => {
            writer.write_array_len(v.len())?;
            for b in v {
                writer.write_i8(*b)?;
            }
            Ok(())
        }
        Tag::String(s) => writer.write_string(s),
        Tag::List(l) => write_list(writer, l),
        Tag::Compound(c) => write_compound(writer, c),
        Tag::IntArray(v) => {
            writer.write_array_len(v.len())?;
            for i in v {
                writer.write_i32(*i)?;
            }
            Ok(())
        }
        Tag::LongArray(v) => {
            writer.write_array_len(v.len())?;
            for l in v {
                writer.write_i64(*l)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_root;

    #[test]
    fn empty_root_round_trips() {
        let bytes = [0x0A, 0x00, 0x00, 0x00];
        let (name, root) = decode_root(&bytes, Endian::Big).unwrap();
        let out = encode_root(&name, &root, Endian::Big).unwrap();
        assert_eq!(out, bytes);
    }

    #[test]
    fn single_byte_child_round_trips() {
        let bytes = [
            0x0A, 0x00, 0x04, b'R', b'o', b'o', b't', 0x01, 0x00, 0x01, b'x', 0x2A, 0x00,
        ];
        let (name, root) = decode_root(&bytes, Endian::Big).unwrap();
        let out = encode_root(&name, &root, Endian::Big).unwrap();
        assert_eq!(out, bytes);
    }

    #[test]
    fn little_endian_scope_encodes_matching_bytes() {
        let bytes = [
            0x0A, 0x00, 0x04, b'R', b'o', b'o', b't', 0x01, 0x00, 0x01, b'x', 0x2A, 0x00,
        ];
        let (name, root) = decode_root(&bytes, Endian::Big).unwrap();
        let out = encode_root(&name, &root, Endian::Little).unwrap();
        let expected = [
            0x0A, 0x04, 0x00, b'R', b'o', b'o', b't', 0x01, 0x01, 0x00, b'x', 0x2A, 0x00,
        ];
        assert_eq!(out, expected);
    }

    #[test]
    fn list_round_trips_through_decode() {
        let mut root = Compound::new();
        let mut list = List::new();
        list.push(Tag::Double(1.5)).unwrap();
        list.push(Tag::Double(-2.5)).unwrap();
        list.push(Tag::Double(3.0)).unwrap();
        root.insert("Pos", Tag::List(list)).unwrap();

        let bytes = encode_root("", &root, Endian::Big).unwrap();
        let (_, decoded) = decode_root(&bytes, Endian::Big).unwrap();
        assert_eq!(decoded, root);
    }
}
