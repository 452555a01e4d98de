//! Binary decoder: recursive descent over a byte cursor producing a tag
//! tree. Mirrors `src/encode.rs` structurally.

use crate::endian::Endian;
use crate::error::{NBTError, NBTResult};
use crate::io::Reader;
use crate::tag::{Compound, List, Tag, TagKind};

/// Decodes a full document: the root tag id, the root's name, and its
/// payload. Fails with `ExpectedRootCompound` if the first byte isn't 10.
pub(crate) fn decode_root(buf: &[u8], endian: Endian) -> NBTResult<(String, Compound)> {
    let mut reader = Reader::new(buf, endian);
    let id = reader.read_u8()?;
    if id != TagKind::Compound.id() {
        return Err(NBTError::ExpectedRootCompound { found: id });
    }
    let name = reader.read_string()?;
    let root = read_compound(&mut reader)?;
    Ok((name, root))
}

fn read_kind(reader: &mut Reader<'_>) -> NBTResult<TagKind> {
    let id = reader.read_u8()?;
    TagKind::from_id(id).ok_or(NBTError::UnknownTagId(id))
}

fn read_compound(reader: &mut Reader<'_>) -> NBTResult<Compound> {
    let mut compound = Compound::new();
    loop {
        let id = reader.read_u8()?;
        if id == 0 {
            break;
        }
        let kind = TagKind::from_id(id).ok_or(NBTError::UnknownTagId(id))?;
        let name = reader.read_string()?;
        let payload = read_payload(reader, kind)?;
        // The decoder never enables duplicate-keys mode on its own; a
        // repeated name on the wire simply overwrites the earlier one,
        // matching invariant 1.
        compound.insert(name, payload)?;
    }
    Ok(compound)
}

fn read_list(reader: &mut Reader<'_>) -> NBTResult<List> {
    let element_kind = read_kind(reader)?;
    let len = reader.read_array_len()?;
    let mut list = List::with_kind(element_kind);
    for _ in 0..len {
        let elem = read_payload(reader, element_kind)?;
        list.push(elem)?;
    }
    Ok(list)
}

fn read_payload(reader: &mut Reader<'_>, kind: TagKind) -> NBTResult<Tag> {
    Ok(match kind {
        TagKind::Byte => Tag::Byte(reader.read_i8()?),
        TagKind::Short => Tag::Short(reader.read_i16()?),
        TagKind::Int => Tag::Int(reader.read_i32()?),
        TagKind::Long => Tag::Long(reader.read_i64()?),
        TagKind::Float => Tag::Float(reader.read_f32()?),
        TagKind::Double => Tag::Double(reader.read_f64()?),
        TagKind::ByteArray => Tag::ByteArray(reader.read_byte_array()?),
        TagKind::String => Tag::String(reader.read_string()?),
        TagKind::List => Tag::List(read_list(reader)?),
        TagKind::Compound => Tag::Compound(read_compound(reader)?),
        TagKind::IntArray => Tag::IntArray(reader.read_int_array()?),
        TagKind::LongArray => Tag::LongArray(reader.read_long_array()?),
    })
}
