//! The root document wrapper: a named root [`Compound`] plus the
//! binary/gzip plumbing to get it to and from a byte buffer. Keeps the
//! teacher's `Blob` name and role, rebuilt around `Compound` instead of a
//! bare `HashMap<String, Tag>` (see `src/tag.rs`).

use crate::compress::{gzip, try_gunzip};
use crate::decode::decode_root;
use crate::encode::encode_root;
use crate::endian::{current_endian, Endian};
use crate::error::NBTResult;
use crate::tag::{Compound, Tag};
use std::io::Write;

/// A full NBT document: a root compound plus the name the wire format
/// attaches to it (almost always empty in practice).
#[cfg_attr(feature = "debug", derive(Debug))]
#[derive(Clone, PartialEq, Default)]
pub struct Blob {
    name: String,
    root: Compound,
}

impl Blob {
    /// A new, empty blob with an empty root name.
    pub fn new() -> Blob {
        Blob::default()
    }

    /// A new, empty blob named `name`.
    pub fn create(name: &str) -> Blob {
        Blob {
            name: name.to_string(),
            root: Compound::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Compound {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Compound {
        &mut self.root
    }

    /// Inserts a tag into the root compound.
    pub fn insert(&mut self, name: &str, tag: impl Into<Tag>) -> NBTResult<Option<Tag>> {
        self.root.insert(name, tag)
    }

    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.root.get(name)
    }

    /// Parses `bytes` as an NBT document, transparently gunzipping it first
    /// if it carries a gzip header (spec §4.9).
    pub fn load(bytes: impl AsRef<[u8]>) -> NBTResult<Blob> {
        let raw = try_gunzip(bytes.as_ref());
        let (name, root) = decode_root(&raw, current_endian())?;
        Ok(Blob { name, root })
    }

    /// Encodes this document, gzipping the result if `compressed` is true.
    pub fn to_bytes(&self, compressed: bool) -> NBTResult<Vec<u8>> {
        let raw = encode_root(&self.name, &self.root, current_endian())?;
        if compressed {
            gzip(&raw)
        } else {
            Ok(raw)
        }
    }

    /// Encodes this document directly into `writer`.
    pub fn write(&self, mut writer: impl Write, compressed: bool) -> NBTResult<()> {
        let bytes = self.to_bytes(compressed)?;
        Ok(writer.write_all(&bytes)?)
    }

    /// Encodes this document under an explicit endian profile rather than
    /// the ambient thread-local default.
    pub fn to_bytes_with_endian(&self, compressed: bool, endian: Endian) -> NBTResult<Vec<u8>> {
        let raw = encode_root(&self.name, &self.root, endian)?;
        if compressed {
            gzip(&raw)
        } else {
            Ok(raw)
        }
    }

    /// Parses `bytes` under an explicit endian profile rather than the
    /// ambient thread-local default.
    pub fn load_with_endian(bytes: impl AsRef<[u8]>, endian: Endian) -> NBTResult<Blob> {
        let raw = try_gunzip(bytes.as_ref());
        let (name, root) = decode_root(&raw, endian)?;
        Ok(Blob { name, root })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_uncompressed() {
        let mut blob = Blob::create("Root");
        blob.insert("x", Tag::Byte(42)).unwrap();

        let bytes = blob.to_bytes(false).unwrap();
        let decoded = Blob::load(bytes).unwrap();

        assert_eq!(decoded.name(), "Root");
        assert_eq!(decoded.get("x"), Some(&Tag::Byte(42)));
    }

    #[test]
    fn round_trips_gzip_compressed() {
        let mut blob = Blob::create("Root");
        blob.insert("x", Tag::Byte(42)).unwrap();

        let bytes = blob.to_bytes(true).unwrap();
        let decoded = Blob::load(bytes).unwrap();

        assert_eq!(decoded.get("x"), Some(&Tag::Byte(42)));
    }

    #[test]
    fn write_matches_to_bytes() {
        let blob = Blob::create("Root");
        let mut buf = Vec::new();
        blob.write(&mut buf, false).unwrap();
        assert_eq!(buf, blob.to_bytes(false).unwrap());
    }
}
