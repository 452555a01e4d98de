//! # Named Binary Tag (NBT)
//! The Named Binary Tag is a structured binary format used by the game
//! Minecraft for a variety of purposes, such as Player Data and World Saves,
//! as well as within the Minecraft Protocol.
//!
//! [NBT Specification](https://wiki.vg/NBT#Specification)
//!
//! ## This Crate
//! This crate implements the binary codec, the in-memory tag tree, and a
//! bidirectional bridge to Minecraft's "command JSON" textual form (the
//! syntax used in commands like `/give` and `/data merge`).
//!
//! ### Key features
//! - A `Tag`/`Compound`/`List` tree that mirrors the binary format directly.
//! - Structural tree operations: equality, subset matching, and in-place
//!   merge (`Tag::nbt_eq`, `Tag::is_subset`, `Tag::update`).
//! - A textual bridge to and from command JSON (`Tag::to_command_json`,
//!   `parse_command_json`).
//! - Transparent gzip handling on load, optional gzip on save.
//! - A scoped `little_endian_nbt` block for the Bedrock/"Pocket" variant.
//!
//! ### Cargo Features
//! - `debug` (default) derives `Debug` for `Tag`, `Compound`, `List`, and
//!   `Blob`.
//!
//! ## Quick Start
//!
//! #### Tags
//! ```
//! use nbt::{Tag, Compound, List};
//!
//! // An example of a TAG_Byte with value 42.
//! let byte = Tag::Byte(42);
//!
//! // An example of a TAG_String with value "Hello!"
//! let string = Tag::String("Hello!".to_string());
//!
//! // An example of a TAG_List containing bytes, with values [1, 2, 3].
//! let mut list = List::new();
//! list.push(Tag::Byte(1)).unwrap();
//! list.push(Tag::Byte(2)).unwrap();
//! list.push(Tag::Byte(3)).unwrap();
//! let list = Tag::List(list);
//!
//! // An example of a compound.
//! let mut map = Compound::new();
//! map.insert("age", Tag::Byte(18)).unwrap();
//! map.insert("id", Tag::Int(69420)).unwrap();
//! let compound = Tag::Compound(map);
//! ```
//!
//! #### Blobs
//! Blobs represent a full NBT document: a root compound plus its name.
//! ```
//! use nbt::Blob;
//!
//! let mut blob = Blob::create("hello world");
//! blob.insert("name", "Bananrama").unwrap();
//!
//! let bytes = blob.to_bytes(false).unwrap();
//! let decoded = Blob::load(bytes).unwrap();
//!
//! assert_eq!(decoded.get("name"), Some(&nbt::Tag::String("Bananrama".to_string())));
//! ```
//!
//! #### Command JSON
//! ```
//! use nbt::{parse_command_json, KeyOrder, Tag};
//!
//! let root = parse_command_json("{x:42b,y:\"hi\"}").unwrap();
//! let text = Tag::Compound(root).to_command_json(KeyOrder::Sorted);
//! assert_eq!(text, r#"{x:42b,y:"hi"}"#);
//! ```
//!
//! #### The Bedrock ("Pocket") endian variant
//! ```
//! use nbt::{little_endian_nbt, Blob};
//!
//! let mut blob = Blob::create("");
//! blob.insert("x", 1i32).unwrap();
//!
//! let bytes = little_endian_nbt(|| blob.to_bytes(false).unwrap());
//! let decoded = little_endian_nbt(|| Blob::load(bytes).unwrap());
//! assert_eq!(decoded.get("x"), Some(&nbt::Tag::Int(1)));
//! ```

pub(crate) mod blob;
pub(crate) mod compress;
pub(crate) mod decode;
pub(crate) mod encode;
pub(crate) mod endian;
pub(crate) mod error;
pub(crate) mod io;
pub(crate) mod ops;
pub(crate) mod pretty;
pub(crate) mod tag;
pub(crate) mod text;

pub use blob::Blob;
pub use compress::{gunzip, gzip, try_gunzip};
pub use endian::{little_endian_nbt, Endian};
pub use error::{NBTError, NBTResult};
pub use pretty::pretty_print;
pub use tag::{Compound, List, Tag, TagKind};
pub use text::{parse_command_json, to_command_json, to_command_json_named, KeyOrder};

/// Parses `bytes` as a full NBT document, transparently gunzipping it first
/// if it carries a gzip header. A thin wrapper over [`Blob::load`] for
/// callers who just want the root compound.
pub fn load(bytes: impl AsRef<[u8]>) -> NBTResult<Blob> {
    Blob::load(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_round_trips_a_minimal_document() {
        let mut blob = Blob::create("");
        blob.insert("x", Tag::Byte(1)).unwrap();
        let bytes = blob.to_bytes(false).unwrap();

        let decoded = load(bytes).unwrap();
        assert_eq!(decoded.get("x"), Some(&Tag::Byte(1)));
    }

    #[test]
    fn json_round_trips_through_the_public_surface() {
        let mut blob = Blob::create("");
        blob.insert("x", Tag::Byte(42)).unwrap();
        blob.insert("name", "Bananrama").unwrap();

        let text = Tag::Compound(blob.root().clone()).to_command_json(KeyOrder::Sorted);
        let reparsed = parse_command_json(&text).unwrap();

        assert!(Tag::Compound(reparsed).nbt_eq(&Tag::Compound(blob.root().clone())));
    }
}
