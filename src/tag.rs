//! The NBT value model: [`Tag`], its [`TagKind`] discriminant, and the two
//! container shapes ([`Compound`] and [`List`]) it can nest.
//!
//! Names are not a field of `Tag` itself — they belong to the slot a tag
//! occupies (a `Compound`'s key). This is the "tagged-variant rewrite" the
//! spec's Design Notes ask for: the original's single base class with a
//! mutable `name`/`fmt`/`data_type` attribute per instance becomes one
//! variant per kind, with the two container kinds carrying their own
//! insertion rules instead of sharing one interface.

use crate::error::{NBTError, NBTResult};
use std::fmt;

/// The one-byte tag identifier used on the wire and in error messages.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

impl TagKind {
    pub fn from_id(id: u8) -> Option<TagKind> {
        Some(match id {
            1 => TagKind::Byte,
            2 => TagKind::Short,
            3 => TagKind::Int,
            4 => TagKind::Long,
            5 => TagKind::Float,
            6 => TagKind::Double,
            7 => TagKind::ByteArray,
            8 => TagKind::String,
            9 => TagKind::List,
            10 => TagKind::Compound,
            11 => TagKind::IntArray,
            12 => TagKind::LongArray,
            _ => return None,
        })
    }

    pub fn id(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TagKind::Byte => "TAG_Byte",
            TagKind::Short => "TAG_Short",
            TagKind::Int => "TAG_Int",
            TagKind::Long => "TAG_Long",
            TagKind::Float => "TAG_Float",
            TagKind::Double => "TAG_Double",
            TagKind::ByteArray => "TAG_ByteArray",
            TagKind::String => "TAG_String",
            TagKind::List => "TAG_List",
            TagKind::Compound => "TAG_Compound",
            TagKind::IntArray => "TAG_IntArray",
            TagKind::LongArray => "TAG_LongArray",
        };
        f.write_str(name)
    }
}

/// A single NBT value.
#[cfg_attr(feature = "debug", derive(Debug))]
#[derive(Clone, PartialEq)]
pub enum Tag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Tag {
    pub fn kind(&self) -> TagKind {
        match self {
            Tag::Byte(_) => TagKind::Byte,
            Tag::Short(_) => TagKind::Short,
            Tag::Int(_) => TagKind::Int,
            Tag::Long(_) => TagKind::Long,
            Tag::Float(_) => TagKind::Float,
            Tag::Double(_) => TagKind::Double,
            Tag::ByteArray(_) => TagKind::ByteArray,
            Tag::String(_) => TagKind::String,
            Tag::List(_) => TagKind::List,
            Tag::Compound(_) => TagKind::Compound,
            Tag::IntArray(_) => TagKind::IntArray,
            Tag::LongArray(_) => TagKind::LongArray,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Tag::Compound(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Tag::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Tag::Byte(v) => Some(v as i64),
            Tag::Short(v) => Some(v as i64),
            Tag::Int(v) => Some(v as i64),
            Tag::Long(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! from_scalar {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for Tag {
            fn from(value: $ty) -> Self {
                Tag::$variant(value)
            }
        }
    };
}

from_scalar!(i8, Byte);
from_scalar!(i16, Short);
from_scalar!(i32, Int);
from_scalar!(i64, Long);
from_scalar!(f32, Float);
from_scalar!(f64, Double);
from_scalar!(String, String);
from_scalar!(Vec<i8>, ByteArray);
from_scalar!(Vec<i32>, IntArray);
from_scalar!(Vec<i64>, LongArray);

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Tag::String(value.to_owned())
    }
}

impl From<bool> for Tag {
    fn from(value: bool) -> Self {
        Tag::Byte(value as i8)
    }
}

/// A homogeneous, unnamed sequence of tags.
///
/// `element_kind` is tracked explicitly rather than inferred from the first
/// element, so an empty list still remembers (or defaults to) the kind it
/// was declared with — satisfying invariant 3 ("an empty List's
/// `list_type` defaults to Byte").
#[cfg_attr(feature = "debug", derive(Debug))]
#[derive(Clone, PartialEq)]
pub struct List {
    element_kind: TagKind,
    elements: Vec<Tag>,
}

impl List {
    /// A new, empty list. Its element kind defaults to `Byte` until the
    /// first element is pushed, per invariant 3.
    pub fn new() -> Self {
        List {
            element_kind: TagKind::Byte,
            elements: Vec::new(),
        }
    }

    /// A new, empty list pinned to a specific element kind.
    pub fn with_kind(kind: TagKind) -> Self {
        List {
            element_kind: kind,
            elements: Vec::new(),
        }
    }

    pub(crate) fn from_raw(element_kind: TagKind, elements: Vec<Tag>) -> Self {
        List {
            element_kind,
            elements,
        }
    }

    pub fn element_kind(&self) -> TagKind {
        self.element_kind
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.elements.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Tag> {
        self.elements.get(index)
    }

    /// Appends `tag` to the list.
    ///
    /// If the list is empty and still at its default kind, the new
    /// element's kind is adopted (invariant 3). Otherwise the element must
    /// match `element_kind()` exactly, or this returns
    /// `ListKindMismatch`. A `Tag` never carries a name of its own, so there
    /// is nothing to "clear" on append — the invariant that list elements
    /// are unnamed is structural, not a runtime step.
    pub fn push(&mut self, tag: Tag) -> NBTResult<()> {
        if self.elements.is_empty() {
            self.element_kind = tag.kind();
        } else if tag.kind() != self.element_kind {
            return Err(NBTError::ListKindMismatch {
                expected: self.element_kind,
                found: tag.kind(),
            });
        }
        self.elements.push(tag);
        Ok(())
    }
}

impl Default for List {
    fn default() -> Self {
        List::new()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// A keyed, ordered container of named tags.
///
/// Backed by a `Vec<(String, Tag)>` rather than a hash or ordered map: the
/// duplicate-keys knob (invariant 1) needs to be able to hold more than one
/// entry under the same name, which a `HashMap`/`IndexMap` cannot express.
/// With `allow_duplicates` left at its default of `false`, `insert` behaves
/// exactly like a keyed map (insertion removes any prior entry of the same
/// name) while still preserving insertion order for the textual emitter's
/// default key ordering.
#[cfg_attr(feature = "debug", derive(Debug))]
#[derive(Clone, PartialEq, Default)]
pub struct Compound {
    entries: Vec<(String, Tag)>,
    allow_duplicates: bool,
}

impl Compound {
    pub fn new() -> Self {
        Compound::default()
    }

    /// A compound that keeps every entry inserted under a name, rather than
    /// replacing the prior one. `get`/`get_mut` still return the first
    /// match; `get_all` returns every match.
    pub fn with_duplicates_allowed() -> Self {
        Compound {
            entries: Vec::new(),
            allow_duplicates: true,
        }
    }

    pub fn allows_duplicates(&self) -> bool {
        self.allow_duplicates
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `tag` under `name`.
    ///
    /// Fails with `EmptyCompoundName` if `name` is empty (invariant 4).
    /// Unless duplicate-keys mode is enabled, any existing entry under
    /// `name` is removed first (invariant 1) and returned.
    pub fn insert(&mut self, name: impl Into<String>, tag: impl Into<Tag>) -> NBTResult<Option<Tag>> {
        let name = name.into();
        if name.is_empty() {
            return Err(NBTError::EmptyCompoundName);
        }
        let tag = tag.into();
        let previous = if self.allow_duplicates {
            None
        } else {
            self.remove(&name)
        };
        self.entries.push((name, tag));
        Ok(previous)
    }

    /// Removes and returns the first entry under `name`.
    pub fn remove(&mut self, name: &str) -> Option<Tag> {
        let idx = self.entries.iter().position(|(k, _)| k == name)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Tag> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == name)
    }

    /// Every entry stored under `name`. Returns exactly one element unless
    /// duplicate-keys mode was explicitly enabled and the caller inserted
    /// more than one tag under that name.
    pub fn get_all(&self, name: &str) -> Vec<&Tag> {
        self.entries
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v)
            .collect()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, Tag)> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = &'a (String, Tag);
    type IntoIter = std::slice::Iter<'a, (String, Tag)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_insert_replaces_by_default() {
        let mut c = Compound::new();
        c.insert("x", Tag::Byte(1)).unwrap();
        let prev = c.insert("x", Tag::Byte(2)).unwrap();
        assert_eq!(prev, Some(Tag::Byte(1)));
        assert_eq!(c.len(), 1);
        assert_eq!(c.get("x"), Some(&Tag::Byte(2)));
    }

    #[test]
    fn compound_rejects_empty_name() {
        let mut c = Compound::new();
        assert!(matches!(
            c.insert("", Tag::Byte(1)),
            Err(NBTError::EmptyCompoundName)
        ));
    }

    #[test]
    fn compound_duplicate_mode_keeps_all() {
        let mut c = Compound::with_duplicates_allowed();
        c.insert("x", Tag::Byte(1)).unwrap();
        c.insert("x", Tag::Byte(2)).unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.get_all("x").len(), 2);
        // get() still returns the first match.
        assert_eq!(c.get("x"), Some(&Tag::Byte(1)));
    }

    #[test]
    fn list_adopts_first_element_kind() {
        let mut l = List::new();
        assert_eq!(l.element_kind(), TagKind::Byte);
        l.push(Tag::Int(1)).unwrap();
        assert_eq!(l.element_kind(), TagKind::Int);
    }

    #[test]
    fn list_rejects_mismatched_kind() {
        let mut l = List::new();
        l.push(Tag::Int(1)).unwrap();
        let err = l.push(Tag::String("nope".into())).unwrap_err();
        assert!(matches!(err, NBTError::ListKindMismatch { .. }));
    }

    #[test]
    fn empty_list_defaults_to_byte_kind() {
        let l = List::new();
        assert_eq!(l.element_kind(), TagKind::Byte);
        assert!(l.is_empty());
    }
}
