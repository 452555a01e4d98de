//! Tree operations: structural equality, subset matching, and in-place
//! merge. Grounded directly on `original_source/pymclevel/nbt.py`'s
//! `__eq__`/`issubset`/`update` (there is no teacher counterpart: the
//! teacher derives plain `PartialEq` and has neither `issubset` nor
//! `update`).

use crate::tag::{Compound, List, Tag};

impl Tag {
    /// Structural equality: same kind, equal payload. For a `Compound`,
    /// this requires the same number of entries and, for every key on the
    /// left, an equal value under that key on the right (see
    /// `Compound::nbt_eq` for why this is not simply "both directions").
    pub fn nbt_eq(&self, other: &Tag) -> bool {
        match (self, other) {
            (Tag::Compound(a), Tag::Compound(b)) => a.nbt_eq(b),
            (Tag::List(a), Tag::List(b)) => a.nbt_eq(b),
            _ => self == other,
        }
    }

    /// The negation of [`Tag::nbt_eq`].
    pub fn nbt_ne(&self, other: &Tag) -> bool {
        !self.nbt_eq(other)
    }

    /// `self` is a subset of `other` when every piece of information `self`
    /// carries also appears in `other`:
    ///   - scalars/arrays: equal values.
    ///   - compounds: every key in `self` exists in `other` with a subset
    ///     value (extra keys on `other` are fine).
    ///   - lists: every element of `self` has some element in `other` of
    ///     which it is a subset (order-insensitive, existential match).
    pub fn is_subset(&self, other: &Tag) -> bool {
        match (self, other) {
            (Tag::Compound(a), Tag::Compound(b)) => a.is_subset(b),
            (Tag::List(a), Tag::List(b)) => a.is_subset(b),
            _ if self.kind() != other.kind() => false,
            _ => self == other,
        }
    }

    /// Merges `src` into `self` in place. Both must be the same kind.
    ///
    /// For compounds: every key present in `src` but absent from `self` is
    /// deep-cloned in; every key present in both is merged recursively.
    /// For everything else (scalars, lists, arrays), `src` simply replaces
    /// `self`'s value — matching the original's fallback-to-round-trip
    /// behavior for non-compound kinds, implemented here as a direct clone
    /// since `Tag` is a plain owned value (see DESIGN.md).
    pub fn update(&mut self, src: &Tag) {
        match (self, src) {
            (Tag::Compound(dst), Tag::Compound(src)) => dst.update(src),
            (dst, src) => {
                *dst = src.clone();
            }
        }
    }
}

impl Compound {
    fn nbt_eq(&self, other: &Compound) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter()
            .all(|(k, v)| other.get(k).is_some_and(|ov| v.nbt_eq(ov)))
    }

    fn is_subset(&self, other: &Compound) -> bool {
        self.iter()
            .all(|(k, v)| other.get(k).is_some_and(|ov| v.is_subset(ov)))
    }

    fn update(&mut self, src: &Compound) {
        for (key, value) in src.iter() {
            if let Some(existing) = self.get_mut(key) {
                existing.update(value);
            } else {
                // insert() only fails on an empty name, and `key` came
                // from a Compound that already enforced non-empty names.
                self.insert(key.clone(), value.clone())
                    .expect("compound entries always have non-empty names");
            }
        }
    }
}

impl List {
    fn nbt_eq(&self, other: &List) -> bool {
        self.len() == other.len()
            && self.iter().zip(other.iter()).all(|(a, b)| a.nbt_eq(b))
    }

    fn is_subset(&self, other: &List) -> bool {
        self.iter()
            .all(|a| other.iter().any(|b| a.is_subset(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compound(pairs: &[(&str, Tag)]) -> Tag {
        let mut c = Compound::new();
        for (k, v) in pairs {
            c.insert(*k, v.clone()).unwrap();
        }
        Tag::Compound(c)
    }

    #[test]
    fn subset_and_eq_scenario() {
        let a = compound(&[("x", Tag::Byte(1))]);
        let b = compound(&[("x", Tag::Byte(1)), ("y", Tag::String("hi".into()))]);

        assert!(a.is_subset(&b));
        assert!(!b.is_subset(&a));
        assert!(!a.nbt_eq(&b));
        assert!(a.nbt_ne(&b));
    }

    #[test]
    fn eq_is_reflexive_for_equal_trees() {
        let a = compound(&[("x", Tag::Byte(1))]);
        let b = compound(&[("x", Tag::Byte(1))]);
        assert!(a.nbt_eq(&b));
        assert!(!a.nbt_ne(&b));
    }

    #[test]
    fn list_subset_is_existential_and_order_insensitive() {
        let mut left = List::new();
        left.push(Tag::Int(2)).unwrap();
        left.push(Tag::Int(1)).unwrap();

        let mut right = List::new();
        right.push(Tag::Int(1)).unwrap();
        right.push(Tag::Int(2)).unwrap();
        right.push(Tag::Int(3)).unwrap();

        assert!(Tag::List(left).is_subset(&Tag::List(right)));
    }

    #[test]
    fn update_inserts_missing_and_merges_existing() {
        let mut dst = compound(&[("x", Tag::Byte(1))]);
        let src = compound(&[("x", Tag::Byte(9)), ("y", Tag::String("new".into()))]);

        dst.update(&src);

        let dst_compound = dst.as_compound().unwrap();
        assert_eq!(dst_compound.get("x"), Some(&Tag::Byte(9)));
        assert_eq!(dst_compound.get("y"), Some(&Tag::String("new".into())));
    }

    #[test]
    fn update_is_idempotent() {
        let mut dst = compound(&[("x", Tag::Byte(1))]);
        let src = compound(&[("y", Tag::Int(5))]);

        dst.update(&src);
        let once = dst.clone();
        dst.update(&src);

        assert!(once.nbt_eq(&dst));
    }

    #[test]
    fn update_recurses_into_nested_compounds() {
        let mut dst = compound(&[("inner", compound(&[("a", Tag::Byte(1))]))]);
        let src = compound(&[("inner", compound(&[("b", Tag::Byte(2))]))]);

        dst.update(&src);

        let inner = dst.as_compound().unwrap().get("inner").unwrap();
        let inner = inner.as_compound().unwrap();
        assert_eq!(inner.get("a"), Some(&Tag::Byte(1)));
        assert_eq!(inner.get("b"), Some(&Tag::Byte(2)));
    }
}
