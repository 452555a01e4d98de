//! Debug pretty-printer (spec §4.8). Not round-trippable — this is purely
//! for humans staring at a tree, unlike `text::emit`'s command JSON. No
//! teacher counterpart; grounded on `original_source/pymclevel/nbt.py`'s
//! `pretty_tree`/`__repr__` indenting walk.

use crate::tag::{Compound, List, Tag};
use std::fmt::Write as _;

/// Renders `tag` as an indented, human-readable tree:
/// `TAG_Compound({` … `})`, `TAG_List([` … `])`, and `KindName(repr(value))`
/// for scalars and arrays.
pub fn pretty_print(tag: &Tag) -> String {
    let mut out = String::new();
    write_tag(&mut out, tag, 0);
    out
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn write_tag(out: &mut String, tag: &Tag, depth: usize) {
    match tag {
        Tag::Byte(v) => write!(out, "TAG_Byte({v})").unwrap(),
        Tag::Short(v) => write!(out, "TAG_Short({v})").unwrap(),
        Tag::Int(v) => write!(out, "TAG_Int({v})").unwrap(),
        Tag::Long(v) => write!(out, "TAG_Long({v})").unwrap(),
        Tag::Float(v) => write!(out, "TAG_Float({v})").unwrap(),
        Tag::Double(v) => write!(out, "TAG_Double({v})").unwrap(),
        Tag::String(s) => write!(out, "TAG_String({s:?})").unwrap(),
        Tag::ByteArray(v) => write!(out, "TAG_ByteArray({v:?})").unwrap(),
        Tag::IntArray(v) => write!(out, "TAG_IntArray({v:?})").unwrap(),
        Tag::LongArray(v) => write!(out, "TAG_LongArray({v:?})").unwrap(),
        Tag::List(l) => write_list(out, l, depth),
        Tag::Compound(c) => write_compound(out, c, depth),
    }
}

fn write_list(out: &mut String, list: &List, depth: usize) {
    if list.is_empty() {
        out.push_str("TAG_List([])");
        return;
    }
    out.push_str("TAG_List([\n");
    for elem in list.iter() {
        indent(out, depth + 1);
        write_tag(out, elem, depth + 1);
        out.push_str(",\n");
    }
    indent(out, depth);
    out.push_str("])");
}

fn write_compound(out: &mut String, compound: &Compound, depth: usize) {
    if compound.is_empty() {
        out.push_str("TAG_Compound({})");
        return;
    }
    out.push_str("TAG_Compound({\n");
    for (name, tag) in compound.iter() {
        indent(out, depth + 1);
        write!(out, "{name:?}: ").unwrap();
        write_tag(out, tag, depth + 1);
        out.push_str(",\n");
    }
    indent(out, depth);
    out.push_str("})");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_renders_kind_and_repr() {
        assert_eq!(pretty_print(&Tag::Byte(42)), "TAG_Byte(42)");
        assert_eq!(pretty_print(&Tag::String("hi".into())), "TAG_String(\"hi\")");
    }

    #[test]
    fn empty_containers_render_compactly() {
        assert_eq!(pretty_print(&Tag::Compound(Compound::new())), "TAG_Compound({})");
        assert_eq!(pretty_print(&Tag::List(List::new())), "TAG_List([])");
    }

    #[test]
    fn nested_compound_is_indented() {
        let mut inner = Compound::new();
        inner.insert("x", Tag::Byte(1)).unwrap();
        let mut outer = Compound::new();
        outer.insert("inner", Tag::Compound(inner)).unwrap();

        let rendered = pretty_print(&Tag::Compound(outer));
        assert_eq!(
            rendered,
            "TAG_Compound({\n  \"inner\": TAG_Compound({\n    \"x\": TAG_Byte(1),\n  }),\n})"
        );
    }

    #[test]
    fn list_of_scalars_one_per_line() {
        let mut list = List::new();
        list.push(Tag::Int(1)).unwrap();
        list.push(Tag::Int(2)).unwrap();
        let rendered = pretty_print(&Tag::List(list));
        assert_eq!(rendered, "TAG_List([\n  TAG_Int(1),\n  TAG_Int(2),\n])");
    }
}
