//! Textual emitter: produces the Minecraft-style "command JSON" (SNBT) form
//! described in spec §4.6. No teacher counterpart exists for this; it is
//! grounded directly on `original_source/pymclevel/nbt.py`'s `__repr__`
//! family, written in this crate's free-function style.

use crate::tag::{Compound, List, Tag};

/// How a Compound's keys are ordered in the emitted text.
#[derive(Debug, Clone, Default)]
pub enum KeyOrder {
    /// Keys appear in the order they were inserted (the default).
    #[default]
    Insertion,
    /// `priority` first, in the order given (keys absent from the compound
    /// are skipped), then every remaining key in sorted order.
    Priority(Vec<String>),
    /// All keys, sorted.
    Sorted,
}

/// Renders `tag` as command JSON with no name prefix.
pub fn to_command_json(tag: &Tag, order: &KeyOrder) -> String {
    let mut out = String::new();
    emit_tag(&mut out, None, tag, order);
    out
}

/// Renders `tag` as command JSON, prefixed with `name:` if `name` is
/// non-empty.
pub fn to_command_json_named(name: &str, tag: &Tag, order: &KeyOrder) -> String {
    let mut out = String::new();
    let name = if name.is_empty() { None } else { Some(name) };
    emit_tag(&mut out, name, tag, order);
    out
}

fn emit_tag(out: &mut String, name: Option<&str>, tag: &Tag, order: &KeyOrder) {
    if let Some(name) = name {
        out.push_str(name);
        out.push(':');
    }
    match tag {
        Tag::Byte(v) => push_suffixed(out, *v as i64, "b"),
        Tag::Short(v) => push_suffixed(out, *v as i64, "s"),
        Tag::Int(v) => out.push_str(&v.to_string()),
        Tag::Long(v) => push_suffixed(out, *v, "l"),
        Tag::Float(v) => {
            out.push_str(&format_f32(*v));
            out.push('f');
        }
        Tag::Double(v) => {
            out.push_str(&format_f64(*v));
            out.push('d');
        }
        Tag::String(s) => emit_string(out, s),
        Tag::ByteArray(items) => emit_array(out, "B", items.iter().map(|v| format!("{v}b"))),
        Tag::IntArray(items) => emit_array(out, "I", items.iter().map(|v| v.to_string())),
        Tag::LongArray(items) => emit_array(out, "L", items.iter().map(|v| format!("{v}l"))),
        Tag::List(list) => emit_list(out, list, order),
        Tag::Compound(compound) => emit_compound(out, compound, order),
    }
}

fn push_suffixed(out: &mut String, v: i64, suffix: &str) {
    out.push_str(&v.to_string());
    out.push_str(suffix);
}

/// Rust's float `Display` already produces the shortest round-trippable
/// decimal, but omits a trailing `.0` for whole numbers (`3.0f64` prints
/// `"3"`). SNBT always carries the decimal point, so it's restored here.
fn format_f64(v: f64) -> String {
    let s = v.to_string();
    if s.contains('.') || s.contains('e') || s.contains("inf") || s.contains("NaN") {
        s
    } else {
        format!("{s}.0")
    }
}

fn format_f32(v: f32) -> String {
    let s = v.to_string();
    if s.contains('.') || s.contains('e') || s.contains("inf") || s.contains("NaN") {
        s
    } else {
        format!("{s}.0")
    }
}

fn emit_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    out.push('"');
}

fn emit_array(out: &mut String, prefix: &str, items: impl Iterator<Item = String>) {
    out.push('[');
    out.push_str(prefix);
    out.push(';');
    let mut first = true;
    for item in items {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&item);
    }
    out.push(']');
}

fn emit_list(out: &mut String, list: &List, order: &KeyOrder) {
    out.push('[');
    for (i, elem) in list.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        emit_tag(out, None, elem, order);
    }
    out.push(']');
}

fn emit_compound(out: &mut String, compound: &Compound, order: &KeyOrder) {
    out.push('{');
    for (i, key) in ordered_keys(compound, order).into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let value = compound.get(key).expect("key came from this compound");
        emit_tag(out, Some(key), value, order);
    }
    out.push('}');
}

fn ordered_keys<'a>(compound: &'a Compound, order: &'a KeyOrder) -> Vec<&'a str> {
    match order {
        KeyOrder::Insertion => compound.keys().collect(),
        KeyOrder::Sorted => {
            let mut keys: Vec<&str> = compound.keys().collect();
            keys.sort_unstable();
            keys
        }
        KeyOrder::Priority(priority) => {
            let mut seen = std::collections::HashSet::new();
            let mut keys: Vec<&str> = Vec::new();
            for p in priority {
                if compound.contains_key(p) && seen.insert(p.as_str()) {
                    keys.push(compound.keys().find(|k| *k == p).unwrap());
                }
            }
            let mut rest: Vec<&str> = compound
                .keys()
                .filter(|k| !seen.contains(k))
                .collect();
            rest.sort_unstable();
            keys.extend(rest);
            keys
        }
    }
}
