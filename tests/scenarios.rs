//! End-to-end scenarios exercising the public API the way a consumer would:
//! building a tree, round-tripping it through the binary codec, the gzip
//! bridge, and the textual bridge, and exercising the tree operations.

use nbt::{little_endian_nbt, parse_command_json, Blob, Compound, KeyOrder, List, Tag};

#[test]
fn scenario_single_byte_child_round_trips_through_blob() {
    let mut blob = Blob::create("Root");
    blob.insert("x", Tag::Byte(42)).unwrap();

    let bytes = blob.to_bytes(false).unwrap();
    let expected = [
        0x0A, 0x00, 0x04, b'R', b'o', b'o', b't', 0x01, 0x00, 0x01, b'x', 0x2A, 0x00,
    ];
    assert_eq!(bytes, expected);

    let decoded = Blob::load(bytes).unwrap();
    assert_eq!(decoded.name(), "Root");
    assert_eq!(decoded.get("x"), Some(&Tag::Byte(42)));
}

#[test]
fn scenario_int_array_round_trips() {
    let mut blob = Blob::create("");
    let mut root = Compound::new();
    root.insert("Arr", Tag::IntArray(vec![1, 2])).unwrap();
    for (name, tag) in root.iter() {
        blob.insert(name, tag.clone()).unwrap();
    }

    let bytes = blob.to_bytes(false).unwrap();
    let decoded = Blob::load(bytes).unwrap();
    assert_eq!(decoded.get("Arr"), Some(&Tag::IntArray(vec![1, 2])));
}

#[test]
fn scenario_list_of_doubles_round_trips_binary_and_text() {
    let mut list = List::new();
    list.push(Tag::Double(1.5)).unwrap();
    list.push(Tag::Double(-2.5)).unwrap();
    list.push(Tag::Double(3.0)).unwrap();

    let mut blob = Blob::create("");
    blob.insert("Pos", Tag::List(list)).unwrap();

    let bytes = blob.to_bytes(false).unwrap();
    let decoded = Blob::load(bytes).unwrap();
    assert_eq!(decoded.get("Pos"), blob.get("Pos"));

    let text = Tag::Compound(decoded.root().clone()).to_command_json(KeyOrder::Insertion);
    assert_eq!(text, "{Pos:[1.5d,-2.5d,3.0d]}");

    let reparsed = parse_command_json(&text).unwrap();
    assert!(Tag::Compound(reparsed).nbt_eq(&Tag::Compound(decoded.root().clone())));
}

#[test]
fn scenario_boolean_sugar_parses_to_byte_and_emits_as_byte() {
    let root = parse_command_json("{flag:true}").unwrap();
    assert_eq!(root.get("flag"), Some(&Tag::Byte(1)));

    let text = Tag::Compound(root).to_command_json(KeyOrder::Insertion);
    assert_eq!(text, "{flag:1b}");
}

#[test]
fn scenario_subset_and_update() {
    let mut a = Compound::new();
    a.insert("x", Tag::Byte(1)).unwrap();

    let mut b = Compound::new();
    b.insert("x", Tag::Byte(1)).unwrap();
    b.insert("y", Tag::String("hi".into())).unwrap();

    assert!(Tag::Compound(a.clone()).is_subset(&Tag::Compound(b.clone())));
    assert!(!Tag::Compound(b.clone()).is_subset(&Tag::Compound(a.clone())));
    assert!(Tag::Compound(a.clone()).nbt_ne(&Tag::Compound(b.clone())));

    let mut merged = Tag::Compound(a);
    merged.update(&Tag::Compound(b.clone()));
    assert!(merged.nbt_eq(&Tag::Compound(b)));
}

#[test]
fn scenario_gzip_round_trip_law() {
    let mut blob = Blob::create("World");
    blob.insert("version", Tag::Int(3465)).unwrap();

    let compressed = blob.to_bytes(true).unwrap();
    let decoded = Blob::load(compressed).unwrap();

    assert_eq!(decoded.name(), "World");
    assert_eq!(decoded.get("version"), Some(&Tag::Int(3465)));
}

#[test]
fn scenario_little_endian_scope_round_trips() {
    let mut blob = Blob::create("Root");
    blob.insert("x", Tag::Byte(42)).unwrap();

    let bytes = little_endian_nbt(|| blob.to_bytes(false).unwrap());
    let decoded = little_endian_nbt(|| Blob::load(bytes.clone()).unwrap());

    assert_eq!(decoded.name(), "Root");
    assert_eq!(decoded.get("x"), Some(&Tag::Byte(42)));

    // Reading the same bytes outside the scope (as big-endian) either fails
    // or yields a different tree, per the endianness law in spec §8.
    let big_endian_attempt = Blob::load(bytes);
    match big_endian_attempt {
        Err(_) => {}
        Ok(wrong) => assert_ne!(wrong.name(), "Root"),
    }
}

#[test]
fn scenario_decode_encode_round_trip_law_for_a_built_tree() {
    let mut inner = Compound::new();
    inner.insert("a", Tag::Byte(1)).unwrap();
    inner.insert("b", Tag::String("two".into())).unwrap();

    let mut root = Compound::new();
    root.insert("inner", Tag::Compound(inner)).unwrap();
    root.insert("arr", Tag::ByteArray(vec![1, 2, 3])).unwrap();

    let mut blob = Blob::create("doc");
    for (name, tag) in root.iter() {
        blob.insert(name, tag.clone()).unwrap();
    }

    let bytes = blob.to_bytes(false).unwrap();
    let decoded = Blob::load(bytes).unwrap();

    assert!(Tag::Compound(decoded.root().clone()).nbt_eq(&Tag::Compound(root)));
}
