use std::collections::BTreeMap;

use vc_bson::{Bson, EncodeError, MarshalError, ObjectId, marshal, to_vec};
use vc_reflect::derive::Reflect;

#[derive(Reflect, Clone, Default)]
#[allow(non_snake_case)]
struct Item {
    Name: String,
    qty: i32,
}

#[test]
fn struct_bytes() {
    let item = Item {
        Name: String::from("ab"),
        qty: 2,
    };

    #[rustfmt::skip]
    let expected = [
        27, 0, 0, 0,
        0x02, b'n', b'a', b'm', b'e', 0, 3, 0, 0, 0, b'a', b'b', 0,
        0x10, b'q', b't', b'y', 0, 2, 0, 0, 0,
        0,
    ];
    assert_eq!(to_vec(&item).unwrap(), expected);
}

#[test]
fn string_keyed_maps() {
    let mut map = BTreeMap::new();
    map.insert(String::from("b"), ObjectId::from_bytes([2; 12]));
    map.insert(String::from("a"), ObjectId::from_bytes([1; 12]));

    let node = marshal(&map).unwrap();
    let doc = node.as_document().unwrap();
    assert_eq!(doc.len(), 2);
    assert_eq!(doc["a"], Bson::ObjectId(ObjectId::from_bytes([1; 12])));

    let bytes = to_vec(&map).unwrap();
    assert_eq!(vc_bson::from_slice_document(&bytes).unwrap(), *doc);
}

#[cfg(feature = "std")]
#[test]
fn hash_map_key_types() {
    use std::collections::HashMap;

    let mut by_name: HashMap<String, String> = HashMap::new();
    by_name.insert(String::from("x"), String::from("1"));
    by_name.insert(String::from("y"), String::from("2"));

    let node = marshal(&by_name).unwrap();
    let doc = node.as_document().unwrap();
    assert_eq!(doc.len(), 2);
    assert_eq!(doc["x"], Bson::from("1"));
    assert_eq!(doc["y"], Bson::from("2"));

    let mut by_id: HashMap<i32, String> = HashMap::new();
    by_id.insert(1, String::from("x"));

    let err = marshal(&by_id).unwrap_err();
    assert!(matches!(err, MarshalError::UnsupportedKeyType { .. }));
    assert!(err.type_path().contains("HashMap"));
}

#[test]
fn unsupported_types_are_named() {
    #[derive(Reflect, Clone, Default)]
    struct Glyph {
        name: String,
        symbol: char,
    }

    let glyph = Glyph {
        name: String::from("alpha"),
        symbol: 'a',
    };

    let err = marshal(&glyph).unwrap_err();
    assert_eq!(err.type_path(), "char");
    assert_eq!(err.path(), "symbol");
    assert_eq!(err.to_string(), "don't know how to marshal `char` at `symbol`");

    assert_eq!(to_vec(&glyph), Err(EncodeError::Marshal(err)));
}

#[test]
fn unsigned_64_bit_is_unsupported() {
    #[derive(Reflect, Clone, Default)]
    struct Counter {
        hits: u64,
    }

    let err = marshal(&Counter { hits: 1 }).unwrap_err();
    assert_eq!(
        err,
        MarshalError::UnsupportedType {
            type_path: "u64",
            path: String::from("hits"),
        }
    );
}

#[test]
fn only_objects_are_documents() {
    assert_eq!(to_vec(&vec![1_i32]), Err(EncodeError::NotADocument));
    assert_eq!(to_vec(&String::from("x")), Err(EncodeError::NotADocument));

    let boxed = Box::new(Item::default());
    assert!(to_vec(&boxed).is_ok());
}
