use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use vc_bson::{Bson, DecodeError, Document, ObjectId, encode_document, growth, unmarshal};
use vc_reflect::derive::Reflect;

#[derive(Reflect, Clone, Default, Debug, PartialEq)]
struct Address {
    city: String,
    zip: u32,
}

#[derive(Reflect, Clone, Default, Debug, PartialEq)]
#[allow(non_snake_case)]
struct Profile {
    UserName: String,
    Age: u8,
    score: f64,
    active: bool,
    visits: i64,
    joined: DateTime<Utc>,
    id: ObjectId,
    tags: Vec<String>,
    home: Option<Address>,
    backup: Option<Box<Address>>,
    limits: BTreeMap<String, i32>,
    history: Vec<Address>,
}

fn doc(entries: Vec<(&str, Bson)>) -> Document {
    entries
        .into_iter()
        .map(|(key, value)| (String::from(key), value))
        .collect()
}

fn bytes(entries: Vec<(&str, Bson)>) -> Vec<u8> {
    encode_document(&doc(entries)).unwrap()
}

fn sample() -> Profile {
    let mut limits = BTreeMap::new();
    limits.insert(String::from("daily"), 10);
    limits.insert(String::from("weekly"), 50);

    Profile {
        UserName: String::from("ada"),
        Age: 36,
        score: 0.25,
        active: true,
        visits: 1 << 40,
        joined: DateTime::<Utc>::from_timestamp_millis(1_600_000_000_123).unwrap(),
        id: ObjectId::from_bytes([7; 12]),
        tags: vec![String::from("admin"), String::from("ops")],
        home: Some(Address {
            city: String::from("London"),
            zip: 1815,
        }),
        backup: None,
        limits,
        history: vec![Address::default(), Address {
            city: String::from("Paris"),
            zip: 75000,
        }],
    }
}

#[test]
fn round_trip_modulo_case() {
    let profile = sample();
    let encoded = vc_bson::to_vec(&profile).unwrap();

    let document = vc_bson::from_slice_document(&encoded).unwrap();
    assert!(document.contains_key("username"));
    assert!(document.contains_key("age"));
    assert!(!document.contains_key("UserName"));

    let decoded: Profile = vc_bson::from_slice(&encoded).unwrap();
    assert_eq!(decoded, profile);
}

#[test]
fn keys_ignore_case() {
    let input = bytes(vec![
        ("USERNAME", Bson::from("grace")),
        ("aGe", Bson::Int32(40)),
    ]);

    let mut profile = Profile::default();
    unmarshal(&input, &mut profile).unwrap();
    assert_eq!(profile.UserName, "grace");
    assert_eq!(profile.Age, 40);
}

#[test]
fn unknown_keys_are_absorbed() {
    let original = sample();
    let input = bytes(vec![
        ("nickname", Bson::from("x")),
        (
            "extra",
            Bson::Object(doc(vec![
                ("deep", Bson::Array(vec![Bson::Int32(1), Bson::Null])),
                ("flag", Bson::Boolean(false)),
            ])),
        ),
        ("tags", Bson::Object(doc(vec![("not", Bson::from("an array"))]))),
        ("visits", Bson::from("not a number")),
        ("home", Bson::Array(vec![Bson::Int32(1)])),
    ]);

    let mut profile = original.clone();
    unmarshal(&input, &mut profile).unwrap();
    assert_eq!(profile, original);
}

#[test]
fn null_keeps_existing_values() {
    let original = sample();
    let input = bytes(vec![
        ("username", Bson::Null),
        ("home", Bson::Null),
        ("tags", Bson::Null),
    ]);

    let mut profile = original.clone();
    unmarshal(&input, &mut profile).unwrap();
    assert_eq!(profile, original);
}

#[test]
fn pointers_allocate_lazily() {
    let mut profile = Profile::default();
    unmarshal(&bytes(vec![("home", Bson::Null), ("backup", Bson::Null)]), &mut profile).unwrap();
    assert_eq!(profile.home, None);
    assert_eq!(profile.backup, None);

    unmarshal(&bytes(vec![("home", Bson::Object(Document::new()))]), &mut profile).unwrap();
    assert_eq!(profile.home, Some(Address::default()));

    let backup = Bson::Object(doc(vec![("City", Bson::from("Rome"))]));
    unmarshal(&bytes(vec![("backup", backup)]), &mut profile).unwrap();
    assert_eq!(profile.backup.as_deref().map(|a| a.city.as_str()), Some("Rome"));

    // The payload does not fit `Address`, so nothing is allocated.
    let mut profile = Profile::default();
    unmarshal(&bytes(vec![("home", Bson::Int32(3))]), &mut profile).unwrap();
    assert_eq!(profile.home, None);
}

#[derive(Reflect, Clone, Default)]
struct Series {
    points: Vec<i32>,
}

/// `{"points": [..]}` with the given array keys, in order.
fn series_input(elements: &[(&str, i32)]) -> Vec<u8> {
    let mut inner = Vec::new();
    for (key, value) in elements {
        inner.push(0x10);
        inner.extend_from_slice(key.as_bytes());
        inner.push(0);
        inner.extend_from_slice(&value.to_le_bytes());
    }
    inner.push(0);

    let mut body = vec![0x04];
    body.extend_from_slice(b"points\0");
    body.extend_from_slice(&((inner.len() + 4) as i32).to_le_bytes());
    body.extend(inner);
    body.push(0);

    let mut input = ((body.len() + 4) as i32).to_le_bytes().to_vec();
    input.extend(body);
    input
}

#[test]
fn sparse_arrays_grow() {
    let series: Series = vc_bson::from_slice(&series_input(&[("100", 5)])).unwrap();
    assert_eq!(series.points.len(), 101);
    assert!(series.points.capacity() >= 101);
    assert_eq!(series.points[100], 5);
    assert!(series.points[..100].iter().all(|&p| p == 0));

    assert_eq!(growth::grown_capacity(0, 100), Some(128));
}

#[test]
fn out_of_order_indices() {
    let input = series_input(&[("2", 30), ("0", 10), ("1", 20), ("0", 11)]);

    let series: Series = vc_bson::from_slice(&input).unwrap();
    assert_eq!(series.points.len(), 3);
    assert_eq!(series.points, [11, 20, 30]);
}

#[test]
fn huge_indices_are_absorbed() {
    let input = series_input(&[
        ("18446744073709551615", 1),
        ("1099511627776", 2),
        ("1", 3),
    ]);

    let series: Series = vc_bson::from_slice(&input).unwrap();
    assert_eq!(series.points, [0, 3]);

    let document = vc_bson::from_slice_document(&input).unwrap();
    assert_eq!(
        document["points"],
        Bson::Array(vec![Bson::Null, Bson::Int32(3)])
    );
}

#[test]
fn arrays_keep_existing_elements() {
    let mut profile = Profile {
        tags: vec![String::from("a"), String::from("b"), String::from("c")],
        ..Profile::default()
    };
    let input = bytes(vec![(
        "tags",
        Bson::Array(vec![Bson::Null, Bson::from("B")]),
    )]);

    unmarshal(&input, &mut profile).unwrap();
    assert_eq!(profile.tags, ["a", "B", "c"]);
}

#[test]
fn map_entries_are_written_back() {
    let mut profile = sample();
    let input = bytes(vec![(
        "limits",
        Bson::Object(doc(vec![
            ("daily", Bson::Int32(20)),
            ("monthly", Bson::Int64(100)),
        ])),
    )]);

    unmarshal(&input, &mut profile).unwrap();
    assert_eq!(profile.limits["daily"], 20);
    assert_eq!(profile.limits["weekly"], 50);
    assert_eq!(profile.limits["monthly"], 100);
}

#[test]
fn nested_map_values_are_written_back() {
    #[derive(Reflect, Clone, Default)]
    struct Directory {
        offices: BTreeMap<String, Address>,
    }

    let mut directory = Directory::default();
    directory.offices.insert(
        String::from("hq"),
        Address {
            city: String::from("Oslo"),
            zip: 150,
        },
    );

    let input = bytes(vec![(
        "offices",
        Bson::Object(doc(vec![
            ("hq", Bson::Object(doc(vec![("zip", Bson::Int32(151))]))),
            ("lab", Bson::Object(doc(vec![("city", Bson::from("Bergen"))]))),
        ])),
    )]);

    unmarshal(&input, &mut directory).unwrap();
    assert_eq!(
        directory.offices["hq"],
        Address {
            city: String::from("Oslo"),
            zip: 151,
        }
    );
    assert_eq!(directory.offices["lab"].city, "Bergen");
}

#[cfg(feature = "std")]
#[test]
fn hash_map_targets() {
    use std::collections::HashMap;

    #[derive(Reflect, Clone, Default)]
    struct Labels {
        by_name: HashMap<String, String>,
        by_id: HashMap<i32, String>,
    }

    let input = bytes(vec![
        ("by_name", Bson::Object(doc(vec![("a", Bson::from("x"))]))),
        ("by_id", Bson::Object(doc(vec![("1", Bson::from("y"))]))),
    ]);

    let labels: Labels = vc_bson::from_slice(&input).unwrap();
    assert_eq!(labels.by_name["a"], "x");
    assert!(labels.by_id.is_empty());
}

#[test]
fn floats_truncate_into_integers() {
    #[derive(Reflect, Clone, Default)]
    struct Counters {
        whole: i32,
        negative: i64,
        ratio: f32,
    }

    let input = bytes(vec![
        ("whole", Bson::Number(3.9)),
        ("negative", Bson::Number(-3.9)),
        ("ratio", Bson::Int64(2)),
    ]);

    let counters: Counters = vc_bson::from_slice(&input).unwrap();
    assert_eq!(counters.whole, 3);
    assert_eq!(counters.negative, -3);
    assert_eq!(counters.ratio, 2.0);
}

#[test]
fn malformed_input() {
    let mut profile = Profile::default();
    assert_eq!(unmarshal(&[5, 0, 0], &mut profile), Err(DecodeError::UnexpectedEof));
    assert_eq!(unmarshal(&[4, 0, 0, 0], &mut profile), Err(DecodeError::MissingTerminator));

    // Elements before the error stay decoded.
    let mut input = bytes(vec![("username", Bson::from("ada"))]);
    input.pop();
    input.extend([0x13, b'x', 0, 0]);
    assert_eq!(
        unmarshal(&input, &mut profile),
        Err(DecodeError::UnsupportedElement {
            tag: 0x13,
            key: String::from("x"),
        })
    );
    assert_eq!(profile.UserName, "ada");
}
