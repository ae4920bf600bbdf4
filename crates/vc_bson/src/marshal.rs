use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use chrono::{DateTime, Utc};
use vc_reflect::Reflect;
use vc_reflect::ops::{ReflectRef, ScalarRef};

use crate::{Bson, Document, MarshalError, ObjectId, resolve};

/// Converts a value into a document node.
///
/// | value                                   | node            |
/// |-----------------------------------------|-----------------|
/// | `f64`, `f32`                            | `Number`        |
/// | `i32`, `i16`, `i8`, `u16`, `u8`         | `Int32`         |
/// | `i64`, `isize`, `u32`                   | `Int64`         |
/// | `bool`                                  | `Boolean`       |
/// | `String`, `&'static str`                | `String`        |
/// | `DateTime<Utc>`                         | `Date`          |
/// | [`ObjectId`]                            | `ObjectId`      |
/// | structs, maps keyed by `String`         | `Object`        |
/// | `Vec<T>`, `[T; N]`                      | `Array`         |
/// | `Option<T>`, `Box<T>`                   | `Null` or `T`   |
///
/// Struct fields appear in declaration order under their lower-cased names.
/// Anything else fails, as does a pointer to a pointer. The first failure
/// aborts the whole call.
///
/// ```
/// use vc_bson::{Bson, marshal};
/// use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect, Clone, Default)]
/// #[allow(non_snake_case)]
/// struct Point {
///     X: i32,
///     Label: Option<String>,
/// }
///
/// let node = marshal(&Point { X: 3, Label: None }).unwrap();
/// let doc = node.as_document().unwrap();
///
/// assert_eq!(doc["x"], Bson::Int32(3));
/// assert_eq!(doc["label"], Bson::Null);
///
/// let err = marshal(&1_u64).unwrap_err();
/// assert_eq!(err.type_path(), "u64");
/// ```
pub fn marshal(value: &dyn Reflect) -> Result<Bson, MarshalError> {
    Marshaller::default().value(value, false)
}

/// Walks a value, tracking where it is for error reports.
#[derive(Default)]
struct Marshaller {
    path: String,
}

impl Marshaller {
    fn value(&mut self, value: &dyn Reflect, through_pointer: bool) -> Result<Bson, MarshalError> {
        match value.reflect_ref() {
            ReflectRef::Scalar(scalar) => self.scalar(scalar),
            ReflectRef::Opaque(value) => self.opaque(value),
            ReflectRef::Pointer(pointer) => {
                if through_pointer {
                    return Err(self.unsupported(pointer.reflect_type_path()));
                }
                match pointer.pointee() {
                    Some(pointee) => self.value(pointee, true),
                    None => Ok(Bson::Null),
                }
            }
            ReflectRef::Struct(fields) => {
                let info = fields
                    .reflect_type_info()
                    .as_struct()
                    .map_err(|_| self.unsupported(fields.reflect_type_path()))?;

                let mut doc = Document::with_capacity(info.field_len());
                for (index, field) in info.iter().enumerate() {
                    let Some(item) = fields.field_at(index) else {
                        continue;
                    };
                    let name = field.lowercase_name();
                    let node = self.nested(format_args!(".{name}"), |this| this.value(item, false))?;
                    doc.insert(String::from(name), node);
                }
                Ok(Bson::Object(doc))
            }
            ReflectRef::Map(map) => {
                let accepted = map
                    .reflect_type_info()
                    .as_map()
                    .is_ok_and(resolve::accepts_string_keys);
                if !accepted {
                    return Err(MarshalError::UnsupportedKeyType {
                        type_path: map.reflect_type_path(),
                        path: self.path.clone(),
                    });
                }

                let mut doc = Document::with_capacity(map.len());
                for (key, item) in map.iter() {
                    let Some(key) = key.downcast_ref::<String>() else {
                        continue;
                    };
                    let node = self.nested(format_args!(".{key}"), |this| this.value(item, false))?;
                    doc.insert(key.clone(), node);
                }
                Ok(Bson::Object(doc))
            }
            ReflectRef::List(list) => self.items(list.iter(), list.len()),
            ReflectRef::Array(array) => self.items(array.iter(), array.len()),
        }
    }

    fn scalar(&self, scalar: ScalarRef<'_>) -> Result<Bson, MarshalError> {
        Ok(match scalar {
            ScalarRef::F64(v) => Bson::Number(*v),
            ScalarRef::F32(v) => Bson::Number(f64::from(*v)),
            ScalarRef::I32(v) => Bson::Int32(*v),
            ScalarRef::I16(v) => Bson::Int32(i32::from(*v)),
            ScalarRef::I8(v) => Bson::Int32(i32::from(*v)),
            ScalarRef::U16(v) => Bson::Int32(i32::from(*v)),
            ScalarRef::U8(v) => Bson::Int32(i32::from(*v)),
            ScalarRef::I64(v) => Bson::Int64(*v),
            ScalarRef::Isize(v) => Bson::Int64(*v as i64),
            ScalarRef::U32(v) => Bson::Int64(i64::from(*v)),
            ScalarRef::Bool(v) => Bson::Boolean(*v),
            ScalarRef::String(v) => Bson::String(v.clone()),
            ScalarRef::U64(_) | ScalarRef::Usize(_) => {
                return Err(self.unsupported(scalar.as_reflect().reflect_type_path()));
            }
        })
    }

    fn opaque(&self, value: &dyn Reflect) -> Result<Bson, MarshalError> {
        if let Some(date) = value.downcast_ref::<DateTime<Utc>>() {
            return Ok(Bson::Date(*date));
        }
        if let Some(oid) = value.downcast_ref::<ObjectId>() {
            return Ok(Bson::ObjectId(*oid));
        }
        if let Some(text) = value.downcast_ref::<&'static str>() {
            return Ok(Bson::String(String::from(*text)));
        }
        Err(self.unsupported(value.reflect_type_path()))
    }

    fn items<'v>(
        &mut self,
        items: impl Iterator<Item = &'v dyn Reflect>,
        len: usize,
    ) -> Result<Bson, MarshalError> {
        let mut out = Vec::with_capacity(len);
        for (index, item) in items.enumerate() {
            out.push(self.nested(format_args!("[{index}]"), |this| this.value(item, false))?);
        }
        Ok(Bson::Array(out))
    }

    /// Runs `f` with `segment` appended to the path.
    ///
    /// The path is only restored on success; a failure carries it out.
    fn nested<T>(
        &mut self,
        segment: core::fmt::Arguments<'_>,
        f: impl FnOnce(&mut Self) -> Result<T, MarshalError>,
    ) -> Result<T, MarshalError> {
        let len = self.path.len();
        // Writing into a `String` cannot fail.
        let _ = self.path.write_fmt(segment);
        if len == 0 && self.path.starts_with('.') {
            self.path.remove(0);
        }
        let out = f(self)?;
        self.path.truncate(len);
        Ok(out)
    }

    fn unsupported(&self, type_path: &'static str) -> MarshalError {
        MarshalError::UnsupportedType {
            type_path,
            path: self.path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use vc_reflect::derive::Reflect;

    use super::marshal;
    use crate::{Bson, MarshalError};

    #[derive(Reflect, Clone, Default)]
    #[allow(non_snake_case)]
    struct Leaf {
        Small: u8,
        wide: u32,
        ratio: f32,
        size: isize,
    }

    #[derive(Reflect, Clone, Default)]
    struct Outer {
        leaves: Vec<Leaf>,
        pair: [i16; 2],
        tags: BTreeMap<String, bool>,
        boxed: Box<i64>,
        missing: Option<Leaf>,
    }

    #[test]
    fn widening_and_containers() {
        let mut tags = BTreeMap::new();
        tags.insert(String::from("b"), true);
        tags.insert(String::from("a"), false);

        let outer = Outer {
            leaves: vec![Leaf {
                Small: 200,
                wide: u32::MAX,
                ratio: 0.5,
                size: -1,
            }],
            pair: [-1, 2],
            tags,
            boxed: Box::new(9),
            missing: None,
        };

        let node = marshal(&outer).unwrap();
        let doc = node.as_document().unwrap();
        let keys: Vec<&str> = doc.keys().map(String::as_str).collect();
        assert_eq!(keys, ["leaves", "pair", "tags", "boxed", "missing"]);

        let leaf = doc["leaves"].as_array().unwrap()[0].as_document().unwrap();
        assert_eq!(leaf["small"], Bson::Int32(200));
        assert_eq!(leaf["wide"], Bson::Int64(i64::from(u32::MAX)));
        assert_eq!(leaf["ratio"], Bson::Number(0.5));
        assert_eq!(leaf["size"], Bson::Int64(-1));

        assert_eq!(doc["pair"], Bson::Array(vec![Bson::Int32(-1), Bson::Int32(2)]));

        let tags = doc["tags"].as_document().unwrap();
        let keys: Vec<&str> = tags.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b"]);

        assert_eq!(doc["boxed"], Bson::Int64(9));
        assert_eq!(doc["missing"], Bson::Null);
    }

    #[test]
    fn static_str_and_roots() {
        assert_eq!(marshal(&"hi").unwrap(), Bson::from("hi"));
        assert_eq!(marshal(&Some(1.5_f64)).unwrap(), Bson::Number(1.5));
    }

    #[test]
    fn errors_carry_the_path() {
        #[derive(Reflect, Clone, Default)]
        struct Bad {
            items: Vec<Inner>,
        }

        #[derive(Reflect, Clone, Default)]
        struct Inner {
            count: usize,
        }

        let bad = Bad {
            items: vec![Inner::default(), Inner::default()],
        };
        assert_eq!(
            marshal(&bad),
            Err(MarshalError::UnsupportedType {
                type_path: "usize",
                path: String::from("items[0].count"),
            })
        );

        let err = marshal(&'c').unwrap_err();
        assert_eq!(err.type_path(), "char");
        assert_eq!(err.path(), "");
    }

    #[test]
    fn pointer_to_pointer() {
        let nested: Option<Box<i32>> = Some(Box::new(1));
        assert!(matches!(
            marshal(&nested),
            Err(MarshalError::UnsupportedType { .. })
        ));

        let empty: Option<Box<i32>> = None;
        assert_eq!(marshal(&empty).unwrap(), Bson::Null);
    }

    #[test]
    fn non_string_keys() {
        let mut map = BTreeMap::new();
        map.insert(1_i32, String::from("x"));
        assert!(matches!(
            marshal(&map),
            Err(MarshalError::UnsupportedKeyType { .. })
        ));
    }
}
