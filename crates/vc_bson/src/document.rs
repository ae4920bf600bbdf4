use alloc::string::String;
use alloc::vec::Vec;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::ObjectId;

/// The fields of an object, in insertion order.
///
/// Struct fields are inserted in declaration order, which is the order they
/// are written on the wire.
pub type Document = IndexMap<String, Bson>;

// -----------------------------------------------------------------------------
// Bson

/// One value of the document model.
///
/// ```
/// use vc_bson::{Bson, Document};
///
/// let mut doc = Document::new();
/// doc.insert("name".into(), Bson::from("ada"));
/// doc.insert("age".into(), Bson::Int32(36));
///
/// let node = Bson::Object(doc);
/// assert_eq!(node.element_type(), vc_bson::ElementType::Document);
/// assert_eq!(node.as_document().unwrap()["age"], Bson::Int32(36));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Bson {
    Null,
    Number(f64),
    String(String),
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Date(DateTime<Utc>),
    ObjectId(ObjectId),
    Regex { pattern: String, options: String },
    Array(Vec<Bson>),
    Object(Document),
}

impl Bson {
    /// Returns the wire element type of this node.
    pub const fn element_type(&self) -> ElementType {
        match self {
            Self::Null => ElementType::Null,
            Self::Number(_) => ElementType::Double,
            Self::String(_) => ElementType::String,
            Self::Boolean(_) => ElementType::Boolean,
            Self::Int32(_) => ElementType::Int32,
            Self::Int64(_) => ElementType::Int64,
            Self::Date(_) => ElementType::DateTime,
            Self::ObjectId(_) => ElementType::ObjectId,
            Self::Regex { .. } => ElementType::Regex,
            Self::Array(_) => ElementType::Array,
            Self::Object(_) => ElementType::Document,
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Self::Object(doc) => Some(doc),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&[Bson]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Bson {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

impl_from! {
    f64 => Number,
    bool => Boolean,
    i32 => Int32,
    i64 => Int64,
    String => String,
    &str => String,
    DateTime<Utc> => Date,
    ObjectId => ObjectId,
    Vec<Bson> => Array,
    Document => Object,
}

// -----------------------------------------------------------------------------
// ElementType

/// Element type bytes of the supported wire subset.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Double = 0x01,
    String = 0x02,
    Document = 0x03,
    Array = 0x04,
    ObjectId = 0x07,
    Boolean = 0x08,
    DateTime = 0x09,
    Null = 0x0A,
    Regex = 0x0B,
    Int32 = 0x10,
    Int64 = 0x12,
}

impl ElementType {
    /// Returns the element type for a wire tag, or `None` if unsupported.
    pub const fn from_tag(tag: u8) -> Option<Self> {
        Some(match tag {
            0x01 => Self::Double,
            0x02 => Self::String,
            0x03 => Self::Document,
            0x04 => Self::Array,
            0x07 => Self::ObjectId,
            0x08 => Self::Boolean,
            0x09 => Self::DateTime,
            0x0A => Self::Null,
            0x0B => Self::Regex,
            0x10 => Self::Int32,
            0x12 => Self::Int64,
            _ => return None,
        })
    }

    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::{Bson, ElementType};

    #[test]
    fn element_tags() {
        for tag in 0..=u8::MAX {
            if let Some(ty) = ElementType::from_tag(tag) {
                assert_eq!(ty.tag(), tag);
            }
        }
        assert_eq!(ElementType::from_tag(0x05), None);
        assert_eq!(ElementType::from_tag(0x13), None);
    }

    #[test]
    fn node_conversions() {
        assert_eq!(Bson::from(1.5), Bson::Number(1.5));
        assert_eq!(Bson::from("x").as_str(), Some("x"));
        assert!(Bson::Null.is_null());
        assert_eq!(Bson::from(7_i64).element_type(), ElementType::Int64);
    }
}
