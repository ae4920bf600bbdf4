use alloc::string::String;
use core::fmt;

// -----------------------------------------------------------------------------
// DecodeError

/// A malformed document was fed to the parser.
///
/// Only wire problems are errors. Values that do not fit the target are
/// silently dropped while decoding, see [`Builder`](crate::builder::Builder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input ended in the middle of a value.
    UnexpectedEof,
    /// A length prefix is negative, too small or exceeds the input.
    InvalidLength(i32),
    /// A document ended without its `0x00` terminator.
    MissingTerminator,
    /// A string or key is not valid UTF-8.
    InvalidUtf8,
    /// An element type this codec does not handle.
    UnsupportedElement { tag: u8, key: String },
    /// An array element whose key is not a decimal index.
    InvalidArrayIndex(String),
    /// A datetime outside the range of `DateTime<Utc>`.
    InvalidDate(i64),
    /// Bytes follow the terminator of a document.
    TrailingBytes,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => f.write_str("unexpected end of document"),
            Self::InvalidLength(len) => write!(f, "invalid length prefix `{len}`"),
            Self::MissingTerminator => f.write_str("document is missing its terminator"),
            Self::InvalidUtf8 => f.write_str("string is not valid UTF-8"),
            Self::UnsupportedElement { tag, key } => {
                write!(f, "unsupported element type `{tag:#04x}` for key `{key}`")
            }
            Self::InvalidArrayIndex(key) => write!(f, "invalid array index `{key}`"),
            Self::InvalidDate(millis) => write!(f, "datetime `{millis}` is out of range"),
            Self::TrailingBytes => f.write_str("trailing bytes after document terminator"),
        }
    }
}

impl core::error::Error for DecodeError {}

// -----------------------------------------------------------------------------
// MarshalError

/// A value could not be turned into a document node.
///
/// `path` locates the offending value from the root, e.g. `outer.items[2]`,
/// and is empty for the root itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarshalError {
    /// The type has no document representation.
    UnsupportedType {
        type_path: &'static str,
        path: String,
    },
    /// A map whose key type is not `String`.
    UnsupportedKeyType {
        type_path: &'static str,
        path: String,
    },
}

impl MarshalError {
    /// Returns the type path of the offending value.
    pub fn type_path(&self) -> &'static str {
        match self {
            Self::UnsupportedType { type_path, .. } | Self::UnsupportedKeyType { type_path, .. } => {
                type_path
            }
        }
    }

    /// Returns the location of the offending value.
    pub fn path(&self) -> &str {
        match self {
            Self::UnsupportedType { path, .. } | Self::UnsupportedKeyType { path, .. } => path,
        }
    }
}

impl fmt::Display for MarshalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedType { type_path, .. } => {
                write!(f, "don't know how to marshal `{type_path}`")?;
            }
            Self::UnsupportedKeyType { type_path, .. } => {
                write!(f, "can't marshal map `{type_path}` with non-string key type")?;
            }
        }
        match self.path() {
            "" => Ok(()),
            path => write!(f, " at `{path}`"),
        }
    }
}

impl core::error::Error for MarshalError {}

// -----------------------------------------------------------------------------
// EncodeError

/// A value could not be written as a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Marshalling the value failed.
    Marshal(MarshalError),
    /// The value does not marshal to an object, so it cannot be a top-level document.
    NotADocument,
    /// A key or regex contains a NUL byte and cannot be written as a C string.
    KeyContainsNul(String),
    /// A document does not fit its `i32` length prefix.
    DocumentTooLarge,
}

impl From<MarshalError> for EncodeError {
    #[inline]
    fn from(value: MarshalError) -> Self {
        Self::Marshal(value)
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Marshal(err) => fmt::Display::fmt(err, f),
            Self::NotADocument => f.write_str("only objects can be encoded as documents"),
            Self::KeyContainsNul(key) => write!(f, "`{key}` contains a NUL byte"),
            Self::DocumentTooLarge => f.write_str("document exceeds the maximum size"),
        }
    }
}

impl core::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Marshal(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use super::{EncodeError, MarshalError};

    #[test]
    fn marshal_error_display() {
        let root = MarshalError::UnsupportedType {
            type_path: "char",
            path: String::new(),
        };
        assert_eq!(root.to_string(), "don't know how to marshal `char`");

        let nested = MarshalError::UnsupportedKeyType {
            type_path: "Map",
            path: "outer.items[2]".to_string(),
        };
        assert_eq!(
            nested.to_string(),
            "can't marshal map `Map` with non-string key type at `outer.items[2]`"
        );
        assert_eq!(nested.path(), "outer.items[2]");
    }

    #[test]
    fn encode_error_source() {
        use core::error::Error;

        let err = EncodeError::from(MarshalError::UnsupportedType {
            type_path: "u64",
            path: "id".to_string(),
        });
        assert!(err.source().is_some());
        assert!(EncodeError::NotADocument.source().is_none());
    }
}
