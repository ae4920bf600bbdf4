//! Wire format reader.
//!
//! Walks a document and reports its content as [`Builder`] events. Errors
//! stop the walk immediately, leaving whatever was already built in place.

use alloc::string::{String, ToString};

use chrono::{DateTime, Utc};
use log::trace;

use crate::builder::{Builder, Scalar};
use crate::{DecodeError, ElementType, ObjectId};

// -----------------------------------------------------------------------------
// Reader

struct Reader<'a> {
    bytes: &'a [u8],
}

impl<'a> Reader<'a> {
    #[inline]
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        if self.bytes.len() < len {
            return Err(DecodeError::UnexpectedEof);
        }
        let (head, tail) = self.bytes.split_at(len);
        self.bytes = tail;
        Ok(head)
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    #[inline]
    fn u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.array::<1>()?[0])
    }

    #[inline]
    fn i32(&mut self) -> Result<i32, DecodeError> {
        self.array().map(i32::from_le_bytes)
    }

    #[inline]
    fn i64(&mut self) -> Result<i64, DecodeError> {
        self.array().map(i64::from_le_bytes)
    }

    #[inline]
    fn f64(&mut self) -> Result<f64, DecodeError> {
        self.array().map(f64::from_le_bytes)
    }

    /// A NUL terminated string.
    fn cstr(&mut self) -> Result<&'a str, DecodeError> {
        let end = self
            .bytes
            .iter()
            .position(|&b| b == 0)
            .ok_or(DecodeError::UnexpectedEof)?;
        let bytes = self.take(end + 1)?;
        core::str::from_utf8(&bytes[..end]).map_err(|_| DecodeError::InvalidUtf8)
    }

    /// An `int32` length (counting the trailing NUL), the bytes and a NUL.
    fn string(&mut self) -> Result<&'a str, DecodeError> {
        let len = self.i32()?;
        let size = usize::try_from(len)
            .ok()
            .filter(|&size| size >= 1)
            .ok_or(DecodeError::InvalidLength(len))?;
        let bytes = self.take(size)?;
        if bytes[size - 1] != 0 {
            return Err(DecodeError::MissingTerminator);
        }
        core::str::from_utf8(&bytes[..size - 1]).map_err(|_| DecodeError::InvalidUtf8)
    }

    /// An embedded document, returned without its length prefix.
    fn document(&mut self) -> Result<&'a [u8], DecodeError> {
        let len = self.i32()?;
        let body = usize::try_from(len)
            .ok()
            .and_then(|size| size.checked_sub(4))
            .filter(|&body| body >= 1 && body <= self.bytes.len())
            .ok_or(DecodeError::InvalidLength(len))?;
        self.take(body)
    }
}

// -----------------------------------------------------------------------------
// Parser

/// Parses a document body (a document without its length prefix) into
/// `builder`.
///
/// The builder first receives [`begin_object`](Builder::begin_object), then
/// one [`key`](Builder::key) per element. Every child builder is
/// [flushed](Builder::flush) once its value is complete.
///
/// ```
/// use vc_bson::{Bson, builder::NodeBuilder, parse};
///
/// // {"a": 1_i32}
/// let body = [0x10, b'a', 0, 1, 0, 0, 0, 0];
///
/// let mut node = Bson::Null;
/// parse(&body, &mut NodeBuilder::new(&mut node)).unwrap();
///
/// assert_eq!(node.as_document().unwrap()["a"], Bson::Int32(1));
/// ```
pub fn parse(body: &[u8], builder: &mut dyn Builder) -> Result<(), DecodeError> {
    builder.begin_object();
    parse_elements(&mut Reader::new(body), builder, false)
}

/// Parses elements up to and including the terminator, which must be the
/// last byte of `reader`.
fn parse_elements(
    reader: &mut Reader<'_>,
    builder: &mut dyn Builder,
    is_array: bool,
) -> Result<(), DecodeError> {
    loop {
        let tag = match reader.u8() {
            Ok(tag) => tag,
            Err(_) => return Err(DecodeError::MissingTerminator),
        };
        if tag == 0 {
            return match reader.is_empty() {
                true => Ok(()),
                false => Err(DecodeError::TrailingBytes),
            };
        }

        let key = reader.cstr()?;
        trace!("element {tag:#04x} `{key}`");

        let mut child = if is_array {
            let index = key
                .parse::<usize>()
                .map_err(|_| DecodeError::InvalidArrayIndex(key.to_string()))?;
            builder.elem(index)
        } else {
            builder.key(key)
        };
        parse_value(reader, &mut *child, tag, key)?;
        child.flush();
    }
}

fn parse_value(
    reader: &mut Reader<'_>,
    builder: &mut dyn Builder,
    tag: u8,
    key: &str,
) -> Result<(), DecodeError> {
    let Some(element_type) = ElementType::from_tag(tag) else {
        return Err(DecodeError::UnsupportedElement {
            tag,
            key: String::from(key),
        });
    };

    let value = match element_type {
        ElementType::Double => Scalar::Float64(reader.f64()?),
        ElementType::String => Scalar::String(reader.string()?),
        ElementType::Document => {
            let mut body = Reader::new(reader.document()?);
            builder.begin_object();
            return parse_elements(&mut body, builder, false);
        }
        ElementType::Array => {
            let mut body = Reader::new(reader.document()?);
            builder.begin_array();
            return parse_elements(&mut body, builder, true);
        }
        ElementType::ObjectId => Scalar::ObjectId(ObjectId::from_bytes(reader.array()?)),
        ElementType::Boolean => Scalar::Bool(reader.u8()? != 0),
        ElementType::DateTime => {
            let millis = reader.i64()?;
            let date =
                DateTime::<Utc>::from_timestamp_millis(millis).ok_or(DecodeError::InvalidDate(millis))?;
            Scalar::Date(date)
        }
        ElementType::Null => Scalar::Null,
        ElementType::Regex => {
            let pattern = reader.cstr()?;
            let options = reader.cstr()?;
            Scalar::Regex { pattern, options }
        }
        ElementType::Int32 => Scalar::Int32(reader.i32()?),
        ElementType::Int64 => Scalar::Int64(reader.i64()?),
    };

    builder.scalar(value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::parse;
    use crate::builder::NodeBuilder;
    use crate::{Bson, DecodeError};

    fn parse_node(body: &[u8]) -> Result<Bson, DecodeError> {
        let mut node = Bson::Null;
        parse(body, &mut NodeBuilder::new(&mut node))?;
        Ok(node)
    }

    fn element(tag: u8, key: &str, payload: &[u8]) -> Vec<u8> {
        let mut out = vec![tag];
        out.extend_from_slice(key.as_bytes());
        out.push(0);
        out.extend_from_slice(payload);
        out
    }

    #[test]
    fn empty_body() {
        assert_eq!(parse_node(&[0]), Ok(Bson::Object(Default::default())));
        assert_eq!(parse_node(&[]), Err(DecodeError::MissingTerminator));
        assert_eq!(parse_node(&[0, 0]), Err(DecodeError::TrailingBytes));
    }

    #[test]
    fn strings() {
        let mut body = element(0x02, "s", &[3, 0, 0, 0, b'h', b'i', 0]);
        body.push(0);
        let node = parse_node(&body).unwrap();
        assert_eq!(node.as_document().unwrap()["s"], Bson::from("hi"));

        let mut bad = element(0x02, "s", &[0, 0, 0, 0]);
        bad.push(0);
        assert_eq!(parse_node(&bad), Err(DecodeError::InvalidLength(0)));

        let mut unterminated = element(0x02, "s", &[2, 0, 0, 0, b'h', b'i']);
        unterminated.push(0);
        assert_eq!(parse_node(&unterminated), Err(DecodeError::MissingTerminator));
    }

    #[test]
    fn nested_array() {
        // {"a": [true, null]}
        let mut inner = element(0x08, "0", &[1]);
        inner.extend(element(0x0A, "1", &[]));
        inner.push(0);
        let mut payload = ((inner.len() + 4) as i32).to_le_bytes().to_vec();
        payload.extend(inner);

        let mut body = element(0x04, "a", &payload);
        body.push(0);

        let node = parse_node(&body).unwrap();
        assert_eq!(
            node.as_document().unwrap()["a"],
            Bson::Array(vec![Bson::Boolean(true), Bson::Null])
        );
    }

    #[test]
    fn wire_errors() {
        let mut unsupported = element(0x05, "bin", &[0, 0, 0, 0, 0]);
        unsupported.push(0);
        assert_eq!(
            parse_node(&unsupported),
            Err(DecodeError::UnsupportedElement {
                tag: 0x05,
                key: String::from("bin"),
            })
        );

        let mut bad_index = element(0x04, "a", &[12, 0, 0, 0]);
        bad_index.extend(element(0x10, "x", &[1, 0, 0, 0]));
        bad_index.extend([0, 0]);
        assert_eq!(
            parse_node(&bad_index),
            Err(DecodeError::InvalidArrayIndex(String::from("x")))
        );

        let truncated = element(0x12, "n", &[1, 0, 0]);
        assert_eq!(parse_node(&truncated), Err(DecodeError::UnexpectedEof));

        let bad_utf8 = [0x10, 0xFF, 0, 1, 0, 0, 0, 0];
        assert_eq!(parse_node(&bad_utf8), Err(DecodeError::InvalidUtf8));
    }
}
