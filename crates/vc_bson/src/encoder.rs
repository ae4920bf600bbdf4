//! Wire format writer.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{Bson, Document, EncodeError};

/// Encodes a document, including its length prefix.
///
/// ```
/// use vc_bson::{Bson, Document, encode_document};
///
/// let mut doc = Document::new();
/// doc.insert("a".into(), Bson::Int32(1));
///
/// let bytes = encode_document(&doc).unwrap();
/// assert_eq!(bytes, [12, 0, 0, 0, 0x10, b'a', 0, 1, 0, 0, 0, 0]);
/// ```
pub fn encode_document(doc: &Document) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::new();
    write_document(&mut buf, doc.iter().map(|(key, value)| (KeyRef::Str(key), value)))?;
    Ok(buf)
}

enum KeyRef<'a> {
    Str(&'a str),
    Index(usize),
}

fn write_document<'a>(
    buf: &mut Vec<u8>,
    elements: impl Iterator<Item = (KeyRef<'a>, &'a Bson)>,
) -> Result<(), EncodeError> {
    let start = buf.len();
    buf.extend_from_slice(&[0; 4]);

    for (key, value) in elements {
        buf.push(value.element_type().tag());
        match key {
            KeyRef::Str(key) => write_cstr(buf, key)?,
            KeyRef::Index(index) => write_cstr(buf, &index.to_string())?,
        }
        write_payload(buf, value)?;
    }
    buf.push(0);

    let len = i32::try_from(buf.len() - start).map_err(|_| EncodeError::DocumentTooLarge)?;
    buf[start..start + 4].copy_from_slice(&len.to_le_bytes());
    Ok(())
}

fn write_cstr(buf: &mut Vec<u8>, value: &str) -> Result<(), EncodeError> {
    if value.as_bytes().contains(&0) {
        return Err(EncodeError::KeyContainsNul(String::from(value)));
    }
    buf.extend_from_slice(value.as_bytes());
    buf.push(0);
    Ok(())
}

fn write_payload(buf: &mut Vec<u8>, value: &Bson) -> Result<(), EncodeError> {
    match value {
        Bson::Null => {}
        Bson::Number(v) => buf.extend_from_slice(&v.to_le_bytes()),
        Bson::String(v) => {
            let len = i32::try_from(v.len() + 1).map_err(|_| EncodeError::DocumentTooLarge)?;
            buf.extend_from_slice(&len.to_le_bytes());
            buf.extend_from_slice(v.as_bytes());
            buf.push(0);
        }
        Bson::Boolean(v) => buf.push(u8::from(*v)),
        Bson::Int32(v) => buf.extend_from_slice(&v.to_le_bytes()),
        Bson::Int64(v) => buf.extend_from_slice(&v.to_le_bytes()),
        Bson::Date(v) => buf.extend_from_slice(&v.timestamp_millis().to_le_bytes()),
        Bson::ObjectId(v) => buf.extend_from_slice(v.as_bytes()),
        Bson::Regex { pattern, options } => {
            write_cstr(buf, pattern)?;
            write_cstr(buf, options)?;
        }
        Bson::Array(items) => {
            let elements = items
                .iter()
                .enumerate()
                .map(|(index, item)| (KeyRef::Index(index), item));
            write_document(buf, elements)?;
        }
        Bson::Object(doc) => {
            let elements = doc.iter().map(|(key, value)| (KeyRef::Str(key), value));
            write_document(buf, elements)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use chrono::{DateTime, Utc};

    use super::encode_document;
    use crate::{Bson, Document, EncodeError, ObjectId};

    #[test]
    fn empty_document() {
        assert_eq!(encode_document(&Document::new()).unwrap(), [5, 0, 0, 0, 0]);
    }

    #[test]
    fn arrays_use_index_keys() {
        let mut doc = Document::new();
        doc.insert(
            "a".into(),
            Bson::Array(vec![Bson::Boolean(true), Bson::Null]),
        );

        #[rustfmt::skip]
        let expected = [
            20, 0, 0, 0,
            0x04, b'a', 0,
                12, 0, 0, 0,
                0x08, b'0', 0, 1,
                0x0A, b'1', 0,
                0,
            0,
        ];
        assert_eq!(encode_document(&doc).unwrap(), expected);
    }

    #[test]
    fn leaf_payloads() {
        let mut doc = Document::new();
        doc.insert("s".into(), Bson::from("hi"));
        doc.insert(
            "d".into(),
            Bson::Date(DateTime::<Utc>::from_timestamp_millis(258).unwrap()),
        );
        doc.insert("o".into(), Bson::ObjectId(ObjectId::from_bytes([1; 12])));

        let bytes = encode_document(&doc).unwrap();
        let expected_len = 4 + (1 + 2 + 4 + 3) + (1 + 2 + 8) + (1 + 2 + 12) + 1;
        assert_eq!(bytes.len(), expected_len);
        assert_eq!(bytes[7..14], [3, 0, 0, 0, b'h', b'i', 0]);
        assert_eq!(bytes[17..25], 258_i64.to_le_bytes());
    }

    #[test]
    fn nul_in_key() {
        let mut doc = Document::new();
        doc.insert(String::from("a\0b"), Bson::Null);
        assert_eq!(
            encode_document(&doc),
            Err(EncodeError::KeyContainsNul(String::from("a\0b")))
        );
    }
}
