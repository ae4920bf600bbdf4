//! A BSON codec driven by runtime reflection.
//!
//! Any type implementing [`Reflect`] can be decoded from and encoded to a
//! BSON document without per-type code:
//!
//! - Decoding runs the wire [parser](parse) against a
//!   [`ReflectBuilder`](builder::ReflectBuilder). Keys match struct fields
//!   ignoring case, containers grow on demand and pointers are allocated
//!   lazily. Values that do not fit the target are dropped, only malformed
//!   input is an error.
//! - Encoding [marshals](marshal) the value into a [`Bson`] tree, then
//!   [encodes](encode_document) it. Values with no document representation
//!   fail the whole call.
//!
//! ```
//! use vc_reflect::derive::Reflect;
//!
//! #[derive(Reflect, Clone, Default, Debug, PartialEq)]
//! struct Account {
//!     owner: String,
//!     balance: f64,
//!     nickname: Option<String>,
//! }
//!
//! let account = Account {
//!     owner: "grace".into(),
//!     balance: 12.5,
//!     nickname: None,
//! };
//!
//! let bytes = vc_bson::to_vec(&account).unwrap();
//! let decoded: Account = vc_bson::from_slice(&bytes).unwrap();
//! assert_eq!(decoded, account);
//!
//! let doc = vc_bson::from_slice_document(&bytes).unwrap();
//! assert_eq!(doc["owner"].as_str(), Some("grace"));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod document;
mod encoder;
mod error;
mod marshal;
mod oid;
mod parser;

pub mod builder;
pub mod growth;
pub mod resolve;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use document::{Bson, Document, ElementType};
pub use encoder::encode_document;
pub use error::{DecodeError, EncodeError, MarshalError};
pub use marshal::marshal;
pub use oid::ObjectId;
pub use parser::parse;

use alloc::vec::Vec;

use vc_reflect::Reflect;

use builder::{NodeBuilder, ReflectBuilder};

// -----------------------------------------------------------------------------
// Entry points

/// Splits off the `int32` length prefix of a document.
///
/// The declared length is not checked against the input; the body must end
/// with the document terminator regardless.
fn strip_length(bytes: &[u8]) -> Result<&[u8], DecodeError> {
    match bytes.get(4..) {
        Some(body) => Ok(body),
        None => Err(DecodeError::UnexpectedEof),
    }
}

/// Decodes a document into `value`.
///
/// Existing content of `value` that the document does not mention is left
/// untouched. On error, `value` may be partially written.
///
/// ```
/// use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect, Clone, Default)]
/// struct Config {
///     retries: u8,
///     verbose: bool,
/// }
///
/// // {"RETRIES": 3.0, "unknown": true}
/// let bytes = [
///     32, 0, 0, 0,
///     0x01, b'R', b'E', b'T', b'R', b'I', b'E', b'S', 0, 0, 0, 0, 0, 0, 0, 8, 64,
///     0x08, b'u', b'n', b'k', b'n', b'o', b'w', b'n', 0, 1,
///     0,
/// ];
///
/// let mut config = Config { retries: 0, verbose: true };
/// vc_bson::unmarshal(&bytes, &mut config).unwrap();
///
/// assert_eq!(config.retries, 3);
/// assert!(config.verbose);
/// ```
pub fn unmarshal(bytes: &[u8], value: &mut dyn Reflect) -> Result<(), DecodeError> {
    let body = strip_length(bytes)?;
    parse(body, &mut ReflectBuilder::new(value))
}

/// Decodes a document into a fresh `T`.
#[inline]
pub fn from_slice<T: Reflect + Default>(bytes: &[u8]) -> Result<T, DecodeError> {
    let mut value = T::default();
    unmarshal(bytes, &mut value)?;
    Ok(value)
}

/// Decodes a document into its node tree, keeping every element.
pub fn from_slice_document(bytes: &[u8]) -> Result<Document, DecodeError> {
    let body = strip_length(bytes)?;
    let mut node = Bson::Object(Document::new());
    parse(body, &mut NodeBuilder::new(&mut node))?;
    Ok(match node {
        Bson::Object(doc) => doc,
        _ => Document::new(),
    })
}

/// Encodes `value` as a document.
///
/// `value` must marshal to an object, i.e. be a struct, a map keyed by
/// `String` or a pointer to one of those.
///
/// ```
/// use vc_bson::EncodeError;
///
/// assert_eq!(vc_bson::to_vec(&1_i32), Err(EncodeError::NotADocument));
/// ```
pub fn to_vec(value: &dyn Reflect) -> Result<Vec<u8>, EncodeError> {
    match marshal(value)? {
        Bson::Object(doc) => encode_document(&doc),
        _ => Err(EncodeError::NotADocument),
    }
}
