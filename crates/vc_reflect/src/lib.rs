//! Runtime type information for the BSON codec.
//!
//! Every reflected type has a [`TypeInfo`](info::TypeInfo), produced once and
//! cached by type identity, which classifies it as exactly one of
//! `Scalar`, `Struct`, `List`, `Array`, `Map`, `Pointer` or `Opaque`.
//! Values are reached through the object safe [`Reflect`] trait and its
//! per-kind views [`ReflectRef`](ops::ReflectRef) / [`ReflectMut`](ops::ReflectMut).
//!
//! ```
//! use vc_reflect::{Reflect, derive::Reflect, info::{Typed, ReflectKind}};
//!
//! #[derive(Reflect, Clone, Default)]
//! struct Point {
//!     x: f64,
//!     y: f64,
//! }
//!
//! let info = Point::type_info().as_struct().unwrap();
//! assert_eq!(info.field_len(), 2);
//!
//! let p = Point::default();
//! assert_eq!(p.reflect_kind(), ReflectKind::Struct);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Derive output refers to `::vc_reflect`, including inside this crate's own
// tests and doc tests.
extern crate self as vc_reflect;

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;

// Type info caches are built on `std::sync`, the `std` feature only gates
// `HashMap` support.
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod macros;
mod reflection;

pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use reflection::Reflect;
pub use vc_reflect_derive as derive;
