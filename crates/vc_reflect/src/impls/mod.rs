//! Provide some utilities for implementing reflection traits.
//!
//! - [`concat`]: An efficient string concatenation function.
//! - [`NonGenericTypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericTypePathCell`]: Used to implement [`TypePath`] for generic types.
//! - [`GenericTypeInfoCell`]: Used to implement [`Typed`] for generic types.
//! - `xxx_debug`: Used to implement [`Reflect::reflect_debug`] (e.g. [`struct_debug`]).
//!
//! ## Implemented Menu
//!
//! - scalar:
//!     - `bool`, `i8`-`i64`, `isize`, `u8`-`u64`, `usize`, `f32`, `f64`, `String`
//! - native:
//!     - `[T; N]`
//! - core:
//!     - `Option<T>` (nullable pointer)
//!     - opaque: `char`, `()`, `&'static str`, `core::time::Duration`
//! - alloc:
//!     - `Vec<T>`, `Box<T>`, `BTreeMap<K, V>`
//! - std: ("std" feature)
//!     - `HashMap<K, V>`
//! - chrono: ("chrono" feature)
//!     - `DateTime<Utc>` (opaque)
//!
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
//! [`TypePath`]: crate::info::TypePath
//! [`Typed`]: crate::info::Typed

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod utils;

mod alloc;
mod core;
mod native;

#[cfg(feature = "std")]
mod std;

#[cfg(feature = "chrono")]
mod chrono;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

pub use utils::*;

/// An efficient string concatenation function.
///
/// This is usually used for the implementation of `TypePath`.
///
/// # Example
///
/// ```
/// use vc_reflect::impls;
///
/// let s = impls::concat(&["module", "::", "name", "<", "T" , ">"]);
///
/// assert_eq!(s.capacity(), 15);
/// ```
///
/// Inline is prohibited here to reduce compilation time.
#[inline(never)]
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let mut len = 0usize;
    for &item in arr {
        len += item.len();
    }
    let mut res = ::alloc::string::String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}
