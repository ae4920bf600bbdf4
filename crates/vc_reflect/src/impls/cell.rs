//! Containers for static storage of type information.
//!
//! This is usually used to implement [`Typed`](crate::info::Typed);
//!
//! ## NonGenericTypeCell
//!
//! For non generic types, provide [`NonGenericTypeInfoCell`] for storing [`TypeInfo`]
//!
//! Internally, there is an [`OnceLock<T>`], almost no additional expenses.
//!
//! There is no `NonGenericTypePathCell` because it can be replaced by a static string literal.
//!
//! ## GenericTypeCell
//!
//! For generic types, provide the following containers:
//! - [`GenericTypeInfoCell`]: Storage [`TypeInfo`]
//! - [`GenericTypePathCell`]: Storage [`String`]
//!
//! If the type is generic, the `static CELL` inside the function is shared by every
//! instantiation. Therefore, the inner of this container is a map keyed by [`TypeId`]
//! wrapped in [`RwLock`].

use alloc::{boxed::Box, string::String};
use core::any::{Any, TypeId};
use core::hash::{BuildHasher, Hasher};
use std::sync::{OnceLock, PoisonError, RwLock};

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;
    use alloc::string::String;
    pub trait TypedProperty: 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

// -----------------------------------------------------------------------------
// TypeIdMap

/// A hasher that passes the `u64` written by `TypeId` straight through.
#[derive(Clone, Copy, Default)]
struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes.iter().rev() {
            self.hash = self.hash.rotate_left(8).wrapping_add(*byte as u64);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

#[derive(Clone, Copy, Default)]
struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline]
    fn build_hasher(&self) -> NoOpHasher {
        NoOpHasher::default()
    }
}

type TypeIdMap<V> = HashMap<TypeId, V, NoOpHashState>;

// -----------------------------------------------------------------------------
// NonGenericTypeCell

/// Container for static storage of non-generic type information.
///
/// See more information in [`NonGenericTypeInfoCell`].
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// Container for static storage of non-generic type information.
///
/// This is usually used to implement [`Typed`](crate::info::Typed).
///
/// ## Example
///
/// ```
/// use vc_reflect::{info::{TypePath, Typed, TypeInfo, OpaqueInfo}, impls::NonGenericTypeInfoCell};
///
/// struct Token;
///
/// impl TypePath for Token {
///     fn type_path() -> &'static str { "demo::Token" }
///     fn type_name() -> &'static str { "Token" }
/// }
///
/// impl Typed for Token {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Token>()))
///     }
/// }
///
/// assert_eq!(Token::type_info().type_path(), "demo::Token");
/// ```
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns a reference to the `Info` stored in the cell.
    ///
    /// If there is no entry found, a new one will be generated from the given function.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeCell

/// Container for static storage of type information with generics.
///
/// If the type contains generics, the `static CELL` in the function may be shared by multiple types,
/// therefore, the interior of the container is a `TypeId` keyed map behind a [`RwLock`].
///
/// See more information in [`GenericTypeInfoCell`] and [`GenericTypePathCell`].
pub struct GenericTypeCell<T: TypedProperty>(RwLock<TypeIdMap<&'static T>>);

/// Container for static storage of type information with generics.
///
/// ## Example
///
/// ```
/// use vc_reflect::{info::{TypePath, Typed, TypeInfo, OpaqueInfo}, impls::{self, GenericTypeInfoCell, GenericTypePathCell}};
///
/// struct Wrapper<T>(T);
///
/// impl<T: TypePath> TypePath for Wrapper<T> {
///     fn type_path() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| impls::concat(&["demo::Wrapper<", T::type_path(), ">"]))
///     }
///     fn type_name() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| impls::concat(&["Wrapper<", T::type_name(), ">"]))
///     }
/// }
///
/// impl<T: TypePath> Typed for Wrapper<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert_eq!(<Wrapper<u8>>::type_info().type_path(), "demo::Wrapper<u8>");
/// assert_eq!(<Wrapper<i64>>::type_info().type_name(), "Wrapper<i64>");
/// ```
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// Container for static storage of type path with generics.
///
/// See the example in [`GenericTypeInfoCell`].
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(HashMap::with_hasher(NoOpHashState)))
    }

    /// Returns a reference to the `Info` stored in the cell.
    ///
    /// This method will then return the correct `Info` reference for the given type `G`.
    /// If there is no entry found, a new one will be generated from the given function.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    // `f()` runs without the lock held, so building an info may recurse into
    // other cells. A racing thread may have inserted first; its value wins.
    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &T {
        let mut map = self.0.write().unwrap_or_else(PoisonError::into_inner);
        match map.entry(type_id) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => *entry.insert(Box::leak(Box::new(value))),
        }
    }
}
