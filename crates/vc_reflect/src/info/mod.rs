//! Provide compile-time type infomation implementations.
//!
//! ## Menu
//!
//! - [`TypePath`]: A trait for obtaining type names, without prefix `::`.
//!     - [`type_path`](TypePath::type_path): Full name, a fixed and unique identifier for the type.
//!     - [`type_name`](TypePath::type_name): The name without module path, may be duplicated.
//!
//! - [`DynamicTypePath`]: Provide dynamic dispatch for `TypePath`.
//!
//! - [`Type`]: A struct contains a `TypeId` and the `TypePath` function pointers.
//!
//! - [`TypeInfo`]: A enum representing compile-time type infomations, the inner is one of following:
//!     - [`ScalarInfo`]: For numbers, `bool` and `String`, including the exact [`ScalarKind`].
//!     - [`StructInfo`]: For struct(e.g. `A{..}`) infomation, including field names and fields type info.
//!     - [`ListInfo`]: For growable sequences(e.g. `Vec<i32>`), including item type info.
//!     - [`ArrayInfo`]: For array(e.g. `[i32;5]`) infomation, including array capacity and item type info.
//!     - [`MapInfo`]: For map-like(e.g. `HashMap<K, V>`) infomation, including key type and value type.
//!     - [`PointerInfo`]: For `Option<T>` and `Box<T>`, including pointee type info and nullability.
//!     - [`OpaqueInfo`]: For types the reflection system cannot look into(e.g. `char`, `Duration`).
//!
//! - [`NamedField`]: For struct's field, including field name, lower-cased name and field type info.
//!
//! - Kind:
//!     - [`ReflectKind`]: representing reflect type kind, for example `Struct`, `Array`, `Opaque`.
//!     - [`ScalarKind`] and [`ScalarCategory`]: the exact and coarse shape of a scalar.
//!
//! - [`Typed`]: A trait for obtaining `TypeInfo` data.
//!
//! - [`DynamicTyped`]: Provide dynamic dispatch for `Typed`.

// -----------------------------------------------------------------------------
// Modules

mod array_info;
mod field_info;
mod list_info;
mod map_info;
mod opaque_info;
mod pointer_info;
mod scalar_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use array_info::ArrayInfo;
pub use field_info::NamedField;
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use opaque_info::OpaqueInfo;
pub use pointer_info::PointerInfo;
pub use scalar_info::{ScalarCategory, ScalarInfo, ScalarKind};
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};
