//! Provide interfaces for data operation.
//!
//! ## Menu
//!
//! The following are the subtraits of [`Reflect`], which provide data access
//! methods for the different kinds of types.
//!
//! - [`Struct`]: For struct (e.g. `A{ .. }`) .
//! - [`List`]: For growable sequences (e.g. `Vec<i32>`) .
//! - [`Array`]: For fixed-length arrays (e.g. `[i32; 5]`) .
//! - [`Map`]: For map-like (e.g. `HashMap<String, f32>`) .
//! - [`Pointer`]: For single-value indirections (e.g. `Option<T>`, `Box<T>`) .
//!
//! Scalars have no trait; they are reached through the typed references in
//! [`ScalarRef`] and [`ScalarMut`].
//!
//! [`ReflectRef`] and [`ReflectMut`] bundle all of these into one enum per
//! access mode, so callers dispatch with a single `match`.
//!
//! [`Reflect`]: crate::Reflect

// -----------------------------------------------------------------------------
// Modules

mod array_ops;
mod kind;
mod list_ops;
mod map_ops;
mod pointer_ops;
mod scalar_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};

pub use array_ops::{Array, ArrayItemIter};
pub use list_ops::{List, ListItemIter};
pub use map_ops::{Map, MapIter};
pub use pointer_ops::Pointer;
pub use scalar_ops::{ScalarMut, ScalarRef};
pub use struct_ops::{Struct, StructFieldIter};
