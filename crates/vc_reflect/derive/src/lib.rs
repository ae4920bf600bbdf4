//! See following macros:
//!
//! - [`Reflect`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Struct Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits for a struct with
/// named fields:
///
/// - `TypePath`
/// - `Typed` (a `TypeInfo::Struct` listing every field in declaration order)
/// - `Struct`
/// - `Reflect`
///
/// The type must also implement `Clone`, which backs `reflect_clone`.
///
/// ```rust, ignore
/// #[derive(Reflect, Clone, Default)]
/// struct Account {
///     name: String,
///     balance: i64,
///     tags: Vec<String>,
/// }
/// ```
///
/// ## Type Path
///
/// The path is `module_path!()` joined with the type name. Generic
/// parameters are appended from their own paths, e.g.
/// `my_crate::Page<alloc::string::String>`.
///
/// ## Generics
///
/// Type parameters are supported; every field type must then be
/// `Reflect + Typed`, which the generated impls require in their
/// `where` clauses. Lifetime and const parameters are rejected.
///
/// ## Unsupported Shapes
///
/// Enums, unions, tuple structs and unit structs are rejected with a
/// compile error. Use `impl_reflect_opaque!` for types the codec should
/// treat as a single opaque value.
#[proc_macro_derive(Reflect)]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectStruct::from_input(&ast) {
        Ok(info) => impls::impl_struct(&info).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
