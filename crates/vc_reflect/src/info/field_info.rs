use alloc::boxed::Box;
use core::any::{Any, TypeId};

use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// NamedField

/// Information for a named (struct) field.
///
/// The lower-cased name is computed once, when the owning [`StructInfo`] is
/// built, so case-insensitive lookups never allocate.
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Clone)]
/// #[allow(non_snake_case)]
/// struct Foo {
///     fieldA: f32,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
/// let field_info = info.field_at(0).unwrap();
///
/// assert!(field_info.type_is::<f32>());
/// assert_eq!(field_info.name(), "fieldA");
/// assert_eq!(field_info.lowercase_name(), "fielda");
/// ```
///
/// [`StructInfo`]: crate::info::StructInfo
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    lowercase_name: Box<str>,
    // `TypeInfo` is created on first access; using a function pointer delays it,
    // which also allows self-referential types such as `Option<Box<Self>>`.
    type_info: fn() -> &'static TypeInfo,
}

impl NamedField {
    /// Creates a new [`NamedField`] for the given field `name` and type `T`.
    #[inline]
    pub fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            lowercase_name: name.to_lowercase().into_boxed_str(),
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
        }
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the field name as declared.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the lower-cased field name.
    #[inline]
    pub fn lowercase_name(&self) -> &str {
        &self.lowercase_name
    }

    /// Returns the field's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}
