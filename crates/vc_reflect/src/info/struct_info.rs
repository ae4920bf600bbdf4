use alloc::boxed::Box;

use crate::info::{NamedField, Type, TypePath, impl_type_fn};

/// A container for compile-time named struct info.
///
/// Fields are kept in declaration order. Structs in a document model are
/// small, so lookups are linear scans over a boxed slice.
///
/// # Examples
///
/// ```rust
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Clone)]
/// struct A {
///     val: f32,
///     other: String,
/// }
///
/// let info = <A as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("other"), Some(1));
/// assert_eq!(info.field_names().collect::<Vec<_>>(), ["val", "other"]);
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Create a new [`StructInfo`].
    ///
    /// The order of internal fields is fixed, depends on the input order.
    pub fn new<T: TypePath>(fields: &[NamedField]) -> Self {
        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
        }
    }

    /// Returns the [`NamedField`] for the given `name`, if present.
    ///
    /// The comparison is exact; see [`NamedField::lowercase_name`] for
    /// case-insensitive matching.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns an iterator over the fields in **declaration order**.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, NamedField> {
        self.fields.iter()
    }

    /// Returns the field names in declaration order.
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.fields.iter().map(NamedField::name)
    }

    /// Returns the index for the given field `name`, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == name)
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
