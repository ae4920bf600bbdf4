use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) and by every
/// builtin implementation. The returned reference is created once per type
/// and cached, see [`NonGenericTypeInfoCell`] and [`GenericTypeInfoCell`].
///
/// ```
/// use vc_reflect::info::{Typed, TypeInfo};
///
/// let info: &'static TypeInfo = <Vec<u8> as Typed>::type_info();
/// assert!(core::ptr::eq(info, <Vec<u8> as Typed>::type_info()));
/// ```
///
/// # Manually Impl
///
/// ```
/// use vc_reflect::{
///     derive::Reflect,
///     info::{Typed, TypeInfo, StructInfo, NamedField},
///     impls::NonGenericTypeInfoCell,
/// };
///
/// #[derive(Reflect, Clone)]
/// struct Foo {
///     bar: f32,
/// }
///
/// fn build_info() -> &'static TypeInfo {
///     static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///     CELL.get_or_init(|| TypeInfo::Struct(
///         StructInfo::new::<Foo>(&[NamedField::new::<f32>("bar")])
///     ))
/// }
///
/// assert_eq!(build_info().as_struct().unwrap().field_len(), 1);
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: TypePath {
    /// A static accessor to compile-time type information.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`], auto implemented for every `Typed`.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    ///
    /// ```
    /// # use vc_reflect::{Reflect, info::{DynamicTyped, ReflectKind}};
    /// let a: Box<dyn Reflect> = Box::new(vec![1_u64]);
    ///
    /// assert_eq!(a.reflect_type_info().kind(), ReflectKind::List);
    /// ```
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
