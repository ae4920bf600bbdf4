use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{Array, List, Map, Pointer, ScalarMut, ScalarRef, Struct};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable enumeration of the "kinds" of a reflected value.
///
/// Obtained via [`Reflect::reflect_ref`]; each variant holds the view that
/// matches the value's [`ReflectKind`].
///
/// ```
/// use vc_reflect::{Reflect, ops::{ReflectRef, ScalarRef}};
///
/// let value = 7_u16;
/// match value.reflect_ref() {
///     ReflectRef::Scalar(ScalarRef::U16(v)) => assert_eq!(*v, 7),
///     _ => unreachable!(),
/// }
/// ```
pub enum ReflectRef<'a> {
    Scalar(ScalarRef<'a>),
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Array(&'a dyn Array),
    Map(&'a dyn Map),
    Pointer(&'a dyn Pointer),
    Opaque(&'a dyn Reflect),
}

/// A mutable enumeration of the "kinds" of a reflected value.
///
/// Obtained via [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Scalar(ScalarMut<'a>),
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Array(&'a mut dyn Array),
    Map(&'a mut dyn Map),
    Pointer(&'a mut dyn Pointer),
    Opaque(&'a mut dyn Reflect),
}

macro_rules! impl_kind_fn {
    () => {
        /// Returns the [`ReflectKind`] of the underlying value.
        pub const fn kind(&self) -> ReflectKind {
            match self {
                Self::Scalar(_) => ReflectKind::Scalar,
                Self::Struct(_) => ReflectKind::Struct,
                Self::List(_) => ReflectKind::List,
                Self::Array(_) => ReflectKind::Array,
                Self::Map(_) => ReflectKind::Map,
                Self::Pointer(_) => ReflectKind::Pointer,
                Self::Opaque(_) => ReflectKind::Opaque,
            }
        }
    };
}

macro_rules! impl_cast_fn {
    ($name:ident : $kind:ident => $($target:tt)+) => {
        /// Convert to the specific view, or report the actual kind.
        pub fn $name(self) -> Result<$($target)+, ReflectKindError> {
            let received = self.kind();
            match self {
                Self::$kind(value) => Ok(value),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received,
                }),
            }
        }
    };
}

impl<'a> ReflectRef<'a> {
    impl_kind_fn!();

    impl_cast_fn!(as_scalar: Scalar => ScalarRef<'a>);
    impl_cast_fn!(as_struct: Struct => &'a dyn Struct);
    impl_cast_fn!(as_list: List => &'a dyn List);
    impl_cast_fn!(as_array: Array => &'a dyn Array);
    impl_cast_fn!(as_map: Map => &'a dyn Map);
    impl_cast_fn!(as_pointer: Pointer => &'a dyn Pointer);
    impl_cast_fn!(as_opaque: Opaque => &'a dyn Reflect);

    /// Forgets the kind, returning the value itself.
    pub fn into_reflect(self) -> &'a dyn Reflect {
        match self {
            Self::Scalar(value) => value.as_reflect(),
            Self::Struct(value) => value as &dyn Reflect,
            Self::List(value) => value as &dyn Reflect,
            Self::Array(value) => value as &dyn Reflect,
            Self::Map(value) => value as &dyn Reflect,
            Self::Pointer(value) => value as &dyn Reflect,
            Self::Opaque(value) => value,
        }
    }
}

impl<'a> ReflectMut<'a> {
    impl_kind_fn!();

    impl_cast_fn!(as_scalar: Scalar => ScalarMut<'a>);
    impl_cast_fn!(as_struct: Struct => &'a mut dyn Struct);
    impl_cast_fn!(as_list: List => &'a mut dyn List);
    impl_cast_fn!(as_array: Array => &'a mut dyn Array);
    impl_cast_fn!(as_map: Map => &'a mut dyn Map);
    impl_cast_fn!(as_pointer: Pointer => &'a mut dyn Pointer);
    impl_cast_fn!(as_opaque: Opaque => &'a mut dyn Reflect);

    /// Forgets the kind, returning the value itself.
    ///
    /// Useful to hand the value back after matching on a view that
    /// turned out not to be the wanted one.
    ///
    /// ```
    /// # use vc_reflect::{Reflect, ops::ReflectMut};
    /// fn unwrap_pointers(value: &mut dyn Reflect) -> &mut dyn Reflect {
    ///     match value.reflect_mut() {
    ///         ReflectMut::Pointer(ptr) => unwrap_pointers(ptr.pointee_or_alloc()),
    ///         other => other.into_reflect(),
    ///     }
    /// }
    ///
    /// let mut slot: Option<Box<i32>> = None;
    /// *unwrap_pointers(&mut slot).downcast_mut::<i32>().unwrap() = 5;
    /// assert_eq!(slot, Some(Box::new(5)));
    /// ```
    pub fn into_reflect(self) -> &'a mut dyn Reflect {
        match self {
            Self::Scalar(value) => value.into_reflect(),
            Self::Struct(value) => value as &mut dyn Reflect,
            Self::List(value) => value as &mut dyn Reflect,
            Self::Array(value) => value as &mut dyn Reflect,
            Self::Map(value) => value as &mut dyn Reflect,
            Self::Pointer(value) => value as &mut dyn Reflect,
            Self::Opaque(value) => value,
        }
    }
}
