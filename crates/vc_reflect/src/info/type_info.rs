use core::any::TypeId;
use core::{error, fmt};

use crate::info::{ArrayInfo, ListInfo, MapInfo, Type};
use crate::info::{OpaqueInfo, PointerInfo, ScalarInfo, StructInfo};

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected type.
///
/// Each kind corresponds to a specific reflection view, such as
/// [`Struct`](crate::ops::Struct) or [`List`](crate::ops::List).
/// The classification is structural: it depends only on the declared
/// type, never on the content of a value.
///
/// A [`ReflectKind`] is obtained via [`Reflect::reflect_kind`],
/// [`TypeInfo::kind`], or [`ReflectRef::kind`].
///
/// [`Reflect::reflect_kind`]: crate::Reflect::reflect_kind
/// [`ReflectRef::kind`]: crate::ops::ReflectRef::kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// Numbers, `bool` and `String`.
    Scalar,
    /// Structs with named fields.
    Struct,
    /// Growable sequences (`Vec<T>`).
    List,
    /// Fixed-length sequences (`[T; N]`).
    Array,
    /// Key-value containers.
    Map,
    /// Indirections to a single value (`Option<T>`, `Box<T>`).
    Pointer,
    /// Leaf types with no inner structure visible to reflection.
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => f.pad("Scalar"),
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Array => f.pad("Array"),
            Self::Map => f.pad("Map"),
            Self::Pointer => f.pad("Pointer"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a `TypeInfo` value is not the expected `ReflectKind`.
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for reflected types.
///
/// Every type implementing [`Typed`] is classified as exactly one variant.
/// The value is built once per type and cached by type identity, so the
/// returned `&'static TypeInfo` is stable for the life of the process.
///
/// Convert to the inner info (for example [`StructInfo`]) through the
/// `as_*` methods to reach more specific data such as field descriptors.
///
/// ```
/// use vc_reflect::info::{Typed, ReflectKind, ScalarKind};
///
/// assert_eq!(i32::type_info().kind(), ReflectKind::Scalar);
/// assert_eq!(i32::type_info().as_scalar().unwrap().scalar_kind(), ScalarKind::I32);
/// assert_eq!(<Option<i32>>::type_info().kind(), ReflectKind::Pointer);
/// assert_eq!(<[u8; 4]>::type_info().kind(), ReflectKind::Array);
/// assert!(<Vec<u8>>::type_info().as_map().is_err());
/// ```
///
/// [`Typed`]: crate::info::Typed
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Scalar(ScalarInfo),
    Struct(StructInfo),
    List(ListInfo),
    Array(ArrayInfo),
    Map(MapInfo),
    Pointer(PointerInfo),
    Opaque(OpaqueInfo),
}

// Helper macro that implements type-safe accessor methods like `as_struct`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_scalar: Scalar => ScalarInfo);
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_pointer: Pointer => PointerInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the underlying [`Type`] metadata for this `TypeInfo`.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Scalar(info) => info.ty(),
            Self::Struct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Array(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Pointer(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    /// Returns the `TypeId` of the described type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty().id()
    }

    /// Returns the type path of the described type.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    /// Returns the type name of the described type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.ty().name()
    }

    /// Returns the [`ReflectKind`] for this `TypeInfo` (a fast discriminator).
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
}
