use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// TypePath

/// A static accessor to type paths and names.
///
/// A stable alternative to [`core::any::type_name`]: derived types use
/// `module_path!()` plus the struct ident, builtin types use their canonical
/// `core::` / `alloc::` / `std::` paths.
///
/// - [`type_path`]: the full path, e.g. `alloc::vec::Vec<i32>`.
/// - [`type_name`]: the path without module prefix, e.g. `Vec<i32>`.
///
/// Names never start with `::`.
///
/// ```
/// use vc_reflect::info::TypePath;
///
/// assert_eq!(<Vec<Option<u8>>>::type_path(), "alloc::vec::Vec<core::option::Option<u8>>");
/// assert_eq!(<Vec<Option<u8>>>::type_name(), "Vec<Option<u8>>");
/// ```
///
/// [`type_path`]: TypePath::type_path
/// [`type_name`]: TypePath::type_name
pub trait TypePath: 'static {
    /// Returns the fully qualified path of the type.
    fn type_path() -> &'static str;

    /// Returns the type name without module path.
    fn type_name() -> &'static str;
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Dynamic dispatch for [`TypePath`], auto implemented for every `TypePath`.
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }
}

// -----------------------------------------------------------------------------
// Type

/// The identity of a type: its [`TypeId`] plus its [`TypePath`] accessors.
#[derive(Clone, Copy)]
pub struct Type {
    type_id: TypeId,
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
}

impl Type {
    /// Creates a new [`Type`] from a type that implements [`TypePath`].
    ///
    /// ```
    /// # use core::any::TypeId;
    /// # use vc_reflect::info::Type;
    /// let ty = Type::of::<String>();
    ///
    /// assert_eq!(ty.id(), TypeId::of::<String>());
    /// assert_eq!(ty.path(), "alloc::string::String");
    /// ```
    #[inline]
    pub fn of<T: TypePath>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_path: T::type_path,
            type_name: T::type_name,
        }
    }

    /// Returns the [`TypeId`] of the type.
    #[inline]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the fully qualified path of the type.
    #[inline]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    /// Returns the type name without module path.
    #[inline]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// Accessor macro

/// Adds `ty`, `ty_id`, `type_is`, `type_path` and `type_name` to an info
/// struct that stores its [`Type`] in the named field.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying `Type`.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        /// Returns the `TypeId`.
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.$field.id()
        }

        /// Check if the given type matches this one.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.$field.is::<T>()
        }

        /// Returns the type path.
        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.$field.path()
        }

        /// Returns the type name.
        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.$field.name()
        }
    };
}

pub(crate) use impl_type_fn;
