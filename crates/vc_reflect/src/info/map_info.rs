use core::any::{Any, TypeId};

use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};

/// A container for compile-time map-like info.
///
/// # Examples
///
/// ```rust
/// # use core::any::TypeId;
/// use vc_reflect::info::Typed;
/// use std::collections::BTreeMap;
///
/// let info = <BTreeMap<String, i32> as Typed>::type_info().as_map().unwrap();
///
/// assert_eq!(info.key_id(), TypeId::of::<String>());
/// assert_eq!(info.value_id(), TypeId::of::<i32>());
/// assert_eq!(info.key_ty().path(), "alloc::string::String");
/// ```
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    key_ty: Type,
    value_ty: Type,
    // `TypeInfo` is created on first access; use function pointers to delay it.
    key_info: fn() -> &'static TypeInfo,
    value_info: fn() -> &'static TypeInfo,
}

impl MapInfo {
    impl_type_fn!(ty);

    /// Create a new [`MapInfo`].
    #[inline]
    pub fn new<TMap: TypePath, TKey: Typed, TValue: Typed>() -> Self {
        Self {
            ty: Type::of::<TMap>(),
            key_ty: Type::of::<TKey>(),
            value_ty: Type::of::<TValue>(),
            key_info: TKey::type_info,
            value_info: TValue::type_info,
        }
    }

    /// Returns the [`Type`] of the key.
    #[inline]
    pub const fn key_ty(&self) -> &Type {
        &self.key_ty
    }

    /// Returns the [`TypeId`] of the key.
    #[inline]
    pub const fn key_id(&self) -> TypeId {
        self.key_ty.id()
    }

    /// Returns `true` if the key type is exactly `T`.
    #[inline]
    pub fn key_is<T: Any>(&self) -> bool {
        self.key_ty.is::<T>()
    }

    /// Returns the [`Type`] of the value.
    #[inline]
    pub const fn value_ty(&self) -> &Type {
        &self.value_ty
    }

    /// Returns the [`TypeId`] of the value.
    #[inline]
    pub const fn value_id(&self) -> TypeId {
        self.value_ty.id()
    }

    /// Returns `true` if the value type is exactly `T`.
    #[inline]
    pub fn value_is<T: Any>(&self) -> bool {
        self.value_ty.is::<T>()
    }

    /// Returns the [`TypeInfo`] of the key.
    #[inline]
    pub fn key_info(&self) -> &'static TypeInfo {
        (self.key_info)()
    }

    /// Returns the [`TypeInfo`] of the value.
    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }
}
