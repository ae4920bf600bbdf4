use core::any::{Any, TypeId};

use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};

/// Type information for single-value indirections.
///
/// `Option<T>` is a nullable pointer: it starts out as `None` and is
/// allocated on demand. `Box<T>` is never null.
///
/// ```
/// use vc_reflect::info::Typed;
///
/// let info = <Option<Box<u8>>>::type_info().as_pointer().unwrap();
/// assert!(info.is_nullable());
///
/// let inner = info.pointee_info().as_pointer().unwrap();
/// assert!(!inner.is_nullable());
/// assert!(inner.pointee_is::<u8>());
/// ```
#[derive(Clone, Debug)]
pub struct PointerInfo {
    ty: Type,
    pointee_id: TypeId,
    pointee_info: fn() -> &'static TypeInfo,
    nullable: bool,
}

impl PointerInfo {
    impl_type_fn!(ty);

    /// Creates a new [`PointerInfo`].
    #[inline]
    pub fn new<TPointer: TypePath, TPointee: Typed>(nullable: bool) -> Self {
        Self {
            ty: Type::of::<TPointer>(),
            pointee_id: TypeId::of::<TPointee>(),
            pointee_info: TPointee::type_info,
            nullable,
        }
    }

    /// Returns the [`TypeId`] of the pointee.
    #[inline]
    pub const fn pointee_id(&self) -> TypeId {
        self.pointee_id
    }

    /// Returns `true` if the pointee type is `T`.
    #[inline]
    pub fn pointee_is<T: Any>(&self) -> bool {
        self.pointee_id == TypeId::of::<T>()
    }

    /// Returns the [`TypeInfo`] of the pointee.
    #[inline]
    pub fn pointee_info(&self) -> &'static TypeInfo {
        (self.pointee_info)()
    }

    /// Returns `true` if the pointer can be null.
    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }
}
