use core::any::{Any, TypeId};

use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};

/// A container for compile-time fixed-length array info.
///
/// # Examples
///
/// ```rust
/// use vc_reflect::info::Typed;
///
/// let info = <[u8; 12] as Typed>::type_info().as_array().unwrap();
///
/// assert!(info.item_is::<u8>());
/// assert_eq!(info.capacity(), 12);
/// ```
#[derive(Clone, Debug)]
pub struct ArrayInfo {
    ty: Type,
    item_id: TypeId,
    item_info: fn() -> &'static TypeInfo,
    capacity: usize,
}

impl ArrayInfo {
    impl_type_fn!(ty);

    /// Creates a new [`ArrayInfo`].
    #[inline]
    pub fn new<TArray: TypePath, TItem: Typed>(capacity: usize) -> Self {
        Self {
            ty: Type::of::<TArray>(),
            item_id: TypeId::of::<TItem>(),
            item_info: TItem::type_info,
            capacity,
        }
    }

    /// Returns the [`TypeId`] of array items.
    #[inline]
    pub const fn item_id(&self) -> TypeId {
        self.item_id
    }

    /// Returns `true` if the item type is `T`.
    #[inline]
    pub fn item_is<T: Any>(&self) -> bool {
        self.item_id == TypeId::of::<T>()
    }

    /// Returns the [`TypeInfo`] of array items.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }

    /// Returns the fixed length of the array.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
