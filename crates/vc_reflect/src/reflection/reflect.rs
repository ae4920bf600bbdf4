use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection in [`vc_reflect`].
///
/// A `Reflect` value can be inspected and mutated without compile-time
/// knowledge of its type. The codec only ever talks to values through this
/// trait: it asks for the value's [kind](Reflect::reflect_kind), then borrows
/// the matching view through [`reflect_ref`] or [`reflect_mut`].
///
/// # Type Identification
///
/// `Any::type_id` on a `Box<dyn Reflect>` returns the id of the box, not of
/// the value. Use [`Reflect::ty_id`] instead:
///
/// ```rust
/// # use vc_reflect::Reflect;
/// # use core::any::TypeId;
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// ```
///
/// # Implementing
///
/// Use [`#[derive(Reflect)]`](crate::derive::Reflect) for structs and
/// [`impl_reflect_opaque!`](crate::impl_reflect_opaque) for leaf types the
/// codec should not look into. The crate provides implementations for
/// primitives, `String`, `Option<T>`, `Box<T>`, `Vec<T>`, `[T; N]`,
/// `BTreeMap<K, V>` and `HashMap<K, V>`.
///
/// [`vc_reflect`]: crate
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable, fully-reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    ///
    /// ```
    /// use vc_reflect::Reflect;
    ///
    /// let r = 32.into_boxed_reflect();
    /// assert!(r.is::<i32>());
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the ["kind"](ReflectKind) of the type.
    ///
    /// ```
    /// # use vc_reflect::{Reflect, info::ReflectKind};
    /// let vec = vec![1, 2, 3];
    ///
    /// assert_eq!(vec.reflect_kind(), ReflectKind::List);
    /// assert_eq!(Some(1_u8).reflect_kind(), ReflectKind::Pointer);
    /// ```
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable view of the value, matching its kind.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable view of the value, matching its kind.
    ///
    /// ```
    /// # use vc_reflect::{Reflect, ops::ReflectMut};
    /// let mut vec = vec![1_i32, 2, 3];
    ///
    /// let ReflectMut::List(list) = vec.reflect_mut() else { unreachable!() };
    /// list.resize_zeroed(5);
    ///
    /// assert_eq!(vec, [1, 2, 3, 0, 0]);
    /// ```
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Clones the value into a new box of the same concrete type.
    fn reflect_clone(&self) -> Box<dyn Reflect>;

    /// Debug formatter for the value.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reflect({})", self.reflect_type_path())
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// assert_eq!(x.downcast_ref::<i32>(), Some(&10));
    /// assert_eq!(x.downcast_ref::<u32>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        match <Box<dyn Any>>::downcast::<T>(self) {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type id was checked before downcasting"),
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let x: Box<dyn Reflect> = String::from("a").into_boxed_reflect();
    ///
    /// assert_eq!(x.take::<String>().unwrap(), "a");
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements `reflect_kind`, `reflect_ref` and `reflect_mut` for a type whose
/// view is the type itself (every kind except `Scalar`).
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
