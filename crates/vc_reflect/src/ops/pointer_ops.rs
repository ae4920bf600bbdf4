use crate::Reflect;

// -----------------------------------------------------------------------------
// Pointer

/// A trait used to power single-value indirection via reflection.
///
/// `Option<T>` is a nullable pointer whose pointee is allocated lazily by
/// [`pointee_or_alloc`](Pointer::pointee_or_alloc). `Box<T>` is never null.
///
/// ```
/// use vc_reflect::ops::Pointer;
///
/// let mut slot: Option<u32> = None;
/// let ptr: &mut dyn Pointer = &mut slot;
///
/// assert!(ptr.is_null());
/// assert!(ptr.pointee().is_none());
///
/// *ptr.pointee_or_alloc().downcast_mut::<u32>().unwrap() += 4;
/// assert_eq!(slot, Some(4));
/// ```
pub trait Pointer: Reflect {
    /// Returns `true` if the pointer does not point at a value.
    fn is_null(&self) -> bool;

    /// Returns the pointee, or `None` if the pointer is null.
    fn pointee(&self) -> Option<&dyn Reflect>;

    /// Returns the pointee mutably, or `None` if the pointer is null.
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Returns the pointee mutably, first pointing a null pointer at a fresh
    /// zero ([`Default`]) value.
    fn pointee_or_alloc(&mut self) -> &mut dyn Reflect;
}
