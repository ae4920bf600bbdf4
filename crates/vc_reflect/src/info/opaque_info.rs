use crate::info::{Type, TypePath, impl_type_fn};

/// Metadata for types whose internals are opaque to the reflection system.
///
/// Opaque values can only be cloned, compared by type and downcast. The
/// codec special-cases a few of them (dates, object ids) by concrete type
/// and rejects the rest.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    /// Create a new [`OpaqueInfo`].
    #[inline]
    pub fn new<T: TypePath>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
