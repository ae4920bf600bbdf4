/// Implements `TypePath`, `Typed` and `Reflect` for an opaque type.
///
/// The type must implement `Clone`, `Debug`, `Send` and `Sync`. Opaque
/// values are never looked into: they can only be cloned, printed and
/// downcast.
///
/// Syntax:
/// - `impl_reflect_opaque!(Ident)`: a local type; its type path is
///   `module_path!()` followed by the ident.
/// - `impl_reflect_opaque!(Type => "type::path", "TypeName")`: any type,
///   with explicit names.
///
/// # Example
///
/// ```
/// use vc_reflect::{Reflect, impl_reflect_opaque, info::{ReflectKind, TypePath}};
///
/// #[derive(Clone, Debug)]
/// pub struct Token(u64);
///
/// impl_reflect_opaque!(Token);
///
/// assert!(Token::type_path().ends_with("::Token"));
/// assert_eq!(Token::type_name(), "Token");
/// assert_eq!(Token(1).reflect_kind(), ReflectKind::Opaque);
/// ```
#[macro_export]
macro_rules! impl_reflect_opaque {
    ($ident:ident) => {
        $crate::impl_reflect_opaque!(
            $ident => ::core::concat!(::core::module_path!(), "::", ::core::stringify!($ident)),
            ::core::stringify!($ident)
        );
    };
    ($ty:ty => $path:expr, $name:expr) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }
        }

        impl $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    $crate::info::TypeInfo::Opaque($crate::info::OpaqueInfo::new::<$ty>())
                })
            }
        }

        impl $crate::Reflect for $ty {
            #[inline]
            fn reflect_kind(&self) -> $crate::info::ReflectKind {
                $crate::info::ReflectKind::Opaque
            }

            #[inline]
            fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                $crate::ops::ReflectRef::Opaque(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
                $crate::ops::ReflectMut::Opaque(self)
            }

            #[inline]
            fn reflect_clone(&self) -> $crate::__macro_exports::Box<dyn $crate::Reflect> {
                $crate::__macro_exports::Box::new(::core::clone::Clone::clone(self))
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        }
    };
}
