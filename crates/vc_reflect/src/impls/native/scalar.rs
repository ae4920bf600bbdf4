use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{ReflectKind, ScalarInfo, ScalarKind, TypeInfo, TypePath, Typed};
use crate::ops::{ReflectMut, ReflectRef, ScalarMut, ScalarRef};

macro_rules! impl_reflect_scalar {
    ($($ty:ty => $kind:ident, $path:literal, $name:literal;)*) => {$(
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Scalar(ScalarInfo::new::<Self>(ScalarKind::$kind)))
            }
        }

        impl Reflect for $ty {
            #[inline]
            fn reflect_kind(&self) -> ReflectKind {
                ReflectKind::Scalar
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Scalar(ScalarRef::$kind(self))
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Scalar(ScalarMut::$kind(self))
            }

            #[inline]
            fn reflect_clone(&self) -> Box<dyn Reflect> {
                Box::new(<$ty as Clone>::clone(self))
            }

            #[inline]
            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }
    )*};
}

impl_reflect_scalar! {
    bool => Bool, "bool", "bool";
    i8 => I8, "i8", "i8";
    i16 => I16, "i16", "i16";
    i32 => I32, "i32", "i32";
    i64 => I64, "i64", "i64";
    isize => Isize, "isize", "isize";
    u8 => U8, "u8", "u8";
    u16 => U16, "u16", "u16";
    u32 => U32, "u32", "u32";
    u64 => U64, "u64", "u64";
    usize => Usize, "usize", "usize";
    f32 => F32, "f32", "f32";
    f64 => F64, "f64", "f64";
    String => String, "alloc::string::String", "String";
}
