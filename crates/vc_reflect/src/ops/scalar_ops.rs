use alloc::string::String;

use crate::Reflect;
use crate::info::ScalarKind;

// -----------------------------------------------------------------------------
// ScalarRef / ScalarMut

macro_rules! define_scalar_views {
    ($($kind:ident => $ty:ty),* $(,)?) => {
        /// A typed, immutable reference to a scalar value.
        ///
        /// ```
        /// use vc_reflect::{Reflect, ops::ScalarRef, info::ScalarKind};
        ///
        /// let v = 1.5_f32;
        /// let scalar = v.reflect_ref().as_scalar().unwrap();
        ///
        /// assert_eq!(scalar.kind(), ScalarKind::F32);
        /// assert!(matches!(scalar, ScalarRef::F32(x) if *x == 1.5));
        /// ```
        #[derive(Debug, Clone, Copy)]
        pub enum ScalarRef<'a> {
            $($kind(&'a $ty),)*
        }

        /// A typed, mutable reference to a scalar value.
        ///
        /// ```
        /// use vc_reflect::{Reflect, ops::ScalarMut};
        ///
        /// let mut v = String::new();
        /// if let Ok(ScalarMut::String(s)) = v.reflect_mut().as_scalar() {
        ///     s.push_str("hello");
        /// }
        ///
        /// assert_eq!(v, "hello");
        /// ```
        #[derive(Debug)]
        pub enum ScalarMut<'a> {
            $($kind(&'a mut $ty),)*
        }

        impl<'a> ScalarRef<'a> {
            /// Returns the exact [`ScalarKind`] of the referenced value.
            pub const fn kind(&self) -> ScalarKind {
                match self {
                    $(Self::$kind(_) => ScalarKind::$kind,)*
                }
            }

            /// Returns the referenced value as a `&dyn Reflect`.
            pub fn as_reflect(self) -> &'a dyn Reflect {
                match self {
                    $(Self::$kind(v) => v as &dyn Reflect,)*
                }
            }
        }

        impl<'a> ScalarMut<'a> {
            /// Returns the exact [`ScalarKind`] of the referenced value.
            pub const fn kind(&self) -> ScalarKind {
                match self {
                    $(Self::$kind(_) => ScalarKind::$kind,)*
                }
            }

            /// Reborrows as an immutable [`ScalarRef`].
            pub fn reborrow(&self) -> ScalarRef<'_> {
                match self {
                    $(Self::$kind(v) => ScalarRef::$kind(v),)*
                }
            }

            /// Converts into the referenced value as a `&mut dyn Reflect`.
            pub fn into_reflect(self) -> &'a mut dyn Reflect {
                match self {
                    $(Self::$kind(v) => v as &mut dyn Reflect,)*
                }
            }
        }
    };
}

define_scalar_views! {
    Bool => bool,
    I8 => i8,
    I16 => i16,
    I32 => i32,
    I64 => i64,
    Isize => isize,
    U8 => u8,
    U16 => u16,
    U32 => u32,
    U64 => u64,
    Usize => usize,
    F32 => f32,
    F64 => f64,
    String => String,
}
