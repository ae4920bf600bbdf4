use core::fmt;

use crate::info::{Type, TypePath, impl_type_fn};

// -----------------------------------------------------------------------------
// ScalarKind

/// The exact machine shape of a scalar type.
///
/// Width and signedness are preserved so that numeric writes can narrow to
/// the precise target type.
///
/// ```
/// use vc_reflect::info::{ScalarKind, ScalarCategory};
///
/// assert_eq!(ScalarKind::I16.bits(), 16);
/// assert_eq!(ScalarKind::U8.category(), ScalarCategory::Uint);
/// assert!(ScalarKind::F32.is_float());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    String,
}

/// The coarse category of a scalar, the level at which numeric conversion
/// rules are decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarCategory {
    Float,
    Int,
    Uint,
    String,
    Bool,
}

impl ScalarKind {
    /// Returns `true` for `f32` and `f64`.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Returns `true` for signed integers.
    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::Isize
        )
    }

    /// Returns `true` for unsigned integers.
    #[inline]
    pub const fn is_unsigned(self) -> bool {
        matches!(
            self,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Usize
        )
    }

    /// Bit width of numeric kinds, `0` for `Bool` and `String`.
    pub const fn bits(self) -> u32 {
        match self {
            Self::I8 | Self::U8 => 8,
            Self::I16 | Self::U16 => 16,
            Self::I32 | Self::U32 | Self::F32 => 32,
            Self::I64 | Self::U64 | Self::F64 => 64,
            Self::Isize | Self::Usize => usize::BITS,
            Self::Bool | Self::String => 0,
        }
    }

    /// Returns the [`ScalarCategory`] of this kind.
    pub const fn category(self) -> ScalarCategory {
        match self {
            Self::Bool => ScalarCategory::Bool,
            Self::String => ScalarCategory::String,
            Self::F32 | Self::F64 => ScalarCategory::Float,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::Isize => ScalarCategory::Int,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Usize => ScalarCategory::Uint,
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// -----------------------------------------------------------------------------
// ScalarInfo

/// Type information for scalar types: numbers, `bool` and `String`.
#[derive(Clone, Debug)]
pub struct ScalarInfo {
    ty: Type,
    kind: ScalarKind,
}

impl ScalarInfo {
    impl_type_fn!(ty);

    /// Creates a new [`ScalarInfo`].
    #[inline]
    pub fn new<T: TypePath>(kind: ScalarKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
        }
    }

    /// Returns the exact scalar kind.
    #[inline]
    pub const fn scalar_kind(&self) -> ScalarKind {
        self.kind
    }
}
