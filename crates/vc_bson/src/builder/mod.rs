//! Incremental construction of values from parser events.
//!
//! The [parser](crate::parse) does not know what it is decoding into. It
//! drives a [`Builder`], a cursor over one slot of the target, with one call
//! per event:
//!
//! - [`scalar`](Builder::scalar) for leaf values,
//! - [`begin_object`](Builder::begin_object) / [`begin_array`](Builder::begin_array)
//!   before the children of a container,
//! - [`key`](Builder::key) / [`elem`](Builder::elem) to descend into a child,
//! - [`flush`](Builder::flush) once a child is complete.
//!
//! Implementations:
//!
//! - [`ReflectBuilder`]: writes into any [`Reflect`](vc_reflect::Reflect) value.
//! - [`NodeBuilder`]: assembles a [`Bson`](crate::Bson) tree.
//! - [`NullBuilder`]: absorbs everything, used where a value has nowhere to go.

// -----------------------------------------------------------------------------
// Modules

mod node_builder;
mod reflect_builder;

// -----------------------------------------------------------------------------
// Exports

pub use node_builder::NodeBuilder;
pub use reflect_builder::ReflectBuilder;

use alloc::boxed::Box;

use chrono::{DateTime, Utc};
use vc_reflect::ops::ScalarMut;

use crate::ObjectId;

// -----------------------------------------------------------------------------
// Scalar

/// A leaf payload read from the wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Int64(i64),
    Int32(i32),
    Float64(f64),
    String(&'a str),
    Bool(bool),
    Date(DateTime<Utc>),
    Regex { pattern: &'a str, options: &'a str },
    ObjectId(ObjectId),
    Null,
}

impl Scalar<'_> {
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the payload kind, for diagnostics.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Int64(_) => "int64",
            Self::Int32(_) => "int32",
            Self::Float64(_) => "double",
            Self::String(_) => "string",
            Self::Bool(_) => "bool",
            Self::Date(_) => "datetime",
            Self::Regex { .. } => "regex",
            Self::ObjectId(_) => "objectid",
            Self::Null => "null",
        }
    }
}

// -----------------------------------------------------------------------------
// Builder

/// A cursor that builds one slot from parse events.
///
/// Children returned by [`key`](Builder::key) and [`elem`](Builder::elem)
/// borrow their parent, so only one child is alive at a time. A child must
/// be [flushed](Builder::flush) once populated: some slots are copies that
/// only reach their container on flush.
///
/// Events that do not fit the slot are dropped, never reported. A child
/// that cannot be created is a [`NullBuilder`].
pub trait Builder {
    /// Stores a leaf value. [`Scalar::Null`] changes nothing.
    fn scalar(&mut self, value: Scalar<'_>);

    /// Announces that an object follows.
    fn begin_object(&mut self);

    /// Announces that an array follows.
    fn begin_array(&mut self);

    /// Returns a builder for the child named `name` of an object.
    fn key<'s>(&'s mut self, name: &str) -> Box<dyn Builder + 's>;

    /// Returns a builder for the element at `index` of an array.
    fn elem<'s>(&'s mut self, index: usize) -> Box<dyn Builder + 's>;

    /// Makes every change visible through the slot's container.
    ///
    /// Idempotent.
    fn flush(&mut self);
}

// -----------------------------------------------------------------------------
// NullBuilder

/// A builder that ignores every event.
///
/// Zero-sized, so boxing it does not allocate.
///
/// ```
/// use vc_bson::builder::{Builder, NullBuilder, Scalar};
///
/// let mut null = NullBuilder;
/// null.scalar(Scalar::Int32(1));
///
/// let mut child = null.key("anything");
/// child.elem(3).flush();
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullBuilder;

impl Builder for NullBuilder {
    #[inline]
    fn scalar(&mut self, _value: Scalar<'_>) {}

    #[inline]
    fn begin_object(&mut self) {}

    #[inline]
    fn begin_array(&mut self) {}

    #[inline]
    fn key<'s>(&'s mut self, _name: &str) -> Box<dyn Builder + 's> {
        Box::new(NullBuilder)
    }

    #[inline]
    fn elem<'s>(&'s mut self, _index: usize) -> Box<dyn Builder + 's> {
        Box::new(NullBuilder)
    }

    #[inline]
    fn flush(&mut self) {}
}

// -----------------------------------------------------------------------------
// Numeric stores

/// Stores an integer into an integer slot, narrowing to its exact width.
///
/// Wraps like `as`; there is no range check. Returns `false` for non-integer
/// slots.
///
/// ```
/// use vc_bson::builder::set_int;
/// use vc_reflect::Reflect;
///
/// let mut small = 0_u8;
/// assert!(set_int(small.reflect_mut().as_scalar().unwrap(), 300));
/// assert_eq!(small, 44);
/// ```
pub fn set_int(target: ScalarMut<'_>, value: i64) -> bool {
    match target {
        ScalarMut::I8(v) => *v = value as i8,
        ScalarMut::I16(v) => *v = value as i16,
        ScalarMut::I32(v) => *v = value as i32,
        ScalarMut::I64(v) => *v = value,
        ScalarMut::Isize(v) => *v = value as isize,
        ScalarMut::U8(v) => *v = value as u8,
        ScalarMut::U16(v) => *v = value as u16,
        ScalarMut::U32(v) => *v = value as u32,
        ScalarMut::U64(v) => *v = value as u64,
        ScalarMut::Usize(v) => *v = value as usize,
        ScalarMut::Bool(_) | ScalarMut::F32(_) | ScalarMut::F64(_) | ScalarMut::String(_) => {
            return false;
        }
    }
    true
}

/// Stores a float into a float slot, narrowing to its exact width.
///
/// Returns `false` for non-float slots.
pub fn set_float(target: ScalarMut<'_>, value: f64) -> bool {
    match target {
        ScalarMut::F32(v) => *v = value as f32,
        ScalarMut::F64(v) => *v = value,
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use vc_reflect::Reflect;

    use super::{Builder, NullBuilder, Scalar, set_float, set_int};

    #[test]
    fn narrowing_stores() {
        let mut signed = 0_i16;
        assert!(set_int(signed.reflect_mut().as_scalar().unwrap(), -70_000));
        assert_eq!(signed, -70_000_i64 as i16);

        let mut single = 0_f32;
        assert!(set_float(single.reflect_mut().as_scalar().unwrap(), 0.1));
        assert_eq!(single, 0.1_f32);

        let mut text = String::new();
        assert!(!set_int(text.reflect_mut().as_scalar().unwrap(), 1));
        assert!(!set_float(text.reflect_mut().as_scalar().unwrap(), 1.0));
        assert!(text.is_empty());
    }

    #[test]
    fn null_builder_absorbs() {
        assert_eq!(size_of::<NullBuilder>(), 0);

        let mut null = NullBuilder;
        null.begin_object();
        {
            let mut child = null.key("a");
            child.begin_array();
            child.elem(usize::MAX).scalar(Scalar::Bool(true));
            child.flush();
        }
        null.flush();
        null.flush();
    }

    #[test]
    fn scalar_names() {
        assert!(Scalar::Null.is_null());
        assert_eq!(Scalar::Float64(1.0).kind_name(), "double");
        assert_eq!(
            Scalar::Regex { pattern: "a", options: "i" }.kind_name(),
            "regex"
        );
    }
}
