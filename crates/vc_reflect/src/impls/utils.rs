use core::fmt;

use crate::ops::{Array, List, Map, Pointer, Struct};

/// A function use for implementing [`Reflect::reflect_debug`].
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
#[inline(never)]
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_name());
    for (name, field) in dyn_struct.iter_fields() {
        debug.field(name, &field as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_debug`].
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
#[inline(never)]
pub fn list_debug(dyn_list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_list.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_debug`].
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
#[inline(never)]
pub fn array_debug(dyn_array: &dyn Array, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_array.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_debug`].
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
#[inline(never)]
pub fn map_debug(dyn_map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_map();
    for (key, value) in dyn_map.iter() {
        debug.entry(&key as &dyn fmt::Debug, &value as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_debug`].
///
/// Null pointers print as `None`, others as `Some(pointee)`.
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
#[inline(never)]
pub fn pointer_debug(dyn_pointer: &dyn Pointer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_pointer.pointee() {
        Some(pointee) => f.debug_tuple("Some").field(&pointee as &dyn fmt::Debug).finish(),
        None => f.write_str("None"),
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::derive::Reflect;

    #[derive(Reflect, Clone, Default)]
    struct Sample {
        name: String,
        items: Vec<u8>,
        next: Option<i32>,
    }

    #[test]
    fn struct_fields_in_order() {
        let sample = Sample {
            name: String::from("a"),
            items: vec![1, 2],
            next: None,
        };
        let value: &dyn Reflect = &sample;

        assert_eq!(
            format!("{value:?}"),
            r#"Sample { name: "a", items: [1, 2], next: None }"#
        );
    }
}
