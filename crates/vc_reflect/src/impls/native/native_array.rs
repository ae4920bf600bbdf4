use alloc::boxed::Box;
use alloc::format;
use core::fmt;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{ArrayInfo, TypeInfo, TypePath, Typed};
use crate::ops::Array;

impl<T: TypePath, const N: usize> TypePath for [T; N] {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| format!("[{}; {}]", T::type_path(), N))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| format!("[{}; {}]", T::type_name(), N))
    }
}

impl<T: Typed, const N: usize> Typed for [T; N] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Array(ArrayInfo::new::<Self, T>(N)))
    }
}

impl<T: Reflect + Typed + Clone, const N: usize> Reflect for [T; N] {
    crate::reflection::impl_reflect_cast_fn!(Array);

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::impls::array_debug(self, f)
    }
}

impl<T: Reflect + Typed + Clone, const N: usize> Array for [T; N] {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::ReflectRef;

    #[test]
    fn array_type_path() {
        assert_eq!(<[u8; 12]>::type_path(), "[u8; 12]");
        assert_eq!(<[Option<i32>; 2]>::type_name(), "[Option<i32>; 2]");
        assert_eq!(<[u8; 3]>::type_info().as_array().unwrap().capacity(), 3);
    }

    #[test]
    fn array_iter_in_order() {
        let data = [3_i64, 1, 2];
        let ReflectRef::Array(array) = data.reflect_ref() else {
            panic!("fixed arrays are arrays");
        };
        let items: alloc::vec::Vec<i64> = array
            .iter()
            .map(|item| *item.downcast_ref::<i64>().unwrap())
            .collect();
        assert_eq!(items, [3, 1, 2]);
    }
}
