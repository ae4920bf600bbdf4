use alloc::boxed::Box;
use alloc::collections::TryReserveError;
use alloc::vec::Vec;
use core::fmt;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{ListInfo, TypeInfo, TypePath, Typed};
use crate::ops::List;

impl<T: TypePath> TypePath for Vec<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["alloc::vec::Vec<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Vec<", T::type_name(), ">"]))
    }
}

impl<T: Typed> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed + Default + Clone> Reflect for Vec<T> {
    crate::reflection::impl_reflect_cast_fn!(List);

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::impls::list_debug(self, f)
    }
}

impl<T: Reflect + Typed + Default + Clone> List for Vec<T> {
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
        Vec::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }

    fn reserve_total(&mut self, total: usize) -> Result<(), TryReserveError> {
        if total > Vec::capacity(self) {
            // `try_reserve_exact` counts from the length, not the capacity.
            self.try_reserve_exact(total - Vec::len(self))?;
        }
        Ok(())
    }

    #[inline]
    fn resize_zeroed(&mut self, new_len: usize) {
        self.resize_with(new_len, T::default);
    }

    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        let value = value.take::<T>()?;
        Vec::push(self, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};
    use crate::ops::{List, ReflectRef};

    #[test]
    fn vec_type_info() {
        assert_eq!(<Vec<String>>::type_path(), "alloc::vec::Vec<alloc::string::String>");
        let info = <Vec<Vec<u8>>>::type_info().as_list().unwrap();
        assert!(info.item_is::<Vec<u8>>());
        assert_eq!(info.item_info().kind(), ReflectKind::List);
    }

    #[test]
    fn reserve_keeps_contents() {
        let mut data = vec![1_u32, 2, 3];
        let list: &mut dyn List = &mut data;

        list.reserve_total(32).unwrap();
        assert!(list.capacity() >= 32);
        assert_eq!(list.len(), 3);

        list.reserve_total(4).unwrap();
        assert!(list.capacity() >= 32);

        assert!(list.reserve_total(usize::MAX).is_err());
        assert_eq!(list.len(), 3);

        assert_eq!(data, [1, 2, 3]);
    }

    #[test]
    fn resize_and_push() {
        let mut data: Vec<String> = Vec::new();
        let list: &mut dyn List = &mut data;

        list.resize_zeroed(2);
        assert!(list.push(Box::new(String::from("x"))).is_ok());

        let rejected = list.push(Box::new(7_u8)).unwrap_err();
        assert!(rejected.is::<u8>());

        assert_eq!(data, ["", "", "x"]);
    }

    #[test]
    fn vec_iter_in_order() {
        let data = vec![5_i16, 6];
        let ReflectRef::List(list) = data.reflect_ref() else {
            panic!("vectors are lists");
        };
        let items: Vec<i16> = list.iter().map(|v| *v.downcast_ref::<i16>().unwrap()).collect();
        assert_eq!(items, [5, 6]);
    }
}
