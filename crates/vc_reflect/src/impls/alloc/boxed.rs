use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{PointerInfo, TypeInfo, TypePath, Typed};
use crate::ops::Pointer;

impl<T: TypePath> TypePath for Box<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["alloc::boxed::Box<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Box<", T::type_name(), ">"]))
    }
}

impl<T: Typed> Typed for Box<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>(false)))
    }
}

impl<T: Reflect + Typed + Clone> Reflect for Box<T> {
    crate::reflection::impl_reflect_cast_fn!(Pointer);

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::impls::pointer_debug(self, f)
    }
}

impl<T: Reflect + Typed + Clone> Pointer for Box<T> {
    #[inline]
    fn is_null(&self) -> bool {
        false
    }

    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(T::as_reflect(self))
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some(T::as_reflect_mut(self))
    }

    #[inline]
    fn pointee_or_alloc(&mut self) -> &mut dyn Reflect {
        T::as_reflect_mut(self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};
    use crate::ops::ReflectRef;

    #[test]
    fn box_is_non_null_pointer() {
        assert_eq!(<Box<i32>>::type_name(), "Box<i32>");
        let info = <Box<i32>>::type_info().as_pointer().unwrap();
        assert!(!info.is_nullable());

        let value = Box::new(9_i32);
        let ReflectRef::Pointer(ptr) = value.reflect_ref() else {
            panic!("boxes are pointers");
        };
        assert!(!ptr.is_null());
        assert_eq!(ptr.pointee().unwrap().reflect_kind(), ReflectKind::Scalar);
    }
}
