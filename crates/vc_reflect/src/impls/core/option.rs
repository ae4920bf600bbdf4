use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{PointerInfo, TypeInfo, TypePath, Typed};
use crate::ops::Pointer;

impl<T: TypePath> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["core::option::Option<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Option<", T::type_name(), ">"]))
    }
}

impl<T: Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>(true)))
    }
}

impl<T: Reflect + Typed + Default + Clone> Reflect for Option<T> {
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

impl<T: Reflect + Typed + Default + Clone> Pointer for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(Reflect::as_reflect)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn pointee_or_alloc(&mut self) -> &mut dyn Reflect {
        self.get_or_insert_with(T::default)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};
    use crate::ops::ReflectMut;

    #[test]
    fn option_is_nullable_pointer() {
        assert_eq!(<Option<String>>::type_path(), "core::option::Option<alloc::string::String>");
        let info = <Option<u8>>::type_info().as_pointer().unwrap();
        assert!(info.is_nullable());
        assert_eq!(info.pointee_info().kind(), ReflectKind::Scalar);
    }

    #[test]
    fn option_allocates_once() {
        let mut value: Option<i32> = None;
        let ReflectMut::Pointer(ptr) = value.reflect_mut() else {
            panic!("options are pointers");
        };
        *ptr.pointee_or_alloc().downcast_mut::<i32>().unwrap() = 5;
        *ptr.pointee_or_alloc().downcast_mut::<i32>().unwrap() += 1;
        assert_eq!(value, Some(6));
    }

    #[test]
    fn option_debug() {
        let value: Option<u8> = None;
        assert_eq!(alloc::format!("{:?}", value.as_reflect()), "None");
        assert_eq!(alloc::format!("{:?}", Some(3_u8).as_reflect()), "Some(3)");
    }
}
