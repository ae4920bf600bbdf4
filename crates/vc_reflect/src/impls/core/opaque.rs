use core::time::Duration;

crate::impl_reflect_opaque!(char => "char", "char");
crate::impl_reflect_opaque!(() => "()", "()");
crate::impl_reflect_opaque!(&'static str => "&str", "&str");
crate::impl_reflect_opaque!(Duration => "core::time::Duration", "Duration");

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};

    #[test]
    fn opaque_types() {
        assert_eq!(Duration::type_path(), "core::time::Duration");
        assert_eq!(char::type_info().kind(), ReflectKind::Opaque);
        assert_eq!(<&'static str>::type_name(), "&str");

        let value: &dyn Reflect = &'x';
        assert_eq!(value.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(*value.reflect_clone().downcast_ref::<char>().unwrap(), 'x');
    }
}
