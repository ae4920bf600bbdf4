use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::fmt;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{MapInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Map, MapIter};

impl<K: TypePath, V: TypePath> TypePath for BTreeMap<K, V> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&[
                "alloc::collections::BTreeMap<",
                K::type_path(),
                ", ",
                V::type_path(),
                ">",
            ])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&["BTreeMap<", K::type_name(), ", ", V::type_name(), ">"])
        })
    }
}

impl<K: Typed, V: Typed> Typed for BTreeMap<K, V> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
    }
}

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: Reflect + Typed + Ord + Clone,
    V: Reflect + Typed + Default + Clone,
{
    crate::reflection::impl_reflect_cast_fn!(Map);

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::impls::map_debug(self, f)
    }
}

impl<K, V> Map for BTreeMap<K, V>
where
    K: Reflect + Typed + Ord + Clone,
    V: Reflect + Typed + Default + Clone,
{
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect> {
        key.downcast_ref::<K>()
            .and_then(|key| Self::get(self, key))
            .map(Reflect::as_reflect)
    }

    fn get_mut(&mut self, key: &dyn Reflect) -> Option<&mut dyn Reflect> {
        key.downcast_ref::<K>()
            .and_then(move |key| Self::get_mut(self, key))
            .map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn iter(&self) -> MapIter<'_> {
        Box::new(Self::iter(self).map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)))
    }

    fn insert_boxed(
        &mut self,
        key: Box<dyn Reflect>,
        value: Box<dyn Reflect>,
    ) -> Result<Option<Box<dyn Reflect>>, (Box<dyn Reflect>, Box<dyn Reflect>)> {
        let key = match key.take::<K>() {
            Ok(k) => k,
            Err(e) => return Err((e, value)),
        };
        let value = match value.take::<V>() {
            Ok(v) => v,
            Err(e) => return Err((Box::new(key), e)),
        };
        Ok(Self::insert(self, key, value).map(Reflect::into_boxed_reflect))
    }

    #[inline]
    fn zero_value(&self) -> Box<dyn Reflect> {
        Box::new(V::default())
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::Map;

    #[test]
    fn btree_map_type_info() {
        assert_eq!(
            <BTreeMap<String, u8>>::type_path(),
            "alloc::collections::BTreeMap<alloc::string::String, u8>"
        );
        let info = <BTreeMap<i32, u8>>::type_info().as_map().unwrap();
        assert!(info.key_is::<i32>());
        assert!(info.value_is::<u8>());
    }

    #[test]
    fn insert_boxed_checks_types() {
        let mut data: BTreeMap<String, i64> = BTreeMap::new();
        let map: &mut dyn Map = &mut data;

        let (key, value) = map
            .insert_boxed(Box::new(1_u8), Box::new(2_i64))
            .unwrap_err();
        assert!(key.is::<u8>() && value.is::<i64>());

        let old = map
            .insert_boxed(String::from("a").into_boxed_reflect(), Box::new(2_i64))
            .unwrap();
        assert!(old.is_none());

        let old = map
            .insert_boxed(String::from("a").into_boxed_reflect(), Box::new(3_i64))
            .unwrap();
        assert_eq!(old.unwrap().take::<i64>().unwrap(), 2);

        assert_eq!(map.len(), 1);
        assert!(map.zero_value().is::<i64>());
        assert_eq!(data["a"], 3);
    }
}
