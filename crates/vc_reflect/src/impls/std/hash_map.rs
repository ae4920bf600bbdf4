use alloc::boxed::Box;
use core::fmt;
use core::hash::Hash;
use std::collections::HashMap;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{MapInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Map, MapIter};

impl<K: TypePath, V: TypePath> TypePath for HashMap<K, V> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&[
                "std::collections::HashMap<",
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
            concat(&["HashMap<", K::type_name(), ", ", V::type_name(), ">"])
        })
    }
}

impl<K: Typed, V: Typed> Typed for HashMap<K, V> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
    }
}

impl<K, V> Reflect for HashMap<K, V>
where
    K: Reflect + Typed + Eq + Hash + Clone,
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

impl<K, V> Map for HashMap<K, V>
where
    K: Reflect + Typed + Eq + Hash + Clone,
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
    use alloc::string::String;
    use std::collections::HashMap;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::ReflectMut;

    #[test]
    fn hash_map_type_info() {
        assert_eq!(<HashMap<String, bool>>::type_name(), "HashMap<String, bool>");
        let info = <HashMap<String, bool>>::type_info().as_map().unwrap();
        assert!(info.key_is::<String>());
    }

    #[test]
    fn hash_map_get_mut_by_reflected_key() {
        let mut data = HashMap::from([(String::from("k"), 1_u32)]);
        let ReflectMut::Map(map) = data.reflect_mut() else {
            panic!("hash maps are maps");
        };
        let key = String::from("k");
        *map.get_mut(&key).unwrap().downcast_mut::<u32>().unwrap() = 10;
        assert!(map.get(&1_u32).is_none());
        assert_eq!(data["k"], 10);
    }
}
