use alloc::boxed::Box;

use crate::Reflect;

/// An iterator over the entries of a [`Map`], in the map's own order.
pub type MapIter<'a> = Box<dyn Iterator<Item = (&'a dyn Reflect, &'a dyn Reflect)> + 'a>;

// -----------------------------------------------------------------------------
// Map

/// A trait used to power [map-like] operations via reflection.
///
/// Entries are not addressable in place when the value type is only known
/// at runtime, so writers work on a copy: read the current value (or
/// [`zero_value`](Map::zero_value) on a miss), change it, and store it back
/// with [`insert_boxed`](Map::insert_boxed).
///
/// This trait is implemented for `BTreeMap<K, V>` and, with the `std`
/// feature, `HashMap<K, V>`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_reflect::{Reflect, ops::Map};
///
/// let mut data: BTreeMap<String, i32> = BTreeMap::new();
/// let map: &mut dyn Map = &mut data;
///
/// let key = String::from("a");
/// assert!(map.get(&key).is_none());
///
/// let mut value = map.zero_value();
/// *value.downcast_mut::<i32>().unwrap() = 3;
/// map.insert_boxed(key.into_boxed_reflect(), value).unwrap();
///
/// assert_eq!(data["a"], 3);
/// ```
///
/// [map-like]: https://doc.rust-lang.org/book/ch08-03-hash-maps.html
pub trait Map: Reflect {
    /// Returns a reference to the value associated with the given key.
    ///
    /// Returns `None` if the key is absent or of the wrong type.
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the value associated with the given key.
    fn get_mut(&mut self, key: &dyn Reflect) -> Option<&mut dyn Reflect>;

    /// Returns the number of entries in the map.
    fn len(&self) -> usize;

    /// Returns `true` if the map contains no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the key-value pairs of the map.
    fn iter(&self) -> MapIter<'_>;

    /// Inserts a key-value pair, returning the previous value if any.
    ///
    /// If the key or value type does not match the map, both are returned
    /// in `Err` and the map is left untouched.
    fn insert_boxed(
        &mut self,
        key: Box<dyn Reflect>,
        value: Box<dyn Reflect>,
    ) -> Result<Option<Box<dyn Reflect>>, (Box<dyn Reflect>, Box<dyn Reflect>)>;

    /// Returns a fresh zero ([`Default`]) value of the map's value type.
    fn zero_value(&self) -> Box<dyn Reflect>;
}
