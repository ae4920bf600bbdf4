use crate::Reflect;

// -----------------------------------------------------------------------------
// Array

/// A trait used to power fixed-length [array] operations via reflection.
///
/// The length is part of the type and never changes.
///
/// ```
/// use vc_reflect::ops::Array;
///
/// let mut data = [1_u8, 2, 3];
/// let array: &mut dyn Array = &mut data;
///
/// assert_eq!(array.len(), 3);
/// assert!(array.get_mut(3).is_none());
/// *array.get_mut(0).unwrap().downcast_mut::<u8>().unwrap() = 7;
///
/// assert_eq!(data, [7, 2, 3]);
/// ```
///
/// [array]: https://doc.rust-lang.org/std/primitive.array.html
pub trait Array: Reflect {
    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the element at `index`, or `None` if out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the fixed length of the array.
    fn len(&self) -> usize;

    /// Returns `true` if the array has length zero.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl dyn Array {
    /// Returns an iterator over the array elements, in index order.
    #[inline]
    pub fn iter(&self) -> ArrayItemIter<'_> {
        ArrayItemIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// ArrayItemIter

/// An iterator over the elements of an [`Array`].
pub struct ArrayItemIter<'a> {
    array: &'a dyn Array,
    index: usize,
}

impl ArrayItemIter<'_> {
    /// Creates a new iterator for the given array.
    #[inline(always)]
    pub const fn new(array: &dyn Array) -> ArrayItemIter<'_> {
        ArrayItemIter { array, index: 0 }
    }
}

impl<'a> Iterator for ArrayItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.array.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.array.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ArrayItemIter<'_> {}
