use alloc::boxed::Box;
use alloc::collections::TryReserveError;

use crate::Reflect;

// -----------------------------------------------------------------------------
// List

/// A trait used to power [growable sequence] operations via reflection.
///
/// A list tracks a capacity separately from its length. Callers that fill a
/// list by index decide themselves how much to reserve ahead, see
/// [`reserve_total`](List::reserve_total), and extend the length with
/// zero values through [`resize_zeroed`](List::resize_zeroed).
///
/// This trait is implemented for `Vec<T>` when `T: Default + Clone`.
///
/// # Examples
///
/// ```
/// use vc_reflect::ops::List;
///
/// let mut vec: Vec<u8> = Vec::new();
/// let list: &mut dyn List = &mut vec;
///
/// list.reserve_total(16).unwrap();
/// assert!(list.capacity() >= 16);
/// assert_eq!(list.len(), 0);
///
/// list.resize_zeroed(3);
/// list.push(Box::new(9_u8)).unwrap();
/// assert!(list.push(Box::new(9_i32)).is_err());
///
/// assert_eq!(vec, [0, 0, 0, 9]);
/// ```
///
/// [growable sequence]: https://doc.rust-lang.org/book/ch08-01-vectors.html
pub trait List: Reflect {
    /// Returns a reference to the element at the given index, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the element at the given index, or `None` if out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    /// Returns `true` if the list contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements the list can hold without reallocating.
    fn capacity(&self) -> usize;

    /// Ensures the capacity is at least `total`, keeping existing elements
    /// in place. Never shrinks.
    ///
    /// On error the list is left as it was.
    fn reserve_total(&mut self, total: usize) -> Result<(), TryReserveError>;

    /// Resizes the list to `new_len`, filling new slots with the element
    /// type's zero ([`Default`]) value.
    fn resize_zeroed(&mut self, new_len: usize);

    /// Appends an element to the back of the list.
    ///
    /// Returns the element back if its type does not match the list's
    /// element type.
    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;
}

impl dyn List {
    /// Returns an iterator over the list elements, in index order.
    #[inline]
    pub fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// ListItemIter

/// An iterator over the elements of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl ListItemIter<'_> {
    /// Creates a new iterator for the given list.
    #[inline(always)]
    pub const fn new(list: &dyn List) -> ListItemIter<'_> {
        ListItemIter { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
