use crate::Reflect;

// -----------------------------------------------------------------------------
// Struct

/// A trait used to power [struct-like] operations via reflection.
///
/// This trait is automatically implemented by
/// [`#[derive(Reflect)]`](crate::derive::Reflect) for structs with named
/// fields. Fields are addressed by their declared name or by their
/// declaration index.
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect, Clone)]
/// struct Foo {
///     bar: u32,
///     baz: String,
/// }
///
/// let mut foo = Foo { bar: 1, baz: String::new() };
///
/// assert_eq!(foo.field_len(), 2);
/// assert_eq!(foo.name_at(1), Some("baz"));
///
/// *foo.field_mut("bar").unwrap().downcast_mut::<u32>().unwrap() = 5;
/// assert_eq!(foo.bar, 5);
/// ```
///
/// [struct-like]: https://doc.rust-lang.org/book/ch05-01-defining-structs.html
pub trait Struct: Reflect {
    /// Returns a reference to the value of the field named `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the value of the field named `name`.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns a reference to the value of the field with index `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the value of the field with index `index`.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the declared name of the field with index `index`.
    fn name_at(&self, index: usize) -> Option<&'static str>;

    /// Returns the number of fields in the struct.
    fn field_len(&self) -> usize;
}

impl dyn Struct {
    /// Returns an iterator over the values of the struct's fields, in
    /// declaration order.
    #[inline]
    pub fn iter_fields(&self) -> StructFieldIter<'_> {
        StructFieldIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the field values of a struct.
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates a new iterator for the given struct.
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'static str, &'a dyn Reflect);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let name = self.struct_val.name_at(self.index)?;
        let value = self.struct_val.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
