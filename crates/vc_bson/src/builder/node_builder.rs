use alloc::boxed::Box;
use alloc::vec::Vec;

use log::debug;

use super::{Builder, NullBuilder, Scalar};
use crate::{Bson, Document, growth};

impl From<Scalar<'_>> for Bson {
    fn from(value: Scalar<'_>) -> Self {
        match value {
            Scalar::Int64(v) => Bson::Int64(v),
            Scalar::Int32(v) => Bson::Int32(v),
            Scalar::Float64(v) => Bson::Number(v),
            Scalar::String(v) => Bson::String(v.into()),
            Scalar::Bool(v) => Bson::Boolean(v),
            Scalar::Date(v) => Bson::Date(v),
            Scalar::Regex { pattern, options } => Bson::Regex {
                pattern: pattern.into(),
                options: options.into(),
            },
            Scalar::ObjectId(v) => Bson::ObjectId(v),
            Scalar::Null => Bson::Null,
        }
    }
}

/// A [`Builder`] that assembles a [`Bson`] tree.
///
/// Every event is recorded, including nulls. Objects keep the order in
/// which their keys first arrive; array elements that are skipped over are
/// filled with [`Bson::Null`].
pub struct NodeBuilder<'a> {
    node: &'a mut Bson,
}

impl<'a> NodeBuilder<'a> {
    #[inline]
    pub fn new(node: &'a mut Bson) -> Self {
        Self { node }
    }
}

impl Builder for NodeBuilder<'_> {
    #[inline]
    fn scalar(&mut self, value: Scalar<'_>) {
        *self.node = value.into();
    }

    fn begin_object(&mut self) {
        if !matches!(self.node, Bson::Object(_)) {
            *self.node = Bson::Object(Document::new());
        }
    }

    fn begin_array(&mut self) {
        if !matches!(self.node, Bson::Array(_)) {
            *self.node = Bson::Array(Vec::new());
        }
    }

    fn key<'s>(&'s mut self, name: &str) -> Box<dyn Builder + 's> {
        match &mut *self.node {
            Bson::Object(doc) => {
                let node = doc.entry(name.into()).or_insert(Bson::Null);
                Box::new(NodeBuilder::new(node))
            }
            _ => Box::new(NullBuilder),
        }
    }

    fn elem<'s>(&'s mut self, index: usize) -> Box<dyn Builder + 's> {
        match &mut *self.node {
            Bson::Array(items) => {
                if items.len() <= index {
                    let grown = index < growth::MAX_LEN
                        && items.try_reserve(index + 1 - items.len()).is_ok();
                    if !grown {
                        debug!("dropping array element {index}");
                        return Box::new(NullBuilder);
                    }
                    items.resize(index + 1, Bson::Null);
                }
                Box::new(NodeBuilder::new(&mut items[index]))
            }
            _ => Box::new(NullBuilder),
        }
    }

    #[inline]
    fn flush(&mut self) {}
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::NodeBuilder;
    use crate::builder::{Builder, Scalar};
    use crate::{Bson, Document, growth};

    #[test]
    fn records_every_event() {
        let mut root = Bson::Null;
        {
            let mut builder = NodeBuilder::new(&mut root);
            builder.begin_object();
            builder.key("b").scalar(Scalar::Null);
            builder.key("a").scalar(Scalar::String("x"));

            let mut list = builder.key("list");
            list.begin_array();
            list.elem(1).scalar(Scalar::Int32(2));
        }

        let mut expected = Document::new();
        expected.insert("b".into(), Bson::Null);
        expected.insert("a".into(), Bson::from("x"));
        expected.insert("list".into(), Bson::Array(vec![Bson::Null, Bson::Int32(2)]));
        assert_eq!(root, Bson::Object(expected));
    }

    #[test]
    fn keys_need_an_object() {
        let mut root = Bson::Int32(1);
        {
            let mut builder = NodeBuilder::new(&mut root);
            builder.key("a").scalar(Scalar::Bool(true));
            builder.elem(0).scalar(Scalar::Bool(true));
        }
        assert_eq!(root, Bson::Int32(1));
    }

    #[test]
    fn huge_indices_are_dropped() {
        let mut root = Bson::Null;
        {
            let mut builder = NodeBuilder::new(&mut root);
            builder.begin_array();
            builder.elem(usize::MAX).scalar(Scalar::Int32(1));
            builder.elem(growth::MAX_LEN).scalar(Scalar::Int32(2));
            builder.elem(1).scalar(Scalar::Int32(3));
        }
        assert_eq!(root, Bson::Array(vec![Bson::Null, Bson::Int32(3)]));
    }
}
