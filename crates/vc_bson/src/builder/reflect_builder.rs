use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::TypeId;

use chrono::{DateTime, Utc};
use log::{debug, trace};
use vc_reflect::Reflect;
use vc_reflect::info::{ScalarCategory, ScalarKind, TypeInfo};
use vc_reflect::ops::{Map, ReflectMut};

use super::{Builder, NullBuilder, Scalar, set_float, set_int};
use crate::{ObjectId, growth, resolve};

// -----------------------------------------------------------------------------
// Slot

/// Where a [`ReflectBuilder`] writes.
enum Slot<'a> {
    /// The value itself; every change is immediately visible.
    Direct(&'a mut dyn Reflect),
    /// A copy of a map entry, stored back into `map` under `key` on flush.
    Detached {
        value: Box<dyn Reflect>,
        map: &'a mut dyn Map,
        key: String,
    },
}

impl Slot<'_> {
    #[inline]
    fn value(&self) -> &dyn Reflect {
        match self {
            Self::Direct(value) => &**value,
            Self::Detached { value, .. } => &**value,
        }
    }

    #[inline]
    fn value_mut(&mut self) -> &mut dyn Reflect {
        match self {
            Self::Direct(value) => &mut **value,
            Self::Detached { value, .. } => &mut **value,
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectBuilder

/// A [`Builder`] that writes into a reflected value.
///
/// Keys resolve to struct fields (ignoring case) or to entries of maps keyed
/// by `String`. Indices resolve to elements of fixed arrays (bounds checked)
/// or of growable lists (grown on demand, see [`growth`]). Null pointers on
/// the way are pointed at fresh zero values, but only once a non-null event
/// arrives for them.
///
/// Map entries cannot be borrowed in place, so their builder works on a copy
/// and stores it back into the map on [`flush`](Builder::flush).
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_bson::builder::{Builder, ReflectBuilder, Scalar};
/// use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect, Clone, Default)]
/// struct Stats {
///     hits: BTreeMap<String, i64>,
///     last: Option<String>,
/// }
///
/// let mut stats = Stats::default();
/// let mut root = ReflectBuilder::new(&mut stats);
/// root.begin_object();
///
/// {
///     let mut hits = root.key("Hits");
///     hits.begin_object();
///     let mut entry = hits.key("home");
///     entry.scalar(Scalar::Int32(3));
///     entry.flush();
/// }
/// root.key("last").scalar(Scalar::Null);
/// drop(root);
///
/// assert_eq!(stats.hits["home"], 3);
/// assert_eq!(stats.last, None);
/// ```
pub struct ReflectBuilder<'a> {
    slot: Slot<'a>,
}

impl<'a> ReflectBuilder<'a> {
    /// Creates a builder writing directly into `value`.
    #[inline]
    pub fn new(value: &'a mut dyn Reflect) -> Self {
        Self {
            slot: Slot::Direct(value),
        }
    }

    /// Resolves the slot through pointers, allocating null ones.
    ///
    /// A detached slot is written back right after an allocation.
    fn target(&mut self) -> &mut dyn Reflect {
        let mut allocated = false;
        deref_alloc(self.slot.value_mut(), &mut allocated);
        if allocated {
            self.flush();
        }
        deref_alloc(self.slot.value_mut(), &mut allocated)
    }
}

fn deref_alloc<'v>(value: &'v mut dyn Reflect, allocated: &mut bool) -> &'v mut dyn Reflect {
    match value.reflect_mut() {
        ReflectMut::Pointer(pointer) => {
            if pointer.is_null() {
                trace!("allocating pointee of `{}`", pointer.reflect_type_path());
                *allocated = true;
            }
            deref_alloc(pointer.pointee_or_alloc(), allocated)
        }
        other => other.into_reflect(),
    }
}

// Pointers are transparent to payloads.
fn innermost(mut info: &'static TypeInfo) -> &'static TypeInfo {
    while let TypeInfo::Pointer(pointer) = info {
        info = pointer.pointee_info();
    }
    info
}

/// Returns `true` if `value` can be stored into a slot described by `info`.
fn fits(value: &Scalar<'_>, info: &TypeInfo) -> bool {
    match (value, info) {
        (Scalar::Int64(_) | Scalar::Int32(_) | Scalar::Float64(_), TypeInfo::Scalar(scalar)) => {
            matches!(
                scalar.scalar_kind().category(),
                ScalarCategory::Float | ScalarCategory::Int | ScalarCategory::Uint
            )
        }
        (Scalar::String(_) | Scalar::Regex { .. }, TypeInfo::Scalar(scalar)) => {
            scalar.scalar_kind() == ScalarKind::String
        }
        (Scalar::Bool(_), TypeInfo::Scalar(scalar)) => scalar.scalar_kind() == ScalarKind::Bool,
        (Scalar::Date(_), _) => info.ty_id() == TypeId::of::<DateTime<Utc>>(),
        (Scalar::ObjectId(_), _) => {
            let id = info.ty_id();
            id == TypeId::of::<ObjectId>()
                || id == TypeId::of::<Vec<u8>>()
                || id == TypeId::of::<[u8; 12]>()
        }
        _ => false,
    }
}

fn store(target: &mut dyn Reflect, value: Scalar<'_>) -> bool {
    match value {
        Scalar::Null => false,
        Scalar::Int64(v) => store_number(target, v, v as f64),
        Scalar::Int32(v) => store_number(target, i64::from(v), f64::from(v)),
        // `as` truncates toward zero.
        Scalar::Float64(v) => store_number(target, v as i64, v),
        Scalar::String(s) | Scalar::Regex { pattern: s, .. } => {
            match target.downcast_mut::<String>() {
                Some(string) => {
                    string.clear();
                    string.push_str(s);
                    true
                }
                None => false,
            }
        }
        Scalar::Bool(v) => store_copy(target, v),
        Scalar::Date(v) => store_copy(target, v),
        Scalar::ObjectId(oid) => {
            if let Some(bytes) = target.downcast_mut::<Vec<u8>>() {
                bytes.clear();
                bytes.extend_from_slice(oid.as_bytes());
                return true;
            }
            if let Some(bytes) = target.downcast_mut::<[u8; 12]>() {
                *bytes = oid.bytes();
                return true;
            }
            store_copy(target, oid)
        }
    }
}

fn store_copy<T: Reflect>(target: &mut dyn Reflect, value: T) -> bool {
    match target.downcast_mut::<T>() {
        Some(slot) => {
            *slot = value;
            true
        }
        None => false,
    }
}

fn store_number(target: &mut dyn Reflect, int: i64, float: f64) -> bool {
    match target.reflect_mut() {
        ReflectMut::Scalar(scalar) if scalar.kind().is_float() => set_float(scalar, float),
        ReflectMut::Scalar(scalar) => set_int(scalar, int),
        _ => false,
    }
}

/// Copies the entry under `key` out of `map`, inserting a zero value first
/// if it is missing.
fn detach_entry(map: &mut dyn Map, key: &String) -> Option<Box<dyn Reflect>> {
    if map.get(key).is_none() {
        let zero = map.zero_value();
        if map.insert_boxed(Box::new(key.clone()), zero).is_err() {
            return None;
        }
    }
    map.get(key).map(|value| value.reflect_clone())
}

impl Builder for ReflectBuilder<'_> {
    fn scalar(&mut self, value: Scalar<'_>) {
        if value.is_null() {
            return;
        }

        let info = innermost(self.slot.value().reflect_type_info());
        if !fits(&value, info) {
            debug!(
                "dropping {} value for `{}`",
                value.kind_name(),
                info.type_path()
            );
            return;
        }

        let kind_name = value.kind_name();
        if !store(self.target(), value) {
            debug!("failed to store {kind_name} value into `{}`", info.type_path());
        }
    }

    fn begin_object(&mut self) {
        // Structs and maps need no preparation, an empty map is already usable.
        self.target();
    }

    fn begin_array(&mut self) {
        if let ReflectMut::List(list) = self.target().reflect_mut()
            && list.capacity() == 0
        {
            trace!("allocating `{}`", list.reflect_type_path());
            if let Err(err) = list.reserve_total(growth::INITIAL_CAPACITY) {
                debug!("failed to allocate `{}`: {err}", list.reflect_type_path());
            }
        }
    }

    fn key<'s>(&'s mut self, name: &str) -> Box<dyn Builder + 's> {
        match self.target().reflect_mut() {
            ReflectMut::Struct(fields) => {
                let type_path = fields.reflect_type_path();
                let index = fields
                    .reflect_type_info()
                    .as_struct()
                    .ok()
                    .and_then(|info| resolve::field_index(info, name));
                match index.and_then(|index| fields.field_at_mut(index)) {
                    Some(field) => Box::new(ReflectBuilder::new(field)),
                    None => {
                        debug!("`{type_path}` has no field `{name}`");
                        Box::new(NullBuilder)
                    }
                }
            }
            ReflectMut::Map(map) => {
                let accepted = map
                    .reflect_type_info()
                    .as_map()
                    .is_ok_and(resolve::accepts_string_keys);
                if !accepted {
                    debug!(
                        "`{}` is not keyed by `String`, dropping `{name}`",
                        map.reflect_type_path()
                    );
                    return Box::new(NullBuilder);
                }

                let key = String::from(name);
                match detach_entry(map, &key) {
                    Some(value) => Box::new(ReflectBuilder {
                        slot: Slot::Detached { value, map, key },
                    }),
                    None => Box::new(NullBuilder),
                }
            }
            other => {
                debug!(
                    "`{}` has no keys, dropping `{name}`",
                    other.into_reflect().reflect_type_path()
                );
                Box::new(NullBuilder)
            }
        }
    }

    fn elem<'s>(&'s mut self, index: usize) -> Box<dyn Builder + 's> {
        match self.target().reflect_mut() {
            ReflectMut::Array(array) => {
                let len = array.len();
                match array.get_mut(index) {
                    Some(item) => Box::new(ReflectBuilder::new(item)),
                    None => {
                        debug!("index {index} is out of bounds for an array of length {len}");
                        Box::new(NullBuilder)
                    }
                }
            }
            ReflectMut::List(list) => {
                if !growth::ensure_index(list, index) {
                    return Box::new(NullBuilder);
                }
                if list.len() <= index {
                    list.resize_zeroed(index + 1);
                }
                match list.get_mut(index) {
                    Some(item) => Box::new(ReflectBuilder::new(item)),
                    None => Box::new(NullBuilder),
                }
            }
            other => {
                debug!(
                    "`{}` has no elements, dropping index {index}",
                    other.into_reflect().reflect_type_path()
                );
                Box::new(NullBuilder)
            }
        }
    }

    fn flush(&mut self) {
        if let Slot::Detached { value, map, key } = &mut self.slot {
            trace!("writing back entry `{key}` of `{}`", map.reflect_type_path());
            if map.insert_boxed(Box::new(key.clone()), value.reflect_clone()).is_err() {
                debug!("`{}` rejected the entry `{key}`", map.reflect_type_path());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use chrono::{DateTime, Utc};
    use vc_reflect::derive::Reflect;

    use super::ReflectBuilder;
    use crate::{ObjectId, growth};
    use crate::builder::{Builder, Scalar};

    #[derive(Reflect, Clone, Default, Debug, PartialEq)]
    struct Inner {
        value: i32,
    }

    #[derive(Reflect, Clone, Default, Debug, PartialEq)]
    struct Target {
        count: u16,
        ratio: f32,
        label: String,
        enabled: bool,
        at: DateTime<Utc>,
        id: ObjectId,
        raw_id: Vec<u8>,
        fixed: [u8; 12],
        grid: [i32; 2],
        items: Vec<i64>,
        inner: Option<Inner>,
        boxed: Box<Inner>,
        entries: BTreeMap<String, Inner>,
        numbered: BTreeMap<i32, String>,
    }

    fn set(target: &mut Target, key: &str, value: Scalar<'_>) {
        let mut root = ReflectBuilder::new(target);
        let mut child = root.key(key);
        child.scalar(value);
        child.flush();
    }

    #[test]
    fn numeric_policy() {
        let mut target = Target::default();

        set(&mut target, "count", Scalar::Float64(3.9));
        assert_eq!(target.count, 3);

        set(&mut target, "count", Scalar::Int64(65_537));
        assert_eq!(target.count, 1);

        set(&mut target, "ratio", Scalar::Int32(2));
        assert_eq!(target.ratio, 2.0);

        set(&mut target, "label", Scalar::Int32(2));
        assert_eq!(target.label, "");
    }

    #[test]
    fn text_and_leaf_payloads() {
        let mut target = Target::default();

        set(&mut target, "label", Scalar::String("a"));
        set(&mut target, "LABEL", Scalar::Regex { pattern: "^b", options: "i" });
        assert_eq!(target.label, "^b");

        set(&mut target, "enabled", Scalar::Bool(true));
        set(&mut target, "enabled", Scalar::String("false"));
        assert!(target.enabled);

        let at = DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000).unwrap();
        set(&mut target, "at", Scalar::Date(at));
        assert_eq!(target.at, at);

        let oid = ObjectId::from_bytes([9; 12]);
        set(&mut target, "id", Scalar::ObjectId(oid));
        set(&mut target, "raw_id", Scalar::ObjectId(oid));
        set(&mut target, "fixed", Scalar::ObjectId(oid));
        assert_eq!(target.id, oid);
        assert_eq!(target.raw_id, [9; 12]);
        assert_eq!(target.fixed, [9; 12]);
    }

    #[test]
    fn null_leaves_target_untouched() {
        let mut target = Target {
            label: String::from("kept"),
            ..Target::default()
        };
        set(&mut target, "label", Scalar::Null);
        set(&mut target, "inner", Scalar::Null);

        assert_eq!(target.label, "kept");
        assert_eq!(target.inner, None);
    }

    #[test]
    fn pointers_allocate_lazily() {
        let mut target = Target::default();
        {
            let mut root = ReflectBuilder::new(&mut target);
            {
                let mut inner = root.key("inner");
                inner.begin_object();
                inner.key("value").scalar(Scalar::Int32(4));
                inner.flush();
            }
            root.key("boxed").key("VALUE").scalar(Scalar::Int64(5));
        }
        assert_eq!(target.inner, Some(Inner { value: 4 }));
        assert_eq!(target.boxed.value, 5);

        // A mismatched payload does not allocate.
        let mut target = Target::default();
        set(&mut target, "inner", Scalar::String("x"));
        assert_eq!(target.inner, None);
    }

    #[test]
    fn elements() {
        let mut target = Target::default();
        {
            let mut root = ReflectBuilder::new(&mut target);
            {
                let mut items = root.key("items");
                items.begin_array();
                items.elem(2).scalar(Scalar::Int64(7));
                items.elem(0).scalar(Scalar::Int32(1));
            }
            let mut grid = root.key("grid");
            grid.elem(1).scalar(Scalar::Int32(8));
            grid.elem(2).scalar(Scalar::Int32(9));
        }
        assert_eq!(target.items, vec![1, 0, 7]);
        assert_eq!(target.grid, [0, 8]);
    }

    #[test]
    fn huge_indices_are_dropped() {
        let mut target = Target::default();
        {
            let mut root = ReflectBuilder::new(&mut target);
            let mut items = root.key("items");
            items.begin_array();
            items.elem(usize::MAX).scalar(Scalar::Int64(1));
            items.elem(growth::MAX_LEN).scalar(Scalar::Int64(2));
            items.elem(1).scalar(Scalar::Int64(3));
        }
        assert_eq!(target.items, vec![0, 3]);
        assert!(target.items.capacity() < growth::MAX_LEN);
    }

    #[test]
    fn map_entries_write_back() {
        let mut target = Target::default();
        target.entries.insert(String::from("old"), Inner { value: 1 });
        {
            let mut root = ReflectBuilder::new(&mut target);
            let mut entries = root.key("entries");
            entries.begin_object();
            {
                let mut fresh = entries.key("new");
                fresh.key("value").scalar(Scalar::Int32(2));
                fresh.flush();
            }
            let mut old = entries.key("old");
            old.key("value").scalar(Scalar::Int32(3));
            old.flush();
        }
        assert_eq!(target.entries["new"].value, 2);
        assert_eq!(target.entries["old"].value, 3);
    }

    #[test]
    fn maps_without_string_keys_absorb() {
        let mut target = Target::default();
        {
            let mut root = ReflectBuilder::new(&mut target);
            let mut numbered = root.key("numbered");
            numbered.begin_object();
            let mut entry = numbered.key("1");
            entry.scalar(Scalar::String("x"));
            entry.flush();
        }
        assert!(target.numbered.is_empty());
    }

    #[test]
    fn unflushed_entries_stay_detached() {
        let mut entries: BTreeMap<String, i32> = BTreeMap::new();
        {
            let mut root = ReflectBuilder::new(&mut entries);
            let mut entry = root.key("a");
            entry.scalar(Scalar::Int32(9));
        }
        // Only the zero value inserted on lookup reached the map.
        assert_eq!(entries["a"], 0);
    }
}
