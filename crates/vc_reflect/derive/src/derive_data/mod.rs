// -----------------------------------------------------------------------------
// Modules

mod reflect_meta;
mod reflect_struct;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use reflect_meta::{ReflectMeta, WhereBounds};
pub(crate) use reflect_struct::ReflectStruct;
