//! Items referenced by macro output.
//!
//! Not public API: paths here may change without notice.

pub use alloc::boxed::Box;
