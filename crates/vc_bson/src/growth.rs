//! Capacity policy for growable sequences filled by index.
//!
//! Elements may arrive at any index. Capacity grows geometrically from a
//! floor of [`INITIAL_CAPACITY`], so filling a list front to back is
//! amortised O(1) per element and never reallocates for indices that are
//! already covered.

use log::{debug, trace};
use vc_reflect::ops::List;

/// Capacity given to an empty list when an array begins.
pub const INITIAL_CAPACITY: usize = 8;

/// Largest length a list is grown to, the maximum size of a document in
/// bytes. An index at or past it is never allocated for.
pub const MAX_LEN: usize = 16 * 1024 * 1024;

/// Returns the capacity a list needs to hold `index`, or `None` if `index`
/// is out of [`MAX_LEN`].
///
/// Starts at `max(capacity, INITIAL_CAPACITY)` and doubles until the result
/// is strictly greater than `index`.
///
/// ```
/// use vc_bson::growth::{MAX_LEN, grown_capacity};
///
/// assert_eq!(grown_capacity(0, 0), Some(8));
/// assert_eq!(grown_capacity(0, 100), Some(128));
/// assert_eq!(grown_capacity(20, 20), Some(40));
/// assert_eq!(grown_capacity(0, MAX_LEN), None);
/// ```
pub fn grown_capacity(capacity: usize, index: usize) -> Option<usize> {
    if index >= MAX_LEN {
        return None;
    }
    let mut capacity = capacity.max(INITIAL_CAPACITY);
    while capacity <= index {
        capacity = capacity.checked_mul(2)?;
    }
    Some(capacity)
}

/// Grows `list` so that `index` is below its capacity.
///
/// Existing elements keep their order and position, the length is left
/// unchanged and the capacity never shrinks. Returns `false`, leaving the
/// list untouched, if `index` is out of [`MAX_LEN`] or the allocation fails.
pub fn ensure_index(list: &mut dyn List, index: usize) -> bool {
    let capacity = list.capacity();
    if index < capacity {
        return true;
    }
    let Some(total) = grown_capacity(capacity, index) else {
        debug!("index {index} exceeds the maximum list length {MAX_LEN}");
        return false;
    };
    trace!("growing list capacity {capacity} -> {total} for index {index}");
    match list.reserve_total(total) {
        Ok(()) => true,
        Err(err) => {
            debug!("failed to grow list to {total}: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{INITIAL_CAPACITY, MAX_LEN, ensure_index, grown_capacity};

    #[test]
    fn doubling_from_the_floor() {
        assert_eq!(grown_capacity(0, 7), Some(INITIAL_CAPACITY));
        assert_eq!(grown_capacity(0, 8), Some(16));
        assert_eq!(grown_capacity(3, 8), Some(16));
        assert_eq!(grown_capacity(16, 100), Some(128));
        assert_eq!(grown_capacity(0, MAX_LEN - 1), Some(MAX_LEN));
    }

    #[test]
    fn huge_indices_are_refused() {
        assert_eq!(grown_capacity(0, MAX_LEN), None);
        assert_eq!(grown_capacity(0, usize::MAX), None);
        assert_eq!(grown_capacity(usize::MAX, usize::MAX), None);

        let mut data = vec![1_i32];
        assert!(!ensure_index(&mut data, usize::MAX));
        assert!(!ensure_index(&mut data, MAX_LEN + 1));
        assert_eq!(data, [1]);
    }

    #[test]
    fn grows_only_when_needed() {
        let mut data: Vec<i32> = Vec::with_capacity(32);
        data.extend([1, 2, 3]);
        let before = data.capacity();

        assert!(ensure_index(&mut data, 10));
        assert_eq!(data.capacity(), before);

        assert!(ensure_index(&mut data, 100));
        assert!(data.capacity() >= 101);
        assert_eq!(data, vec![1, 2, 3]);
    }
}
