//! Ordering of the key space.
//!
//! Keys compare as unsigned byte strings: the first differing byte decides,
//! and a proper prefix sorts before any of its extensions. Ranges are
//! half-open, `[start, end)`, with `None` meaning unbounded on that side.

use std::cmp::Ordering;
use std::ops::Bound;

pub fn compare_keys(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}

/// Reports whether `key` lies in `[start, end)`.
pub fn is_key_in_domain(key: &[u8], start: Option<&[u8]>, end: Option<&[u8]>) -> bool {
    let (lo, hi) = half_open(start, end);
    start_bound_contains(lo, key) && end_bound_contains(hi, key)
}

/// Translates optional half-open bounds into `Bound`s usable with
/// `BTreeMap::range`. Returns `None` when no key can be in the domain, which
/// also keeps `range` from panicking on inverted bounds.
pub fn key_bounds<'a>(
    start: Option<&'a [u8]>,
    end: Option<&'a [u8]>,
) -> Option<(Bound<&'a [u8]>, Bound<&'a [u8]>)> {
    if let (Some(start), Some(end)) = (start, end) {
        if compare_keys(start, end) != Ordering::Less {
            return None;
        }
    }
    Some(half_open(start, end))
}

fn half_open<'a>(
    start: Option<&'a [u8]>,
    end: Option<&'a [u8]>,
) -> (Bound<&'a [u8]>, Bound<&'a [u8]>) {
    (
        start.map_or(Bound::Unbounded, Bound::Included),
        end.map_or(Bound::Unbounded, Bound::Excluded),
    )
}

fn start_bound_contains(bound: Bound<&[u8]>, key: &[u8]) -> bool {
    match bound {
        Bound::Included(b) => key >= b,
        Bound::Excluded(b) => key > b,
        Bound::Unbounded => true,
    }
}

fn end_bound_contains(bound: Bound<&[u8]>, key: &[u8]) -> bool {
    match bound {
        Bound::Included(b) => key <= b,
        Bound::Excluded(b) => key < b,
        Bound::Unbounded => true,
    }
}
