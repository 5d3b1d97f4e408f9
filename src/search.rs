//! Binary searches over sorted sequences
//!
//! Two related primitives live here: [`bracket`], which locates the keyframe
//! pair surrounding a query position, and [`find`], a general-purpose
//! exact-match search over any sorted slice. Both run in O(log n) comparisons
//! and never allocate; bracket results borrow from the caller's slice.

use crate::keyframe::Keyframe;
use std::cmp::Ordering;

/// Result of a segment search: the keyframes surrounding a query position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bracket<'a, V> {
    /// The query fell on or beyond a boundary, or the sequence has a single
    /// keyframe; no second keyframe exists to pair with.
    Edge(&'a Keyframe<V>),
    /// Adjacent keyframes `(a, b)` with `a.position <= query < b.position`.
    Pair(&'a Keyframe<V>, &'a Keyframe<V>),
}

impl<'a, V> Bracket<'a, V> {
    /// The keyframe the blend starts from.
    #[inline]
    pub fn start(&self) -> &'a Keyframe<V> {
        match self {
            Bracket::Edge(k) => k,
            Bracket::Pair(a, _) => a,
        }
    }

    /// The keyframe the blend ends at.
    #[inline]
    pub fn end(&self) -> &'a Keyframe<V> {
        match self {
            Bracket::Edge(k) => k,
            Bracket::Pair(_, b) => b,
        }
    }
}

/// Default segment comparator: half-open interval `[a.position, b.position)`.
#[inline]
pub fn segment_comparator<V>(a: &Keyframe<V>, b: &Keyframe<V>, position: f64) -> Ordering {
    if a.position <= position && position < b.position {
        Ordering::Equal
    } else if position < a.position {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Locate the bracketing keyframe pair for `position` using the default
/// half-open segment comparator.
///
/// Returns `None` for an empty sequence. Positions before the first keyframe
/// or at/after the last clamp to [`Bracket::Edge`] of the boundary keyframe;
/// the final keyframe is inclusive. The sequence must already be sorted by
/// position (see [`sort_keyframes`](crate::sort_keyframes)).
#[inline]
pub fn bracket<V>(keyframes: &[Keyframe<V>], position: f64) -> Option<Bracket<'_, V>> {
    bracket_by(keyframes, position, segment_comparator)
}

/// Locate the bracketing keyframe pair for `position` with a caller-supplied
/// comparator.
///
/// The comparator sees an adjacent pair `(a, b)` and the query position, and
/// returns `Equal` when the position lies within the pair's segment, `Less`
/// when it falls before `a`, `Greater` when it falls after `b`. At most
/// `floor(log2(n)) + 1` comparator invocations are made for n keyframes.
pub fn bracket_by<V, F>(
    keyframes: &[Keyframe<V>],
    position: f64,
    mut comparator: F,
) -> Option<Bracket<'_, V>>
where
    F: FnMut(&Keyframe<V>, &Keyframe<V>, f64) -> Ordering,
{
    let len = keyframes.len();
    if len == 0 {
        return None;
    }

    let mut low: isize = 0;
    let mut high: isize = len as isize - 1;

    loop {
        // Floor division: when the range inverts past the left boundary the
        // midpoint must round toward negative infinity to terminate.
        let mid = low + (high - low).div_euclid(2);

        if mid < 0 {
            return Some(Bracket::Edge(&keyframes[0]));
        }
        if mid as usize == len - 1 {
            return Some(Bracket::Edge(&keyframes[len - 1]));
        }

        let a = &keyframes[mid as usize];
        let b = &keyframes[mid as usize + 1];

        match comparator(a, b, position) {
            Ordering::Equal => return Some(Bracket::Pair(a, b)),
            Ordering::Less => high = mid - 1,
            Ordering::Greater => low = mid + 1,
        }
    }
}

/// Exact-match binary search over a sorted slice.
///
/// Returns a reference to the matching element, or `None` when `target` is
/// not present.
#[inline]
pub fn find<'a, T: Ord>(sorted: &'a [T], target: &T) -> Option<&'a T> {
    find_by(sorted, |candidate| target.cmp(candidate))
}

/// Exact-match binary search with a caller-supplied comparator.
///
/// The comparator returns how the target compares to the candidate element:
/// `Less` narrows to the left half, `Greater` to the right, `Equal` matches.
pub fn find_by<T, F>(sorted: &[T], mut comparator: F) -> Option<&T>
where
    F: FnMut(&T) -> Ordering,
{
    let mut low: isize = 0;
    let mut high: isize = sorted.len() as isize - 1;

    while low <= high {
        let mid = low + (high - low) / 2;
        let candidate = &sorted[mid as usize];

        match comparator(candidate) {
            Ordering::Equal => return Some(candidate),
            Ordering::Less => high = mid - 1,
            Ordering::Greater => low = mid + 1,
        }
    }

    None
}
