#[cfg(not(feature = "hashbrown"))]
pub(crate) use std::collections::HashMap;

#[cfg(feature = "hashbrown")]
pub(crate) use hashbrown::HashMap;

/// Distance assigned to vertices that cannot be reached from the source.
pub const INFINITY: f64 = f64::INFINITY;

/// Returns the improved distance for the head of an edge, or `None` when the
/// edge cannot relax it.
///
/// A tail at [`INFINITY`] never relaxes anything, and a sum that overflows
/// to `+inf` is never an improvement. A sum that overflows to `-inf` still
/// is: distances saturate at `f64::NEG_INFINITY`, so an overflowing negative
/// cycle keeps relaxing and is still detected.
#[inline]
pub fn relax(tail: f64, weight: f64, head: f64) -> Option<f64> {
    if tail == INFINITY {
        return None;
    }
    let candidate = tail + weight;
    (candidate < head).then_some(candidate)
}

#[inline]
pub fn is_reachable(distance: f64) -> bool {
    distance != INFINITY
}
