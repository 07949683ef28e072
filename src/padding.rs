//! Border index mapping for fixed-radius windows.
//!
//! Filters never materialize padded copies of their input; they map an
//! out-of-range coordinate back into `0..n` instead.

/// Mirror an index about the border without repeating the edge sample:
/// `-1 → 1`, `n → n - 2`.
///
/// An axis of length 1 has nothing to mirror, so every index maps to 0.
/// Offsets larger than one period fold repeatedly.
#[inline]
pub fn reflect_index(i: isize, n: usize) -> usize {
    debug_assert!(n > 0, "reflect_index on an empty axis");
    if n == 1 {
        return 0;
    }
    let n = n as isize;
    let period = 2 * (n - 1);
    let mut i = i.rem_euclid(period);
    if i >= n {
        i = period - i;
    }
    i as usize
}

/// Three-tap neighbourhood `[i-1, i, i+1]` with reflected borders.
#[inline]
pub fn reflect_neighbors(i: usize, n: usize) -> [usize; 3] {
    let i = i as isize;
    [
        reflect_index(i - 1, n),
        reflect_index(i, n),
        reflect_index(i + 1, n),
    ]
}

/// Intersection of the window `[start, start + len)` with `0..n`.
///
/// Samples falling outside the axis are dropped, which is what zero padding
/// amounts to for sums and what "ignore" padding amounts to for max-pooling.
#[inline]
pub fn clip_window(start: isize, len: usize, n: usize) -> std::ops::Range<usize> {
    let end = start + len as isize;
    let lo = start.clamp(0, n as isize) as usize;
    let hi = end.clamp(0, n as isize) as usize;
    lo..hi.max(lo)
}
