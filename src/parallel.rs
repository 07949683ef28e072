//! Row-wise work distribution over disjoint output chunks.
//!
//! With the `parallel` feature the rows go to rayon's global pool; without it
//! they are processed in order. Each row is written by exactly one closure
//! call, so both paths produce identical buffers.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Call `f(row_index, row)` for every `row_len`-sized chunk of `data`.
pub(crate) fn for_each_row_mut<T, F>(data: &mut [T], row_len: usize, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if row_len == 0 {
        return;
    }

    #[cfg(feature = "parallel")]
    data.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| f(y, row));

    #[cfg(not(feature = "parallel"))]
    data.chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| f(y, row));
}
