//! Unoptimized bubble sort, n - 1 passes regardless of input.

use std::mem;

sort_impl!("bubble_sort_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    bubble_sort(v);
}

fn bubble_sort<T: Ord>(v: &mut [T]) {
    let len = v.len();
    if len < 2 {
        return;
    }

    // After each pass the largest element of `v[..=end]` has bubbled up to `end`.
    for end in (1..len).rev() {
        for i in 0..end {
            // Strictly greater, equal neighbours are never swapped which keeps the sort stable.
            if v[i] > v[i + 1] {
                v.swap(i, i + 1);
            }
        }
    }
}
