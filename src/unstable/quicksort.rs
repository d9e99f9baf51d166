//! Last element pivot quicksort, driven by an explicit stack instead of recursion.

use std::mem;
use std::ops::Range;

sort_impl!("quicksort_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    quicksort(v);
}

fn quicksort<T: Ord>(v_full: &mut [T]) {
    // Only the larger side of each partition is pushed, the smaller one is handled right away.
    // That bounds the stack to `log2(len)` entries even for already sorted input, where every
    // partition is maximally unbalanced.
    let mut stack: Vec<Range<usize>> = Vec::new();
    let mut current = 0..v_full.len();

    loop {
        if current.len() < 2 {
            match stack.pop() {
                Some(next) => {
                    current = next;
                    continue;
                }
                None => return,
            }
        }

        let pivot_pos = current.start + partition(&mut v_full[current.clone()]);

        let left = current.start..pivot_pos;
        let right = (pivot_pos + 1)..current.end;

        let (smaller, larger) = if left.len() <= right.len() {
            (left, right)
        } else {
            (right, left)
        };

        if larger.len() >= 2 {
            stack.push(larger);
        }
        current = smaller;
    }
}

/// Partitions `v` around its last element and returns the pivot's final position.
///
/// Everything left of the returned index is less than the pivot, everything right of it is
/// greater than or equal to the pivot. Elements equal to the pivot end up on its right.
///
/// Instead of swapping, an element that does not belong in front of the pivot is rotated behind
/// it: the element moves into the pivot slot, the element just before the pivot moves into the
/// freed slot, and the pivot steps one position to the left.
///
/// Panics if `v` is empty.
pub fn partition<T: Ord>(v: &mut [T]) -> usize {
    assert!(!v.is_empty(), "cannot partition an empty slice");

    let mut pivot = v.len() - 1;
    let mut start = 0;

    while pivot > start {
        if v[pivot] > v[start] {
            start += 1;
        } else {
            // Rotate `start -> pivot`, `pivot - 1 -> start`, `pivot -> pivot - 1`.
            v.swap(start, pivot - 1);
            v.swap(pivot - 1, pivot);
            pivot -= 1;
        }
    }

    pivot
}
