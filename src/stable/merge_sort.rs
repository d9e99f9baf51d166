//! Top-down recursive merge sort with a single scratch buffer.

use std::mem;
use std::ptr;

sort_impl!("merge_sort_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    let len = v.len();
    if len < 2 {
        return;
    }

    // The left half is never longer than the right half, and it is the only one copied out.
    // `buf` keeps a length of zero, so it never drops the bitwise copies it temporarily holds.
    let mut buf = Vec::<T>::with_capacity(len / 2);

    merge_sort(v, buf.as_mut_ptr());
}

fn merge_sort<T: Ord>(v: &mut [T], buf: *mut T) {
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    merge_sort(&mut v[..mid], buf);
    merge_sort(&mut v[mid..], buf);

    // SAFETY: `buf` has capacity for `len / 2` elements of the top-level slice, which is at least
    // `mid` for every sub-slice, and `0 < mid < len`.
    unsafe {
        merge(v, mid, buf);
    }
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` into `v`.
///
/// SAFETY: `buf` must be valid for writes of `mid` elements and must not overlap `v`. The caller
/// has to guarantee `0 < mid < v.len()` and `mid <= v.len() - mid`.
unsafe fn merge<T: Ord>(v: &mut [T], mid: usize, buf: *mut T) {
    let len = v.len();
    debug_assert!(mid > 0 && mid < len && mid <= len - mid);

    let arr_ptr = v.as_mut_ptr();
    let (v_mid, v_end) = unsafe { (arr_ptr.add(mid), arr_ptr.add(len)) };

    // The left run is copied into `buf`. Then the copied run and the right run are traced
    // forwards, comparing their next unconsumed elements and moving the lesser one into `v`.
    //
    // As soon as the left run is fully consumed, the process is done, the rest of the right run
    // is already in place. If the right run gets consumed first, whatever is left of the left run
    // has to be copied into the remaining hole in `v`.
    //
    // Panic safety:
    //
    // If `cmp` panics at any point during the process, `hole` will get dropped and fill the hole
    // in `v` with the unconsumed range in `buf`, thus ensuring that `v` still holds every object
    // it initially held exactly once.
    let mut hole = unsafe {
        ptr::copy_nonoverlapping(arr_ptr, buf, mid);
        MergeHole {
            start: buf,
            end: buf.add(mid),
            dest: arr_ptr,
        }
    };

    let mut right = v_mid;

    while hole.start < hole.end && right < v_end {
        // Consume the lesser side.
        // If equal, prefer the left run to maintain stability.
        unsafe {
            if *right < *hole.start {
                ptr::copy_nonoverlapping(right, hole.dest, 1);
                right = right.add(1);
            } else {
                ptr::copy_nonoverlapping(hole.start, hole.dest, 1);
                hole.start = hole.start.add(1);
            }
            hole.dest = hole.dest.add(1);
        }
    }

    // Finally, `hole` gets dropped. If the left run was not fully consumed, whatever remains of it
    // will now be copied into the hole in `v`, which sits exactly in front of `right`.
}

// When dropped, copies the range `start..end` into `dest..`.
struct MergeHole<T> {
    start: *mut T,
    end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: `T` is not a zero-sized type, `start..end` lies inside `buf` and `dest` points
        // into `v` with room for exactly `end - start` elements.
        unsafe {
            let len = self.end.offset_from(self.start) as usize;
            ptr::copy_nonoverlapping(self.start, self.dest, len);
        }
    }
}
