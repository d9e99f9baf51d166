//! Textbook comparison sorts: bubble sort, top-down merge sort and a last-element-pivot
//! quicksort, each behind the shared [`Sort`] trait.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord,
            {
                sort(v);
            }
        }
    };
}

pub use sort_test_tools::Sort;

pub mod comp_count;
pub mod sequence;
pub mod stable;
pub mod unstable;
