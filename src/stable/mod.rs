pub mod bubble_sort;
pub mod merge_sort;
