//! Comparison counting, used to check the complexity of the sorts and reported by the CLI.

use std::cell::Cell;
use std::cmp::Ordering;

thread_local! {
    static COMP_COUNT: Cell<u64> = const { Cell::new(0) };
}

/// Wraps a value so that every `Ord::cmp` call on it is counted for the current thread.
#[derive(Clone, Debug)]
pub struct CompCounted<T>(pub T);

impl<T: Ord> PartialEq for CompCounted<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for CompCounted<T> {}

impl<T: Ord> PartialOrd for CompCounted<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for CompCounted<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        COMP_COUNT.with(|count| count.set(count.get() + 1));
        self.0.cmp(&other.0)
    }
}

/// Sorts `values` with `sort_fn` and returns them together with the number of comparisons made.
///
/// Comparisons of other `CompCounted` values on the same thread while `sort_fn` runs are
/// included in the count.
pub fn count_comparisons<T, F>(values: Vec<T>, sort_fn: F) -> (Vec<T>, u64)
where
    T: Ord,
    F: FnOnce(&mut [CompCounted<T>]),
{
    let mut wrapped = values.into_iter().map(CompCounted).collect::<Vec<_>>();

    let before = COMP_COUNT.with(|count| count.get());
    sort_fn(&mut wrapped);
    let after = COMP_COUNT.with(|count| count.get());

    let values = wrapped.into_iter().map(|counted| counted.0).collect();
    (values, after - before)
}
