pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &mut [T])
    where
        T: Ord;

    /// Consumes `v` and returns it sorted, for callers that think in terms of sequences rather
    /// than buffers.
    fn sorted<T>(mut v: Vec<T>) -> Vec<T>
    where
        T: Ord,
    {
        Self::sort(&mut v);
        v
    }
}

pub mod patterns;
