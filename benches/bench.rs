use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use sort_test_tools::patterns;
use textbook_sort::comp_count::count_comparisons;
use textbook_sort::Sort;

// Bubble sort and the last element pivot quicksort are quadratic on some of these patterns, so
// the lengths stay modest.
const TEST_LENS: [usize; 6] = [1, 8, 20, 100, 1_000, 10_000];

fn split_len(len: usize, part_a_percent: f64) -> (usize, usize) {
    let len_a = ((len as f64 / 100.0) * part_a_percent).round() as usize;
    let len_b = len - len_a;

    (len_a, len_b)
}

fn shuffle_vec<T>(mut v: Vec<T>) -> Vec<T> {
    use rand::seq::SliceRandom;
    use rand::thread_rng;

    let mut rng = thread_rng();
    v.shuffle(&mut rng);

    v
}

fn pattern_providers() -> Vec<(&'static str, fn(usize) -> Vec<i32>)> {
    vec![
        ("random", patterns::random),
        ("random_dense", |len| {
            patterns::random_uniform(len, 0..=(((len as f64).log2().round()) as i32))
        }),
        ("random_binary", |len| patterns::random_uniform(len, 0..=1)),
        ("random_5p", |len| {
            let (len_95p, len_5p) = split_len(len, 95.0);
            let v: Vec<i32> = std::iter::repeat(0)
                .take(len_95p)
                .chain(patterns::random(len_5p))
                .collect();

            shuffle_vec(v)
        }),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("all_equal", patterns::all_equal),
        ("saws_long", |len| {
            patterns::saw_mixed(len, ((len as f64).log2().round()) as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
    ]
}

fn should_run_benchmark(name: &str) -> bool {
    env::var("BENCH_FILTER")
        .map(|filter| name.contains(&filter))
        .unwrap_or(true)
}

fn measure_comp_count<S: Sort>(
    name: &str,
    test_len: usize,
    pattern_provider: fn(usize) -> Vec<i32>,
) {
    // Measure how many comparisons are performed by a specific implementation and input
    // combination.
    let run_count: usize = if test_len <= 20 {
        10_000
    } else if test_len < 10_000 {
        100
    } else {
        3
    };

    let mut comp_count = 0u64;
    for _ in 0..run_count {
        let (_, comps) = count_comparisons(pattern_provider(test_len), S::sort);
        comp_count += comps;
    }

    // If there is on average less than a single comparison this will be wrong.
    // But that's such a corner case I don't care about it.
    let total = comp_count / (run_count as u64);
    println!("{name}: mean comparisons: {total}");
}

fn bench_sort<S: Sort>(c: &mut Criterion) {
    let sort_name = S::name();
    if !should_run_benchmark(&sort_name) {
        return;
    }

    // Fresh values for every batch, otherwise the branch predictor learns the input.
    patterns::disable_fixed_seed();

    for test_len in TEST_LENS {
        for (pattern_name, pattern_provider) in pattern_providers() {
            if test_len < 3 && pattern_name != "random" {
                continue;
            }

            let bench_name = format!("{sort_name}-i32-{pattern_name}-{test_len}");

            if env::var("MEASURE_COMP").is_ok() {
                measure_comp_count::<S>(&bench_name, test_len, pattern_provider);
                continue;
            }

            let batch_size = if test_len > 30 {
                BatchSize::LargeInput
            } else {
                BatchSize::SmallInput
            };

            c.bench_function(&bench_name, |b| {
                b.iter_batched(
                    || pattern_provider(test_len),
                    |mut test_data| S::sort(black_box(test_data.as_mut_slice())),
                    batch_size,
                )
            });
        }
    }
}

macro_rules! bench_sorts {
    ($($name:ident => $sort_impl:ty),* $(,)?) => {
        paste::paste! {
            $(
                fn [<bench_ $name>](c: &mut Criterion) {
                    bench_sort::<$sort_impl>(c);
                }
            )*

            criterion_group!(benches, $([<bench_ $name>]),*);
        }
    };
}

bench_sorts!(
    bubble_sort => textbook_sort::stable::bubble_sort::SortImpl,
    merge_sort => textbook_sort::stable::merge_sort::SortImpl,
    quicksort => textbook_sort::unstable::quicksort::SortImpl,
);

criterion_main!(benches);
