use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use textbook_sort::comp_count::count_comparisons;
use textbook_sort::sequence::{self, SAMPLE};
use textbook_sort::stable::{bubble_sort, merge_sort};
use textbook_sort::unstable::quicksort;
use textbook_sort::Sort;

/// Sort a sequence of integers with bubble sort, merge sort or quicksort.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Which algorithm to run
    #[arg(long, short, value_enum, default_value_t = Algorithm::All)]
    algorithm: Algorithm,

    /// Also report how many comparisons each sort made
    #[arg(long, short)]
    count_comparisons: bool,

    /// Values to sort, separated by spaces and/or commas. Defaults to the sample sequence.
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Bubble,
    Merge,
    Quick,
    All,
}

type SortRunner = fn(&[i64], bool) -> String;

const BUBBLE: SortRunner = run_sort::<bubble_sort::SortImpl>;
const MERGE: SortRunner = run_sort::<merge_sort::SortImpl>;
const QUICK: SortRunner = run_sort::<quicksort::SortImpl>;

impl Algorithm {
    fn runners(self) -> &'static [SortRunner] {
        match self {
            Algorithm::Bubble => &[BUBBLE],
            Algorithm::Merge => &[MERGE],
            Algorithm::Quick => &[QUICK],
            Algorithm::All => &[BUBBLE, MERGE, QUICK],
        }
    }
}

fn run_sort<S: Sort>(input: &[i64], count: bool) -> String {
    let start = Instant::now();

    let line = if count {
        let (sorted, comps) = count_comparisons(input.to_vec(), S::sort);
        format!("{}: {:?} ({} comparisons)", S::name(), sorted, comps)
    } else {
        format!("{}: {:?}", S::name(), S::sorted(input.to_vec()))
    };

    debug!(sort = %S::name(), elapsed = ?start.elapsed(), "sorted");
    line
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let input = if cli.values.is_empty() {
        SAMPLE.to_vec()
    } else {
        let joined = cli.values.join(" ");
        sequence::parse_sequence(&joined)
            .with_context(|| format!("failed to parse input sequence `{joined}`"))?
    };

    info!(
        algorithm = ?cli.algorithm,
        len = input.len(),
        "sorting input sequence"
    );

    for run in cli.algorithm.runners() {
        println!("{}", run(&input, cli.count_comparisons));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["textbook-sort"]);
        assert_eq!(cli.algorithm, Algorithm::All);
        assert!(!cli.count_comparisons);
        assert!(cli.values.is_empty());
    }

    #[test]
    fn cli_parses_values_and_algorithm() {
        let cli = Cli::parse_from(["textbook-sort", "-a", "quick", "-c", "3", "-1", "2"]);
        assert_eq!(cli.algorithm, Algorithm::Quick);
        assert!(cli.count_comparisons);
        assert_eq!(cli.values, ["3", "-1", "2"]);
    }

    #[test]
    fn sample_output_lines() {
        assert_eq!(
            run_sort::<merge_sort::SortImpl>(&SAMPLE, false),
            "merge_sort_stable: [1, 3, 4, 6, 9, 14, 20, 21, 21, 25]"
        );
        assert_eq!(
            run_sort::<bubble_sort::SortImpl>(&[2, 1, 3], true),
            "bubble_sort_stable: [1, 2, 3] (3 comparisons)"
        );
    }

    #[test]
    fn all_runs_each_algorithm_once_in_order() {
        let lines = Algorithm::All
            .runners()
            .iter()
            .map(|run| run(&[3, 1, 2], false))
            .collect::<Vec<_>>();

        assert_eq!(
            lines,
            [
                "bubble_sort_stable: [1, 2, 3]",
                "merge_sort_stable: [1, 2, 3]",
                "quicksort_unstable: [1, 2, 3]",
            ]
        );

        for algorithm in [Algorithm::Bubble, Algorithm::Merge, Algorithm::Quick] {
            assert_eq!(algorithm.runners().len(), 1);
        }
    }
}
