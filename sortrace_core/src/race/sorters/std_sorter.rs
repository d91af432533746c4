use std::time::Instant;

use crate::race::{Comparisons, RunReport, Sorter, Step};

/// The baseline: the standard library's stable [`sort`](slice::sort) on a
/// private copy of the input.
///
/// The library sort does not expose its comparisons, so the report carries
/// [`Comparisons::NotApplicable`] and a single [`Step`] naming the final
/// state.
#[derive(Default)]
pub struct StdSorter;

impl Sorter for StdSorter {
    fn name(&self) -> &'static str {
        "Std Sort"
    }

    fn sort(&self, input: &[i32]) -> RunReport {
        let mut arr = input.to_vec();

        let start = Instant::now();
        arr.sort();
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        RunReport {
            elapsed_ms,
            steps: vec![Step::Builtin { state: arr.clone() }],
            sorted: arr,
            comparisons: Comparisons::NotApplicable,
        }
    }
}
