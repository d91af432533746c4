use std::time::Instant;

use crate::race::{Comparisons, RunReport, Sorter, Step};

/// An implementation of [Shell Sort](https://en.wikipedia.org/wiki/Shellsort)
/// over the halving gap sequence, counting comparisons and recording one
/// [`Step`] per gap level.
///
/// # Usage
///```
/// use sortrace_core::race::{ShellSorter, Sorter};
///
/// let report = ShellSorter.sort(&[1, 5, 4, 2, 3]);
/// assert_eq!(report.sorted, vec![1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Shell sort runs insertion sort over interleaved subsequences whose
/// elements sit a gap apart, then shrinks the gap and repeats. Early passes
/// with large gaps move elements long distances cheaply, so by the time the
/// gap reaches 1 the array is nearly sorted and the final plain insertion
/// pass does little work. This implementation starts at `n / 2` and halves
/// the gap until it reaches zero.
///
/// The comparison counter increments once when an element enters the gapped
/// insertion scan and once more per executed shift probe. Running time is
/// sub-quadratic on average and depends on the gap sequence.
#[derive(Default)]
pub struct ShellSorter;

impl Sorter for ShellSorter {
    fn name(&self) -> &'static str {
        "Shell Sort"
    }

    fn sort(&self, input: &[i32]) -> RunReport {
        let mut arr = input.to_vec();
        let n = arr.len();
        let mut comparisons = 0;
        let mut steps = Vec::new();

        let start = Instant::now();

        let mut gap = n / 2;
        while gap > 0 {
            for i in gap..n {
                let temp = arr[i];
                let mut j = i;
                comparisons += 1;

                while j >= gap && arr[j - gap] > temp {
                    comparisons += 1;
                    arr[j] = arr[j - gap];
                    j -= gap;
                }

                arr[j] = temp;
            }

            steps.push(Step::Gap {
                gap,
                state: arr.clone(),
            });
            gap /= 2;
        }

        RunReport {
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
            sorted: arr,
            comparisons: Comparisons::Counted(comparisons),
            steps,
        }
    }
}
