use std::time::Instant;

use crate::race::{Comparisons, RunReport, Sorter, Step};

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
/// that counts comparisons and records one [`Step`] per pass.
///
/// # Usage
///```
/// use sortrace_core::race::{BubbleSorter, Sorter};
///
/// let report = BubbleSorter.sort(&[1, 5, 4, 2, 3]);
/// assert_eq!(report.sorted, vec![1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Bubble sort repeatedly steps through the list, compares adjacent elements
/// and swaps them if they are in the wrong order. After pass `p` the largest
/// `p` values sit in their final positions at the right end, so each pass
/// probes one fewer pair than the last. A pass that performs no swap proves
/// the array sorted and ends the algorithm early, which makes already-sorted
/// input the best case at `n - 1` comparisons in a single pass.
///
/// The comparison counter increments once per adjacent-pair probe whether or
/// not the probe leads to a swap. Worst and average case are O(n²)
/// comparisons.
#[derive(Default)]
pub struct BubbleSorter;

impl Sorter for BubbleSorter {
    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn sort(&self, input: &[i32]) -> RunReport {
        let mut arr = input.to_vec();
        let n = arr.len();
        let mut comparisons = 0;
        let mut steps = Vec::new();

        let start = Instant::now();

        for pass in 0..n {
            let before = arr.clone();
            let mut swapped = false;

            for i in 0..n - pass - 1 {
                comparisons += 1;
                if arr[i] > arr[i + 1] {
                    arr.swap(i, i + 1);
                    swapped = true;
                }
            }

            steps.push(Step::Pass {
                pass: pass + 1,
                before,
                after: arr.clone(),
            });

            if !swapped {
                break;
            }
        }

        RunReport {
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
            sorted: arr,
            comparisons: Comparisons::Counted(comparisons),
            steps,
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_array() {
        let report = BubbleSorter.sort(&[1, 5, 4, 2, 3]);
        assert_eq!(report.sorted, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array_takes_one_pass() {
        let input = (1..10).collect::<Vec<_>>();
        let report = BubbleSorter.sort(&input);

        assert_eq!(report.sorted, input);
        assert_eq!(report.comparisons, Comparisons::Counted(input.len() - 1));
        assert_eq!(report.steps.len(), 1);
    }

    #[test]
    fn very_unsorted() {
        let report = BubbleSorter.sort(&(1..1000).rev().collect::<Vec<_>>());
        assert_eq!(report.sorted, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn known_trace() {
        // Pass 1 probes 3 pairs, swapping twice: [3, 5, 1, 8].
        // Pass 2 probes 2 pairs, swapping once: [3, 1, 5, 8].
        // Pass 3 probes 1 pair, swapping once: [1, 3, 5, 8].
        // Pass 4 probes nothing, performs no swap and terminates.
        let report = BubbleSorter.sort(&[5, 3, 8, 1]);

        assert_eq!(report.sorted, vec![1, 3, 5, 8]);
        assert_eq!(report.comparisons, Comparisons::Counted(6));
        assert_eq!(report.steps.len(), 4);
        assert_eq!(
            report.steps[0],
            Step::Pass {
                pass: 1,
                before: vec![5, 3, 8, 1],
                after: vec![3, 5, 1, 8],
            }
        );
        assert_eq!(
            report.steps[1],
            Step::Pass {
                pass: 2,
                before: vec![3, 5, 1, 8],
                after: vec![3, 1, 5, 8],
            }
        );
    }

    #[test]
    fn pass_indices_strictly_increase() {
        let report = BubbleSorter.sort(&[9, 7, 5, 3, 1]);

        for (i, step) in report.steps.iter().enumerate() {
            match step {
                Step::Pass { pass, .. } => assert_eq!(*pass, i + 1),
                other => panic!("bubble sort emitted {other:?}"),
            }
        }
    }

    #[test]
    fn simple_edge_cases() {
        let report = BubbleSorter.sort(&[]);
        assert_eq!(report.sorted, Vec::<i32>::new());
        assert_eq!(report.comparisons, Comparisons::Counted(0));
        assert!(report.steps.is_empty());

        let report = BubbleSorter.sort(&[1]);
        assert_eq!(report.sorted, vec![1]);
        assert_eq!(report.comparisons, Comparisons::Counted(0));

        let report = BubbleSorter.sort(&[2, 1]);
        assert_eq!(report.sorted, vec![1, 2]);

        let report = BubbleSorter.sort(&[3, 1, 2]);
        assert_eq!(report.sorted, vec![1, 2, 3]);
    }

    #[test]
    fn input_is_left_untouched() {
        let input = vec![4, 2, 3];
        BubbleSorter.sort(&input);
        assert_eq!(input, vec![4, 2, 3]);
    }
}
