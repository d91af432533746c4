use std::time::Instant;

use crate::race::{Comparisons, RunReport, Sorter, Step};

/// An implementation of binary [Insertion
/// Sort](https://en.wikipedia.org/wiki/Insertion_sort) that counts
/// comparisons and records one [`Step`] per inserted element.
///
/// # Usage
///```
/// use sortrace_core::race::{BinaryInsertionSorter, Sorter};
///
/// let report = BinaryInsertionSorter.sort(&[1, 5, 4, 2, 3]);
/// assert_eq!(report.sorted, vec![1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Plain insertion sort grows a sorted prefix one element at a time, scanning
/// backwards for each new element's slot. The binary variant finds the slot
/// with a binary search over the sorted prefix instead, cutting the
/// comparison count to O(n log n) while the element shifts stay O(n²) in the
/// worst case.
///
/// The search is left-biased on ties: when the probed element equals the key
/// the search continues rightward, so equal keys land after the copies
/// already placed. The comparison counter increments once per search probe,
/// regardless of which half the probe discards.
#[derive(Default)]
pub struct BinaryInsertionSorter;

impl Sorter for BinaryInsertionSorter {
    fn name(&self) -> &'static str {
        "Binary Insertion Sort"
    }

    fn sort(&self, input: &[i32]) -> RunReport {
        let mut arr = input.to_vec();
        let mut comparisons = 0;
        let mut steps = Vec::new();

        let start = Instant::now();

        for i in 1..arr.len() {
            let key = arr[i];
            let mut left = 0;
            let mut right = i;

            while left < right {
                comparisons += 1;
                let mid = (left + right) / 2;
                if arr[mid] > key {
                    right = mid;
                } else {
                    left = mid + 1;
                }
            }

            arr[left..=i].rotate_right(1);

            steps.push(Step::Insert {
                iteration: i,
                value: key,
                position: left,
                state: arr.clone(),
            });
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
        let report = BinaryInsertionSorter.sort(&[1, 5, 4, 2, 3]);
        assert_eq!(report.sorted, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let input = (1..10).collect::<Vec<_>>();
        let report = BinaryInsertionSorter.sort(&input);
        assert_eq!(report.sorted, input);
    }

    #[test]
    fn very_unsorted() {
        let report = BinaryInsertionSorter.sort(&(1..1000).rev().collect::<Vec<_>>());
        assert_eq!(report.sorted, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn comparison_count_stays_within_the_search_bound() {
        // Each of the n - 1 searches probes at most ceil(log2 n) + 1 times.
        let n = 512;
        let input = (1..=n as i32).rev().collect::<Vec<_>>();
        let report = BinaryInsertionSorter.sort(&input);

        let bound = n * (n as f64).log2().ceil() as usize + n;
        match report.comparisons {
            Comparisons::Counted(c) => assert!(c <= bound, "{c} probes exceed bound {bound}"),
            Comparisons::NotApplicable => unreachable!(),
        }
    }

    #[test]
    fn one_step_per_inserted_element() {
        let report = BinaryInsertionSorter.sort(&[4, 1, 3, 2, 5]);

        assert_eq!(report.steps.len(), 4);
        for (i, step) in report.steps.iter().enumerate() {
            match step {
                Step::Insert {
                    iteration,
                    position,
                    ..
                } => {
                    assert_eq!(*iteration, i + 1);
                    assert!(*position <= *iteration);
                }
                other => panic!("binary insertion sort emitted {other:?}"),
            }
        }
    }

    #[test]
    fn ties_insert_after_existing_equals() {
        let report = BinaryInsertionSorter.sort(&[2, 2, 1]);

        // The second 2 searches past the first, the 1 lands at the front.
        assert_eq!(report.sorted, vec![1, 2, 2]);
        assert_eq!(
            report.steps[0],
            Step::Insert {
                iteration: 1,
                value: 2,
                position: 1,
                state: vec![2, 2, 1],
            }
        );
    }

    #[test]
    fn simple_edge_cases() {
        let report = BinaryInsertionSorter.sort(&[]);
        assert_eq!(report.sorted, Vec::<i32>::new());
        assert_eq!(report.comparisons, Comparisons::Counted(0));
        assert!(report.steps.is_empty());

        let report = BinaryInsertionSorter.sort(&[1]);
        assert_eq!(report.sorted, vec![1]);
        assert_eq!(report.comparisons, Comparisons::Counted(0));
        assert!(report.steps.is_empty());

        let report = BinaryInsertionSorter.sort(&[2, 1]);
        assert_eq!(report.sorted, vec![1, 2]);

        let report = BinaryInsertionSorter.sort(&[3, 1, 2]);
        assert_eq!(report.sorted, vec![1, 2, 3]);
    }

    #[test]
    fn input_is_left_untouched() {
        let input = vec![4, 2, 3];
        BinaryInsertionSorter.sort(&input);
        assert_eq!(input, vec![4, 2, 3]);
    }
}
