//! Four sorting algorithms raced over private copies of one input array.
//!
//! Each algorithm implements the [`Sorter`] trait and hands back a
//! [`RunReport`] carrying the sorted array, the number of element comparisons
//! it performed, the wall-clock time it took and a trace of [`Step`]s suitable
//! for printing. The [`benchmark`] module runs all four on the same logical
//! input and tabulates the results.
//!
//! # Example
//!
//! ```
//! use sortrace_core::race::{BubbleSorter, Sorter};
//!
//! let report = BubbleSorter.sort(&[1, 3, 2, 5, 4]);
//! assert_eq!(report.sorted, vec![1, 2, 3, 4, 5]);
//! ```

pub mod benchmark;
mod sorters;

use std::fmt;

pub use sorters::binary_insertion_sorter::BinaryInsertionSorter;
pub use sorters::bubble_sorter::BubbleSorter;
pub use sorters::shell_sorter::ShellSorter;
pub use sorters::std_sorter::StdSorter;

/// A sorting algorithm raced by the harness.
///
/// Implementations clone the input at entry and never mutate the caller's
/// slice. They must be total: empty and singleton inputs sort to themselves
/// with zero comparisons.
pub trait Sorter {
    fn name(&self) -> &'static str;

    fn sort(&self, input: &[i32]) -> RunReport;
}

/// The fixed set of raced algorithms, in the order they run and report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bubble,
    BinaryInsertion,
    Shell,
    Std,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::BinaryInsertion,
        Algorithm::Shell,
        Algorithm::Std,
    ];

    pub fn sorter(&self) -> &'static dyn Sorter {
        match self {
            Algorithm::Bubble => &BubbleSorter,
            Algorithm::BinaryInsertion => &BinaryInsertionSorter,
            Algorithm::Shell => &ShellSorter,
            Algorithm::Std => &StdSorter,
        }
    }

    pub fn name(&self) -> &'static str {
        self.sorter().name()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comparison count of one run, or `NotApplicable` for algorithms whose
/// comparisons cannot be observed from the outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparisons {
    Counted(usize),
    NotApplicable,
}

impl Comparisons {
    /// The count as a number, treating `NotApplicable` as zero. Used for the
    /// comparison-count panel where an unobservable count plots as nothing.
    pub fn count_or_zero(&self) -> usize {
        match *self {
            Comparisons::Counted(n) => n,
            Comparisons::NotApplicable => 0,
        }
    }
}

impl fmt::Display for Comparisons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Comparisons::Counted(n) => write!(f, "{n}"),
            Comparisons::NotApplicable => f.write_str("N/A"),
        }
    }
}

/// One unit of algorithmic progress, recorded in order and never mutated.
///
/// Which variant an algorithm emits follows its natural unit of work: a pass
/// for bubble sort, an insertion for binary-insertion sort, a finished gap
/// level for shell sort and a single catch-all for the standard library sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Pass {
        pass: usize,
        before: Vec<i32>,
        after: Vec<i32>,
    },
    Insert {
        iteration: usize,
        value: i32,
        position: usize,
        state: Vec<i32>,
    },
    Gap {
        gap: usize,
        state: Vec<i32>,
    },
    Builtin {
        state: Vec<i32>,
    },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Step::Pass { pass, .. } => {
                write!(f, "pass {pass}: bubble the largest remaining value right")
            }
            Step::Insert {
                value, position, ..
            } => write!(f, "insert value {value} at position {position}"),
            Step::Gap { gap, .. } => write!(f, "sort interleaved runs with gap {gap}"),
            Step::Builtin { .. } => f.write_str("sort with the standard library stable sort"),
        }
    }
}

/// The outcome of running one algorithm over one private copy of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub sorted: Vec<i32>,
    pub comparisons: Comparisons,
    pub elapsed_ms: f64,
    pub steps: Vec<Step>,
}
