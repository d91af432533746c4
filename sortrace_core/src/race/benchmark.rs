//! Runs every [`Algorithm`] over its own copy of one input array and derives
//! the comparison table and step trace from the collected reports.

use std::fmt::Write;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use prettytable::{row, Table};

use super::{Algorithm, RunReport};

/// Steps shown per algorithm before the trace elides the rest.
const TRACE_STEP_LIMIT: usize = 5;

/// The reports of all four algorithms from one invocation, in
/// [`Algorithm::ALL`] order.
///
/// The results are frozen once the run completes; the table and trace are
/// read-only views derived on demand.
pub struct RaceResults {
    reports: Vec<(Algorithm, RunReport)>,
}

/// Runs all four algorithms to completion, each over a private copy of
/// `input`, and collects their reports.
///
/// The run is synchronous and sequential, so no state leaks between
/// algorithms and the caller never observes a partial result. An empty input
/// is valid and yields empty sorted arrays with zero comparisons.
pub fn run_all(input: &[i32]) -> RaceResults {
    let pb = ProgressBar::new(Algorithm::ALL.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "Racing -> {spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] {msg} ({pos}/{len})",
        )
        .unwrap(),
    );

    let reports = Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            pb.set_message(algorithm.name());
            let report = algorithm.sorter().sort(input);
            pb.inc(1);
            (algorithm, report)
        })
        .collect();
    pb.finish_and_clear();

    RaceResults { reports }
}

impl RaceResults {
    pub fn reports(&self) -> impl Iterator<Item = (Algorithm, &RunReport)> {
        self.reports.iter().map(|(algorithm, report)| (*algorithm, report))
    }

    pub fn report(&self, algorithm: Algorithm) -> &RunReport {
        &self
            .reports
            .iter()
            .find(|(a, _)| *a == algorithm)
            .expect("all algorithms run")
            .1
    }

    fn min_elapsed_ms(&self) -> f64 {
        self.reports
            .iter()
            .map(|(_, report)| report.elapsed_ms)
            .fold(f64::INFINITY, f64::min)
    }

    /// Builds the comparison table: one row per algorithm with its
    /// comparison count (or `N/A`), elapsed time and speed ratio against the
    /// fastest algorithm of this invocation.
    pub fn table(&self) -> Table {
        let min = self.min_elapsed_ms();

        let mut table = Table::new();
        table.add_row(row![
            "Algorithm".bold(),
            "Comparisons".bold(),
            "Time (ms)".bold(),
            "Speed Ratio".bold()
        ]);

        for (algorithm, report) in self.reports() {
            // A clock too coarse to separate the runs makes every ratio 1.
            let ratio = if min > 0.0 {
                report.elapsed_ms / min
            } else {
                1.0
            };
            table.add_row(row![
                algorithm.name(),
                report.comparisons.to_string(),
                format!("{:.4}", report.elapsed_ms),
                format!("{ratio:.2}x")
            ]);
        }

        table
    }

    /// Renders the step trace: per algorithm except the library baseline, the
    /// first [`TRACE_STEP_LIMIT`] step descriptions plus a note of how many
    /// were omitted.
    pub fn trace(&self) -> String {
        let mut out = String::new();

        for (algorithm, report) in self.reports() {
            if algorithm == Algorithm::Std {
                continue;
            }

            writeln!(out, "[{} steps]", algorithm.name()).unwrap();
            for (i, step) in report.steps.iter().take(TRACE_STEP_LIMIT).enumerate() {
                writeln!(out, "step {}: {step}", i + 1).unwrap();
            }
            if report.steps.len() > TRACE_STEP_LIMIT {
                writeln!(
                    out,
                    "... ({} more steps)",
                    report.steps.len() - TRACE_STEP_LIMIT
                )
                .unwrap();
            }
            out.push('\n');
        }

        out
    }
}
