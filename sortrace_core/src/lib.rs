//! # Introduction
//!
//! Generates an integer array of a chosen size and shape, races four sorting
//! algorithms over private copies of it and compares their comparison counts
//! and wall-clock times. Install the `sortrace` crate and run
//! `sortrace race run` to see it in action.

pub mod error;
pub mod generator;
pub mod race;

pub use error::{Error, Result};

use clap::{Args, Subcommand};
use colored::Colorize;
use generator::{generate, Shape};
use race::{benchmark, Algorithm};

const PREVIEW_LEN: usize = 20;

/// The `race` subcommand surface. Run `sortrace race` to see what options
/// are available.
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct RaceArgs {
    #[command(subcommand)]
    command: RaceCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum RaceCommands {
    /// Generate an array and race all four algorithms over copies of it.
    Run {
        /// Number of elements to sort.
        #[arg(short, long, default_value_t = 100)]
        size: usize,

        /// Structural shape of the generated array.
        #[arg(long, value_enum, default_value = "random")]
        shape: Shape,

        /// Print the per-algorithm step trace after the table.
        #[arg(long)]
        trace: bool,
    },

    /// Generate an array and print it without sorting anything.
    Generate {
        /// Number of elements to generate.
        #[arg(short, long, default_value_t = 100)]
        size: usize,

        /// Structural shape of the generated array.
        #[arg(long, value_enum, default_value = "random")]
        shape: Shape,
    },
}

impl RaceArgs {
    pub fn run(self) -> Result<()> {
        match self.command {
            RaceCommands::Run { size, shape, trace } => {
                let original = generate(size, shape)?;
                let results = benchmark::run_all(&original);
                let sorted = &results.report(Algorithm::Std).sorted;

                println!(
                    "{} {}",
                    "Original ->".bold().underline().blue(),
                    preview(&original)
                );
                println!(
                    "{} {}",
                    "Sorted   ->".bold().underline().blue(),
                    preview(sorted)
                );
                println!();

                results.table().printstd();

                if trace {
                    println!();
                    print!("{}", results.trace());
                }
            }
            RaceCommands::Generate { size, shape } => {
                println!("{:?}", generate(size, shape)?);
            }
        }

        Ok(())
    }
}

fn preview(arr: &[i32]) -> String {
    if arr.len() <= PREVIEW_LEN {
        format!("{arr:?}")
    } else {
        format!("{:?}... ({} elements)", &arr[..PREVIEW_LEN], arr.len())
    }
}
