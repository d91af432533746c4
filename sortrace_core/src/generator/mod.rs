//! Generation of input arrays with a chosen structural shape.
//!
//! The shape controls which corner of each algorithm's behaviour the race
//! probes: random input for the average case, nearly sorted input for bubble
//! sort's early exit, reverse input for the worst case and constant input for
//! equal-key handling.
//!
//! # Example
//!
//! ```
//! use sortrace_core::generator::{generate, Shape};
//!
//! let arr = generate(5, Shape::Reverse).unwrap();
//! assert_eq!(arr, vec![5, 4, 3, 2, 1]);
//! ```

use std::str::FromStr;

use clap::ValueEnum;
use rand::Rng;

use crate::error::{Error, Result};

/// Every element of a [`Shape::Constant`] array holds this value.
pub const CONSTANT_VALUE: i32 = 50;

const RANDOM_RANGE: std::ops::RangeInclusive<i32> = 1..=100;

/// The structural shape of a generated input array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    /// Elements drawn independently and uniformly from 1..=100.
    Random,

    /// The ascending sequence 1..=size with a handful of random swaps applied.
    NearlySorted,

    /// The strictly decreasing sequence size..=1.
    Reverse,

    /// Every element equal to the same fixed value.
    Constant,
}

impl FromStr for Shape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "random" => Ok(Shape::Random),
            "nearly-sorted" => Ok(Shape::NearlySorted),
            "reverse" => Ok(Shape::Reverse),
            "constant" => Ok(Shape::Constant),
            _ => Err(Error::UnknownShape(s.to_string())),
        }
    }
}

/// Generates an array of `size` integers with the requested [`Shape`].
///
/// A size of zero is an input-contract violation and returns
/// [`Error::InvalidSize`] before any work is performed. Consumes entropy from
/// the thread-local rng for the [`Shape::Random`] and [`Shape::NearlySorted`]
/// shapes; the other two are deterministic.
pub fn generate(size: usize, shape: Shape) -> Result<Vec<i32>> {
    if size == 0 {
        return Err(Error::InvalidSize);
    }

    let mut rng = rand::thread_rng();

    let arr = match shape {
        Shape::Random => (0..size).map(|_| rng.gen_range(RANDOM_RANGE)).collect(),
        Shape::NearlySorted => {
            let mut arr: Vec<i32> = (1..=size as i32).collect();
            // One swap per ten elements keeps the disorder local.
            for _ in 0..size / 10 {
                let i = rng.gen_range(0..size);
                let j = rng.gen_range(0..size);
                arr.swap(i, j);
            }
            arr
        }
        Shape::Reverse => (1..=size as i32).rev().collect(),
        Shape::Constant => vec![CONSTANT_VALUE; size],
    };

    Ok(arr)
}
