//! Framework of traits and utilities for daily puzzle solutions.
//!
//! A day's solution is split into an optional parse step ([`ParseData`]) and two parts
//! ([`Solution<PartOne>`] and [`Solution<PartTwo>`]). The [`runner`] module drives those steps and
//! reports their results through an [`OutputHandler`][runner::OutputHandler].
//!
//! # Quick Start
//!
//! 1. Define your input type and implement [`ParseData`]:
//!
//! ```
//! # use puzzle_framework::{DynamicResult, ParseData};
//! #
//! struct Readings(Vec<u32>);
//!
//! impl ParseData for Readings {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         let values = input
//!             .lines()
//!             .map(str::parse)
//!             .collect::<Result<Vec<_>, _>>()?;
//!         Ok(Self(values))
//!     }
//! }
//! ```
//!
//! 2. Implement [`Solution`] for both parts:
//!
//! ```
//! # use puzzle_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
//! #
//! # struct Readings(Vec<u32>);
//! # impl ParseData for Readings {
//! #     fn parse(input: &str) -> DynamicResult<Self> {
//! #         Ok(Self(input.lines().map(str::parse).collect::<Result<Vec<_>, _>>()?))
//! #     }
//! # }
//! #
//! struct Day00;
//!
//! impl Solution<PartOne> for Day00 {
//!     type Input = Readings;
//!     type Output = u32;
//!
//!     fn solve(input: &Readings) -> DynamicResult<u32> {
//!         Ok(input.0.iter().sum())
//!     }
//! }
//!
//! impl Solution<PartTwo> for Day00 {
//!     type Input = Readings;
//!     type Output = u32;
//!
//!     fn solve(input: &Readings) -> DynamicResult<u32> {
//!         Ok(input.0.iter().copied().max().unwrap_or_default())
//!     }
//! }
//! ```
//!
//! 3. Annotate a runner with [`#[solution_runner]`][runner::solution_runner] and run it.
//!
//! Solutions that read the raw string set `Input = str` and skip the parse step:
//!
//! ```
//! use puzzle_framework::{DynamicResult, PartOne, Solution};
//!
//! struct LineCount;
//!
//! impl Solution<PartOne> for LineCount {
//!     type Input = str;
//!     type Output = usize;
//!
//!     fn solve(input: &str) -> DynamicResult<usize> {
//!         Ok(input.lines().count())
//!     }
//! }
//! ```

#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

use std::error::Error;
use std::fmt::Display;
use std::str::FromStr;

pub mod grid;
pub mod parsing;
pub mod runner;

mod private {
    /// Sealing trait; only this crate can implement [`Part`][super::Part].
    pub trait Sealed {}
}

/// A dynamically dispatched error, wrapped in a [`Box`].
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
/// A result that can return a [`DynamicError`] as an error.
pub type DynamicResult<T> = Result<T, DynamicError>;

/// An enum to identify a solution part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    One,
    Two,
}

impl Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "Part 1"),
            Self::Two => write!(f, "Part 2"),
        }
    }
}

/// A marker trait used to identify a part for a solution.
pub trait Part: private::Sealed {
    /// Get the related [`PartKind`] for this part.
    fn kind() -> PartKind;
}

/// Indicates a [`Solution`] implements part one.
pub struct PartOne;
impl private::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Indicates a [`Solution`] implements part two.
pub struct PartTwo;
impl private::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// A solution solving for a [`Part`].
pub trait Solution<P: Part> {
    /// The input data type passed to the solution. For direct string input, set to `str`.
    type Input: ?Sized;

    /// The output data type returned from the solution.
    type Output: Display;

    /// Solve with the given input.
    ///
    /// # Errors
    ///
    /// Invalid input or a failed computation (such as an integer overflow) is returned as a
    /// dynamically dispatched error.
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;
}

/// A trait for data structures that are created by parsing string input.
///
/// Solutions can be passed parsed data constructed through this trait by setting
/// [`Solution::Input`] to the implementing struct.
pub trait ParseData {
    /// Parse an input string into an instance of self.
    ///
    /// # Errors
    ///
    /// If parsing fails, the resulting error is returned as a dynamically dispatched error.
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized;
}

/// Which set of input files a run reads.
///
/// Each day has a small sample input (from the puzzle text) and the real puzzle input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputVariant {
    Sample,
    #[default]
    Real,
}

impl InputVariant {
    /// The input file name for a day under this variant.
    ///
    /// ```
    /// # use puzzle_framework::InputVariant;
    /// assert_eq!(InputVariant::Sample.file_name(3), "day03.sample.txt");
    /// assert_eq!(InputVariant::Real.file_name(12), "day12.txt");
    /// ```
    #[must_use]
    pub fn file_name(self, day: u8) -> String {
        match self {
            Self::Sample => format!("day{day:02}.sample.txt"),
            Self::Real => format!("day{day:02}.txt"),
        }
    }
}

impl Display for InputVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sample => write!(f, "sample"),
            Self::Real => write!(f, "real"),
        }
    }
}

/// A string did not name an [`InputVariant`].
#[derive(thiserror::Error, Debug)]
#[error("unknown input variant {0:?}, expected \"sample\" or \"real\"")]
pub struct UnknownVariant(String);

impl FromStr for InputVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sample" => Ok(Self::Sample),
            "real" => Ok(Self::Real),
            _ => Err(UnknownVariant(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_parses_case_insensitively() -> DynamicResult<()> {
        assert_eq!("Sample".parse::<InputVariant>()?, InputVariant::Sample);
        assert_eq!(" real ".parse::<InputVariant>()?, InputVariant::Real);
        Ok(())
    }

    #[test]
    fn variant_rejects_unknown_name() {
        let message = "first"
            .parse::<InputVariant>()
            .err()
            .map(|error| error.to_string());
        assert_eq!(
            message.as_deref(),
            Some("unknown input variant \"first\", expected \"sample\" or \"real\"")
        );
    }

    #[test]
    fn variant_display_round_trips_default() -> DynamicResult<()> {
        let variant = InputVariant::default();
        assert_eq!(variant, InputVariant::Real);
        assert_eq!(variant.to_string().parse::<InputVariant>()?, variant);
        Ok(())
    }
}
