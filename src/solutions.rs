//! Solutions for each puzzle day.
//!
//! This module provides [`run_day`] to dynamically run a solution by its day.
//!
//! Steps to make a solution available to run:
//! 1. Make a submodule to hold the solution implementation.
//! 2. Have the submodule implement [`PuzzleDays<DAY>`] for its day as a [`SolutionRunner`].
//! 3. Import the submodule below `IMPORT SUBMODULES HERE`
//! 4. Add a match case to run [`PuzzleDays<DAY>`] for a day, below `MATCH SOLUTIONS HERE`:
//!
//! ```ignore
//! // matching for day 4
//! 4 => PuzzleDays::<4>::run(input, handler, timed),
//! ```

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use puzzle_framework::DynamicResult;
use puzzle_framework::runner::{OutputHandler, SolutionRunner};
use thiserror::Error;

// --- IMPORT SUBMODULES HERE ---
mod day01;
mod day02;
mod day03;

/// Solutions collected by day.
///
/// In a submodule, implement this as a [`SolutionRunner`] for the day:
///
/// ```ignore
/// #[solution_runner(name = "Day 1", part_one = Day01, part_two = Day01)]
/// impl super::PuzzleDays<1> {}
/// ```
struct PuzzleDays<const DAY: u8>;

/// A solution for a day is not available.
#[derive(Error, Debug)]
#[error("no solution available for day {0}")]
pub struct DayNotAvailable(u8);

/// Run a solution based on the day.
///
/// # Errors
///
/// If the solution for the given day is not available, a [`DayNotAvailable`] error is returned.
///
/// Any dynamically dispatched error from running the solution is propagated.
pub fn run_day(
    day: u8,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()> {
    match day {
        // --- MATCH SOLUTIONS HERE ---
        1 => PuzzleDays::<1>::run(input, handler, timed),
        2 => PuzzleDays::<2>::run(input, handler, timed),
        3 => PuzzleDays::<3>::run(input, handler, timed),
        _ => Err(DayNotAvailable(day).into()),
    }
}
