//! Running solutions and reporting their progress.
//!
//! A runner type is usually generated with the [`#[solution_runner]`][solution_runner] attribute:
//!
//! ```
//! # use puzzle_framework::runner::solution_runner;
//! # use puzzle_framework::{DynamicResult, PartOne, PartTwo, Solution};
//! #
//! struct Day01;
//!
//! impl Solution<PartOne> for Day01 {
//!     type Input = str;
//!     /* ... */
//! #    type Output = usize;
//! #    fn solve(_input: &Self::Input) -> DynamicResult<usize> {
//! #        Ok(0)
//! #    }
//! }
//! # impl Solution<PartTwo> for Day01 {
//! #    type Input = str;
//! #    type Output = usize;
//! #    fn solve(_input: &Self::Input) -> DynamicResult<usize> {
//! #        Ok(0)
//! #    }
//! # }
//!
//! #[solution_runner(name = "Day 1", part_one = Day01, part_two = Day01)]
//! struct Day01Runner;
//! ```

use std::fmt::Display;
use std::time::{Duration, Instant};

use tracing::{debug, debug_span};

use crate::{DynamicResult, ParseData, Part, PartKind, PartOne, PartTwo, Solution};

pub use puzzle_framework_macros::solution_runner;

/// Receives the events of running a solution, in order.
pub trait OutputHandler {
    /// The solution is starting; called once with its name.
    fn solution_name(&mut self, name: &str);

    /// Parsing of the input is starting.
    fn parse_start(&mut self);

    /// Parsing finished, with the elapsed time if the run is timed.
    fn parse_end(&mut self, duration_opt: Option<Duration>);

    /// A part is starting.
    fn part_start(&mut self, part: PartKind);

    /// A part finished with `output`, with the elapsed time if the run is timed.
    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>);
}

/// Evaluate `step`, measuring how long it took when `timed` is set.
fn measure<T>(timed: bool, step: impl FnOnce() -> T) -> (T, Option<Duration>) {
    if timed {
        let start = Instant::now();
        let result = step();
        (result, Some(start.elapsed()))
    } else {
        (step(), None)
    }
}

/// Run a solution part, outputting events through the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution is propagated.
fn run_part<S, P>(
    input: &S::Input,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    P: Part,
    S: Solution<P>,
{
    let part = P::kind();
    let _span = debug_span!("part", %part).entered();
    handler.part_start(part);
    let (result, duration_opt) = measure(timed, || S::solve(input));
    let output = result?;
    debug!(%output, ?duration_opt, "part solved");
    handler.part_output(part, &output, duration_opt);
    Ok(())
}

/// Run a solution's parse step, outputting events through the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing is propagated.
fn run_parse<D: ParseData>(
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<D> {
    let _span = debug_span!("parse", input_bytes = input.len()).entered();
    handler.parse_start();
    let (result, duration_opt) = measure(timed, || D::parse(input));
    let parsed = result?;
    debug!(?duration_opt, "input parsed");
    handler.parse_end(duration_opt);
    Ok(parsed)
}

/// Run both parts of a solution that reads the input string directly.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution parts is propagated; part two is not run
/// if part one fails.
pub fn solve_full_solution<S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
    S2: Solution<PartTwo, Input = str>,
{
    let _span = debug_span!("solution", name).entered();
    handler.solution_name(name);
    run_part::<S1, PartOne>(input, handler, timed)?;
    run_part::<S2, PartTwo>(input, handler, timed)
}

/// Run both parts of a solution after parsing the input into `D` once.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing or the solution parts is propagated.
pub fn solve_parsed_full_solution<D, S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
    S2: Solution<PartTwo, Input = D>,
{
    let _span = debug_span!("solution", name).entered();
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)?;
    run_part::<S2, PartTwo>(&parsed, handler, timed)
}

/// A solution that can be run against an input string.
///
/// Implemented with the [`solution_runner`] attribute macro.
pub trait SolutionRunner {
    /// Run the solution, outputting events through `handler`.
    ///
    /// When `timed` is set, the durations of the parse step and each part are measured and
    /// passed to the handler.
    ///
    /// # Errors
    ///
    /// Any dynamically dispatched error from running the solution is propagated.
    fn run(input: &str, handler: &mut dyn OutputHandler, timed: bool) -> DynamicResult<()>;
}
