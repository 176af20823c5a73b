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
#![deny(clippy::unwrap_used)]

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Error, Result};
use clap::{ArgAction, Parser};
use puzzle_framework::runner::OutputHandler;
use puzzle_framework::{InputVariant, PartKind};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod checked_product;
mod solutions;

/// Daily puzzle solver.
#[derive(Parser, Debug)]
struct Cli {
    /// The day's solution to run (e.g. 1, 2, etc).
    day: u8,

    /// Sets an alternative input file to use over default input.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Which default input file to read: "sample" or "real".
    #[arg(short, long, value_name = "VARIANT", default_value_t)]
    variant: InputVariant,

    /// Directory holding the default input files.
    #[arg(long, value_name = "DIR", default_value = "inputs")]
    inputs_dir: PathBuf,

    /// Measure and print the durations of parsing and solving parts.
    #[arg(short, long, action = ArgAction::SetTrue)]
    timed: bool,

    /// Minimum duration (in milliseconds) required to print timing.
    /// 0 = always print.
    #[arg(long, value_name = "NUMBER", default_value_t)]
    min_timing_ms: u64,

    /// Diagnostic log filter used when `RUST_LOG` is not set (e.g. "debug").
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    log_level: String,
}

/// Read the default input file of a variant for a day to a string.
fn get_default_input(inputs_dir: &Path, day: u8, variant: InputVariant) -> Result<String> {
    let path = inputs_dir.join(variant.file_name(day));
    debug!(path = %path.display(), %variant, "reading default input");

    fs::read_to_string(&path).with_context(|| {
        format!(
            "default {variant} input file missing: {}\n\n\
            please create the file or provide the input file argument",
            path.display()
        )
    })
}

/// Read the given input file to a string.
fn get_input(input_file: &Path) -> Result<String> {
    debug!(path = %input_file.display(), "reading input");
    fs::read_to_string(input_file)
        .with_context(|| format!("could not read input file at: {}", input_file.display()))
}

/// Send diagnostics to stderr, filtered by `RUST_LOG` or else the given filter.
fn init_logging(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("invalid log filter: {default_filter:?}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Prints solution events to stdout.
struct CliOutputHandler {
    /// Durations shorter than this are not printed.
    min_duration: Duration,
}

impl CliOutputHandler {
    fn new(min_duration: Duration) -> Self {
        Self { min_duration }
    }

    /// Format a duration in the largest unit it reaches, with three decimal places.
    fn format_duration(duration: Duration) -> String {
        const UNITS: [(Duration, &str); 3] = [
            (Duration::from_secs(1), "seconds"),
            (Duration::from_millis(1), "milliseconds"),
            (Duration::from_micros(1), "microseconds"),
        ];

        UNITS
            .iter()
            .find(|(unit, _)| duration >= *unit)
            .map_or_else(
                || format!("{} nanoseconds", duration.subsec_nanos()),
                |(unit, name)| format!("{:.3} {name}", duration.div_duration_f64(*unit)),
            )
    }

    fn timing_suffix(&self, duration_opt: Option<Duration>) -> String {
        duration_opt
            .filter(|duration| *duration >= self.min_duration)
            .map(|duration| format!(" ({})", Self::format_duration(duration)))
            .unwrap_or_default()
    }
}

impl OutputHandler for CliOutputHandler {
    fn solution_name(&mut self, name: &str) {
        println!("= {name} =");
    }

    fn parse_start(&mut self) {}

    fn parse_end(&mut self, duration_opt: Option<Duration>) {
        let suffix = self.timing_suffix(duration_opt);
        if !suffix.is_empty() {
            println!("Input parsed{suffix}");
        }
    }

    fn part_start(&mut self, _part: PartKind) {}

    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>) {
        println!("{part}: {output}{}", self.timing_suffix(duration_opt));
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(&args.log_level)?;

    let input_str = args.input.as_deref().map_or_else(
        || get_default_input(&args.inputs_dir, args.day, args.variant),
        get_input,
    )?;
    let mut handler = CliOutputHandler::new(Duration::from_millis(args.min_timing_ms));
    solutions::run_day(args.day, &input_str, &mut handler, args.timed).map_err(|dyn_error| {
        let anyhow_error = Error::from_boxed(dyn_error);
        anyhow_error.context(format!("failed to run solution for day {}", args.day))
    })
}
