use std::fmt::Display;
use std::time::Duration;

use puzzle_framework::runner::{OutputHandler, SolutionRunner, solution_runner};
use puzzle_framework::{DynamicResult, ParseData, PartKind, PartOne, PartTwo, Solution};

/// Records handler events as strings for comparison.
#[derive(Default)]
struct RecordingHandler {
    events: Vec<String>,
    timed_events: usize,
}

impl RecordingHandler {
    fn count_timed(&mut self, duration_opt: Option<Duration>) {
        if duration_opt.is_some() {
            self.timed_events += 1;
        }
    }
}

impl OutputHandler for RecordingHandler {
    fn solution_name(&mut self, name: &str) {
        self.events.push(format!("name {name}"));
    }

    fn parse_start(&mut self) {
        self.events.push("parse start".to_owned());
    }

    fn parse_end(&mut self, duration_opt: Option<Duration>) {
        self.count_timed(duration_opt);
        self.events.push("parse end".to_owned());
    }

    fn part_start(&mut self, part: PartKind) {
        self.events.push(format!("{part} start"));
    }

    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>) {
        self.count_timed(duration_opt);
        self.events.push(format!("{part} = {output}"));
    }
}

struct WordCount;

impl Solution<PartOne> for WordCount {
    type Input = str;
    type Output = usize;

    fn solve(input: &str) -> DynamicResult<usize> {
        Ok(input.split_whitespace().count())
    }
}

impl Solution<PartTwo> for WordCount {
    type Input = str;
    type Output = usize;

    fn solve(input: &str) -> DynamicResult<usize> {
        Ok(input.lines().count())
    }
}

#[solution_runner(name = "Words", part_one = WordCount, part_two = WordCount)]
struct WordCountRunner;

struct Numbers(Vec<i64>);

impl ParseData for Numbers {
    fn parse(input: &str) -> DynamicResult<Self> {
        let values = input
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()?;
        Ok(Self(values))
    }
}

struct NumberStats;

impl Solution<PartOne> for NumberStats {
    type Input = Numbers;
    type Output = i64;

    fn solve(input: &Numbers) -> DynamicResult<i64> {
        Ok(input.0.iter().sum())
    }
}

impl Solution<PartTwo> for NumberStats {
    type Input = Numbers;
    type Output = i64;

    fn solve(input: &Numbers) -> DynamicResult<i64> {
        input
            .0
            .iter()
            .copied()
            .max()
            .ok_or_else(|| "no numbers to compare".into())
    }
}

const STATS_NAME: &str = "Stats";

#[solution_runner(name = STATS_NAME, parsed = Numbers, part_one = NumberStats, part_two = NumberStats)]
impl NumberStats {}

#[test]
fn string_input_runner_reports_both_parts() -> DynamicResult<()> {
    let mut handler = RecordingHandler::default();
    WordCountRunner::run("a b c\nd e\n", &mut handler, false)?;
    assert_eq!(
        handler.events,
        vec![
            "name Words",
            "Part 1 start",
            "Part 1 = 5",
            "Part 2 start",
            "Part 2 = 2"
        ]
    );
    assert_eq!(handler.timed_events, 0);
    Ok(())
}

#[test]
fn parsed_runner_parses_once_before_parts() -> DynamicResult<()> {
    let mut handler = RecordingHandler::default();
    NumberStats::run("4 -2 9", &mut handler, true)?;
    assert_eq!(
        handler.events,
        vec![
            "name Stats",
            "parse start",
            "parse end",
            "Part 1 start",
            "Part 1 = 11",
            "Part 2 start",
            "Part 2 = 9"
        ]
    );
    assert_eq!(handler.timed_events, 3);
    Ok(())
}

#[test]
fn parse_failure_stops_before_parts() {
    let mut handler = RecordingHandler::default();
    let result = NumberStats::run("4 four", &mut handler, false);
    assert!(result.is_err());
    assert_eq!(handler.events, vec!["name Stats", "parse start"]);
}

#[test]
fn part_failure_is_propagated() {
    let mut handler = RecordingHandler::default();
    let message = NumberStats::run("", &mut handler, false)
        .err()
        .map(|error| error.to_string());
    assert_eq!(message.as_deref(), Some("no numbers to compare"));
    assert_eq!(handler.events.last().map(String::as_str), Some("Part 2 start"));
}
