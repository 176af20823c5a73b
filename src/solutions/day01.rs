use std::cmp::Ordering;

use checked_sum::CheckedSum;
use puzzle_framework::parsing::parse_input_lines;
use puzzle_framework::runner::solution_runner;
use puzzle_framework::{DynamicResult, PartOne, PartTwo, Solution};
use thiserror::Error;

#[solution_runner(name = "Day 1: Trebuchet?!", part_one = Day01, part_two = Day01)]
impl super::PuzzleDays<1> {}

#[derive(Error, Debug)]
enum Day01Error {
    #[error("no digits found in line")]
    NoDigitInLine,
    #[error("no digit or spelled out digit found in line")]
    NoNumberInLine,
    #[error("integer overflow while summing calibration values")]
    SumOverflow,
}

/*
Input is a calibration document, one calibration value hidden in each line.

For part 1, a line's calibration value combines its first and last digit (in order) into a two-digit
number. If there's only one digit in the line, that digit is both the first & last.

Calculate the sum of calibration values as the solution.
*/

type Digit = u8;
type CalibrationValue = u8;

fn calibration_value(first_digit: Digit, last_digit: Digit) -> CalibrationValue {
    first_digit * 10 + last_digit
}

/// A digit found in a line, spelled out or not, at the byte position it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DigitMatch {
    position: usize,
    value: Digit,
}

/// Order matches by position, then by value.
fn compare_matches(a: &DigitMatch, b: &DigitMatch) -> Ordering {
    a.position
        .cmp(&b.position)
        .then_with(|| a.value.cmp(&b.value))
}

/// The digit characters of a line, left to right.
fn digit_char_matches(line: &str) -> impl Iterator<Item = DigitMatch> + '_ {
    line.char_indices().filter_map(|(position, c)| {
        let value = Digit::try_from(c.to_digit(10)?).ok()?;
        Some(DigitMatch { position, value })
    })
}

/// Sum calibration values from each line of input.
fn sum_calibration_values<F>(input: &str, mut parse_line: F) -> DynamicResult<u32>
where
    F: FnMut(&str) -> Result<CalibrationValue, Day01Error>,
{
    let values: Vec<CalibrationValue> =
        parse_input_lines(input, |_, line| Ok(parse_line(line)?)).collect::<Result<_, _>>()?;
    let sum = values
        .into_iter()
        .map(u32::from)
        .checked_sum()
        .ok_or(Day01Error::SumOverflow)?;
    Ok(sum)
}

fn parse_calibration_value_by_digit(line: &str) -> Result<CalibrationValue, Day01Error> {
    let mut digits = digit_char_matches(line);
    let first = digits.next().ok_or(Day01Error::NoDigitInLine)?;
    // if there's no separate last digit, use first as last
    let last = digits.last().unwrap_or(first);
    Ok(calibration_value(first.value, last.value))
}

struct Day01;

impl Solution<PartOne> for Day01 {
    type Input = str;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        sum_calibration_values(input, parse_calibration_value_by_digit)
    }
}

/*
Input is treated differently for part 2. Now, some digits are spelled out in english ("one", "two",
etc.). The solution must handle both digit chars and spelled out digits.

Spelled out digits can overlap, like "twone", which starts with a two and ends with a one.
*/

const DIGIT_NAMES: [(&str, Digit); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

/// Candidate first and last matches: the first and last digit character, plus the first and last
/// occurrence of each spelled out digit.
fn candidate_matches(line: &str) -> Vec<DigitMatch> {
    let mut candidates: Vec<DigitMatch> = Vec::new();

    let mut digits = digit_char_matches(line);
    if let Some(first) = digits.next() {
        candidates.push(first);
        candidates.extend(digits.last());
    }

    for (name, value) in DIGIT_NAMES {
        let occurrences = [line.find(name), line.rfind(name)];
        candidates.extend(
            occurrences
                .into_iter()
                .flatten()
                .map(|position| DigitMatch { position, value }),
        );
    }
    candidates
}

fn parse_calibration_value_by_digit_or_name(line: &str) -> Result<CalibrationValue, Day01Error> {
    let candidates = candidate_matches(line);
    let first = candidates
        .iter()
        .min_by(|a, b| compare_matches(a, b))
        .ok_or(Day01Error::NoNumberInLine)?;
    let last = candidates
        .iter()
        .max_by(|a, b| compare_matches(a, b))
        .ok_or(Day01Error::NoNumberInLine)?;
    Ok(calibration_value(first.value, last.value))
}

impl Solution<PartTwo> for Day01 {
    type Input = str;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        sum_calibration_values(input, parse_calibration_value_by_digit_or_name)
    }
}
