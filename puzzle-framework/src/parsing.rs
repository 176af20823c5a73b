//! Utility functions and errors for parsing input.

use std::str::FromStr;

use thiserror::Error;

use crate::{DynamicError, DynamicResult};

/// A string parsing error with context of the string that was being parsed.
#[derive(Error, Debug)]
#[error("failed to parse string: {string:?}")]
pub struct ParseContextError<E>
where
    E: std::error::Error,
{
    /// The string that was being parsed.
    string: String,
    source: E,
}

/// Parse a string slice into another type, keeping the string as error context.
///
/// ```
/// # use puzzle_framework::parsing::parse_with_context;
/// let value: u8 = parse_with_context("42").unwrap();
/// assert_eq!(value, 42);
///
/// let error = parse_with_context::<u8>("4x2").unwrap_err();
/// assert_eq!(error.to_string(), "failed to parse string: \"4x2\"");
/// ```
///
/// # Errors
///
/// Will return a [`ParseContextError`] with the given string as context and
/// [`F::Err`][FromStr::Err] as the source if it's not possible to parse the string into the desired
/// type.
pub fn parse_with_context<F>(string: &str) -> Result<F, ParseContextError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    string.parse::<F>().map_err(|source| ParseContextError {
        string: string.to_owned(),
        source,
    })
}

/// A line in an input string caused a parsing error.
#[derive(Error, Debug)]
#[error("failure parsing line {}", .line_index.saturating_add(1))]
pub struct InvalidLine {
    /// The line index, zero based. Displayed one based.
    line_index: usize,
    source: DynamicError,
}

impl InvalidLine {
    /// The zero based index of the line that failed to parse.
    #[must_use]
    pub fn line_index(&self) -> usize {
        self.line_index
    }
}

/// Parse each line of `input` with a closure given the zero based line index and the line.
///
/// Errors from the closure are wrapped in an [`InvalidLine`] naming the line.
///
/// ```
/// # use puzzle_framework::parsing::{parse_input_lines, parse_with_context};
/// let lines = "3\n1\nfour\n";
/// let parsed: Vec<_> = parse_input_lines(lines, |_, line| Ok(parse_with_context::<u8>(line)?))
///     .collect();
///
/// assert_eq!(parsed[1].as_ref().ok(), Some(&1));
/// let error = parsed[2].as_ref().unwrap_err();
/// assert_eq!(error.to_string(), "failure parsing line 3");
/// assert_eq!(error.line_index(), 2);
/// ```
pub fn parse_input_lines<'a, T, F>(
    input: &'a str,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>>
where
    F: FnMut(usize, &'a str) -> DynamicResult<T>,
{
    input.lines().enumerate().map(move |(line_index, line)| {
        parser(line_index, line).map_err(|source| InvalidLine { line_index, source })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_input_lines_passes_line_indices() -> DynamicResult<()> {
        let indexed: Vec<(usize, String)> =
            parse_input_lines("a\nb\nc", |index, line| Ok((index, line.to_owned())))
                .collect::<Result<_, _>>()?;
        assert_eq!(
            indexed,
            vec![(0, "a".to_owned()), (1, "b".to_owned()), (2, "c".to_owned())]
        );
        Ok(())
    }

    #[test]
    fn parse_input_lines_stops_collecting_at_first_error() {
        let mut visited = Vec::new();
        let result: Result<Vec<u8>, InvalidLine> = parse_input_lines("1\nx\n3", |index, line| {
            visited.push(index);
            Ok(parse_with_context(line)?)
        })
        .collect();

        let line_index = result.err().map(|error| error.line_index());
        assert_eq!(line_index, Some(1));
        assert_eq!(visited, vec![0, 1]);
    }
}
