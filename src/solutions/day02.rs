use checked_sum::CheckedSum;
use puzzle_framework::parsing::{parse_input_lines, parse_with_context};
use puzzle_framework::runner::solution_runner;
use puzzle_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use regex::Regex;

use crate::checked_product::CheckedProduct;

#[solution_runner(name = "Day 2: Cube Conundrum", parsed = Games, part_one = Day02, part_two = Day02)]
impl super::PuzzleDays<2> {}

#[derive(thiserror::Error, Debug)]
enum Day02Error {
    #[error("no colon found to separate game ID from subsets")]
    NoColonDelimiter,

    #[error("failed to detect game ID: expected pattern \"Game [id]\", found {0:?}")]
    NotGameId(String),

    #[error("failed to detect count and color: expected pattern \"[count] [color]\", found {0:?}")]
    NotCountColor(String),

    #[error("color not supported: {0:?}")]
    UnsupportedColor(String),

    #[error("duplicate color found in subset: {0:?}")]
    DuplicateColorInSubset(String),

    #[error("integer overflow while {0}")]
    Overflow(&'static str),
}

/*
Input is a record of games played with a bag of red, green, and blue cubes. Each game has an ID and
a semicolon separated list of subsets of cubes revealed from the bag; a subset is a comma separated
list of counts and colors. Colors missing from a subset count as zero.
*/

type CubeCount = u16;

/// Cube counts by color.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct CubeCounts {
    red: CubeCount,
    green: CubeCount,
    blue: CubeCount,
}

impl CubeCounts {
    /// Whether every color count fits within `limit`'s count of the same color.
    fn fits_within(&self, limit: &Self) -> bool {
        self.red <= limit.red && self.green <= limit.green && self.blue <= limit.blue
    }

    /// The larger count of each color.
    fn max(self, other: Self) -> Self {
        Self {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }
}

type GameId = u16;

#[derive(Debug)]
struct Game {
    id: GameId,
    subsets: Vec<CubeCounts>,
}

/// Parses game lines; holds compiled patterns for reuse across lines.
struct GameParser {
    /// Captures the game ID.
    id_re: Regex,
    /// Captures a count then a color.
    count_color_re: Regex,
}

impl GameParser {
    const ID_PATTERN: &str = r"^Game (\d+)$";
    const COUNT_COLOR_PATTERN: &str = r"^(\d+) (\w+)$";

    fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            id_re: Regex::new(Self::ID_PATTERN)?,
            count_color_re: Regex::new(Self::COUNT_COLOR_PATTERN)?,
        })
    }

    fn parse_subset(&self, subset: &str) -> DynamicResult<CubeCounts> {
        let mut red = None;
        let mut green = None;
        let mut blue = None;

        for count_str in subset.split(',').map(str::trim) {
            let (_, [count, color]) = self
                .count_color_re
                .captures(count_str)
                .ok_or_else(|| Day02Error::NotCountColor(count_str.to_owned()))?
                .extract();

            let slot = match color {
                "red" => &mut red,
                "green" => &mut green,
                "blue" => &mut blue,
                other => return Err(Day02Error::UnsupportedColor(other.to_owned()).into()),
            };
            if slot.is_some() {
                return Err(Day02Error::DuplicateColorInSubset(subset.trim().to_owned()).into());
            }
            *slot = Some(parse_with_context::<CubeCount>(count)?);
        }

        Ok(CubeCounts {
            red: red.unwrap_or_default(),
            green: green.unwrap_or_default(),
            blue: blue.unwrap_or_default(),
        })
    }

    fn parse(&self, line: &str) -> DynamicResult<Game> {
        let (id_str, subsets_str) = line.split_once(':').ok_or(Day02Error::NoColonDelimiter)?;

        let (_, [id]) = self
            .id_re
            .captures(id_str.trim())
            .ok_or_else(|| Day02Error::NotGameId(id_str.to_owned()))?
            .extract();
        let id = parse_with_context(id)?;

        let subsets = subsets_str
            .split(';')
            .map(|subset| self.parse_subset(subset))
            .collect::<Result<_, _>>()?;

        Ok(Game { id, subsets })
    }
}

struct Games(Vec<Game>);

impl ParseData for Games {
    fn parse(input: &str) -> DynamicResult<Self> {
        let parser = GameParser::new()?;
        let games = parse_input_lines(input, |_, line| parser.parse(line))
            .collect::<Result<_, _>>()?;
        Ok(Self(games))
    }
}

/*
For part 1, a game is possible if every subset fits within a bag of 12 red, 13 green, and 14 blue
cubes. Sum the IDs of the possible games.
*/

const BAG_LIMIT: CubeCounts = CubeCounts {
    red: 12,
    green: 13,
    blue: 14,
};

impl Game {
    fn is_possible(&self, limit: &CubeCounts) -> bool {
        self.subsets.iter().all(|counts| counts.fits_within(limit))
    }
}

struct Day02;

impl Solution<PartOne> for Day02 {
    type Input = Games;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let sum_ids = input
            .0
            .iter()
            .filter(|game| game.is_possible(&BAG_LIMIT))
            .map(|game| Self::Output::from(game.id))
            .checked_sum()
            .ok_or(Day02Error::Overflow("summing game IDs"))?;
        Ok(sum_ids)
    }
}

/*
For part 2, the fewest cubes of each color that make a game possible is the largest count of that
color seen in any subset. A game's power is the product of those three counts; sum the powers.
*/

impl Game {
    fn minimum_cubes(&self) -> CubeCounts {
        self.subsets
            .iter()
            .copied()
            .fold(CubeCounts::default(), CubeCounts::max)
    }

    fn power(&self) -> Result<u64, Day02Error> {
        let CubeCounts { red, green, blue } = self.minimum_cubes();
        [red, green, blue]
            .into_iter()
            .map(u64::from)
            .checked_product()
            .ok_or(Day02Error::Overflow("multiplying cube counts"))
    }
}

impl Solution<PartTwo> for Day02 {
    type Input = Games;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let powers = input
            .0
            .iter()
            .map(Game::power)
            .collect::<Result<Vec<_>, _>>()?;
        let sum_powers = powers
            .into_iter()
            .checked_sum()
            .ok_or(Day02Error::Overflow("summing game powers"))?;
        Ok(sum_powers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    fn parse_error_message(input: &str) -> Option<String> {
        let error = Games::parse(input).err()?;
        let source = std::error::Error::source(error.as_ref())?;
        Some(source.to_string())
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Games::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 8);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Games::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 2286);
        Ok(())
    }

    #[test]
    fn missing_colors_count_as_zero() -> DynamicResult<()> {
        let parsed = Games::parse("Game 7: 2 green; 5 red")?;
        let game = &parsed.0[0];
        assert_eq!(game.id, 7);
        assert_eq!(
            game.subsets,
            vec![
                CubeCounts {
                    green: 2,
                    ..CubeCounts::default()
                },
                CubeCounts {
                    red: 5,
                    ..CubeCounts::default()
                },
            ]
        );
        assert_eq!(game.power()?, 0);
        Ok(())
    }

    #[test]
    fn malformed_lines_are_reported() {
        assert_eq!(
            parse_error_message("Game 1 3 blue").as_deref(),
            Some("no colon found to separate game ID from subsets")
        );
        assert_eq!(
            parse_error_message("Match 1: 3 blue").as_deref(),
            Some("failed to detect game ID: expected pattern \"Game [id]\", found \"Match 1\"")
        );
        assert_eq!(
            parse_error_message("Game 1: blue 3").as_deref(),
            Some(
                "failed to detect count and color: expected pattern \"[count] [color]\", found \"blue 3\""
            )
        );
        assert_eq!(
            parse_error_message("Game 1: 3 purple").as_deref(),
            Some("color not supported: \"purple\"")
        );
        assert_eq!(
            parse_error_message("Game 1: 3 blue, 1 red, 2 blue").as_deref(),
            Some("duplicate color found in subset: \"3 blue, 1 red, 2 blue\"")
        );
    }

    #[test]
    fn error_names_the_failing_line() {
        let message = Games::parse("Game 1: 1 red\nGame 2: 1 pink\n")
            .err()
            .map(|error| error.to_string());
        assert_eq!(message.as_deref(), Some("failure parsing line 2"));
    }
}
