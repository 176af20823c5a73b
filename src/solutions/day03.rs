use std::collections::HashMap;
use std::num::ParseIntError;

use checked_sum::CheckedSum;
use puzzle_framework::grid::{Grid, Position};
use puzzle_framework::runner::solution_runner;
use puzzle_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use tracing::{debug, trace};

use crate::checked_product::CheckedProduct;

#[solution_runner(name = "Day 3: Gear Ratios", parsed = Schematic, part_one = Day03, part_two = Day03)]
impl super::PuzzleDays<3> {}

#[derive(thiserror::Error, Debug)]
enum Day03Error {
    /// A run of digits could not be held by the part number type.
    #[error("number {digits:?} at row {}, column {} is out of range", .start.y + 1, .start.x + 1)]
    NumberOutOfRange {
        digits: String,
        start: Position,
        #[source]
        source: ParseIntError,
    },

    #[error("integer overflow while summing {0}")]
    SumOverflow(&'static str),

    #[error("integer overflow multiplying gear ratio at row {}, column {}", .0.y + 1, .0.x + 1)]
    RatioOverflow(Position),
}

/*
Input is an engine schematic, a rectangular grid of characters. Runs of digits read left-to-right are
numbers, `.` is empty space, and any other character is a symbol.
*/

/// Type for number values in the schematic.
type PartNumber = u32;

/// Type for the sum of part numbers; wider than [`PartNumber`] so large parts can add up.
type PartSum = u64;

/// A maximal horizontal run of digits in one row of the schematic.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SchematicNumber {
    value: PartNumber,
    /// The position of the starting/leftmost digit.
    start: Position,
    /// How many characters wide the number is; at least one.
    span: usize,
}

impl SchematicNumber {
    /// Positions of every digit of the number, left to right.
    fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let y = self.start.y;
        (self.start.x..self.start.x + self.span).map(move |x| Position::new(x, y))
    }
}

fn is_symbol(character: char) -> bool {
    !character.is_ascii_digit() && character != '.'
}

/// The schematic grid along with the numbers found in it.
#[derive(Debug)]
struct Schematic {
    grid: Grid<char>,
    numbers: Vec<SchematicNumber>,
}

impl ParseData for Schematic {
    fn parse(input: &str) -> DynamicResult<Self> {
        let grid = Grid::from_lines(input)?;
        let numbers = extract_numbers(&grid)?;
        debug!(
            width = grid.width(),
            height = grid.height(),
            numbers = numbers.len(),
            "parsed schematic"
        );
        Ok(Self { grid, numbers })
    }
}

/// Scan each row left to right for runs of digits, in row-major order.
///
/// Row ends close a run, so numbers never continue onto the next row.
fn extract_numbers(grid: &Grid<char>) -> Result<Vec<SchematicNumber>, Day03Error> {
    fn close_run(
        row: &[char],
        y: usize,
        start_x: usize,
        end_x: usize,
    ) -> Result<SchematicNumber, Day03Error> {
        let digits: String = row[start_x..end_x].iter().collect();
        let start = Position::new(start_x, y);
        let value = digits
            .parse()
            .map_err(|source| Day03Error::NumberOutOfRange {
                digits: digits.clone(),
                start,
                source,
            })?;
        Ok(SchematicNumber {
            value,
            start,
            span: end_x - start_x,
        })
    }

    let mut numbers = Vec::new();
    for (y, row) in grid.rows().enumerate() {
        let mut run_start = None;
        for (x, character) in row.iter().enumerate() {
            match (run_start, character.is_ascii_digit()) {
                (None, true) => run_start = Some(x),
                (Some(start_x), false) => {
                    numbers.push(close_run(row, y, start_x, x)?);
                    run_start = None;
                }
                _ => {}
            }
        }
        // a run reaching the row end is still open
        if let Some(start_x) = run_start {
            numbers.push(close_run(row, y, start_x, row.len())?);
        }
    }
    Ok(numbers)
}

/*
For part 1, find the sum of all part numbers.

A part number is any number with a symbol next to any of its digits, cardinal or diagonal.
*/

impl Schematic {
    fn is_part_number(&self, number: &SchematicNumber) -> bool {
        number.positions().any(|position| {
            self.grid
                .neighbors(position)
                .any(|neighbor| self.grid.get(neighbor).copied().is_some_and(is_symbol))
        })
    }

    /// Indices into `numbers` of every part number.
    fn part_number_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.numbers
            .iter()
            .enumerate()
            .filter_map(|(index, number)| self.is_part_number(number).then_some(index))
    }

    fn sum_part_numbers(&self) -> Result<PartSum, Day03Error> {
        self.part_number_indices()
            .map(|index| PartSum::from(self.numbers[index].value))
            .checked_sum()
            .ok_or(Day03Error::SumOverflow("part numbers"))
    }
}

struct Day03;

impl Solution<PartOne> for Day03 {
    type Input = Schematic;
    type Output = PartSum;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.sum_part_numbers()?)
    }
}

/*
For part 2, find the sum of all gear ratios.

A gear is a `*` symbol that is adjacent to exactly two part numbers. A gear ratio is calculated by
multiplying the two part numbers of the gear. A number touching the `*` through several of its
digits still counts once.
*/

/// Type for gear ratios, the product of two part numbers.
type GearRatio = u64;

#[derive(Debug, PartialEq, Eq)]
struct Gear {
    position: Position,
    parts: [PartNumber; 2],
}

impl Gear {
    fn ratio(&self) -> Result<GearRatio, Day03Error> {
        self.parts
            .iter()
            .map(|&part| GearRatio::from(part))
            .checked_product()
            .ok_or(Day03Error::RatioOverflow(self.position))
    }
}

impl Schematic {
    /// Map every position occupied by a part number to the part number's index.
    fn part_positions(&self) -> HashMap<Position, usize> {
        self.part_number_indices()
            .flat_map(|index| {
                self.numbers[index]
                    .positions()
                    .map(move |position| (position, index))
            })
            .collect()
    }

    /// A gear at `position` if it holds `*` and touches exactly two distinct part numbers.
    fn find_gear(
        &self,
        position: Position,
        character: char,
        part_positions: &HashMap<Position, usize>,
    ) -> Option<Gear> {
        if character != '*' {
            return None;
        }

        let mut touching = Vec::with_capacity(2);
        for neighbor in self.grid.neighbors(position) {
            if let Some(&index) = part_positions.get(&neighbor)
                && !touching.contains(&index)
            {
                touching.push(index);
            }
        }

        match touching[..] {
            [first, second] => Some(Gear {
                position,
                parts: [self.numbers[first].value, self.numbers[second].value],
            }),
            _ => {
                trace!(?position, touching = touching.len(), "not a gear");
                None
            }
        }
    }

    fn gears(&self) -> Vec<Gear> {
        let part_positions = self.part_positions();
        self.grid
            .entries()
            .filter_map(|(position, &character)| {
                self.find_gear(position, character, &part_positions)
            })
            .collect()
    }

    fn sum_gear_ratios(&self) -> Result<GearRatio, Day03Error> {
        let ratios = self
            .gears()
            .iter()
            .map(Gear::ratio)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(gears = ratios.len(), "found gears");
        ratios
            .into_iter()
            .checked_sum()
            .ok_or(Day03Error::SumOverflow("gear ratios"))
    }
}

impl Solution<PartTwo> for Day03 {
    type Input = Schematic;
    type Output = GearRatio;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.sum_gear_ratios()?)
    }
}
