//! Worksheet evaluation.
//!
//! Every segment is read two ways:
//! - row-wise: one number per operand row, taken from the segment's columns
//! - column-wise: one number per column, formed by stacking that column's
//!   non-blank characters from top to bottom
//!
//! Each reading folds its numbers with the segment's operator and the results
//! are summed across segments into [`Totals`].

use std::fmt;
use std::path::Path;

use crate::debug_event;
use crate::error::{EvalError, EvalResult};
use crate::grid::{Grid, OPERAND_ROWS};
use crate::numeric::parse_leading_int;
use crate::segment::{Segment, locate_segments};

/// The two answers produced for a worksheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub part1: i64,
    pub part2: i64,
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solution for part 1: {}", self.part1)?;
        write!(f, "Solution for part 2: {}", self.part2)
    }
}

/// Fold `value` into `acc` with the segment's operator.
fn fold(segment: &Segment, acc: i64, value: i64) -> EvalResult<i64> {
    segment
        .operator
        .combine(acc, value)
        .ok_or(EvalError::Overflow {
            column: segment.start,
        })
}

/// Row-wise reading: parse the segment's field in each operand row.
pub fn row_wise(grid: &Grid, segment: &Segment) -> EvalResult<i64> {
    let mut acc = segment.operator.identity();

    for row in 0..OPERAND_ROWS {
        let field = grid.field(row, segment.start, segment.width);
        let value = field
            .and_then(parse_leading_int)
            .ok_or_else(|| EvalError::Parse {
                row,
                column: segment.start,
                field: field.unwrap_or_default().to_string(),
            })?;
        acc = fold(segment, acc, value)?;
    }

    Ok(acc)
}

/// Column-wise reading: stack each column's non-blank characters into a number.
///
/// Columns that are blank in every operand row are skipped entirely. Positions
/// past the end of a row count as blank.
pub fn column_wise(grid: &Grid, segment: &Segment) -> EvalResult<i64> {
    let mut acc = segment.operator.identity();

    for column in segment.columns() {
        let digits: String = (0..OPERAND_ROWS)
            .filter_map(|row| grid.cell(row, column))
            .filter(|&b| b != b' ')
            .map(char::from)
            .collect();

        if digits.is_empty() {
            continue;
        }

        let value = match parse_leading_int(&digits) {
            Some(value) => value,
            None => return Err(EvalError::ColumnParse { column, digits }),
        };
        acc = fold(segment, acc, value)?;
    }

    Ok(acc)
}

/// Evaluate every segment of `grid` both ways.
pub fn evaluate(grid: &Grid) -> EvalResult<Totals> {
    let segments = locate_segments(grid);
    debug_event!("evaluate", "segments", "{}", segments.len());

    let mut totals = Totals::default();
    for segment in &segments {
        let by_row = row_wise(grid, segment)?;
        let by_column = column_wise(grid, segment)?;
        debug_event!(
            "evaluate",
            "segment",
            "{} at {:?}: row-wise {}, column-wise {}",
            segment.operator.marker(),
            segment.columns(),
            by_row,
            by_column
        );

        totals.part1 = totals
            .part1
            .checked_add(by_row)
            .ok_or(EvalError::Overflow {
                column: segment.start,
            })?;
        totals.part2 = totals
            .part2
            .checked_add(by_column)
            .ok_or(EvalError::Overflow {
                column: segment.start,
            })?;
    }

    Ok(totals)
}

/// Load the worksheet at `path` and evaluate it.
pub fn evaluate_file(path: impl AsRef<Path>) -> EvalResult<Totals> {
    let grid = Grid::load(path)?;
    evaluate(&grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::Operator;

    fn worksheet() -> Grid {
        Grid::from_rows([
            "123 328  51 64 ",
            " 45 64  387 23 ",
            "  6 98  215 314",
            " 11 2     1   7",
            "*   +   *   +  ",
        ])
    }

    #[test]
    fn test_single_sum_segment() {
        let grid = Grid::from_rows(["12", "3 ", " 4", "56", "+ "]);
        let segment = locate_segments(&grid)[0];
        assert_eq!(row_wise(&grid, &segment).unwrap(), 12 + 3 + 4 + 56);
        // Columns read "135" and "246"
        assert_eq!(column_wise(&grid, &segment).unwrap(), 135 + 246);
    }

    #[test]
    fn test_single_product_segment() {
        let grid = Grid::from_rows([" 7 ", "  3", " 2 ", "1  ", "*  "]);
        let segment = locate_segments(&grid)[0];
        assert_eq!(segment.operator, Operator::Product);
        assert_eq!(row_wise(&grid, &segment).unwrap(), 7 * 3 * 2);
        assert_eq!(column_wise(&grid, &segment).unwrap(), 72 * 3);
    }

    #[test]
    fn test_two_segments() {
        let grid = Grid::from_rows(["1 2", "3 4", "5 6", "7 8", "+ *"]);
        let totals = evaluate(&grid).unwrap();
        assert_eq!(totals.part1, 16 + 384);
        assert_eq!(totals.part2, 1357 + 2468);
    }

    #[test]
    fn test_blank_column_contributes_nothing() {
        let narrow = Grid::from_rows(["1 2", "3 4", "5 6", "7 8", "+ *"]);
        let wide = Grid::from_rows(["1  2", "3  4", "5  6", "7  8", "+  *"]);
        assert_eq!(evaluate(&narrow).unwrap(), evaluate(&wide).unwrap());
    }

    #[test]
    fn test_full_worksheet() {
        let totals = evaluate(&worksheet()).unwrap();
        assert_eq!(totals.part1, 365_310 + 492 + 4_243_455 + 408);
        assert_eq!(totals.part2, 858_201 + 3_948 + 32_554_592 + 1_101);
    }

    #[test]
    fn test_evaluate_is_repeatable() {
        let grid = worksheet();
        assert_eq!(evaluate(&grid).unwrap(), evaluate(&grid).unwrap());
    }

    #[test]
    fn test_no_segments_is_zero() {
        let grid = Grid::default();
        assert_eq!(evaluate(&grid).unwrap(), Totals::default());
    }

    #[test]
    fn test_non_numeric_field_fails() {
        let grid = Grid::from_rows(["1", "x", "3", "4", "+"]);
        let err = evaluate(&grid).unwrap_err();
        assert!(matches!(err, EvalError::Parse { row: 1, column: 0, .. }));
    }

    #[test]
    fn test_missing_operand_row_fails() {
        let grid = Grid::from_rows(["1", "2", "", "4", "+"]);
        assert!(matches!(
            evaluate(&grid),
            Err(EvalError::Parse { row: 2, .. })
        ));
    }

    #[test]
    fn test_product_overflow() {
        let big = "9999999999";
        let grid = Grid::from_rows([big, big, big, big, "*"]);
        assert!(matches!(
            evaluate(&grid),
            Err(EvalError::Overflow { column: 0 })
        ));
    }

    #[test]
    fn test_evaluate_file_directory_is_io_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        // Opening succeeds on some platforms but reading a directory always fails
        assert!(matches!(
            evaluate_file(temp_dir.path()),
            Err(EvalError::Io(_))
        ));
    }

    #[test]
    fn test_report_format() {
        let totals = Totals {
            part1: 400,
            part2: 3825,
        };
        assert_eq!(
            totals.to_string(),
            "Solution for part 1: 400\nSolution for part 2: 3825"
        );
    }
}
