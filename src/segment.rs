//! Segment detection from the operator row.

use std::ops::Range;

use crate::grid::Grid;
use crate::operator::Operator;

/// Half-open column range `[start, start + width)` combined with one operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub width: usize,
    pub operator: Operator,
}

impl Segment {
    pub fn columns(&self) -> Range<usize> {
        self.start..self.start + self.width
    }
}

/// Positions of every `+` or `*` in `row`, left to right.
pub fn operator_positions(row: &str) -> Vec<usize> {
    row.bytes()
        .enumerate()
        .filter(|(_, b)| Operator::from_marker(*b).is_some())
        .map(|(i, _)| i)
        .collect()
}

/// Split the grid into segments, one per operator marker.
///
/// Each segment runs up to the next marker. The last one runs to the end of
/// operand row 0, not of the operator row, so a row 0 shorter than the other
/// rows narrows the final segment for both strategies.
pub fn locate_segments(grid: &Grid) -> Vec<Segment> {
    let operator_row = grid.operator_row().as_bytes();
    let positions = operator_positions(grid.operator_row());
    let row0_len = grid.row(0).len();

    positions
        .iter()
        .enumerate()
        .filter_map(|(i, &start)| {
            let width = match positions.get(i + 1) {
                Some(&next) => next - start,
                None => row0_len.saturating_sub(start),
            };
            let operator = Operator::from_marker(operator_row[start])?;
            Some(Segment {
                start,
                width,
                operator,
            })
        })
        .collect()
}
