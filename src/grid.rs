//! Fixed-size worksheet grid.
//!
//! A worksheet is exactly [`LINES`] rows of text. The first [`OPERAND_ROWS`]
//! rows hold column-aligned numbers, the last row holds the `+`/`*` markers
//! that open each segment.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Total number of rows in a worksheet.
pub const LINES: usize = 5;

/// Rows carrying operands; the operator row follows them.
pub const OPERAND_ROWS: usize = LINES - 1;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: [String; LINES],
}

impl Grid {
    /// Build a grid from in-memory rows. Missing rows stay empty, extra rows are ignored.
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut grid = Self::default();
        for (slot, row) in grid.rows.iter_mut().zip(rows) {
            *slot = row.into();
        }
        grid
    }

    /// Read up to [`LINES`] lines from `reader`.
    ///
    /// A short stream leaves the remaining rows empty, matching a plain
    /// end-of-stream read. Line terminators are stripped.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut grid = Self::default();
        for (slot, line) in grid.rows.iter_mut().zip(reader.lines()) {
            *slot = line?;
        }
        Ok(grid)
    }

    /// Load a worksheet from `path`.
    ///
    /// A missing file behaves like an empty stream: every row is left empty, so
    /// the operator row opens no segments.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("[grid] input {} not found, using empty rows", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e),
        };

        let grid = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(
            "[grid] loaded {}: row 0 is {} columns wide",
            path.display(),
            grid.rows[0].len()
        );
        Ok(grid)
    }

    pub fn row(&self, index: usize) -> &str {
        &self.rows[index]
    }

    pub fn operand_rows(&self) -> &[String] {
        &self.rows[..OPERAND_ROWS]
    }

    pub fn operator_row(&self) -> &str {
        &self.rows[OPERAND_ROWS]
    }

    /// Byte at `col` in `row`, or `None` past the end of that row.
    pub fn cell(&self, row: usize, col: usize) -> Option<u8> {
        self.rows[row].as_bytes().get(col).copied()
    }

    /// Up to `width` bytes of `row` starting at `start`, clamped to the row.
    ///
    /// Returns `None` when `start` lies beyond the end of the row.
    pub fn field(&self, row: usize, start: usize, width: usize) -> Option<&str> {
        let text = &self.rows[row];
        if start > text.len() {
            return None;
        }
        let end = start.saturating_add(width).min(text.len());
        text.get(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_from_reader_reads_five_lines() {
        let input = "1\n2\n3\n4\n+\nextra\n";
        let grid = Grid::from_reader(Cursor::new(input)).unwrap();
        assert_eq!(grid.operand_rows(), ["1", "2", "3", "4"]);
        assert_eq!(grid.operator_row(), "+");
    }

    #[test]
    fn test_short_input_leaves_empty_rows() {
        let grid = Grid::from_reader(Cursor::new("12\n34\n")).unwrap();
        assert_eq!(grid.row(0), "12");
        assert_eq!(grid.row(1), "34");
        assert_eq!(grid.row(2), "");
        assert_eq!(grid.operator_row(), "");
    }

    #[test]
    fn test_crlf_is_stripped() {
        let grid = Grid::from_reader(Cursor::new("1 2\r\n3 4\r\n")).unwrap();
        assert_eq!(grid.row(0), "1 2");
        assert_eq!(grid.row(1), "3 4");
    }

    #[test]
    fn test_cell_past_end() {
        let grid = Grid::from_rows(["ab"]);
        assert_eq!(grid.cell(0, 1), Some(b'b'));
        assert_eq!(grid.cell(0, 2), None);
        assert_eq!(grid.cell(3, 0), None);
    }

    #[test]
    fn test_field_clamps_like_substr() {
        let grid = Grid::from_rows(["123 45"]);
        assert_eq!(grid.field(0, 0, 4), Some("123 "));
        assert_eq!(grid.field(0, 4, 10), Some("45"));
        assert_eq!(grid.field(0, 6, 3), Some(""));
        assert_eq!(grid.field(0, 7, 1), None);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let grid = Grid::load(temp_dir.path().join("input.txt")).unwrap();
        assert_eq!(grid, Grid::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("input.txt");
        std::fs::write(&path, "1 2\n3 4\n5 6\n7 8\n+ *\n").unwrap();

        let grid = Grid::load(&path).unwrap();
        assert_eq!(grid.row(3), "7 8");
        assert_eq!(grid.operator_row(), "+ *");
    }
}
