// ==========================================
// Grid - 1-indexed cell-text view
// ==========================================
// Immutable input of one import call. Bounds reflect the used
// range: trailing fully-blank rows and columns do not count, but
// interior blank rows keep their position so error row numbers
// stay aligned with the source file.
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<String>>,
    last_row: u32,
    last_column: u32,
}

impl Grid {
    /// Builds a grid from raw rows (outer index = row - 1,
    /// inner index = column - 1). Rows may be ragged.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let mut last_row = 0u32;
        let mut last_column = 0u32;

        for (row_idx, row) in rows.iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                if !cell.trim().is_empty() {
                    last_row = (row_idx + 1) as u32;
                    last_column = last_column.max((col_idx + 1) as u32);
                }
            }
        }

        Self {
            rows,
            last_row,
            last_column,
        }
    }

    /// Cell text at 1-indexed (row, column). Out-of-range coordinates
    /// read as blank, like an untouched spreadsheet cell.
    pub fn cell(&self, row: u32, column: u32) -> &str {
        if row == 0 || column == 0 {
            return "";
        }
        self.rows
            .get((row - 1) as usize)
            .and_then(|r| r.get((column - 1) as usize))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Last row containing a non-blank cell (0 when the grid is empty).
    pub fn last_row(&self) -> u32 {
        self.last_row
    }

    /// Last column containing a non-blank cell (0 when the grid is empty).
    pub fn last_column(&self) -> u32 {
        self.last_column
    }

    pub fn is_empty(&self) -> bool {
        self.last_row == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Grid {
        Grid::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_bounds_ignore_trailing_blanks() {
        let g = grid(&[
            &["a", "b", ""],
            &["c", "", ""],
            &["", "", ""],
        ]);

        assert_eq!(g.last_row(), 2);
        assert_eq!(g.last_column(), 2);
    }

    #[test]
    fn test_interior_blank_rows_keep_position() {
        let g = grid(&[&["a"], &[""], &["b"]]);

        assert_eq!(g.last_row(), 3);
        assert_eq!(g.cell(2, 1), "");
        assert_eq!(g.cell(3, 1), "b");
    }

    #[test]
    fn test_one_indexed_access() {
        let g = grid(&[&["r1c1", "r1c2"], &["r2c1", "r2c2"]]);

        assert_eq!(g.cell(1, 1), "r1c1");
        assert_eq!(g.cell(2, 2), "r2c2");
    }

    #[test]
    fn test_out_of_range_reads_blank() {
        let g = grid(&[&["x"]]);

        assert_eq!(g.cell(0, 1), "");
        assert_eq!(g.cell(1, 0), "");
        assert_eq!(g.cell(5, 5), "");
    }

    #[test]
    fn test_ragged_rows() {
        let g = grid(&[&["a"], &["b", "c", "d"]]);

        assert_eq!(g.last_column(), 3);
        assert_eq!(g.cell(1, 3), "");
        assert_eq!(g.cell(2, 3), "d");
    }

    #[test]
    fn test_empty_grid() {
        let g = Grid::from_rows(Vec::new());

        assert!(g.is_empty());
        assert_eq!(g.last_row(), 0);
        assert_eq!(g.last_column(), 0);
    }

    #[test]
    fn test_whitespace_only_cells_are_blank_for_bounds() {
        let g = grid(&[&["a", "   "]]);

        assert_eq!(g.last_column(), 1);
    }
}
