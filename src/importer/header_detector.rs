// ==========================================
// Header detector
// ==========================================
// Decides whether row 1 is a header or a data row by a
// text-vs-numeric majority vote over its first cells.
// ==========================================

use crate::importer::classify;
use crate::importer::grid::Grid;
use tracing::debug;

pub struct HeaderDetector;

impl HeaderDetector {
    /// Inspects row 1, columns 1..=min(last_column, scan_columns).
    ///
    /// A non-blank cell whose text is not purely numeric (separators
    /// removed) counts as a text cell. Row 1 is a header when at least
    /// half of the non-blank sample is text, with the integer-division
    /// tie rule: text_cells >= total_cells / 2. A row with no non-blank
    /// cells is never a header.
    pub fn detect(&self, grid: &Grid, scan_columns: u32) -> bool {
        let mut text_cell_count = 0u32;
        let mut total_cells = 0u32;

        for col in 1..=grid.last_column().min(scan_columns) {
            let cell_value = grid.cell(1, col);
            if cell_value.trim().is_empty() {
                continue;
            }
            total_cells += 1;
            if !classify::is_numeric_only(cell_value) {
                text_cell_count += 1;
            }
        }

        let has_header = total_cells > 0 && text_cell_count >= total_cells / 2;
        debug!(total_cells, text_cell_count, has_header, "header vote");
        has_header
    }
}
