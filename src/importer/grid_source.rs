// ==========================================
// Grid sources
// ==========================================
// File -> Grid readers. Supported: Excel (.xlsx/.xls), CSV (.csv).
// Handles are scoped to the call: opened here, released on every
// exit path. Blank rows are kept in place - error messages carry
// source row numbers, so positions must survive loading.
// ==========================================

use crate::importer::error::ImportError;
use crate::importer::grid::Grid;
use crate::importer::line_importer_trait::GridSource;
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

// ==========================================
// CSV source
// ==========================================
pub struct CsvGridSource;

impl GridSource for CsvGridSource {
    fn load_grid(&self, file_path: &Path) -> Result<Grid, ImportError> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(
                file_path.display().to_string(),
            ));
        }

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        // header presence is decided downstream by the header detector,
        // never by the reader
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        Ok(Grid::from_rows(rows))
    }
}

// ==========================================
// Excel source
// ==========================================
pub struct ExcelGridSource;

impl GridSource for ExcelGridSource {
    fn load_grid(&self, file_path: &Path) -> Result<Grid, ImportError> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(
                file_path.display().to_string(),
            ));
        }

        let ext = extension_of(file_path);
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook: Xlsx<_> = open_workbook(file_path)
            .map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))?;

        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::NoWorksheet);
        }

        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        // calamine ranges start at the first used cell; pad the leading
        // rows/columns so grid coordinates stay absolute, as in the sheet
        let mut rows: Vec<Vec<String>> = Vec::new();
        if let Some((start_row, start_col)) = range.start() {
            rows.extend(std::iter::repeat_with(Vec::new).take(start_row as usize));
            for data_row in range.rows() {
                let mut cells: Vec<String> = vec![String::new(); start_col as usize];
                cells.extend(data_row.iter().map(|cell| cell.to_string()));
                rows.push(cells);
            }
        }

        Ok(Grid::from_rows(rows))
    }
}

// ==========================================
// Universal source (extension dispatch)
// ==========================================
pub struct UniversalGridSource;

impl GridSource for UniversalGridSource {
    fn load_grid(&self, file_path: &Path) -> Result<Grid, ImportError> {
        match extension_of(file_path).as_str() {
            "csv" => CsvGridSource.load_grid(file_path),
            "xlsx" | "xls" => ExcelGridSource.load_grid(file_path),
            other => Err(ImportError::UnsupportedFormat(other.to_string())),
        }
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}
