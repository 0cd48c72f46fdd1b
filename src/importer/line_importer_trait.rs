// ==========================================
// Line-import trait definitions
// ==========================================
// Interfaces of the import pipeline stages (no implementations).
// ==========================================

use crate::domain::{ColumnMapping, ImportResult};
use crate::importer::error::ImportError;
use crate::importer::grid::Grid;
use async_trait::async_trait;
use std::path::Path;

// ==========================================
// LineImporter Trait
// ==========================================
// Purpose: import entry points
// Implementor: LineImporterImpl
#[async_trait]
pub trait LineImporter: Send + Sync {
    /// Imports phone-line records from an in-memory grid.
    ///
    /// # Arguments
    /// - grid: 1-indexed cell-text view, owned by the caller for the call
    /// - group_id: target line group for every accepted record
    ///
    /// # Returns
    /// Always a complete ImportResult. Fatal conditions (too few
    /// columns, undetectable layout) surface as the single-error
    /// no-row-number shape, never as a panic or an Err.
    ///
    /// # Pipeline
    /// 1. Header detection on row 1
    /// 2. Column location (header-text or content-based strategy)
    /// 3. Per-row normalize -> validate -> accumulate
    async fn import_grid(&self, grid: &Grid, group_id: i64) -> ImportResult;

    /// Loads the grid from a spreadsheet file, then runs import_grid.
    ///
    /// # Arguments
    /// - file_path: .xlsx/.xls/.csv path
    /// - group_id: target line group
    ///
    /// # Returns
    /// A complete ImportResult; file-level failures use the fatal shape.
    async fn import_from_file<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
        group_id: i64,
    ) -> ImportResult;

    /// Imports several files concurrently.
    ///
    /// Each file is an independent import owning its own grid; one
    /// failing file never affects the others. Rows inside a single
    /// file remain strictly sequential.
    async fn batch_import<P: AsRef<Path> + Send + Sync>(
        &self,
        file_paths: Vec<P>,
        group_id: i64,
    ) -> Vec<ImportResult>;
}

// ==========================================
// GridSource Trait
// ==========================================
// Purpose: file -> Grid (stage 0)
// Implementors: ExcelGridSource, CsvGridSource, UniversalGridSource
pub trait GridSource: Send + Sync {
    /// Reads the whole used range of a spreadsheet into a Grid.
    ///
    /// The underlying handle is scoped to this call: opened here,
    /// released on every exit path.
    fn load_grid(&self, file_path: &Path) -> Result<Grid, ImportError>;
}

// ==========================================
// ColumnLocator Trait
// ==========================================
// Purpose: resolve which columns hold name / national id / phone
// Implementors: HeaderColumnLocator, ContentColumnLocator
pub trait ColumnLocator: Send + Sync {
    /// Resolves a full ColumnMapping or signals that the layout is
    /// undetectable (None -> fatal for the whole import).
    ///
    /// The returned indices are not guaranteed mutually distinct.
    fn resolve(
        &self,
        grid: &Grid,
        settings: &crate::config::DetectionSettings,
    ) -> Option<ColumnMapping>;
}

// ==========================================
// FieldNormalizer Trait
// ==========================================
// Purpose: strip formatting noise before validation
// Implementor: field_normalizer::FieldNormalizer
pub trait FieldNormalizer: Send + Sync {
    /// Phone normalization: drop separators, then collapse the
    /// country-code prefix ("+2", or a lone "2" on a 12-digit value).
    fn normalize_phone(&self, raw: &str) -> String;

    /// National-id normalization: drop spaces and dashes only.
    fn normalize_national_id(&self, raw: &str) -> String;
}

// ==========================================
// FieldValidator Trait
// ==========================================
// Purpose: exact format checks over normalized values
// Implementor: field_validator::FieldValidator
pub trait FieldValidator: Send + Sync {
    /// 14 characters, all decimal digits.
    fn is_valid_national_id(&self, value: &str) -> bool;

    /// 11 characters, all decimal digits, starting "01".
    fn is_valid_phone(&self, value: &str) -> bool;
}
