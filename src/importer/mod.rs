// ==========================================
// Import layer
// ==========================================
// Spreadsheet -> phone-line records.
// Pipeline: grid source -> header detection -> column location ->
// normalization -> validation -> accumulation.
// ==========================================

pub mod classify;
pub mod column_locator;
pub mod error;
pub mod field_normalizer;
pub mod field_validator;
pub mod grid;
pub mod grid_source;
pub mod header_detector;
pub mod line_importer_impl;
pub mod line_importer_trait;

// concrete components
pub use column_locator::{ContentColumnLocator, HeaderColumnLocator};
pub use error::ImportError;
pub use field_normalizer::FieldNormalizer as FieldNormalizerImpl;
pub use field_validator::FieldValidator as FieldValidatorImpl;
pub use grid::Grid;
pub use grid_source::{CsvGridSource, ExcelGridSource, UniversalGridSource};
pub use header_detector::HeaderDetector;
pub use line_importer_impl::LineImporterImpl;

// trait interfaces
pub use line_importer_trait::{
    ColumnLocator, FieldNormalizer, FieldValidator, GridSource, LineImporter,
};
