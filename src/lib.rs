// ==========================================
// Line-import core library
// ==========================================
// Extracts {name, national id, phone} records from spreadsheets of
// unknown column layout: structural inference, normalization, strict
// validation, per-row failure isolation.
// ==========================================

// i18n initialization (Arabic display language)
rust_i18n::i18n!("locales", fallback = "ar");

// ==========================================
// Module declarations
// ==========================================

// domain layer - entities and value objects
pub mod domain;

// import layer - the pipeline
pub mod importer;

// configuration layer - detection tunables
pub mod config;

// logging
pub mod logging;

// internationalization
pub mod i18n;

// ==========================================
// Core re-exports
// ==========================================

// domain types
pub use domain::{ColumnMapping, ImportResult, PhoneLine, RowError, RowOutcome};

// pipeline
pub use importer::{
    ColumnLocator, ContentColumnLocator, CsvGridSource, ExcelGridSource, Grid, GridSource,
    HeaderColumnLocator, HeaderDetector, ImportError, LineImporter, LineImporterImpl,
    UniversalGridSource,
};

// configuration
pub use config::{DetectionSettings, ImportConfigReader, StaticImportConfig};

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Line Management Import";
