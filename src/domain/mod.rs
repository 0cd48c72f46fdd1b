// ==========================================
// Domain model layer
// ==========================================
// Entities and value objects of the import core.
// No data access, no pipeline logic.
// ==========================================

pub mod line;

pub use line::{ColumnMapping, ImportResult, PhoneLine, RowError, RowOutcome};
