// ==========================================
// Line-import domain model
// ==========================================
// Entities produced and consumed by one import call.
// Lifecycle: all of these exist for the duration of a single
// import; persistence of accepted records belongs to the caller.
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// PhoneLine - accepted import record
// ==========================================
// Created only after normalization + validation succeed.
// Never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneLine {
    // ===== identity =====
    pub name: String,          // holder name, trimmed source text
    pub national_id: String,   // 14 digits, normalized
    pub phone_number: String,  // 11 digits starting "01", normalized

    // ===== derived =====
    pub internal_id: String,   // data-ordinal within the batch ("1", "2", ...)
    pub group_id: i64,         // target line group reference

    // ===== audit =====
    pub created_at: DateTime<Utc>,
}

// ==========================================
// ColumnMapping - resolved column indices
// ==========================================
// All three indices are positive and 1-indexed once a locator
// returns a mapping. The indices are NOT guaranteed to be mutually
// distinct: an ambiguous column can win more than one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub name_column: u32,
    pub national_id_column: u32,
    pub phone_column: u32,
}

// ==========================================
// RowError - row-scoped import failure
// ==========================================
// row_number 0 means "not row-specific" (a fatal, whole-import
// condition reported through the same channel).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    pub row_number: u32,
    pub message: String, // already localized at construction
}

impl RowError {
    /// Error attributable to one data row.
    pub fn in_row(row_number: u32, message: String) -> Self {
        Self {
            row_number,
            message,
        }
    }

    /// Whole-import error (no specific row).
    pub fn not_row_specific(message: String) -> Self {
        Self {
            row_number: 0,
            message,
        }
    }

    pub fn is_row_specific(&self) -> bool {
        self.row_number > 0
    }
}

// ==========================================
// RowOutcome - tagged per-row result
// ==========================================
// Each data row produces exactly one of these; error recovery is
// expressed in the type, not through unwinding.
#[derive(Debug, Clone)]
pub enum RowOutcome {
    /// Row passed normalization and validation.
    Imported(PhoneLine),
    /// Row failed a format rule; processing continues with the next row.
    Failed(RowError),
    /// At least one mapped cell was blank; counted neither way.
    Skipped,
}

// ==========================================
// ImportResult - aggregated outcome of one call
// ==========================================
// Built incrementally by the orchestrator, returned once, then
// treated as immutable by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportResult {
    pub success_count: usize,
    pub failed_count: usize,
    pub errors: Vec<RowError>,
    pub records: Vec<PhoneLine>,
}

impl ImportResult {
    /// Result shape for a fatal condition: zero records and exactly one
    /// explanatory error carrying no row number.
    pub fn fatal(message: String) -> Self {
        Self {
            success_count: 0,
            failed_count: 0,
            errors: vec![RowError::not_row_specific(message)],
            records: Vec::new(),
        }
    }

    /// True when the import was aborted before any row was processed.
    pub fn is_fatal(&self) -> bool {
        self.success_count == 0
            && self.records.is_empty()
            && self.errors.len() == 1
            && !self.errors[0].is_row_specific()
    }
}
