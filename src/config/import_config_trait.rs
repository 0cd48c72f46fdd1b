// ==========================================
// Import configuration reading trait
// ==========================================
// Defines the configuration surface the import pipeline reads
// (no writes, no business logic here).
// ==========================================

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::error::Error;

// ==========================================
// DetectionSettings - per-call snapshot
// ==========================================
// The orchestrator reads the individual keys once per import call
// and hands this snapshot to the detection components, so a single
// call never observes a mixed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionSettings {
    /// Columns inspected by the header vote (capped at last_column).
    pub header_scan_columns: u32,
    /// Rows sampled by the content strategy (capped at last_row).
    pub sample_rows: u32,
    /// Minimum used columns for an importable sheet.
    pub min_required_columns: u32,
    /// Score added per name-like sampled cell.
    pub name_weight: i32,
    /// Score added per national-id-like sampled cell.
    pub national_id_weight: i32,
    /// Score added per phone-like sampled cell.
    pub phone_weight: i32,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            header_scan_columns: 10,
            sample_rows: 5,
            min_required_columns: 3,
            name_weight: 10,
            national_id_weight: 20,
            phone_weight: 20,
        }
    }
}

// ==========================================
// ImportConfigReader Trait
// ==========================================
// Implementor: StaticImportConfig
#[async_trait]
pub trait ImportConfigReader: Send + Sync {
    /// Width of the header-detection scan over row 1.
    ///
    /// # Default
    /// - 10
    async fn get_header_scan_columns(&self) -> Result<u32, Box<dyn Error>>;

    /// Number of rows sampled by content-based column detection.
    ///
    /// # Default
    /// - 5
    async fn get_detection_sample_rows(&self) -> Result<u32, Box<dyn Error>>;

    /// Minimum number of used columns a sheet must have; fewer is a
    /// fatal layout condition.
    ///
    /// # Default
    /// - 3
    async fn get_min_required_columns(&self) -> Result<u32, Box<dyn Error>>;

    /// Content-strategy score weight for name-like cells.
    ///
    /// # Default
    /// - 10
    async fn get_name_score_weight(&self) -> Result<i32, Box<dyn Error>>;

    /// Content-strategy score weight for national-id-like cells.
    ///
    /// # Default
    /// - 20
    async fn get_national_id_score_weight(&self) -> Result<i32, Box<dyn Error>>;

    /// Content-strategy score weight for phone-like cells.
    ///
    /// # Default
    /// - 20
    async fn get_phone_score_weight(&self) -> Result<i32, Box<dyn Error>>;
}
