// ==========================================
// Static configuration reader
// ==========================================
// In-memory ImportConfigReader. Configuration persistence lives
// outside this crate; callers that store tunables elsewhere adapt
// them through their own ImportConfigReader implementation.
// ==========================================

use crate::config::import_config_trait::{DetectionSettings, ImportConfigReader};
use async_trait::async_trait;
use std::error::Error;

// ==========================================
// StaticImportConfig
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct StaticImportConfig {
    settings: DetectionSettings,
}

impl StaticImportConfig {
    pub fn new(settings: DetectionSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &DetectionSettings {
        &self.settings
    }
}

#[async_trait]
impl ImportConfigReader for StaticImportConfig {
    async fn get_header_scan_columns(&self) -> Result<u32, Box<dyn Error>> {
        Ok(self.settings.header_scan_columns)
    }

    async fn get_detection_sample_rows(&self) -> Result<u32, Box<dyn Error>> {
        Ok(self.settings.sample_rows)
    }

    async fn get_min_required_columns(&self) -> Result<u32, Box<dyn Error>> {
        Ok(self.settings.min_required_columns)
    }

    async fn get_name_score_weight(&self) -> Result<i32, Box<dyn Error>> {
        Ok(self.settings.name_weight)
    }

    async fn get_national_id_score_weight(&self) -> Result<i32, Box<dyn Error>> {
        Ok(self.settings.national_id_weight)
    }

    async fn get_phone_score_weight(&self) -> Result<i32, Box<dyn Error>> {
        Ok(self.settings.phone_weight)
    }
}
