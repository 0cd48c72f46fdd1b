// ==========================================
// Line importer implementation
// ==========================================
// Drives the whole pipeline: load -> header vote -> column
// location -> per-row normalize/validate -> accumulate.
// Failure isolation is per-row; only source and layout conditions
// abort an import, and even those are folded into the result shape.
// ==========================================

use crate::config::{DetectionSettings, ImportConfigReader};
use crate::domain::{ColumnMapping, ImportResult, PhoneLine, RowError, RowOutcome};
use crate::i18n;
use crate::importer::error::ImportError;
use crate::importer::grid::Grid;
use crate::importer::grid_source::UniversalGridSource;
use crate::importer::header_detector::HeaderDetector;
use crate::importer::line_importer_trait::{
    ColumnLocator, FieldNormalizer, FieldValidator, GridSource, LineImporter,
};
use crate::importer::{column_locator, field_normalizer, field_validator};
use chrono::Utc;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// LineImporterImpl
// ==========================================
pub struct LineImporterImpl<C>
where
    C: ImportConfigReader,
{
    // configuration reader
    config: C,

    // pipeline components
    grid_source: Box<dyn GridSource>,
    header_detector: HeaderDetector,
    header_locator: Box<dyn ColumnLocator>,
    content_locator: Box<dyn ColumnLocator>,
    normalizer: Box<dyn FieldNormalizer>,
    validator: Box<dyn FieldValidator>,

    // optional cooperative cancellation, checked before each row
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl<C> LineImporterImpl<C>
where
    C: ImportConfigReader,
{
    /// Creates a new importer instance.
    ///
    /// # Arguments
    /// - config: configuration reader
    /// - grid_source: file -> grid reader
    /// - header_locator: strategy used when row 1 is a header
    /// - content_locator: strategy used when row 1 is data
    /// - normalizer: field normalizer
    /// - validator: field validator
    pub fn new(
        config: C,
        grid_source: Box<dyn GridSource>,
        header_locator: Box<dyn ColumnLocator>,
        content_locator: Box<dyn ColumnLocator>,
        normalizer: Box<dyn FieldNormalizer>,
        validator: Box<dyn FieldValidator>,
    ) -> Self {
        Self {
            config,
            grid_source,
            header_detector: HeaderDetector,
            header_locator,
            content_locator,
            normalizer,
            validator,
            cancel_flag: None,
        }
    }

    /// Attaches a cancellation flag. When raised, the row loop stops
    /// before the next row and the partial result is returned.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_flag
            .as_ref()
            .map(|flag| flag.load(Ordering::Relaxed))
            .unwrap_or(false)
    }

    /// Reads the per-call configuration snapshot.
    async fn detection_settings(&self) -> Result<DetectionSettings, ImportError> {
        let read = |e: Box<dyn std::error::Error>| ImportError::InternalError(e.to_string());

        Ok(DetectionSettings {
            header_scan_columns: self.config.get_header_scan_columns().await.map_err(read)?,
            sample_rows: self.config.get_detection_sample_rows().await.map_err(read)?,
            min_required_columns: self.config.get_min_required_columns().await.map_err(read)?,
            name_weight: self.config.get_name_score_weight().await.map_err(read)?,
            national_id_weight: self
                .config
                .get_national_id_score_weight()
                .await
                .map_err(read)?,
            phone_weight: self.config.get_phone_score_weight().await.map_err(read)?,
        })
    }

    /// Processes one data row into its tagged outcome. Total: every
    /// failure mode is expressed in the returned value.
    fn process_row(
        &self,
        grid: &Grid,
        row: u32,
        mapping: &ColumnMapping,
        group_id: i64,
        has_header: bool,
    ) -> RowOutcome {
        let name = grid.cell(row, mapping.name_column).trim();
        let national_id_raw = grid.cell(row, mapping.national_id_column).trim();
        let phone_raw = grid.cell(row, mapping.phone_column).trim();

        // a row missing any mapped field is skipped silently: neither
        // success nor failure
        if name.is_empty() || national_id_raw.is_empty() || phone_raw.is_empty() {
            return RowOutcome::Skipped;
        }

        let national_id = self.normalizer.normalize_national_id(national_id_raw);
        let phone_number = self.normalizer.normalize_phone(phone_raw);

        if !self.validator.is_valid_national_id(&national_id) {
            return RowOutcome::Failed(RowError::in_row(
                row,
                i18n::t_with_args(
                    "import.invalid_national_id",
                    &[("row", &row.to_string()), ("value", &national_id)],
                ),
            ));
        }

        if !self.validator.is_valid_phone(&phone_number) {
            return RowOutcome::Failed(RowError::in_row(
                row,
                i18n::t_with_args(
                    "import.invalid_phone",
                    &[("row", &row.to_string()), ("value", &phone_number)],
                ),
            ));
        }

        // data-ordinal within the batch, independent of any id column
        // in the source grid
        let internal_id = (row - if has_header { 1 } else { 0 }).to_string();

        RowOutcome::Imported(PhoneLine {
            name: name.to_string(),
            national_id,
            phone_number,
            internal_id,
            group_id,
            created_at: Utc::now(),
        })
    }
}

impl LineImporterImpl<crate::config::StaticImportConfig> {
    /// Default assembly: universal grid source, both locator
    /// strategies, standard normalizer/validator, default tunables.
    pub fn with_defaults() -> Self {
        Self::new(
            crate::config::StaticImportConfig::default(),
            Box::new(UniversalGridSource),
            Box::new(column_locator::HeaderColumnLocator),
            Box::new(column_locator::ContentColumnLocator),
            Box::new(field_normalizer::FieldNormalizer),
            Box::new(field_validator::FieldValidator),
        )
    }
}

#[async_trait::async_trait]
impl<C> LineImporter for LineImporterImpl<C>
where
    C: ImportConfigReader + Send + Sync,
{
    async fn import_grid(&self, grid: &Grid, group_id: i64) -> ImportResult {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4();

        info!(
            batch_id = %batch_id,
            group_id,
            last_row = grid.last_row(),
            last_column = grid.last_column(),
            "starting grid import"
        );

        let settings = match self.detection_settings().await {
            Ok(settings) => settings,
            Err(e) => {
                error!(batch_id = %batch_id, error = %e, "configuration read failed");
                return ImportResult::fatal(e.localized_message());
            }
        };

        // === stage 1: layout sanity ===
        if grid.last_column() < settings.min_required_columns {
            let e = ImportError::TooFewColumns {
                found: grid.last_column(),
                required: settings.min_required_columns,
            };
            warn!(batch_id = %batch_id, error = %e, "import aborted");
            return ImportResult::fatal(e.localized_message());
        }

        // === stage 2: header vote ===
        let has_header = self
            .header_detector
            .detect(grid, settings.header_scan_columns);
        debug!(batch_id = %batch_id, has_header, "header detection done");

        // === stage 3: column location ===
        let locator = if has_header {
            &self.header_locator
        } else {
            &self.content_locator
        };
        let mapping = match locator.resolve(grid, &settings) {
            Some(mapping) => mapping,
            None => {
                let e = ImportError::ColumnsNotDetected;
                warn!(batch_id = %batch_id, has_header, error = %e, "import aborted");
                return ImportResult::fatal(e.localized_message());
            }
        };
        debug!(
            batch_id = %batch_id,
            name_column = mapping.name_column,
            national_id_column = mapping.national_id_column,
            phone_column = mapping.phone_column,
            "columns resolved"
        );

        // === stage 4: row loop ===
        // strictly in increasing row order; row numbers in error
        // messages must reflect input order
        let first_data_row = if has_header { 2 } else { 1 };
        let mut result = ImportResult::default();
        let mut skipped_rows = 0usize;

        for row in first_data_row..=grid.last_row() {
            if self.is_cancelled() {
                warn!(batch_id = %batch_id, row, "import cancelled before row");
                break;
            }

            match self.process_row(grid, row, &mapping, group_id, has_header) {
                RowOutcome::Imported(line) => {
                    result.records.push(line);
                    result.success_count += 1;
                }
                RowOutcome::Failed(row_error) => {
                    debug!(batch_id = %batch_id, row, message = %row_error.message, "row rejected");
                    result.errors.push(row_error);
                    result.failed_count += 1;
                }
                RowOutcome::Skipped => {
                    skipped_rows += 1;
                }
            }
        }

        info!(
            batch_id = %batch_id,
            success = result.success_count,
            failed = result.failed_count,
            skipped = skipped_rows,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "grid import finished"
        );

        result
    }

    #[instrument(skip(self, file_path))]
    async fn import_from_file<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
        group_id: i64,
    ) -> ImportResult {
        let path = file_path.as_ref();
        info!(file = %path.display(), "starting file import");

        let grid = match self.grid_source.load_grid(path) {
            Ok(grid) => grid,
            Err(e) => {
                error!(file = %path.display(), error = %e, "grid load failed");
                return ImportResult::fatal(e.localized_message());
            }
        };

        self.import_grid(&grid, group_id).await
    }

    async fn batch_import<P: AsRef<Path> + Send + Sync>(
        &self,
        file_paths: Vec<P>,
        group_id: i64,
    ) -> Vec<ImportResult> {
        use futures::future::join_all;

        info!(count = file_paths.len(), "starting batch import");

        // independent imports, each owning its grid; rows inside one
        // file stay sequential
        let tasks = file_paths
            .iter()
            .map(|path| self.import_from_file(path.as_ref(), group_id));

        let results = join_all(tasks).await;

        info!(
            total = results.len(),
            fatal = results.iter().filter(|r| r.is_fatal()).count(),
            "batch import finished"
        );

        results
    }
}
