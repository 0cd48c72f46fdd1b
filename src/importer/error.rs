// ==========================================
// Import module error types
// ==========================================
// thiserror derive taxonomy. Fatal conditions are folded into the
// result shape at the public boundary (ImportResult::fatal); these
// variants never cross it as Err.
// ==========================================

use crate::i18n;
use thiserror::Error;

/// Import pipeline error taxonomy.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== source unavailable =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (only .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("file read failed: {0}")]
    FileReadError(String),

    #[error("excel parse failed: {0}")]
    ExcelParseError(String),

    #[error("csv parse failed: {0}")]
    CsvParseError(String),

    #[error("workbook contains no worksheet")]
    NoWorksheet,

    // ===== layout undetectable =====
    #[error("too few used columns: {found} (need {required})")]
    TooFewColumns { found: u32, required: u32 },

    #[error("required columns not detected (name, national id, phone)")]
    ColumnsNotDetected,

    // ===== control =====
    #[error("import cancelled")]
    Cancelled,

    // ===== generic =====
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImportError {
    /// User-facing text in the active display language.
    ///
    /// The localized shape keeps the defect (and row-independence)
    /// resolvable regardless of locale.
    pub fn localized_message(&self) -> String {
        match self {
            ImportError::FileNotFound(path) => {
                i18n::t_with_args("import.file_not_found", &[("path", path)])
            }
            ImportError::UnsupportedFormat(extension) => {
                i18n::t_with_args("import.unsupported_format", &[("extension", extension)])
            }
            ImportError::FileReadError(message)
            | ImportError::ExcelParseError(message)
            | ImportError::CsvParseError(message)
            | ImportError::InternalError(message) => {
                i18n::t_with_args("import.file_error", &[("message", message)])
            }
            ImportError::NoWorksheet => i18n::t("import.no_worksheet"),
            ImportError::TooFewColumns { found, required } => i18n::t_with_args(
                "import.too_few_columns",
                &[
                    ("found", &found.to_string()),
                    ("required", &required.to_string()),
                ],
            ),
            ImportError::ColumnsNotDetected => i18n::t("import.columns_not_detected"),
            ImportError::Cancelled => i18n::t("import.cancelled"),
            ImportError::Other(err) => {
                i18n::t_with_args("import.file_error", &[("message", &err.to_string())])
            }
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_message_carries_parameters() {
        let msg = ImportError::TooFewColumns {
            found: 2,
            required: 3,
        }
        .localized_message();
        assert!(msg.contains('2'));
        assert!(msg.contains('3'));

        let msg = ImportError::FileNotFound("/tmp/missing.xlsx".to_string()).localized_message();
        assert!(msg.contains("/tmp/missing.xlsx"));
    }

    #[test]
    fn test_io_error_maps_to_file_read() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ImportError = io.into();
        assert!(matches!(err, ImportError::FileReadError(_)));
    }
}
