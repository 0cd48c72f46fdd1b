// ==========================================
// End-to-end integration tests - file import
// ==========================================
// Full flow from a spreadsheet file on disk through grid loading,
// detection and the row loop, plus the localized fatal surface.
// ==========================================


use line_import::i18n;
use line_import::importer::LineImporter;
use line_import::logging;
use test_helpers::{create_test_importer, write_csv_fixture};

#[tokio::test]
async fn test_csv_file_with_header_end_to_end() {
    logging::init_test();
    let importer = create_test_importer();

    let file = write_csv_fixture(&[
        "الاسم,الرقم القومي,رقم الخط",
        "أحمد,12345678901234,01012345678",
        "سالم,123,0102",
    ]);

    let result = importer.import_from_file(file.path(), 7).await;

    assert_eq!(result.success_count, 1);
    assert_eq!(result.failed_count, 1);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].row_number, 3);

    assert_eq!(result.records.len(), 1);
    let record = &result.records[0];
    assert_eq!(record.name, "أحمد");
    assert_eq!(record.national_id, "12345678901234");
    assert_eq!(record.phone_number, "01012345678");
    assert_eq!(record.internal_id, "1");
    assert_eq!(record.group_id, 7);
}

#[tokio::test]
async fn test_csv_file_with_country_coded_phones() {
    let importer = create_test_importer();

    let file = write_csv_fixture(&[
        "name,national id,phone",
        "Ahmed,12345678901234,+20 10 1234 5678",
        "Salem,98765432109876,201012345679",
    ]);

    let result = importer.import_from_file(file.path(), 1).await;

    assert_eq!(result.success_count, 2);
    assert_eq!(result.records[0].phone_number, "01012345678");
    assert_eq!(result.records[1].phone_number, "01012345679");
}

#[tokio::test]
async fn test_missing_file_is_fatal_with_localized_message() {
    let importer = create_test_importer();

    let result = importer
        .import_from_file("definitely_missing_lines.csv", 1)
        .await;

    assert!(result.is_fatal());
    assert_eq!(result.errors[0].row_number, 0);
    // the path stays resolvable from the message in any locale
    assert!(result.errors[0]
        .message
        .contains("definitely_missing_lines.csv"));
}

#[tokio::test]
async fn test_unsupported_extension_is_fatal() {
    let importer = create_test_importer();

    let file = tempfile::Builder::new()
        .suffix(".pdf")
        .tempfile()
        .expect("temp file");

    let result = importer.import_from_file(file.path(), 1).await;

    assert!(result.is_fatal());
}

#[tokio::test]
async fn test_batch_import_keeps_files_independent() {
    let importer = create_test_importer();

    let good = write_csv_fixture(&[
        "name,national id,phone",
        "Ahmed,12345678901234,01012345678",
    ]);

    let results = importer
        .batch_import(
            vec![
                good.path().to_path_buf(),
                std::path::PathBuf::from("missing_batch_file.csv"),
            ],
            3,
        )
        .await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].success_count, 1);
    assert!(results[1].is_fatal());
}

#[tokio::test]
async fn test_fatal_message_localizes_per_active_locale() {
    let importer = create_test_importer();

    // row 1 votes header but carries no recognizable keyword
    let file = write_csv_fixture(&["foo,bar,baz", "x,y,z"]);

    i18n::set_locale("ar");
    let result = importer.import_from_file(file.path(), 1).await;
    assert!(result.is_fatal());
    assert!(result.errors[0].message.contains("لم يتم العثور"));

    i18n::set_locale("en");
    let result = importer.import_from_file(file.path(), 1).await;
    assert!(result.is_fatal());
    assert!(result.errors[0].message.contains("Required columns"));

    i18n::set_locale("ar");
}
