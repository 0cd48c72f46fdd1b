// ==========================================
// Line-import headless entry point
// ==========================================
// Imports one spreadsheet into a line group and prints a JSON
// summary on stdout. The interactive application embeds the library
// directly; this binary exists for scripted and manual runs.
// ==========================================

use line_import::importer::LineImporter;
use line_import::{i18n, logging, LineImporterImpl};

#[tokio::main]
async fn main() {
    logging::init();
    i18n::set_locale("ar");

    tracing::info!("==================================================");
    tracing::info!("{} v{}", line_import::APP_NAME, line_import::VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: line-import <file.xlsx|file.csv> <group_id>");
        std::process::exit(2);
    }

    let file_path = &args[1];
    let group_id: i64 = match args[2].parse() {
        Ok(id) => id,
        Err(_) => {
            eprintln!("group_id must be an integer, got: {}", args[2]);
            std::process::exit(2);
        }
    };

    let importer = LineImporterImpl::with_defaults();
    let result = importer.import_from_file(file_path, group_id).await;

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize import result");
            std::process::exit(1);
        }
    }

    if result.is_fatal() {
        std::process::exit(1);
    }
}
