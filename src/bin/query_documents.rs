// ==========================================
// Document search - standalone entry point
// ==========================================
// Prompts for a case id and displays every document whose entity
// list references it, with field highlighting and bidi-corrected
// file names.
// ==========================================

use anyhow::{Context, Result};
use case_analyzer::repository::case_store::{CaseStore, SqliteCaseStore};
use case_analyzer::report::sink::{EmitOptions, Emphasis, ReportSink};
use case_analyzer::{logging, AppConfig};
use std::io::Write;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = AppConfig::from_env();
    let case_id = prompt_case_id()?;

    let store = SqliteCaseStore::connect(&config.case_db_path)
        .context("connecting to the case document store failed")?;
    let documents = store
        .find_documents_by_case(case_id)
        .context("document search failed")?;

    let mut sink = ReportSink::create(&config.report_log_path);

    if documents.is_empty() {
        sink.warning(&format!("No documents found matching case id {case_id}."));
        return Ok(());
    }

    sink.info(&format!("Found {} matching documents:", documents.len()));
    for document in &documents {
        sink.emit(
            &format!("Document {} found:", document.document_id),
            EmitOptions::info().with_emphasis(Emphasis::Red),
        );
        for (key, value) in &document.fields {
            render_field(&mut sink, key, value);
        }
    }

    Ok(())
}

/// Field display: FileName gets bidi treatment, nested values are
/// pretty-printed JSON, scalars print as-is.
fn render_field(sink: &mut ReportSink, key: &str, value: &serde_json::Value) {
    match value {
        serde_json::Value::String(text) if key == "FileName" => {
            sink.emit_field(
                &format!("{key} = "),
                text,
                EmitOptions::info().with_emphasis(Emphasis::Green).bidi(),
            );
        }
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            sink.info(&format!("{key} ="));
            let pretty =
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            for line in pretty.lines() {
                sink.info(&format!("  {line}"));
            }
        }
        other => {
            sink.emit_field(&format!("{key} = "), &json_scalar(other), EmitOptions::info());
        }
    }
}

fn json_scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn prompt_case_id() -> Result<i64> {
    print!("Enter case id: ");
    std::io::stdout().flush().context("flush prompt")?;

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .context("read case id")?;
    input
        .trim()
        .parse::<i64>()
        .context("case id must be numeric")
}
