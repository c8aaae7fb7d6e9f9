// ==========================================
// Case Process Analyzer - main entry point
// ==========================================
// Prompts for a case id, resolves its process ids and traverses the
// BPM hierarchy, emitting the bilingual report to console + log.
// ==========================================

use anyhow::{Context, Result};
use case_analyzer::engine::resolver::OrderBy;
use case_analyzer::{logging, AppConfig, CaseAnalysisOrchestrator, ReportSink};
use std::io::Write;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    tracing::info!("{} v{}", case_analyzer::APP_NAME, case_analyzer::VERSION);

    let config = AppConfig::from_env();
    let case_id = prompt_case_id()?;

    let mut sink = ReportSink::create(&config.report_log_path);
    let orchestrator = CaseAnalysisOrchestrator::new(&config);
    orchestrator
        .run(case_id, OrderBy::Encounter, &mut sink)
        .with_context(|| format!("analysis of case {case_id} failed"))?;

    Ok(())
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
