// ==========================================
// Case analysis orchestrator
// ==========================================
// Wires resolver -> traversal -> report rendering for one case.
// Connections: document store scoped inside the resolve call, BPM
// store acquired once before traversal and released when the run
// ends (Drop), on every exit path.
// ==========================================

use crate::config::AppConfig;
use crate::engine::events::TraversalEvent;
use crate::engine::resolver::{OrderBy, ProcessIdResolver};
use crate::engine::traversal::HierarchicalTraversalEngine;
use crate::repository::error::DataSourceResult;
use crate::repository::process_store::SqliteProcessStore;
use crate::report::sink::{EmitOptions, Emphasis, ReportSink};
use tracing::info;

const SEPARATOR: &str = "--------------------------------------------------";

/// Runs the full pipeline for one case id.
pub struct CaseAnalysisOrchestrator<'a> {
    config: &'a AppConfig,
}

impl<'a> CaseAnalysisOrchestrator<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Resolve and traverse one case, emitting the report as it goes.
    ///
    /// Data source failures are fatal for the run and propagate after
    /// the sink has carried an error line; absence at any level is
    /// reported and the run continues.
    pub fn run(
        &self,
        case_id: i64,
        order: OrderBy,
        sink: &mut ReportSink,
    ) -> DataSourceResult<()> {
        let result = self.run_inner(case_id, order, sink);
        if let Err(e) = &result {
            sink.error(&format!("Run aborted: {e}"));
        }
        sink.flush();
        result
    }

    fn run_inner(
        &self,
        case_id: i64,
        order: OrderBy,
        sink: &mut ReportSink,
    ) -> DataSourceResult<()> {
        let resolver = ProcessIdResolver::new(self.config);
        let process_ids = match resolver.resolve(case_id, order)? {
            None => {
                sink.warning(&format!("No case found for case id {case_id}."));
                return Ok(());
            }
            Some(ids) => ids,
        };

        if process_ids.is_empty() {
            sink.warning(&format!(
                "Case {case_id} resolved to no process ids. Nothing to report."
            ));
            return Ok(());
        }

        sink.info(&format!(
            "Resolved process ids for case {case_id}: {process_ids:?}"
        ));

        // One relational connection for the whole pass; failure here
        // aborts before any partial traversal
        info!(case_id, "connecting to BPM store");
        let store = SqliteProcessStore::connect(&self.config.bpm_db_path)?;
        let engine = HierarchicalTraversalEngine::new(&store);

        engine.traverse(&process_ids, |event| render_event(sink, event))?;

        info!(case_id, "traversal complete");
        Ok(())
    }
}

/// Render one traversal event into report lines.
///
/// Hebrew-bearing fields go through the bidi path with the emphasis
/// the report uses for that level: process type yellow, step names
/// green, status description red.
pub fn render_event(sink: &mut ReportSink, event: TraversalEvent) {
    match event {
        TraversalEvent::ProcessFound(p) => {
            sink.info(&format!("Process {}:", p.process_id));
            sink.emit_field("  ProcessID = ", &p.process_id.to_string(), EmitOptions::info());
            sink.emit_field(
                "  ProcessTypeName = ",
                &p.process_type_name,
                EmitOptions::info().with_emphasis(Emphasis::Yellow).bidi(),
            );
            sink.emit_field("  LdapLeafID = ", &opt_str(&p.ldap_leaf_id), EmitOptions::info());
        }
        TraversalEvent::ProcessMissing(process_id) => {
            sink.warning(&format!("No process rows found for ProcessID {process_id}."));
        }
        TraversalEvent::StepFound(s) => {
            sink.emit_field("  ProcessStepID = ", &s.process_step_id.to_string(), EmitOptions::info());
            sink.emit_field("  ProcessID = ", &s.process_id.to_string(), EmitOptions::info());
            sink.emit_field(
                "  ProcessTypeName = ",
                &s.process_type_name,
                EmitOptions::info().with_emphasis(Emphasis::Green).bidi(),
            );
            sink.emit_field(
                "  ActivityTypeName = ",
                &s.activity_type_name,
                EmitOptions::info().with_emphasis(Emphasis::Green).bidi(),
            );
            sink.emit_field(
                "  ProcessTypeGatewayID = ",
                &opt_i64(&s.process_type_gateway_id),
                EmitOptions::info(),
            );
            sink.emit_field(
                "  DateForBPETreatment = ",
                &opt_str(&s.date_for_bpe_treatment),
                EmitOptions::info(),
            );
            sink.emit_field("  TaskID = ", &opt_i64(&s.task_id), EmitOptions::info());
            sink.emit_field("  SubProcessID = ", &opt_i64(&s.sub_process_id), EmitOptions::info());
            sink.emit_field("  ContentData = ", &opt_str(&s.content_data), EmitOptions::info());
            sink.emit_field("  EventTypeID = ", &opt_i64(&s.event_type_id), EmitOptions::info());
            sink.info(SEPARATOR);
        }
        TraversalEvent::StepsMissing(process_id) => {
            sink.warning(&format!("No step rows found for ProcessID {process_id}."));
        }
        TraversalEvent::StatusFound(st) => {
            sink.emit_field(
                "    ProcessStepStatusID = ",
                &st.process_step_status_id.to_string(),
                EmitOptions::info(),
            );
            sink.emit_field(
                "    ProcessStepID = ",
                &st.process_step_id.to_string(),
                EmitOptions::info(),
            );
            sink.emit_field(
                "    Description_Heb = ",
                &st.description_heb,
                EmitOptions::info().with_emphasis(Emphasis::Red).bidi(),
            );
            sink.info(SEPARATOR);
        }
        TraversalEvent::StatusMissing(process_step_id) => {
            sink.warning(&format!(
                "No status rows found for ProcessStepID {process_step_id}."
            ));
        }
        TraversalEvent::RowError {
            process_step_id,
            message,
        } => {
            sink.error(&format!(
                "Error processing ProcessStepID {process_step_id}: {message}"
            ));
        }
    }
}

fn opt_str(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "NULL".to_string())
}

fn opt_i64(value: &Option<i64>) -> String {
    value.map_or_else(|| "NULL".to_string(), |v| v.to_string())
}
