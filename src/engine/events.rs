// ==========================================
// Traversal events
// ==========================================
// The engine publishes one event per discovered row or per expected
// row set that came back empty. Absence is an event, never an error:
// cascading stops where a parent is missing, the run itself goes on.
// ==========================================

use crate::domain::process::{ProcessRecord, ProcessStepRecord, StepStatusRecord};

/// One observation of the three-level traversal, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum TraversalEvent {
    /// Level-1 row
    ProcessFound(ProcessRecord),
    /// Level 1 returned no rows for this process id; levels 2-3 are
    /// skipped for it
    ProcessMissing(i64),
    /// Level-2 row
    StepFound(ProcessStepRecord),
    /// Level 2 returned no rows for this process id
    StepsMissing(i64),
    /// Level-3 row
    StatusFound(StepStatusRecord),
    /// Level 3 returned no rows for this process step id
    StatusMissing(i64),
    /// An isolated fault scoped to one step row; traversal continued
    /// with the next row
    RowError {
        process_step_id: i64,
        message: String,
    },
}

impl TraversalEvent {
    /// Short tag for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            TraversalEvent::ProcessFound(_) => "ProcessFound",
            TraversalEvent::ProcessMissing(_) => "ProcessMissing",
            TraversalEvent::StepFound(_) => "StepFound",
            TraversalEvent::StepsMissing(_) => "StepsMissing",
            TraversalEvent::StatusFound(_) => "StatusFound",
            TraversalEvent::StatusMissing(_) => "StatusMissing",
            TraversalEvent::RowError { .. } => "RowError",
        }
    }
}
