// ==========================================
// BPM relational store - result records
// ==========================================
// One struct per query level. Hebrew-bearing fields are stored in
// logical order; visual reordering happens only in the report layer.
// ==========================================

/// Level-1 row: process metadata joined to its type name.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRecord {
    pub process_id: i64,
    /// Hebrew display name of the process type
    pub process_type_name: String,
    pub ldap_leaf_id: Option<String>,
}

/// Level-2 row: one process step joined to its process-type and
/// activity-type names. `process_step_id` is the key propagated into
/// the level-3 query.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessStepRecord {
    pub process_step_id: i64,
    pub process_id: i64,
    pub process_type_name: String,
    /// Hebrew display name of the activity type
    pub activity_type_name: String,
    pub process_type_gateway_id: Option<i64>,
    pub date_for_bpe_treatment: Option<String>,
    pub task_id: Option<i64>,
    pub sub_process_id: Option<i64>,
    pub content_data: Option<String>,
    pub event_type_id: Option<i64>,
}

/// Level-3 row: step status joined to its Hebrew description.
#[derive(Debug, Clone, PartialEq)]
pub struct StepStatusRecord {
    pub process_step_status_id: i64,
    pub process_step_id: i64,
    pub description_heb: String,
}
