// ==========================================
// Case document store - view records
// ==========================================

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Projected view of one entry under `Requests[].Processes[]` of a
/// case document. Only the two fields the resolver reads are mapped;
/// everything else in the document stays in the store.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessRef {
    /// Referenced process id; documents can carry entries without one
    #[serde(rename = "ProcessId")]
    pub process_id: Option<i64>,

    /// Publish timestamp used by the date-ordered resolver variant
    #[serde(rename = "LastPublishDate")]
    pub last_publish_date: Option<DateTime<Utc>>,
}

/// A document matched by the entity search, as stored: id plus the
/// raw JSON field map. Field interpretation happens at display time.
#[derive(Debug, Clone)]
pub struct DocumentRecord {
    pub document_id: i64,
    pub fields: serde_json::Map<String, serde_json::Value>,
}
