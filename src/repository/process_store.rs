// ==========================================
// BPM relational store
// ==========================================
// The three cascading queries of the traversal: process metadata,
// process steps, step statuses. Each query is keyed by a single
// scalar discovered at the previous level and bounded to
// MAX_ROWS_PER_QUERY rows; rows past the cap are dropped silently
// (documented limitation of the report, not an error).
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::process::{ProcessRecord, ProcessStepRecord, StepStatusRecord};
use crate::repository::error::{DataSourceError, DataSourceResult};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

/// Row cap applied to every level query.
pub const MAX_ROWS_PER_QUERY: usize = 1000;

/// Query contract of the BPM relational store. One method per
/// traversal level; result-set order is preserved as delivered.
pub trait ProcessStore {
    /// Level 1: process metadata joined to its type name.
    fn fetch_processes(&self, process_id: i64) -> DataSourceResult<Vec<ProcessRecord>>;

    /// Level 2: all steps of a process, joined to process-type and
    /// activity-type names.
    fn fetch_steps(&self, process_id: i64) -> DataSourceResult<Vec<ProcessStepRecord>>;

    /// Level 3: all status rows of a step, joined to the status
    /// description.
    fn fetch_step_statuses(&self, process_step_id: i64) -> DataSourceResult<Vec<StepStatusRecord>>;
}

// ==========================================
// SqliteProcessStore
// ==========================================

/// Relational store over the BPM schema.
pub struct SqliteProcessStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteProcessStore {
    /// Open the store. Connection failure here is fatal for the run:
    /// no partial traversal is attempted.
    pub fn connect(db_path: &str) -> DataSourceResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| DataSourceError::Connection(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Wrap an already-open connection (tests, shared fixtures).
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> DataSourceResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| DataSourceError::Lock(e.to_string()))
    }
}

impl ProcessStore for SqliteProcessStore {
    fn fetch_processes(&self, process_id: i64) -> DataSourceResult<Vec<ProcessRecord>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(&format!(
            r#"
            SELECT p.ProcessID,
                   pt.ProcessTypeName,
                   p.LdapLeafID
            FROM Processes AS p
            JOIN ProcessTypes AS pt
                ON pt.ProcessTypeID = p.ProcessTypeID
            WHERE p.ProcessID = ?1
            LIMIT {MAX_ROWS_PER_QUERY}
            "#
        ))?;

        let records = stmt
            .query_map(params![process_id], |row| {
                Ok(ProcessRecord {
                    process_id: row.get(0)?,
                    process_type_name: row.get(1)?,
                    ldap_leaf_id: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    fn fetch_steps(&self, process_id: i64) -> DataSourceResult<Vec<ProcessStepRecord>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(&format!(
            r#"
            SELECT ps.ProcessStepID,
                   ps.ProcessID,
                   pt.ProcessTypeName,
                   at.ActivityTypeName,
                   ps.ProcessTypeGatewayID,
                   ps.DateForBPETreatment,
                   ps.TaskID,
                   ps.SubProcessID,
                   ps.ContentData,
                   ps.EventTypeID
            FROM ProcessSteps AS ps
            JOIN ProcessTypeActivities AS pta
                ON ps.ProcessTypeActivityID = pta.ProcessTypeActivityID
            JOIN ProcessTypes AS pt
                ON pt.ProcessTypeID = pta.ProcessTypeID
            JOIN ActivityTypes AS at
                ON at.ActivityTypeID = pta.ActivityTypeID
            WHERE ps.ProcessID = ?1
            LIMIT {MAX_ROWS_PER_QUERY}
            "#
        ))?;

        let records = stmt
            .query_map(params![process_id], |row| {
                Ok(ProcessStepRecord {
                    process_step_id: row.get(0)?,
                    process_id: row.get(1)?,
                    process_type_name: row.get(2)?,
                    activity_type_name: row.get(3)?,
                    process_type_gateway_id: row.get(4)?,
                    date_for_bpe_treatment: row.get(5)?,
                    task_id: row.get(6)?,
                    sub_process_id: row.get(7)?,
                    content_data: row.get(8)?,
                    event_type_id: row.get(9)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    fn fetch_step_statuses(&self, process_step_id: i64) -> DataSourceResult<Vec<StepStatusRecord>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(&format!(
            r#"
            SELECT pss.ProcessStepStatusID,
                   pss.ProcessStepID,
                   st.Description_Heb
            FROM ProcessStepStatuses AS pss
            JOIN StatusTypes AS st
                ON pss.StatusTypeID = st.StatusTypeID
            WHERE pss.ProcessStepID = ?1
            LIMIT {MAX_ROWS_PER_QUERY}
            "#
        ))?;

        let records = stmt
            .query_map(params![process_step_id], |row| {
                Ok(StepStatusRecord {
                    process_step_status_id: row.get(0)?,
                    process_step_id: row.get(1)?,
                    description_heb: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }
}
