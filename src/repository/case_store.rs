// ==========================================
// Case document store
// ==========================================
// JSON case documents, one body per row. The resolver reads a
// projected view (Requests[].Processes[] ids and publish dates); the
// projection happens inside the store query so full documents never
// cross the boundary.
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::case::{DocumentRecord, ProcessRef};
use crate::repository::error::{DataSourceError, DataSourceResult};
use crate::repository::MAX_ROWS_PER_QUERY;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};

/// Query contract of the case document store.
pub trait CaseStore {
    /// Projected find-one: the process references of a case, in
    /// document encounter order.
    ///
    /// # Returns
    /// - Ok(None): no case with this id
    /// - Ok(Some(refs)): case found (refs may be empty)
    fn find_case_process_refs(&self, case_id: i64) -> DataSourceResult<Option<Vec<ProcessRef>>>;

    /// Every document whose entity list references the case
    /// (EntityTypeId = 1, EntityValue = case id).
    fn find_documents_by_case(&self, case_id: i64) -> DataSourceResult<Vec<DocumentRecord>>;
}

// ==========================================
// SqliteCaseStore
// ==========================================

/// Case store backed by SQLite with JSON bodies.
///
/// Tables: `cases(case_id, body)` and `documents(document_id, body)`.
pub struct SqliteCaseStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteCaseStore {
    /// Open a scoped connection to the store.
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

impl CaseStore for SqliteCaseStore {
    fn find_case_process_refs(&self, case_id: i64) -> DataSourceResult<Option<Vec<ProcessRef>>> {
        let conn = self.get_conn()?;

        // Correlated json_each projection: only ProcessId and
        // LastPublishDate leave the store, flattened across requests
        // in array order.
        let mut stmt = conn.prepare(
            r#"
            SELECT (
                SELECT json_group_array(json_object(
                    'ProcessId',       json_extract(p.value, '$.ProcessId'),
                    'LastPublishDate', json_extract(p.value, '$.LastPublishDate')))
                FROM json_each(c.body, '$.Requests') AS r,
                     json_each(r.value, '$.Processes') AS p
            )
            FROM cases AS c
            WHERE c.case_id = ?1
            "#,
        )?;

        // Outer Option: case row present. Inner Option: the aggregate
        // can come back NULL when the document has no Requests path.
        let projected: Option<Option<String>> = stmt
            .query_row(params![case_id], |row| row.get(0))
            .optional()?;

        match projected {
            None => Ok(None),
            Some(None) => Ok(Some(Vec::new())),
            Some(Some(json)) => {
                let refs: Vec<ProcessRef> = serde_json::from_str(&json)?;
                Ok(Some(refs))
            }
        }
    }

    fn find_documents_by_case(&self, case_id: i64) -> DataSourceResult<Vec<DocumentRecord>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(&format!(
            r#"
            SELECT d.document_id, d.body
            FROM documents AS d
            WHERE EXISTS (
                SELECT 1
                FROM json_each(d.body, '$.Entities') AS e
                WHERE json_extract(e.value, '$.EntityTypeId') = 1
                  AND json_extract(e.value, '$.EntityValue') = ?1
            )
            ORDER BY d.document_id
            LIMIT {MAX_ROWS_PER_QUERY}
            "#
        ))?;

        let records = stmt
            .query_map(params![case_id], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut documents = Vec::with_capacity(records.len());
        for (document_id, body) in records {
            let value: serde_json::Value = serde_json::from_str(&body)?;
            let fields = match value {
                serde_json::Value::Object(map) => map,
                other => {
                    return Err(DataSourceError::Mapping(format!(
                        "document {document_id} body is not an object: {other}"
                    )))
                }
            };
            documents.push(DocumentRecord {
                document_id,
                fields,
            });
        }

        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_store() -> SqliteCaseStore {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::configure_sqlite_connection(&conn).unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE cases (
                case_id INTEGER PRIMARY KEY,
                body    TEXT NOT NULL
            );
            CREATE TABLE documents (
                document_id INTEGER PRIMARY KEY,
                body        TEXT NOT NULL
            );
            "#,
        )
        .unwrap();
        SqliteCaseStore::from_connection(Arc::new(Mutex::new(conn)))
    }

    fn insert_case(store: &SqliteCaseStore, case_id: i64, body: &str) {
        let conn = store.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO cases (case_id, body) VALUES (?1, ?2)",
            params![case_id, body],
        )
        .unwrap();
    }

    #[test]
    fn test_missing_case_yields_none() {
        let store = setup_store();
        let refs = store.find_case_process_refs(404).unwrap();
        assert!(refs.is_none());
    }

    #[test]
    fn test_refs_flattened_in_encounter_order() {
        let store = setup_store();
        insert_case(
            &store,
            1001,
            r#"{
                "Requests": [
                    {"Processes": [{"ProcessId": 77, "LastPublishDate": "2024-02-01T00:00:00Z"}]},
                    {"Processes": [{"ProcessId": 42}, {"ProcessId": 77}]}
                ],
                "Unrelated": "ignored"
            }"#,
        );

        let refs = store.find_case_process_refs(1001).unwrap().unwrap();
        let ids: Vec<Option<i64>> = refs.iter().map(|r| r.process_id).collect();
        assert_eq!(ids, vec![Some(77), Some(42), Some(77)]);
        assert!(refs[0].last_publish_date.is_some());
        assert!(refs[1].last_publish_date.is_none());
    }

    #[test]
    fn test_case_without_requests_yields_empty() {
        let store = setup_store();
        insert_case(&store, 7, r#"{"Requests": []}"#);
        let refs = store.find_case_process_refs(7).unwrap().unwrap();
        assert!(refs.is_empty());
    }

    #[test]
    fn test_document_entity_search() {
        let store = setup_store();
        {
            let conn = store.conn.lock().unwrap();
            conn.execute(
                "INSERT INTO documents (document_id, body) VALUES
                 (1, '{\"FileName\": \"a.pdf\", \"Entities\": [{\"EntityTypeId\": 1, \"EntityValue\": 55}]}'),
                 (2, '{\"FileName\": \"b.pdf\", \"Entities\": [{\"EntityTypeId\": 2, \"EntityValue\": 55}]}'),
                 (3, '{\"FileName\": \"c.pdf\", \"Entities\": [{\"EntityTypeId\": 1, \"EntityValue\": 56}]}')",
                [],
            )
            .unwrap();
        }

        let documents = store.find_documents_by_case(55).unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].document_id, 1);
        assert_eq!(
            documents[0].fields.get("FileName").and_then(|v| v.as_str()),
            Some("a.pdf")
        );
    }
}
