// ==========================================
// Test helpers
// ==========================================
// Temp-database fixtures for the case document store and the BPM
// relational store, plus the seeded scenario the end-to-end tests
// share: case 1001 -> processes [77, 42], process 77 with two steps
// carrying one status each, process 42 with no steps.
// ==========================================
#![allow(dead_code)]

use rusqlite::Connection;
use tempfile::NamedTempFile;

/// Create a temp case document store (cases + documents tables).
pub fn create_case_store_db() -> (NamedTempFile, String) {
    let temp_file = NamedTempFile::new().unwrap();
    let db_path = temp_file.path().to_str().unwrap().to_string();

    let conn = Connection::open(&db_path).unwrap();
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

    (temp_file, db_path)
}

/// Create a temp BPM relational store with the full schema.
pub fn create_bpm_db() -> (NamedTempFile, String) {
    let temp_file = NamedTempFile::new().unwrap();
    let db_path = temp_file.path().to_str().unwrap().to_string();

    let conn = Connection::open(&db_path).unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE ProcessTypes (
            ProcessTypeID   INTEGER PRIMARY KEY,
            ProcessTypeName TEXT NOT NULL
        );
        CREATE TABLE Processes (
            ProcessID     INTEGER PRIMARY KEY,
            ProcessTypeID INTEGER NOT NULL REFERENCES ProcessTypes(ProcessTypeID),
            LdapLeafID    TEXT
        );
        CREATE TABLE ActivityTypes (
            ActivityTypeID   INTEGER PRIMARY KEY,
            ActivityTypeName TEXT NOT NULL
        );
        CREATE TABLE ProcessTypeActivities (
            ProcessTypeActivityID INTEGER PRIMARY KEY,
            ProcessTypeID         INTEGER NOT NULL REFERENCES ProcessTypes(ProcessTypeID),
            ActivityTypeID        INTEGER NOT NULL REFERENCES ActivityTypes(ActivityTypeID)
        );
        CREATE TABLE ProcessSteps (
            ProcessStepID         INTEGER PRIMARY KEY,
            ProcessID             INTEGER NOT NULL REFERENCES Processes(ProcessID),
            ProcessTypeActivityID INTEGER NOT NULL REFERENCES ProcessTypeActivities(ProcessTypeActivityID),
            ProcessTypeGatewayID  INTEGER,
            DateForBPETreatment   TEXT,
            TaskID                INTEGER,
            SubProcessID          INTEGER,
            ContentData           TEXT,
            EventTypeID           INTEGER
        );
        CREATE TABLE StatusTypes (
            StatusTypeID    INTEGER PRIMARY KEY,
            Description_Heb TEXT NOT NULL
        );
        CREATE TABLE ProcessStepStatuses (
            ProcessStepStatusID INTEGER PRIMARY KEY,
            ProcessStepID       INTEGER NOT NULL REFERENCES ProcessSteps(ProcessStepID),
            StatusTypeID        INTEGER NOT NULL REFERENCES StatusTypes(StatusTypeID)
        );
        "#,
    )
    .unwrap();

    (temp_file, db_path)
}

/// Insert one case document body.
pub fn seed_case(db_path: &str, case_id: i64, body: &str) {
    let conn = Connection::open(db_path).unwrap();
    conn.execute(
        "INSERT INTO cases (case_id, body) VALUES (?1, ?2)",
        rusqlite::params![case_id, body],
    )
    .unwrap();
}

/// Insert one document body.
pub fn seed_document(db_path: &str, document_id: i64, body: &str) {
    let conn = Connection::open(db_path).unwrap();
    conn.execute(
        "INSERT INTO documents (document_id, body) VALUES (?1, ?2)",
        rusqlite::params![document_id, body],
    )
    .unwrap();
}

/// Hebrew process type names used by the shared scenario
pub const TYPE_NAME_77: &str = "\u{05D1}\u{05E7}\u{05E9}\u{05D4} \u{05DC}\u{05E6}\u{05D5}";
pub const TYPE_NAME_42: &str = "\u{05E2}\u{05E8}\u{05E2}\u{05D5}\u{05E8}";
/// Hebrew activity names
pub const ACTIVITY_NAME_A: &str =
    "\u{05E7}\u{05DC}\u{05D9}\u{05D8}\u{05EA} \u{05D1}\u{05E7}\u{05E9}\u{05D4}";
pub const ACTIVITY_NAME_B: &str =
    "\u{05D4}\u{05D7}\u{05DC}\u{05D8}\u{05EA} \u{05E9}\u{05D5}\u{05E4}\u{05D8}";
/// Hebrew status descriptions
pub const STATUS_OPEN: &str = "\u{05E4}\u{05EA}\u{05D5}\u{05D7}";
pub const STATUS_CLOSED: &str = "\u{05E1}\u{05D2}\u{05D5}\u{05E8}";

/// Seed the shared scenario into a BPM store.
pub fn seed_full_scenario(db_path: &str) {
    let conn = Connection::open(db_path).unwrap();

    conn.execute_batch(&format!(
        r#"
        INSERT INTO ProcessTypes (ProcessTypeID, ProcessTypeName) VALUES
            (1, '{TYPE_NAME_77}'),
            (2, '{TYPE_NAME_42}');
        INSERT INTO Processes (ProcessID, ProcessTypeID, LdapLeafID) VALUES
            (77, 1, 'leaf-77'),
            (42, 2, NULL);
        INSERT INTO ActivityTypes (ActivityTypeID, ActivityTypeName) VALUES
            (10, '{ACTIVITY_NAME_A}'),
            (11, '{ACTIVITY_NAME_B}');
        INSERT INTO ProcessTypeActivities (ProcessTypeActivityID, ProcessTypeID, ActivityTypeID) VALUES
            (100, 1, 10),
            (101, 1, 11);
        INSERT INTO ProcessSteps (ProcessStepID, ProcessID, ProcessTypeActivityID,
                                  ProcessTypeGatewayID, DateForBPETreatment, TaskID,
                                  SubProcessID, ContentData, EventTypeID) VALUES
            (701, 77, 100, NULL, '2024-01-05 09:00:00', 5001, NULL, 'payload-a', 3),
            (702, 77, 101, 7, NULL, NULL, NULL, NULL, NULL);
        INSERT INTO StatusTypes (StatusTypeID, Description_Heb) VALUES
            (1, '{STATUS_OPEN}'),
            (2, '{STATUS_CLOSED}');
        INSERT INTO ProcessStepStatuses (ProcessStepStatusID, ProcessStepID, StatusTypeID) VALUES
            (9001, 701, 1),
            (9002, 702, 2);
        "#
    ))
    .unwrap();
}

/// Case 1001 document resolving to processes [77, 42] in encounter
/// order; 42 carries no publish date.
pub const CASE_1001_BODY: &str = r#"{
    "Requests": [
        {"Processes": [{"ProcessId": 77, "LastPublishDate": "2024-02-01T00:00:00Z"}]},
        {"Processes": [{"ProcessId": 42}, {"ProcessId": 77, "LastPublishDate": "2024-02-01T00:00:00Z"}]}
    ]
}"#;
