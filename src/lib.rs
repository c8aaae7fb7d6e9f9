// ==========================================
// Case Process Analyzer - core library
// ==========================================
// Resolves a case id into its related process ids, traverses the
// BPM hierarchy (process -> step -> status) and renders a bilingual
// (Hebrew/Latin) report to console and log file.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - value records
pub mod domain;

// Repository layer - data source access
pub mod repository;

// Engine layer - resolution and traversal
pub mod engine;

// Report layer - normalization and dual-sink emission
pub mod report;

// Lawyer directory lookup - independent scanner
pub mod lookup;

// Configuration layer
pub mod config;

// SQLite connection infrastructure
pub mod db;

// Logging
pub mod logging;

// ==========================================
// Core type re-exports
// ==========================================

pub use config::AppConfig;
pub use domain::{ProcessRecord, ProcessRef, ProcessStepRecord, StepStatusRecord};
pub use engine::{
    CaseAnalysisOrchestrator, HierarchicalTraversalEngine, OrderBy, ProcessIdResolver,
    TraversalEvent,
};
pub use report::{normalize, Emphasis, Level, NormalForm, ReportSink};
pub use repository::{
    CaseStore, DataSourceError, ProcessStore, SqliteCaseStore, SqliteProcessStore,
};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Tool name shown in report headers
pub const APP_NAME: &str = "Case Process Analyzer";
