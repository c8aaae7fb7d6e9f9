// ==========================================
// Configuration layer
// ==========================================
// All connection targets and credentials are resolved once at startup
// from process environment (optionally seeded from a .env file) and
// passed by reference into the resolver / engine constructors.
// Absence of a value is not validated here; the first failing query
// surfaces the resulting connection error.
// ==========================================

use std::env;

/// Lawyer directory service settings.
#[derive(Debug, Clone)]
pub struct LawyerServiceConfig {
    /// Base URL of the GetLawyer endpoint
    pub base_url: String,
    /// Value for the application id header
    pub app_id: String,
    pub username: String,
    pub password: String,
}

/// Process-wide configuration, constructed once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the case document store (SQLite, JSON bodies)
    pub case_db_path: String,
    /// Path of the BPM relational store (SQLite)
    pub bpm_db_path: String,
    /// Path of the per-run report log (truncated at start)
    pub report_log_path: String,
    pub lawyer_service: LawyerServiceConfig,
}

impl AppConfig {
    /// Build the configuration from the process environment.
    ///
    /// # Environment
    /// - CASE_DB_PATH: case document store
    /// - BPM_DB_PATH: BPM relational store
    /// - REPORT_LOG_PATH: report log file (default: case_report.log)
    /// - LAWYER_API_URL / LAWYER_API_APP_ID / LAWYER_API_USER / LAWYER_API_PASS
    pub fn from_env() -> Self {
        Self {
            case_db_path: env_or("CASE_DB_PATH", ""),
            bpm_db_path: env_or("BPM_DB_PATH", ""),
            report_log_path: env_or("REPORT_LOG_PATH", "case_report.log"),
            lawyer_service: LawyerServiceConfig {
                base_url: env_or("LAWYER_API_URL", ""),
                app_id: env_or("LAWYER_API_APP_ID", ""),
                username: env_or("LAWYER_API_USER", ""),
                password: env_or("LAWYER_API_PASS", ""),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
