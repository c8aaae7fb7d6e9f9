// ==========================================
// Lawyer directory client
// ==========================================

use crate::config::LawyerServiceConfig;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use thiserror::Error;

/// Failure of one license fetch. Scoped to that license: the scanner
/// logs it and moves on.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected payload: {0}")]
    Payload(String),
}

/// Name fields of one directory entry, as delivered.
#[derive(Debug, Clone, Deserialize)]
pub struct LawyerDetails {
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    #[serde(rename = "licenseNumber")]
    pub license_number: Option<i64>,
}

// Service envelope: data.data.{...}
#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<EnvelopeInner>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeInner {
    data: Option<LawyerDetails>,
}

/// One-license lookup contract; the scanner only depends on this.
pub trait LicenseLookup {
    /// Fetch the directory entry of one license number.
    ///
    /// # Returns
    /// - Ok(Some): entry found
    /// - Ok(None): service answered but carries no entry
    fn fetch(&self, license: u32) -> Result<Option<LawyerDetails>, LookupError>;
}

// ==========================================
// LawyerDirectoryClient
// ==========================================

/// HTTP client for the GetLawyer endpoint.
pub struct LawyerDirectoryClient {
    config: LawyerServiceConfig,
    authorization: String,
    agent: ureq::Agent,
}

impl LawyerDirectoryClient {
    pub fn new(config: LawyerServiceConfig) -> Self {
        let credentials = format!("{}:{}", config.username, config.password);
        let authorization = format!("Basic {}", STANDARD.encode(credentials));
        Self {
            config,
            authorization,
            agent: ureq::Agent::new_with_defaults(),
        }
    }
}

impl LicenseLookup for LawyerDirectoryClient {
    fn fetch(&self, license: u32) -> Result<Option<LawyerDetails>, LookupError> {
        let url = format!("{}?license={license}", self.config.base_url);

        let mut response = self
            .agent
            .get(&url)
            .header("Moj-Application-Id", &self.config.app_id)
            .header("Authorization", &self.authorization)
            .header("Content-Type", "application/json")
            .call()
            .map_err(|e| LookupError::Request(e.to_string()))?;

        let envelope: Envelope = response
            .body_mut()
            .read_json()
            .map_err(|e| LookupError::Payload(e.to_string()))?;

        Ok(envelope.data.and_then(|inner| inner.data))
    }
}
