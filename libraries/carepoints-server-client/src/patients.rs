//! Patient registry operations.
//!
//! The registry mirrors the user directory's surface for the patient
//! collection, keyed by UHID: a bulk list for the initial fetch and a
//! registration call for new patients.

use crate::client::transport_error;
use crate::error::{ClientError, Result};
use crate::types::{PatientEnvelope, PatientsEnvelope};
use carepoints_core::{PatientDraft, PatientRecord};
use reqwest::Client;
use tracing::{debug, warn};

/// Client for the patient registry.
pub struct PatientsClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> PatientsClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Fetch all registered patients.
    pub async fn list(&self) -> Result<Vec<PatientRecord>> {
        let url = format!("{}/patient/getAllPatients", self.base_url);
        debug!(url = %url, "Fetching all patients");

        let response = self.http.get(&url).send().await.map_err(transport_error)?;

        let status = response.status();

        if status.is_success() {
            let envelope: PatientsEnvelope = response.json().await.map_err(|e| {
                ClientError::Decode(format!("Failed to decode patient list: {}", e))
            })?;

            debug!(patients = envelope.patients.len(), "Fetched patient list");
            Ok(envelope.patients)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Register a new patient. The server returns the canonical record.
    pub async fn register(&self, draft: &PatientDraft) -> Result<PatientRecord> {
        let url = format!("{}/patient/register", self.base_url);
        debug!(url = %url, uhid = %draft.uhid, "Registering patient");

        let response = self
            .http
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();

        if status.is_success() {
            let envelope: PatientEnvelope = response.json().await.map_err(|e| {
                ClientError::Decode(format!("Failed to decode register response: {}", e))
            })?;

            debug!(uhid = %envelope.patient.uhid, "Patient registered");
            Ok(envelope.patient)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, uhid = %draft.uhid, "Patient registration failed");
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
